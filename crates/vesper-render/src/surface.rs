//! Surface dimensions and the RGBA frame buffer
//!
//! The surface spans the viewport width and the *full scrollable content
//! height*, so the field keeps covering content reached by scrolling. The
//! host blits the visible slice each frame.

use vesper_core::Color;

/// Pixel dimensions of the drawing surface. Owned by the surface manager;
/// mutated only through `resize`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set width to the viewport width and height to the full content
    /// height. A zero dimension means the host is not attached yet; the
    /// resize is then a no-op and no drawing is attempted.
    pub fn resize(&mut self, viewport_width: u32, content_height: u32) {
        if viewport_width > 0 && content_height > 0 {
            self.width = viewport_width;
            self.height = content_height;
        }
    }

    /// Whether the surface has a drawable area
    pub fn is_attached(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// CPU frame buffer, tightly packed RGBA8 rows
pub struct Frame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    /// Reallocate to match the surface. Contents are undefined afterwards;
    /// callers clear at the top of every pass anyway.
    pub fn resize_to(&mut self, surface: Surface) {
        if surface.width == self.width && surface.height == self.height {
            return;
        }
        self.width = surface.width;
        self.height = surface.height;
        self.data
            .resize((surface.width as usize) * (surface.height as usize) * 4, 0);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Fill every pixel with an opaque color
    pub fn clear(&mut self, color: Color) {
        let rgba = color.with_alpha(1.0).to_rgba8();
        for pixel in self.data.chunks_exact_mut(4) {
            pixel.copy_from_slice(&rgba);
        }
    }

    /// Read one pixel; None outside the buffer
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y * self.width + x) * 4) as usize;
        Some([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }

    /// Source-over blend one pixel. Coordinates outside the buffer are
    /// silently clipped.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color, alpha: f32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let a = (color.a * alpha).clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }
        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        let src = [color.r, color.g, color.b];
        for c in 0..3 {
            let dst = self.data[idx + c] as f32 / 255.0;
            let out = src[c] * a + dst * (1.0 - a);
            self.data[idx + c] = (out.clamp(0.0, 1.0) * 255.0).round() as u8;
        }
        let dst_a = self.data[idx + 3] as f32 / 255.0;
        let out_a = a + dst_a * (1.0 - a);
        self.data[idx + 3] = (out_a.clamp(0.0, 1.0) * 255.0).round() as u8;
    }

    /// Copy the visible rows [scroll, scroll + viewport_height) into a
    /// viewport-sized RGBA destination, clipping at the bottom of the
    /// content. Rows past the content come out black.
    pub fn copy_visible_rows(&self, dst: &mut [u8], viewport_height: u32, scroll: u32) {
        let row_bytes = (self.width as usize) * 4;
        for row in 0..viewport_height as usize {
            let dst_start = row * row_bytes;
            if dst_start + row_bytes > dst.len() {
                break;
            }
            let src_row = scroll as usize + row;
            if src_row < self.height as usize {
                let src_start = src_row * row_bytes;
                dst[dst_start..dst_start + row_bytes]
                    .copy_from_slice(&self.data[src_start..src_start + row_bytes]);
            } else {
                dst[dst_start..dst_start + row_bytes].fill(0);
            }
        }
    }
}

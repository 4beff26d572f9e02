//! Pointer state tracking
//!
//! Entity y is expressed in full-document coordinates (the surface covers
//! scrollable content, not just the viewport), so the tracker folds the
//! current vertical scroll offset into every recorded sample. Last sample
//! wins; there is no smoothing or interpolation.

use vesper_core::Vec2;
use winit::dpi::PhysicalPosition;

#[derive(Debug, Default)]
pub struct PointerTracker {
    /// Latest pointer position in surface (full-document) coordinates.
    /// None until the first move event arrives.
    position: Option<Vec2>,
    /// Current vertical scroll offset in pixels
    scroll_offset: f32,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer move given in viewport coordinates
    pub fn set_viewport_position(&mut self, position: PhysicalPosition<f64>) {
        self.position = Some(Vec2::new(
            position.x as f32,
            position.y as f32 + self.scroll_offset,
        ));
    }

    /// Adjust the scroll offset, clamped to the scrollable range. Does not
    /// retroactively move the recorded pointer; the next move event picks up
    /// the new offset (matching how scroll and move events interleave).
    pub fn scroll_by(&mut self, delta: f32, max_offset: f32) {
        self.scroll_offset = (self.scroll_offset + delta).clamp(0.0, max_offset.max(0.0));
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Latest sample in surface coordinates, if any pointer event was seen
    pub fn surface_position(&self) -> Option<Vec2> {
        self.position
    }
}

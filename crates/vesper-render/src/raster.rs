//! Primitive painters over the CPU frame buffer
//!
//! Everything clips to the buffer, so out-of-bounds geometry is safe. Circles
//! and ellipses get a one-pixel antialiased rim; triangles are hard-edged.

use crate::surface::Frame;
use vesper_core::Color;

/// Filled circle with an antialiased edge
pub fn fill_circle(frame: &mut Frame, cx: f32, cy: f32, radius: f32, color: Color, alpha: f32) {
    if radius <= 0.0 || alpha <= 0.0 {
        return;
    }
    let x0 = (cx - radius - 1.0).floor() as i32;
    let x1 = (cx + radius + 1.0).ceil() as i32;
    let y0 = (cy - radius - 1.0).floor() as i32;
    let y1 = (cy + radius + 1.0).ceil() as i32;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let distance = (dx * dx + dy * dy).sqrt();
            let coverage = (radius - distance + 0.5).clamp(0.0, 1.0);
            if coverage > 0.0 {
                frame.blend_pixel(x, y, color, alpha * coverage);
            }
        }
    }
}

/// Circle with a soft radial halo extending `halo` pixels past the core.
/// Approximates a canvas-style blur glow analytically: full coverage inside
/// the core, squared falloff across the halo band.
pub fn glow_circle(
    frame: &mut Frame,
    cx: f32,
    cy: f32,
    radius: f32,
    halo: f32,
    color: Color,
    alpha: f32,
) {
    if alpha <= 0.0 {
        return;
    }
    let reach = radius + halo;
    let x0 = (cx - reach - 1.0).floor() as i32;
    let x1 = (cx + reach + 1.0).ceil() as i32;
    let y0 = (cy - reach - 1.0).floor() as i32;
    let y1 = (cy + reach + 1.0).ceil() as i32;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let distance = (dx * dx + dy * dy).sqrt();
            let coverage = if distance <= radius {
                1.0
            } else if halo > 0.0 && distance < reach {
                let falloff = 1.0 - (distance - radius) / halo;
                falloff * falloff
            } else {
                (radius - distance + 0.5).clamp(0.0, 1.0)
            };
            if coverage > 0.0 {
                frame.blend_pixel(x, y, color, alpha * coverage);
            }
        }
    }
}

/// Stroked line segment. Widths below one pixel render as a one-pixel line
/// with proportionally reduced coverage, matching how a thin canvas stroke
/// reads on screen.
pub fn stroke_line(
    frame: &mut Frame,
    ax: f32,
    ay: f32,
    bx: f32,
    by: f32,
    width: f32,
    color: Color,
    alpha: f32,
) {
    if alpha <= 0.0 || width <= 0.0 {
        return;
    }
    let half = (width / 2.0).max(0.5);
    let thin_scale = width.min(1.0);

    let x0 = (ax.min(bx) - half - 1.0).floor() as i32;
    let x1 = (ax.max(bx) + half + 1.0).ceil() as i32;
    let y0 = (ay.min(by) - half - 1.0).floor() as i32;
    let y1 = (ay.max(by) + half + 1.0).ceil() as i32;

    let vx = bx - ax;
    let vy = by - ay;
    let len_sq = vx * vx + vy * vy;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            // Distance from the pixel center to the segment
            let t = if len_sq > 0.0 {
                ((px - ax) * vx + (py - ay) * vy) / len_sq
            } else {
                0.0
            };
            let t = t.clamp(0.0, 1.0);
            let dx = px - (ax + vx * t);
            let dy = py - (ay + vy * t);
            let distance = (dx * dx + dy * dy).sqrt();
            let coverage = (half - distance + 0.5).clamp(0.0, 1.0) * thin_scale;
            if coverage > 0.0 {
                frame.blend_pixel(x, y, color, alpha * coverage);
            }
        }
    }
}

/// Filled ellipse rotated by `angle` radians around its center
pub fn fill_ellipse(
    frame: &mut Frame,
    cx: f32,
    cy: f32,
    rx: f32,
    ry: f32,
    angle: f32,
    color: Color,
    alpha: f32,
) {
    if rx <= 0.0 || ry <= 0.0 || alpha <= 0.0 {
        return;
    }
    let reach = rx.max(ry);
    let x0 = (cx - reach - 1.0).floor() as i32;
    let x1 = (cx + reach + 1.0).ceil() as i32;
    let y0 = (cy - reach - 1.0).floor() as i32;
    let y1 = (cy + reach + 1.0).ceil() as i32;

    let (sin_a, cos_a) = angle.sin_cos();
    let min_r = rx.min(ry);

    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            // Rotate into the ellipse frame
            let u = cos_a * dx + sin_a * dy;
            let v = -sin_a * dx + cos_a * dy;
            let norm = ((u / rx) * (u / rx) + (v / ry) * (v / ry)).sqrt();
            // Approximate signed distance to the rim for the AA band
            let distance = (norm - 1.0) * min_r;
            let coverage = (0.5 - distance).clamp(0.0, 1.0);
            if coverage > 0.0 {
                frame.blend_pixel(x, y, color, alpha * coverage);
            }
        }
    }
}

/// Filled triangle via edge functions, hard-edged
pub fn fill_triangle(
    frame: &mut Frame,
    p0: (f32, f32),
    p1: (f32, f32),
    p2: (f32, f32),
    color: Color,
    alpha: f32,
) {
    if alpha <= 0.0 {
        return;
    }
    let x0 = p0.0.min(p1.0).min(p2.0).floor() as i32;
    let x1 = p0.0.max(p1.0).max(p2.0).ceil() as i32;
    let y0 = p0.1.min(p1.1).min(p2.1).floor() as i32;
    let y1 = p0.1.max(p1.1).max(p2.1).ceil() as i32;

    let edge = |a: (f32, f32), b: (f32, f32), px: f32, py: f32| -> f32 {
        (b.0 - a.0) * (py - a.1) - (b.1 - a.1) * (px - a.0)
    };

    let area = edge(p0, p1, p2.0, p2.1);
    if area == 0.0 {
        return;
    }

    for y in y0..=y1 {
        for x in x0..=x1 {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            let w0 = edge(p0, p1, px, py);
            let w1 = edge(p1, p2, px, py);
            let w2 = edge(p2, p0, px, py);
            // Inside when all edge functions share the winding's sign
            let inside = if area > 0.0 {
                w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0
            } else {
                w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0
            };
            if inside {
                frame.blend_pixel(x, y, color, alpha);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Frame {
        let mut f = Frame::new(32, 32);
        f.clear(Color::BLACK);
        f
    }

    #[test]
    fn circle_covers_center() {
        let mut f = frame();
        fill_circle(&mut f, 16.0, 16.0, 4.0, Color::WHITE, 1.0);
        assert_eq!(f.pixel(16, 16), Some([255, 255, 255, 255]));
        // Far outside stays black
        assert_eq!(f.pixel(2, 2), Some([0, 0, 0, 255]));
    }

    #[test]
    fn offscreen_primitives_do_not_panic() {
        let mut f = frame();
        fill_circle(&mut f, -50.0, -50.0, 10.0, Color::WHITE, 1.0);
        glow_circle(&mut f, 100.0, 100.0, 5.0, 8.0, Color::WHITE, 1.0);
        stroke_line(&mut f, -10.0, -10.0, 50.0, 50.0, 0.5, Color::WHITE, 0.5);
        fill_ellipse(&mut f, 40.0, -5.0, 20.0, 4.0, 0.7, Color::WHITE, 1.0);
        fill_triangle(&mut f, (-5.0, -5.0), (40.0, 10.0), (10.0, 40.0), Color::WHITE, 1.0);
    }

    #[test]
    fn glow_falls_off_with_distance() {
        let mut f = frame();
        glow_circle(&mut f, 16.0, 16.0, 2.0, 8.0, Color::WHITE, 1.0);
        let core = f.pixel(16, 16).unwrap()[0];
        let near = f.pixel(16, 20).unwrap()[0];
        let far = f.pixel(16, 24).unwrap()[0];
        assert!(core > near);
        assert!(near > far);
        assert_eq!(f.pixel(16, 28), Some([0, 0, 0, 255]));
    }

    #[test]
    fn thin_line_scales_coverage() {
        let mut full = frame();
        stroke_line(&mut full, 4.0, 16.0, 28.0, 16.0, 1.0, Color::WHITE, 1.0);
        let mut thin = frame();
        stroke_line(&mut thin, 4.0, 16.0, 28.0, 16.0, 0.5, Color::WHITE, 1.0);
        let full_mid = full.pixel(16, 16).unwrap()[0];
        let thin_mid = thin.pixel(16, 16).unwrap()[0];
        assert!(thin_mid > 0);
        assert!(thin_mid < full_mid);
    }

    #[test]
    fn line_midpoint_is_painted() {
        let mut f = frame();
        stroke_line(&mut f, 4.0, 4.0, 28.0, 28.0, 1.0, Color::WHITE, 1.0);
        assert!(f.pixel(16, 16).unwrap()[0] > 0);
    }

    #[test]
    fn ellipse_respects_rotation() {
        let mut f = frame();
        // Long thin ellipse rotated to vertical: covers above/below center,
        // not left/right
        fill_ellipse(
            &mut f,
            16.0,
            16.0,
            10.0,
            2.0,
            std::f32::consts::FRAC_PI_2,
            Color::WHITE,
            1.0,
        );
        assert!(f.pixel(16, 23).unwrap()[0] > 0);
        assert_eq!(f.pixel(23, 16), Some([0, 0, 0, 255]));
    }

    #[test]
    fn triangle_winding_independent() {
        let mut a = frame();
        fill_triangle(&mut a, (8.0, 8.0), (24.0, 8.0), (16.0, 24.0), Color::WHITE, 1.0);
        let mut b = frame();
        fill_triangle(&mut b, (16.0, 24.0), (24.0, 8.0), (8.0, 8.0), Color::WHITE, 1.0);
        assert_eq!(a.pixel(16, 12), b.pixel(16, 12));
        assert!(a.pixel(16, 12).unwrap()[0] > 0);
    }

    #[test]
    fn degenerate_triangle_is_noop() {
        let mut f = frame();
        fill_triangle(&mut f, (4.0, 4.0), (8.0, 8.0), (12.0, 12.0), Color::WHITE, 1.0);
        assert_eq!(f.pixel(8, 8), Some([0, 0, 0, 255]));
    }
}

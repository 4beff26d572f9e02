//! Per-kind entity painters
//!
//! Pure side effects on the frame buffer; entity state is never mutated here.

use crate::palette::Palette;
use crate::raster::{fill_circle, fill_ellipse, fill_triangle, glow_circle, stroke_line};
use crate::surface::Frame;
use vesper_field::{Flyer, FlyerConfig, Link, Mote, Star};

/// Soft halo reach for stars, in pixels past the core
const STAR_HALO: f32 = 8.0;

pub fn draw_star(frame: &mut Frame, star: &Star, palette: &Palette) {
    let color = palette.star_tint(star.tint);
    glow_circle(
        frame,
        star.pos.x,
        star.pos.y,
        star.size,
        STAR_HALO,
        color,
        star.opacity,
    );
}

pub fn draw_mote(frame: &mut Frame, mote: &Mote, palette: &Palette) {
    fill_circle(
        frame,
        mote.pos.x,
        mote.pos.y,
        mote.size,
        palette.mote_core,
        mote.opacity,
    );
    // Wider faint halo in the glow color
    fill_circle(
        frame,
        mote.pos.x,
        mote.pos.y,
        mote.size * 2.0,
        palette.mote_glow,
        mote.opacity * 0.3,
    );
}

pub fn draw_links(
    frame: &mut Frame,
    motes: &[Mote],
    links: &[Link],
    line_width: f32,
    palette: &Palette,
) {
    for link in links {
        let a = motes[link.a].pos;
        let b = motes[link.b].pos;
        stroke_line(frame, a.x, a.y, b.x, b.y, line_width, palette.link, link.alpha);
    }
}

/// Composited flyer: body, head, beak, eye, flapping wings, tail. The wing
/// angle comes from the clock sample, already in degrees.
pub fn draw_flyer(
    frame: &mut Frame,
    flyer: &Flyer,
    width: f32,
    wing_degrees: f32,
    config: &FlyerConfig,
    palette: &Palette,
) {
    let x = flyer.x;
    let y = flyer.arc_y(width, config);
    let size = config.size;
    let dir = flyer.direction;

    // Body
    fill_ellipse(
        frame,
        x,
        y,
        size * 0.6,
        size * 0.4,
        0.0,
        palette.flyer_body,
        1.0,
    );

    // Head, offset in the flight direction
    fill_circle(
        frame,
        x + size * 0.4 * dir,
        y - size * 0.2,
        size * 0.3,
        palette.flyer_head,
        1.0,
    );

    // Beak
    fill_triangle(
        frame,
        (x + size * 0.6 * dir, y - size * 0.2),
        (x + size * 0.9 * dir, y - size * 0.15),
        (x + size * 0.6 * dir, y - size * 0.1),
        palette.flyer_beak,
        1.0,
    );

    // Eye
    let eye_x = x + size * 0.45 * dir;
    let eye_y = y - size * 0.25;
    fill_circle(frame, eye_x, eye_y, size * 0.08, vesper_core::Color::WHITE, 1.0);
    fill_circle(frame, eye_x, eye_y, size * 0.04, vesper_core::Color::BLACK, 1.0);

    // Wings, counter-rotated by the flap angle
    let flap = wing_degrees.to_radians();
    fill_ellipse(
        frame,
        x - size * 0.2,
        y - size * 0.1,
        size * 0.8,
        size * 0.2,
        flap,
        palette.flyer_head,
        1.0,
    );
    fill_ellipse(
        frame,
        x - size * 0.2,
        y + size * 0.1,
        size * 0.8,
        size * 0.2,
        -flap,
        palette.flyer_head,
        1.0,
    );

    // Tail
    fill_triangle(
        frame,
        (x - size * 0.6, y),
        (x - size * 1.2, y - size * 0.3),
        (x - size * 1.2, y + size * 0.3),
        palette.flyer_body,
        1.0,
    );
}

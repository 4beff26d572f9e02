//! Drifting entities: stars and magic motes
//!
//! Both kinds step in per-frame units (one update per display refresh), drift
//! across the surface with wrap-around, and ping-pong their opacity inside a
//! configured band. Stars additionally accelerate downward near the pointer.

use crate::config::{MoteConfig, StarConfig};
use crate::rand::FieldRng;
use vesper_core::Vec2;

/// Star color tint, resolved to actual RGBA by the renderer's palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarTint {
    /// Plain white
    Primary,
    /// Lavender, roughly 30% of spawns
    Secondary,
}

/// A single star: slow downward rain with a twinkle
#[derive(Debug, Clone)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    /// Undisturbed fall speed
    pub base_speed: f32,
    /// Fall speed after pointer bias, recomputed every update
    pub speed: f32,
    pub opacity: f32,
    pub twinkle_rate: f32,
    pub twinkle_direction: f32,
    pub tint: StarTint,
}

impl Star {
    pub fn spawn(rng: &mut FieldRng, width: f32, height: f32, config: &StarConfig) -> Self {
        let base_speed = rng.range(config.speed_min, config.speed_max);
        let tint = if rng.chance(config.secondary_tint_chance) {
            StarTint::Secondary
        } else {
            StarTint::Primary
        };
        Self {
            pos: Vec2::new(rng.range(0.0, width), rng.range(0.0, height)),
            size: rng.range(config.size_min, config.size_max),
            base_speed,
            speed: base_speed,
            opacity: rng.range(config.spawn_opacity_min, config.spawn_opacity_max),
            twinkle_rate: rng.range(config.twinkle_min, config.twinkle_max),
            twinkle_direction: rng.sign(),
            tint,
        }
    }

    /// One frame step. `pointer` is in full-document surface coordinates.
    pub fn update(
        &mut self,
        pointer: Option<Vec2>,
        width: f32,
        height: f32,
        config: &StarConfig,
        rng: &mut FieldRng,
    ) {
        // Stars fall a bit faster near the cursor: linear falloff inside the
        // radius, no effect at all beyond it.
        self.speed = match pointer {
            Some(p) => {
                let distance = p.distance(self.pos);
                if distance < config.cursor_radius {
                    let force = (1.0 - distance / config.cursor_radius) * config.cursor_force;
                    self.base_speed + force
                } else {
                    self.base_speed
                }
            }
            None => self.base_speed,
        };

        self.pos.y += self.speed;

        // Wrap to the top edge with a re-randomized x. The x reset is
        // intentional: stars re-seed rather than loop vertically.
        if self.pos.y >= height {
            self.pos.y = 0.0;
            self.pos.x = rng.range(0.0, width);
        }

        self.opacity = twinkle(
            self.opacity,
            self.twinkle_rate,
            &mut self.twinkle_direction,
            config.opacity_floor,
            config.opacity_ceil,
        );
    }
}

/// A single mote: free 2D drift with wrap on every edge
#[derive(Debug, Clone)]
pub struct Mote {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub opacity: f32,
    pub twinkle_rate: f32,
    pub twinkle_direction: f32,
}

impl Mote {
    pub fn spawn(rng: &mut FieldRng, width: f32, height: f32, config: &MoteConfig) -> Self {
        Self {
            pos: Vec2::new(rng.range(0.0, width), rng.range(0.0, height)),
            vel: Vec2::new(
                rng.range(-config.drift, config.drift),
                rng.range(-config.drift, config.drift),
            ),
            size: rng.range(config.size_min, config.size_max),
            opacity: rng.range(config.spawn_opacity_min, config.spawn_opacity_max),
            twinkle_rate: rng.range(config.twinkle_min, config.twinkle_max),
            twinkle_direction: 1.0,
        }
    }

    /// One frame step
    pub fn update(&mut self, width: f32, height: f32, config: &MoteConfig) {
        self.pos.x = wrap(self.pos.x + self.vel.x, width);
        self.pos.y = wrap(self.pos.y + self.vel.y, height);

        self.opacity = twinkle(
            self.opacity,
            self.twinkle_rate,
            &mut self.twinkle_direction,
            config.opacity_floor,
            config.opacity_ceil,
        );
    }
}

/// Modular wrap into [0, bound). Recovers coordinates left out of range by a
/// surface shrink on their next boundary crossing instead of clamping them.
fn wrap(value: f32, bound: f32) -> f32 {
    if bound <= 0.0 {
        return 0.0;
    }
    let wrapped = value.rem_euclid(bound);
    // rem_euclid can return `bound` itself for tiny negative inputs
    if wrapped >= bound {
        0.0
    } else {
        wrapped
    }
}

/// Ping-pong opacity oscillation: advance, flip direction at either bound,
/// never jump outside the band.
fn twinkle(opacity: f32, rate: f32, direction: &mut f32, floor: f32, ceil: f32) -> f32 {
    let next = opacity + rate * *direction;
    if next >= ceil || next <= floor {
        *direction = -*direction;
    }
    next.clamp(floor, ceil)
}

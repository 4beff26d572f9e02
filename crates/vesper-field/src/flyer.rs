//! Parallax flyer: a single body on a fixed parabolic trajectory
//!
//! The flyer owns one scalar position along x and a direction sign. Its y is
//! derived from an inverted parabola peaking at screen center, its wing phase
//! from a monotonic clock sample, and the scene background from its progress
//! across the surface. None of the star/mote physics applies to it.

use crate::config::FlyerConfig;

#[derive(Debug, Clone)]
pub struct Flyer {
    pub x: f32,
    /// +1.0 flying right, -1.0 flying left
    pub direction: f32,
}

impl Flyer {
    /// Starts at the left turnaround margin, heading right
    pub fn new(config: &FlyerConfig) -> Self {
        Self {
            x: config.margin,
            direction: 1.0,
        }
    }

    /// One frame step: advance along x, turn around at the margins. The
    /// turnaround clamps x into the band, so a speed that does not divide
    /// the span evenly cannot walk past either margin.
    pub fn update(&mut self, width: f32, config: &FlyerConfig) {
        self.x += config.speed * self.direction;

        if self.x >= width - config.margin {
            self.x = width - config.margin;
            self.direction = -1.0;
        } else if self.x <= config.margin {
            self.x = config.margin;
            self.direction = 1.0;
        }
    }

    /// Altitude along the flight arc: an inverted parabola that sits at
    /// `arc_min` near the edges and peaks at `arc_max` at screen center.
    ///
    /// Callers must guard against a zero-width surface before asking for the
    /// arc; the normalization divides by `width`.
    pub fn arc_y(&self, width: f32, config: &FlyerConfig) -> f32 {
        let normalized = (self.x / width) * 2.0 - 1.0;
        config.arc_min + (config.arc_max - config.arc_min) * (1.0 - normalized * normalized)
    }

    /// Horizontal progress in [0, 1], used for the day/night background ramp
    pub fn progress(&self, width: f32) -> f32 {
        (self.x / width).clamp(0.0, 1.0)
    }
}

/// Wing-flap angle in degrees for a given clock sample, independent of frame
/// rate: `sin(time * rate) * amplitude`.
pub fn wing_phase(total_time: f64, config: &FlyerConfig) -> f32 {
    ((total_time * config.wing_rate as f64).sin() as f32) * config.wing_amplitude
}

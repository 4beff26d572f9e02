//! Field construction and per-frame stepping
//!
//! A field is the fixed-size set of entities belonging to one active surface.
//! It is generated once when the surface attaches, regenerated wholesale on a
//! remount, and discarded on teardown. The entity count never changes during
//! a field's lifetime.

use crate::config::BackdropConfig;
use crate::entity::{Mote, Star};
use crate::flyer::Flyer;
use crate::rand::FieldRng;
use serde::{Deserialize, Serialize};
use vesper_core::{Vec2, VesperError};

/// Which backdrop a field renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Slow starfield rain that reacts to the pointer
    Stars,
    /// Magic mote network with proximity links
    Motes,
    /// Parallax flyer on a day/night gradient
    Flyer,
}

impl std::str::FromStr for FieldKind {
    type Err = VesperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stars" => Ok(FieldKind::Stars),
            "motes" => Ok(FieldKind::Motes),
            "flyer" => Ok(FieldKind::Flyer),
            other => Err(VesperError::InvalidEnumValue {
                value: other.to_string(),
                allowed: vec!["stars".into(), "motes".into(), "flyer".into()],
            }),
        }
    }
}

/// Entity storage, tagged by kind
#[derive(Debug, Clone)]
pub enum Field {
    Stars(Vec<Star>),
    Motes(Vec<Mote>),
    Flyer(Flyer),
}

impl Field {
    /// Generate a fresh field over the given surface dimensions
    pub fn generate(
        kind: FieldKind,
        rng: &mut FieldRng,
        width: f32,
        height: f32,
        config: &BackdropConfig,
    ) -> Self {
        match kind {
            FieldKind::Stars => Field::Stars(
                (0..config.stars.count)
                    .map(|_| Star::spawn(rng, width, height, &config.stars))
                    .collect(),
            ),
            FieldKind::Motes => Field::Motes(
                (0..config.motes.count)
                    .map(|_| Mote::spawn(rng, width, height, &config.motes))
                    .collect(),
            ),
            FieldKind::Flyer => Field::Flyer(Flyer::new(&config.flyer)),
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Stars(_) => FieldKind::Stars,
            Field::Motes(_) => FieldKind::Motes,
            Field::Flyer(_) => FieldKind::Flyer,
        }
    }

    /// Entity count; the flyer counts as one
    pub fn len(&self) -> usize {
        match self {
            Field::Stars(stars) => stars.len(),
            Field::Motes(motes) => motes.len(),
            Field::Flyer(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Step every entity one frame. Pointer state is read live here each
    /// frame; it must never be used as a restart trigger upstream.
    pub fn update(
        &mut self,
        pointer: Option<Vec2>,
        width: f32,
        height: f32,
        config: &BackdropConfig,
        rng: &mut FieldRng,
    ) {
        match self {
            Field::Stars(stars) => {
                for star in stars.iter_mut() {
                    star.update(pointer, width, height, &config.stars, rng);
                }
            }
            Field::Motes(motes) => {
                for mote in motes.iter_mut() {
                    mote.update(width, height, &config.motes);
                }
            }
            Field::Flyer(flyer) => flyer.update(width, &config.flyer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_uses_configured_counts() {
        let config = BackdropConfig::default();
        let mut rng = FieldRng::new(1);
        let stars = Field::generate(FieldKind::Stars, &mut rng, 800.0, 600.0, &config);
        assert_eq!(stars.len(), 50);
        let motes = Field::generate(FieldKind::Motes, &mut rng, 800.0, 600.0, &config);
        assert_eq!(motes.len(), 150);
        let flyer = Field::generate(FieldKind::Flyer, &mut rng, 800.0, 600.0, &config);
        assert_eq!(flyer.len(), 1);
    }

    #[test]
    fn count_is_stable_across_ticks() {
        let config = BackdropConfig::default();
        let mut rng = FieldRng::new(2);
        let mut field = Field::generate(FieldKind::Stars, &mut rng, 800.0, 600.0, &config);
        for _ in 0..5000 {
            field.update(Some(Vec2::new(10.0, 10.0)), 800.0, 600.0, &config, &mut rng);
            assert_eq!(field.len(), 50);
        }
    }

    #[test]
    fn spawn_positions_cover_the_surface() {
        let config = BackdropConfig::default();
        let mut rng = FieldRng::new(4);
        let field = Field::generate(FieldKind::Motes, &mut rng, 800.0, 600.0, &config);
        if let Field::Motes(motes) = &field {
            for mote in motes {
                assert!(mote.pos.x >= 0.0 && mote.pos.x < 800.0);
                assert!(mote.pos.y >= 0.0 && mote.pos.y < 600.0);
            }
        } else {
            panic!("expected mote field");
        }
    }

    #[test]
    fn update_survives_surface_shrink() {
        let config = BackdropConfig::default();
        let mut rng = FieldRng::new(6);
        let mut field = Field::generate(FieldKind::Motes, &mut rng, 800.0, 600.0, &config);
        // Shrink: entities may sit outside the new bounds until their next
        // boundary crossing. Must not panic, and motes recover immediately.
        field.update(None, 400.0, 300.0, &config, &mut rng);
        if let Field::Motes(motes) = &field {
            for mote in motes {
                assert!(mote.pos.x >= 0.0 && mote.pos.x < 400.0);
                assert!(mote.pos.y >= 0.0 && mote.pos.y < 300.0);
            }
        }
    }

    #[test]
    fn kind_parses_from_str() {
        assert_eq!("stars".parse::<FieldKind>().unwrap(), FieldKind::Stars);
        assert_eq!("motes".parse::<FieldKind>().unwrap(), FieldKind::Motes);
        assert_eq!("flyer".parse::<FieldKind>().unwrap(), FieldKind::Flyer);
        assert!("rain".parse::<FieldKind>().is_err());
    }

    #[test]
    fn secondary_tint_rate_is_roughly_thirty_percent() {
        use crate::entity::StarTint;
        let mut config = BackdropConfig::default();
        config.stars.count = 2000;
        let mut rng = FieldRng::new(8);
        let field = Field::generate(FieldKind::Stars, &mut rng, 800.0, 600.0, &config);
        if let Field::Stars(stars) = &field {
            let secondary = stars
                .iter()
                .filter(|s| s.tint == StarTint::Secondary)
                .count();
            let rate = secondary as f32 / stars.len() as f32;
            assert!(rate > 0.25 && rate < 0.35, "rate = {rate}");
        }
    }
}

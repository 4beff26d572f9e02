//! Vesper Field - Entity simulation for the backdrop engine
//!
//! One parameterized field replaces the three hand-copied per-screen loops:
//! - Starfield: slow downward rain, twinkle, pointer-biased fall speed
//! - Motes: free 2D drift with twinkle and a proximity link graph
//! - Flyer: a single parallax body on a parabolic flight arc
//!
//! All physics steps in per-frame units (one update per display refresh).
//! Randomness comes from a seeded xorshift32; tuning from TOML-backed
//! configs whose defaults are the original shipped constants.

pub mod config;
pub mod entity;
pub mod field;
pub mod flyer;
pub mod links;
pub mod rand;

pub use config::{BackdropConfig, FlyerConfig, LinkConfig, MoteConfig, StarConfig};
pub use entity::{Mote, Star, StarTint};
pub use field::{Field, FieldKind};
pub use flyer::{wing_phase, Flyer};
pub use links::{proximity_links, Link};
pub use rand::FieldRng;

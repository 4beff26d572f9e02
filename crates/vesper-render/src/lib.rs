//! Vesper Render - CPU rasterizer and backdrop composition
//!
//! Renders the entity field into a full-content-height RGBA frame buffer:
//! - `Surface` / `Frame` — dimensions synced to the host, pixel storage
//! - primitive painters — circles with glow, thin strokes, ellipses, triangles
//! - `Palette` — per-theme colors and the flyer's day/night ramp
//! - `Backdrop` — the facade running one update+draw pass per scheduler tick

pub mod backdrop;
pub mod draw;
pub mod palette;
pub mod raster;
pub mod surface;

pub use backdrop::Backdrop;
pub use palette::{Palette, Theme};
pub use surface::{Frame, Surface};

//! Vesper Core - Foundational types for the Vesper backdrop engine
//!
//! This crate provides the types that all other Vesper crates depend on:
//! - `Vec2`, `Color` - Spatial and pixel types
//! - Error types and Result alias

mod error;
mod types;

pub use error::{Result, VesperError};
pub use types::{Color, Vec2};

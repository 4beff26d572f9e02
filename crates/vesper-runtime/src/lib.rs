//! Vesper Runtime - Frame loop infrastructure
//!
//! Provides the backdrop loop building blocks:
//! - `FrameClock` — per-frame wall-clock timing for time-continuous effects
//! - `PointerTracker` — scroll-aware pointer position in surface coordinates
//! - `Scheduler` / `FramePass` — the Idle/Running state machine driving one
//!   update+draw pass per display refresh

mod clock;
mod pointer;
mod scheduler;

pub use clock::FrameClock;
pub use pointer::PointerTracker;
pub use scheduler::{FramePass, Scheduler, SchedulerState};

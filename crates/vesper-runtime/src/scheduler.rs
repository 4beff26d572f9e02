//! Animation scheduler state machine
//!
//! The host event loop supplies the display-refresh cadence (one `tick` per
//! redraw); the scheduler owns the Idle/Running state, the frame clock, and
//! the pass sequencing. Exactly one logical loop can be active: `start` while
//! Running is refused, so a stop/start cycle can never leave two loops
//! drawing over each other.

use crate::clock::FrameClock;
use vesper_core::Vec2;

/// One update+draw pass over a backdrop
pub trait FramePass {
    /// Whether a pass can run at all (surface attached, non-zero area)
    fn ready(&self) -> bool;

    /// Run one pass. Returns false if the frame was skipped (e.g. the
    /// surface detached or degenerated since start).
    fn frame(&mut self, clock: &FrameClock, pointer: Option<Vec2>) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running,
}

pub struct Scheduler {
    state: SchedulerState,
    clock: FrameClock,
    frames_run: u64,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            state: SchedulerState::Idle,
            clock: FrameClock::new(),
            frames_run: 0,
        }
    }

    /// Idle -> Running. Returns false without starting if already Running or
    /// if the pass is not ready (unattached surface is a silent no-op, not an
    /// error — the hosting view may call before mount).
    pub fn start(&mut self, pass: &dyn FramePass) -> bool {
        if self.state == SchedulerState::Running {
            return false;
        }
        if !pass.ready() {
            return false;
        }
        self.state = SchedulerState::Running;
        self.clock = FrameClock::new();
        true
    }

    /// Running -> Idle. Idempotent; no further passes run until restarted.
    pub fn stop(&mut self) {
        self.state = SchedulerState::Idle;
    }

    pub fn is_running(&self) -> bool {
        self.state == SchedulerState::Running
    }

    /// Total completed passes since construction
    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }

    /// Run one pass if Running. Returns whether a frame was drawn.
    pub fn tick(&mut self, pass: &mut dyn FramePass, pointer: Option<Vec2>) -> bool {
        if self.state != SchedulerState::Running {
            return false;
        }
        self.clock.tick();
        let drew = pass.frame(&self.clock, pointer);
        if drew {
            self.frames_run += 1;
        }
        drew
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubPass {
        ready: bool,
        frames: u32,
    }

    impl FramePass for StubPass {
        fn ready(&self) -> bool {
            self.ready
        }

        fn frame(&mut self, _clock: &FrameClock, _pointer: Option<Vec2>) -> bool {
            self.frames += 1;
            true
        }
    }

    #[test]
    fn start_refused_while_running() {
        let mut scheduler = Scheduler::new();
        let pass = StubPass {
            ready: true,
            frames: 0,
        };
        assert!(scheduler.start(&pass));
        assert!(!scheduler.start(&pass));
        assert!(scheduler.is_running());
    }

    #[test]
    fn stop_then_start_leaves_one_loop() {
        let mut scheduler = Scheduler::new();
        let mut pass = StubPass {
            ready: true,
            frames: 0,
        };
        assert!(scheduler.start(&pass));
        scheduler.stop();
        scheduler.stop(); // idempotent
        assert!(scheduler.start(&pass));

        // One tick = exactly one pass, never doubled
        scheduler.tick(&mut pass, None);
        assert_eq!(pass.frames, 1);
        assert_eq!(scheduler.frames_run(), 1);
    }

    #[test]
    fn unready_pass_is_silent_noop() {
        let mut scheduler = Scheduler::new();
        let mut pass = StubPass {
            ready: false,
            frames: 0,
        };
        assert!(!scheduler.start(&pass));
        assert!(!scheduler.is_running());
        // Ticking an idle scheduler does nothing
        assert!(!scheduler.tick(&mut pass, None));
        assert_eq!(pass.frames, 0);
    }

    #[test]
    fn no_passes_after_stop() {
        let mut scheduler = Scheduler::new();
        let mut pass = StubPass {
            ready: true,
            frames: 0,
        };
        scheduler.start(&pass);
        scheduler.tick(&mut pass, None);
        scheduler.stop();
        scheduler.tick(&mut pass, None);
        assert_eq!(pass.frames, 1);
    }
}

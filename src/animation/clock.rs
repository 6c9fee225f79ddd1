//! Wall-clock animation state.
//!
//! The clock never reads time itself; timestamps come in from the frame
//! scheduler, which keeps the whole pipeline a pure function of them.

/// Running/stopped state plus the reference timestamp captured at start.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationClock {
    running: bool,
    start_time: f64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the reference time and transition to running.
    pub fn start(&mut self, now: f64) {
        self.running = true;
        self.start_time = now;
    }

    /// Transition to stopped. An already-scheduled frame callback checks
    /// `is_running` on arrival and becomes a no-op.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Milliseconds since start while running, 0 otherwise.
    pub fn elapsed(&self, now: f64) -> f64 {
        if self.running {
            now - self.start_time
        } else {
            0.0
        }
    }
}

//! Frame clocks
//!
//! The game asks a clock for "now" once per frame and ticks with the elapsed
//! time. Tests and the headless runner step a `ManualClock` instead of
//! waiting on a display refresh.

use std::time::Instant;

/// Source of frame timestamps in milliseconds
pub trait FrameClock {
    fn now_ms(&mut self) -> f64;
}

/// Wall-clock time since construction
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemClock {
    fn now_ms(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Deterministic clock advanced by a fixed step on every read
#[derive(Debug, Clone)]
pub struct ManualClock {
    now_ms: f64,
    step_ms: f64,
}

impl ManualClock {
    pub fn new(step_ms: f64) -> Self {
        Self { now_ms: 0.0, step_ms }
    }

    /// 60 Hz display cadence
    pub fn sixty_hz() -> Self {
        Self::new(1000.0 / 60.0)
    }

    /// Jump forward without producing a frame
    pub fn skip(&mut self, ms: f64) {
        self.now_ms += ms;
    }

    pub fn set_step(&mut self, step_ms: f64) {
        self.step_ms = step_ms;
    }
}

impl FrameClock for ManualClock {
    fn now_ms(&mut self) -> f64 {
        self.now_ms += self.step_ms;
        self.now_ms
    }
}

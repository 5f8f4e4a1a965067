use std::time::{Duration, Instant};

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// Wall clock for the frame loop; every value is in milliseconds, the unit
/// the camera controls scale movement with.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    started: Instant,
    previous: Instant,
}

impl Clock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            previous: now,
        }
    }

    /// Milliseconds since the previous tick (or creation)
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let delta = millis(now - self.previous);
        self.previous = now;
        delta
    }

    /// Milliseconds since creation or the last reset
    pub fn elapsed(&self) -> f64 {
        millis(self.started.elapsed())
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

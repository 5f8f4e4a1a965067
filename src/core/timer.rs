/// Gate that lets an update through only after a minimum interval.
///
/// Elapsed time keeps accumulating while the gate is closed and is handed
/// out in full when it opens, so movement scaled by it covers the skipped
/// frames.
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    min_interval: f64,
    accumulator: f64,
}

impl Throttle {
    /// Interval in milliseconds; zero lets every tick through
    pub fn new(min_interval: f64) -> Self {
        Self {
            min_interval: min_interval.max(0.0),
            accumulator: 0.0,
        }
    }

    /// Update with delta, returns the accumulated time if the gate opens
    pub fn tick(&mut self, delta: f64) -> Option<f64> {
        self.accumulator += delta;

        if self.accumulator >= self.min_interval {
            let elapsed = self.accumulator;
            self.accumulator = 0.0;
            Some(elapsed)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_interval_fires_every_tick() {
        let mut throttle = Throttle::new(0.0);
        assert_eq!(throttle.tick(16.0), Some(16.0));
        assert_eq!(throttle.tick(4.0), Some(4.0));
    }

    #[test]
    fn accumulates_until_interval() {
        let mut throttle = Throttle::new(50.0);
        assert_eq!(throttle.tick(20.0), None);
        assert_eq!(throttle.tick(20.0), None);
        assert_eq!(throttle.tick(20.0), Some(60.0));
        assert_eq!(throttle.tick(20.0), None);
    }

    #[test]
    fn reset_drops_pending_time() {
        let mut throttle = Throttle::new(50.0);
        throttle.tick(40.0);
        throttle.reset();
        assert_eq!(throttle.tick(20.0), None);
    }
}

use super::clock::Clock;

/// Frame metadata - carries frame number and timing info in milliseconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f64,
    pub delta: f64,
}

impl FrameInfo {
    pub fn new(number: u64, time: f64, delta: f64) -> Self {
        Self { number, time, delta }
    }
}

#[derive(Debug)]
enum Timing {
    Fixed(f64),
    Realtime(Clock),
}

/// Iterator yielding a bounded number of frames.
///
/// Fixed step frames are deterministic, real time frames measure the wall
/// clock between calls to `next`.
#[derive(Debug)]
pub struct Frames {
    timing: Timing,
    number: u64,
    limit: u64,
    time: f64,
}

impl Frames {
    pub fn fixed(delta: f64, limit: u64) -> Self {
        Self {
            timing: Timing::Fixed(delta),
            number: 0,
            limit,
            time: 0.0,
        }
    }

    pub fn realtime(limit: u64) -> Self {
        Self {
            timing: Timing::Realtime(Clock::new()),
            number: 0,
            limit,
            time: 0.0,
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.number
    }
}

impl Iterator for Frames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        if self.number >= self.limit {
            return None;
        }
        let delta = match &mut self.timing {
            Timing::Fixed(delta) => *delta,
            Timing::Realtime(clock) => clock.tick(),
        };
        self.time += delta;

        let info = FrameInfo::new(self.number, self.time, delta);
        self.number += 1;
        Some(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_frames_are_bounded() {
        let frames: Vec<_> = Frames::fixed(16.0, 3).collect();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[2], FrameInfo::new(2, 48.0, 16.0));
    }

    #[test]
    fn realtime_frames_accumulate_time() {
        let mut frames = Frames::realtime(2);
        let first = frames.next().unwrap();
        let second = frames.next().unwrap();
        assert!(second.time >= first.time);
        assert!(frames.next().is_none());
        assert_eq!(frames.frame_number(), 2);
    }
}

//! Fixed-timestep accumulator: frames in, physics steps out.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedClock {
    step: f32,
    accumulator: f32,
    max_steps_per_frame: usize,
}

impl FixedClock {
    pub fn new(step: f32, max_steps_per_frame: usize) -> Self {
        Self {
            step,
            accumulator: 0.0,
            max_steps_per_frame: max_steps_per_frame.max(1),
        }
    }

    /// Bank `frame_dt` and return how many physics steps are due. When the cap
    /// is hit the remaining backlog is dropped.
    pub fn advance(&mut self, frame_dt: f32) -> usize {
        self.accumulator += frame_dt.max(0.0);
        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_steps_per_frame {
            self.accumulator -= self.step;
            steps += 1;
        }
        if self.accumulator >= self.step {
            self.accumulator = 0.0;
        }
        steps
    }

    /// Fraction of a step banked but not yet simulated (for render interpolation).
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_frame_rate_runs_one_step() {
        let mut clock = FixedClock::new(0.02, 5);
        for _ in 0..100 {
            assert_eq!(clock.advance(0.02), 1);
        }
    }

    #[test]
    fn test_fast_frames_bank_partial_steps() {
        let mut clock = FixedClock::new(0.02, 5);
        // 100 Hz frames against a 50 Hz step: every other frame steps
        let total: usize = (0..100).map(|_| clock.advance(0.01)).sum();
        assert!((49..=50).contains(&total), "got {total}");
        assert!(clock.alpha() < 1.0);
    }

    #[test]
    fn test_stall_is_capped_and_backlog_dropped() {
        let mut clock = FixedClock::new(0.02, 5);
        assert_eq!(clock.advance(1.0), 5);
        assert_eq!(clock.alpha(), 0.0);
        assert_eq!(clock.advance(0.02), 1);
    }

    #[test]
    fn test_negative_frame_time_ignored() {
        let mut clock = FixedClock::new(0.02, 5);
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.alpha(), 0.0);
    }
}

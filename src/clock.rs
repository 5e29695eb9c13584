//! Fixed-timestep clock.
//!
//! Wall-clock frame deltas go into an accumulator; every whole
//! `step_interval` in it becomes one simulation step. What is left over,
//! as a fraction of the interval, is the interpolation factor the renderer
//! blends with.
//!
//! Each incoming delta is capped at `max_frame_delta`, so a suspended
//! process resumes with at most a frame's worth of catch-up instead of a
//! burst of steps.
//!
//! Time is kept as [`Duration`] rather than float seconds: many small
//! deltas and a single large delta of the same sum yield exactly the same
//! number of steps.

use std::time::Duration;

use tracing::trace;

use crate::config::GameConfig;

/// Work requested by one call to [`FixedStepClock::advance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockAdvance {
    pub steps_to_run: u32,
    /// Progress through the pending step, in `[0, 1]`.
    pub interpolation: f64,
}

#[derive(Debug, Clone)]
pub struct FixedStepClock {
    step_interval: Duration,
    max_frame_delta: Duration,
    accumulator: Duration,
    interpolation: f64,
    total_steps: u64,
}

impl FixedStepClock {
    /// Creates a clock primed to step on its first advance.
    ///
    /// # Panics
    ///
    /// Panics when `step_interval` is zero.
    #[must_use]
    pub fn new(step_interval: Duration, max_frame_delta: Duration) -> Self {
        assert!(!step_interval.is_zero(), "step interval must be non-zero");

        let mut clock = Self {
            step_interval,
            max_frame_delta,
            accumulator: Duration::ZERO,
            interpolation: 0.0,
            total_steps: 0,
        };
        clock.reset();
        clock
    }

    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.step_interval, config.max_frame_delta)
    }

    /// Feeds one frame's wall-clock delta and reports how many steps are due.
    pub fn advance(&mut self, real_delta: Duration) -> ClockAdvance {
        let capped = real_delta.min(self.max_frame_delta);
        if capped < real_delta {
            trace!(?real_delta, ?capped, "frame delta capped");
        }

        self.accumulator += capped;

        let mut steps_to_run = 0;
        while self.accumulator >= self.step_interval {
            self.accumulator -= self.step_interval;
            steps_to_run += 1;
        }
        self.total_steps += u64::from(steps_to_run);

        self.interpolation = (self.accumulator.as_secs_f64() / self.step_interval.as_secs_f64())
            .clamp(0.0, 1.0);

        ClockAdvance {
            steps_to_run,
            interpolation: self.interpolation,
        }
    }

    /// Primes the accumulator with one full interval so the next advance
    /// steps immediately.
    pub fn reset(&mut self) {
        self.accumulator = self.step_interval;
        self.interpolation = 1.0;
    }

    /// Interpolation factor from the most recent advance.
    #[must_use]
    pub fn interpolation(&self) -> f64 {
        self.interpolation
    }

    /// Steps signalled since creation, including across resets.
    #[must_use]
    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::FixedStepClock;

    const STEP: Duration = Duration::from_millis(250);
    const CAP: Duration = Duration::from_millis(50);

    fn drained_clock() -> FixedStepClock {
        let mut clock = FixedStepClock::new(STEP, CAP);
        assert_eq!(clock.advance(Duration::ZERO).steps_to_run, 1);
        clock
    }

    #[test]
    fn new_clock_steps_immediately() {
        let mut clock = FixedStepClock::new(STEP, CAP);

        let advance = clock.advance(Duration::ZERO);

        assert_eq!(advance.steps_to_run, 1);
        assert_eq!(advance.interpolation, 0.0);
    }

    #[test]
    fn five_capped_frames_make_one_step() {
        let mut clock = drained_clock();

        for _ in 0..4 {
            assert_eq!(clock.advance(CAP).steps_to_run, 0);
        }
        assert_eq!(clock.advance(CAP).steps_to_run, 1);
        assert_eq!(clock.interpolation(), 0.0);
    }

    #[test]
    fn large_delta_is_capped() {
        let mut clock = drained_clock();

        let advance = clock.advance(Duration::from_secs(10));

        assert_eq!(advance.steps_to_run, 0);
        assert!((advance.interpolation - 0.2).abs() < 1e-9);
    }

    #[test]
    fn interpolation_tracks_leftover_fraction() {
        let mut clock = drained_clock();

        clock.advance(Duration::from_millis(50));
        clock.advance(Duration::from_millis(50));
        let advance = clock.advance(Duration::from_millis(25));

        assert_eq!(advance.steps_to_run, 0);
        assert!((advance.interpolation - 0.5).abs() < 1e-9);
    }

    #[test]
    fn many_small_deltas_match_fewer_larger_ones() {
        let mut fine = drained_clock();
        let mut coarse = drained_clock();

        let mut fine_steps = 0;
        for _ in 0..1_000 {
            fine_steps += fine.advance(Duration::from_millis(5)).steps_to_run;
        }

        let mut coarse_steps = 0;
        for _ in 0..100 {
            coarse_steps += coarse.advance(Duration::from_millis(50)).steps_to_run;
        }

        assert_eq!(fine_steps, 20);
        assert_eq!(fine_steps, coarse_steps);
        assert_eq!(fine.interpolation(), coarse.interpolation());
    }

    #[test]
    fn interpolation_stays_in_unit_range() {
        let mut clock = FixedStepClock::new(Duration::from_millis(16), Duration::from_millis(100));
        let deltas = [1, 7, 16, 33, 99, 250, 0, 15, 17, 64];

        for ms in deltas {
            let advance = clock.advance(Duration::from_millis(ms));
            assert!((0.0..=1.0).contains(&advance.interpolation));
            assert!(advance.interpolation < 1.0);
        }
    }

    #[test]
    fn reset_primes_an_immediate_step() {
        let mut clock = drained_clock();
        clock.advance(Duration::from_millis(30));

        clock.reset();
        let advance = clock.advance(Duration::ZERO);

        assert_eq!(advance.steps_to_run, 1);
        assert_eq!(clock.total_steps(), 2);
    }
}

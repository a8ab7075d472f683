//! Fixed-timestep frame clock.
//!
//! Physics is frame-rate dependent: gravity is added once per step no matter
//! how long the step is. Hosts that want identical behaviour on every
//! machine feed wall-clock time into a [`FixedTimestep`] and run
//! [`Simulation::step`](crate::simulation::Simulation::step) with
//! [`FIXED_DT`] as many times as it says. Hosts that do not care can pass
//! their measured frame time to `step` directly.
//!
//! # Example
//!
//! ```
//! use parryfall_core::clock::{FixedTimestep, FIXED_DT};
//!
//! let mut clock = FixedTimestep::default();
//! assert_eq!(clock.advance(FIXED_DT * 2.5), 2);
//! assert!((clock.alpha() - 0.5).abs() < 1e-3);
//! ```

use crate::error::{ensure_positive, ConfigResult};

/// Fixed timestep for physics integration (1/60 second = ~16.67ms).
pub const FIXED_DT: f32 = 1.0 / 60.0;

/// Longest wall-clock frame accepted in one call to
/// [`FixedTimestep::advance`]. Anything longer is truncated so a stalled host
/// does not try to catch up with hundreds of steps.
pub const MAX_FRAME_TIME: f32 = 0.25;

/// Accumulator turning variable frame times into whole fixed steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTimestep {
    step: f32,
    max_frame_time: f32,
    accumulator: f32,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self {
            step: FIXED_DT,
            max_frame_time: MAX_FRAME_TIME,
            accumulator: 0.0,
        }
    }
}

impl FixedTimestep {
    /// Creates a clock producing steps of `step` seconds.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NotPositive`](crate::error::ConfigError::NotPositive)
    /// unless `step` is finite and greater than zero.
    pub fn new(step: f32) -> ConfigResult<Self> {
        ensure_positive("clock.step", step)?;
        Ok(Self {
            step,
            ..Self::default()
        })
    }

    /// Overrides the longest accepted frame time.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NotPositive`](crate::error::ConfigError::NotPositive)
    /// unless `max_frame_time` is finite and greater than zero.
    pub fn with_max_frame_time(mut self, max_frame_time: f32) -> ConfigResult<Self> {
        ensure_positive("clock.max_frame_time", max_frame_time)?;
        self.max_frame_time = max_frame_time;
        Ok(self)
    }

    /// Length of one step.
    #[must_use]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Adds `elapsed` seconds of wall-clock time and returns how many steps
    /// are now due. Negative or NaN input counts as zero.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        let elapsed = if elapsed.is_nan() {
            0.0
        } else {
            elapsed.clamp(0.0, self.max_frame_time)
        };
        self.accumulator += elapsed;

        let mut steps = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            steps += 1;
        }
        steps
    }

    /// Fraction of a step left in the accumulator, for render interpolation.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }

    /// Drops any leftover time.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

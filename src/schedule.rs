//! Blink schedule computation.
//!
//! A schedule starts from the minimum blink period and applies a
//! [`Progression`] until the accumulated blink time reaches the total budget.
//! The last period produced is the converged period the firmware starts
//! blinking with.

use core::fmt;

use embassy_time::Duration;

use crate::progression::Progression;

/// Errors reported while validating or iterating a schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleError {
    /// The starting period is zero, so the schedule would never advance
    ZeroMinPeriod,
    /// The time budget is zero, so no interval would ever be produced
    ZeroTotalTime,
    /// Geometric ratio is not a finite number `>= 1.0`
    InvalidRatio,
    /// A configured or computed value does not fit in `u32` milliseconds
    OutOfRange,
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMinPeriod => f.write_str("minimum blink period must be greater than zero"),
            Self::ZeroTotalTime => f.write_str("total schedule time must be greater than zero"),
            Self::InvalidRatio => {
                f.write_str("geometric ratio must be a finite number greater than or equal to 1")
            }
            Self::OutOfRange => f.write_str("blink period does not fit in 32-bit milliseconds"),
        }
    }
}

impl core::error::Error for ScheduleError {}

/// Parameters of a blink schedule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleParameters {
    /// Cumulative blink time after which the schedule stops
    pub total_time: Duration,
    /// Starting interval, also emitted as the minimum blink period
    pub min_period: Duration,
    /// Rule used to derive each interval from the previous one
    pub progression: Progression,
    /// Increment per blink for [`Progression::Arithmetic`]
    ///
    /// Emitted as the per-blink decrease even when the geometric rule is used.
    pub step: Duration,
    /// Multiplier per blink for [`Progression::Geometric`]
    pub ratio: f64,
}

impl ScheduleParameters {
    /// Parameters shipped with the firmware
    pub const DEFAULT: Self = Self {
        total_time: Duration::from_millis(10_000),
        min_period: Duration::from_millis(110),
        progression: Progression::Arithmetic,
        step: Duration::from_millis(70),
        ratio: 2.0,
    };

    /// Check that the schedule terminates and that every configured value
    /// fits the generated header
    pub fn validate(&self) -> Result<(), ScheduleError> {
        self.limits().map(|_| ())
    }

    /// Validate the parameters and return the lazy interval sequence
    pub fn schedule(&self) -> Result<BlinkSchedule, ScheduleError> {
        let limits = self.limits()?;
        Ok(BlinkSchedule {
            progression: self.progression,
            ratio: self.ratio,
            step_ms: limits.step_ms,
            total_ms: limits.total_ms,
            current_ms: limits.min_period_ms,
            elapsed_ms: 0,
            steps: 0,
            failed: false,
        })
    }

    /// Run the schedule to completion and return the converged period
    pub fn converge(&self) -> Result<ConvergedSchedule, ScheduleError> {
        let mut schedule = self.schedule()?;
        for step in &mut schedule {
            step?;
        }
        let converged = schedule.converged();

        #[cfg(feature = "log")]
        log::debug!(
            "[ScheduleParameters.converge] {} blinks, converged to {} ms after {} ms",
            converged.steps,
            converged.period_ms,
            converged.elapsed_ms
        );

        Ok(converged)
    }

    fn limits(&self) -> Result<Limits, ScheduleError> {
        let limits = Limits {
            total_ms: millis_u32(self.total_time)?,
            min_period_ms: millis_u32(self.min_period)?,
            step_ms: millis_u32(self.step)?,
        };
        if limits.min_period_ms == 0 {
            return Err(ScheduleError::ZeroMinPeriod);
        }
        if limits.total_ms == 0 {
            return Err(ScheduleError::ZeroTotalTime);
        }
        // A ratio below one floors towards zero and never exhausts the budget
        if self.progression == Progression::Geometric
            && (!self.ratio.is_finite() || self.ratio < 1.0)
        {
            return Err(ScheduleError::InvalidRatio);
        }
        Ok(limits)
    }
}

impl Default for ScheduleParameters {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Parameters converted to whole milliseconds
struct Limits {
    total_ms: u32,
    min_period_ms: u32,
    step_ms: u32,
}

/// Convert a duration to whole `u32` milliseconds
pub(crate) fn millis_u32(duration: Duration) -> Result<u32, ScheduleError> {
    u32::try_from(duration.as_millis()).map_err(|_| ScheduleError::OutOfRange)
}

/// A single interval of the schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkStep {
    /// Interval in milliseconds
    pub period_ms: u32,
    /// Accumulated time including this interval
    pub elapsed_ms: u64,
}

impl BlinkStep {
    #[allow(clippy::cast_lossless)]
    pub const fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms as u64)
    }

    pub const fn elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms)
    }
}

/// Lazy sequence of blink intervals
///
/// Created by [`ScheduleParameters::schedule`]. Yields one interval per
/// iteration while the accumulated time is below the budget. If an interval
/// overflows, a single [`ScheduleError::OutOfRange`] is yielded and the
/// sequence ends.
#[derive(Debug, Clone)]
pub struct BlinkSchedule {
    progression: Progression,
    ratio: f64,
    step_ms: u32,
    total_ms: u32,
    current_ms: u32,
    elapsed_ms: u64,
    steps: usize,
    failed: bool,
}

impl BlinkSchedule {
    /// Accumulated time of the intervals yielded so far
    pub const fn elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms)
    }

    /// Snapshot of the last interval and the accumulated time
    ///
    /// Once the sequence is exhausted this is the converged schedule.
    pub const fn converged(&self) -> ConvergedSchedule {
        ConvergedSchedule {
            period_ms: self.current_ms,
            steps: self.steps,
            elapsed_ms: self.elapsed_ms,
        }
    }

    /// Check if the time budget is exhausted
    #[allow(clippy::cast_lossless)]
    pub const fn is_done(&self) -> bool {
        self.failed || self.elapsed_ms >= self.total_ms as u64
    }
}

impl Iterator for BlinkSchedule {
    type Item = Result<BlinkStep, ScheduleError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_done() {
            return None;
        }

        let Some(period_ms) =
            self.progression
                .next_period(self.current_ms, self.step_ms, self.ratio)
        else {
            self.failed = true;
            return Some(Err(ScheduleError::OutOfRange));
        };

        self.current_ms = period_ms;
        self.elapsed_ms += u64::from(period_ms);
        self.steps += 1;

        #[cfg(feature = "log")]
        log::trace!(
            "[BlinkSchedule.next] period {} ms, elapsed {} ms",
            period_ms,
            self.elapsed_ms
        );

        Some(Ok(BlinkStep {
            period_ms,
            elapsed_ms: self.elapsed_ms,
        }))
    }
}

/// Final state of a schedule that ran to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvergedSchedule {
    /// Last interval produced
    pub period_ms: u32,
    /// Number of intervals produced
    pub steps: usize,
    /// Accumulated time, at least the total budget
    pub elapsed_ms: u64,
}

impl ConvergedSchedule {
    #[allow(clippy::cast_lossless)]
    pub const fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms as u64)
    }
}

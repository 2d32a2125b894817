//! C header and console listing formats.
//!
//! The header layout is consumed by the firmware build and diffed against
//! previously generated files, so every byte matters, including the trailing
//! space after the include directive.

use core::fmt;

use crate::schedule::{ConvergedSchedule, ScheduleError, ScheduleParameters, millis_u32};

/// Name of the converged period constant
pub const INITIAL_BLINK_PERIOD: &str = "initial_blink_period";
/// Name of the per-blink decrease constant
pub const DECREASE_BLINK_DURATION: &str = "decrease_blink_duration";
/// Name of the minimum period constant
pub const MIN_BLINK_PERIOD: &str = "min_blink_period";

/// File name used when no output path is given
pub const DEFAULT_HEADER_FILE_NAME: &str = "blink_time.h";

const HEADER_PREAMBLE: &str = "#pragma once\n\
\n\
//This is an auto generated file, look at generate_blink_time.py\n\
\n\
#include <inttypes.h> \n\
\n";

/// Constants written to the generated header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkHeader {
    /// Period the firmware starts blinking with
    pub initial_blink_period: u32,
    /// Amount the firmware shortens the period by after each blink
    pub decrease_blink_duration: u32,
    /// Shortest period the firmware blinks with
    pub min_blink_period: u32,
}

impl BlinkHeader {
    /// Build the header constants from a converged schedule
    pub fn from_schedule(
        params: &ScheduleParameters,
        converged: &ConvergedSchedule,
    ) -> Result<Self, ScheduleError> {
        Ok(Self {
            initial_blink_period: converged.period_ms,
            decrease_blink_duration: millis_u32(params.step)?,
            min_blink_period: millis_u32(params.min_period)?,
        })
    }

    /// Run the schedule and build the header constants
    pub fn generate(params: &ScheduleParameters) -> Result<Self, ScheduleError> {
        let converged = params.converge()?;
        Self::from_schedule(params, &converged)
    }

    /// Write the header text
    pub fn write_to<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        out.write_str(HEADER_PREAMBLE)?;
        write_constant(out, INITIAL_BLINK_PERIOD, self.initial_blink_period)?;
        write_constant(out, DECREASE_BLINK_DURATION, self.decrease_blink_duration)?;
        write_constant(out, MIN_BLINK_PERIOD, self.min_blink_period)
    }
}

impl fmt::Display for BlinkHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

fn write_constant<W: fmt::Write>(out: &mut W, name: &str, value: u32) -> fmt::Result {
    writeln!(out, "const uint32_t {} = {};", name, value)
}

/// One line of the console listing, `    <period>,`
///
/// The listing can be pasted straight into a C array initializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingEntry(pub u32);

impl fmt::Display for ListingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "    {},", self.0)
    }
}

/// Closing line of the console listing with the converged period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingSummary(pub u32);

impl fmt::Display for ListingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "const uint32_t blink_time = {};", self.0)
    }
}

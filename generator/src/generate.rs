//! Schedule listing and header file output

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use blink_schedule::{BlinkHeader, ListingEntry, ListingSummary, ScheduleError, ScheduleParameters};

/// Errors raised while generating the header
#[derive(Debug)]
pub(crate) enum GenerateError {
    /// Parameters rejected by the schedule
    Schedule(ScheduleError),
    /// The listing could not be written to the diagnostics stream
    Diagnostics(io::Error),
    /// The header file could not be written
    FileSystem { path: PathBuf, source: io::Error },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Schedule(_) => f.write_str("invalid blink schedule"),
            Self::Diagnostics(_) => f.write_str("failed to write schedule listing"),
            Self::FileSystem { path, .. } => write!(f, "failed to write {}", path.display()),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Schedule(err) => Some(err),
            Self::Diagnostics(err) | Self::FileSystem { source: err, .. } => Some(err),
        }
    }
}

impl From<ScheduleError> for GenerateError {
    fn from(err: ScheduleError) -> Self {
        Self::Schedule(err)
    }
}

impl From<io::Error> for GenerateError {
    fn from(err: io::Error) -> Self {
        Self::Diagnostics(err)
    }
}

/// Compute the schedule and write the header to `output_path`
///
/// Every interval is listed on `diagnostics` as it is produced, followed by
/// the converged period. An existing file at `output_path` is replaced.
pub(crate) fn generate<W: Write>(
    params: &ScheduleParameters,
    output_path: &Path,
    mut diagnostics: W,
) -> Result<BlinkHeader, GenerateError> {
    let mut schedule = params.schedule()?;
    for step in &mut schedule {
        let step = step?;
        writeln!(diagnostics, "{}", ListingEntry(step.period_ms))?;
    }
    let converged = schedule.converged();
    writeln!(diagnostics, "{}", ListingSummary(converged.period_ms))?;
    diagnostics.flush()?;

    let header = BlinkHeader::from_schedule(params, &converged)?;
    fs::write(output_path, header.to_string()).map_err(|source| GenerateError::FileSystem {
        path: output_path.to_path_buf(),
        source,
    })?;

    log::info!(
        "wrote {} ({} blinks, {} ms initial period)",
        output_path.display(),
        converged.steps,
        header.initial_blink_period
    );

    Ok(header)
}

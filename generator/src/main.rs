//! Blink schedule header generator
//!
//! Computes the firmware blink schedule, lists every interval on stdout and
//! writes the resulting constants to a C header.

mod cli;
mod generate;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use blink_schedule::ScheduleParameters;

use crate::cli::Invocation;
use crate::generate::generate;

/// Exit code for malformed command lines
const EXIT_USAGE: u8 = 2;

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let invocation = match cli::parse(std::env::args_os().skip(1)) {
        Ok(invocation) => invocation,
        Err(err) => {
            log::error!("{err}");
            writeln!(io::stderr(), "{}", cli::USAGE)?;
            return Ok(ExitCode::from(EXIT_USAGE));
        }
    };

    let mut stdout = io::stdout().lock();
    if let Invocation::Fallback(path) = &invocation {
        // Missing path is not fatal, the header still gets written
        writeln!(stdout, "{}", cli::USAGE)?;
        log::warn!("no output path given, writing to {}", path.display());
    }

    let output_path = invocation.output_path();
    let params = ScheduleParameters::DEFAULT;
    log::debug!(
        "{} schedule: {} ms budget, {} ms minimum period",
        params.progression.as_str(),
        params.total_time.as_millis(),
        params.min_period.as_millis()
    );

    generate(&params, output_path, &mut stdout)
        .with_context(|| format!("generating {}", output_path.display()))?;

    Ok(ExitCode::SUCCESS)
}

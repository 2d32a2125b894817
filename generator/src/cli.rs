//! Command line handling

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use blink_schedule::header::DEFAULT_HEADER_FILE_NAME;

pub(crate) const USAGE: &str = "Usage: blink-schedule-gen <output_header_file>";

/// Where the header goes and how that was decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Invocation {
    /// Path given on the command line, used verbatim
    Explicit(PathBuf),
    /// No path given, the header lands next to the generator sources
    Fallback(PathBuf),
}

impl Invocation {
    pub(crate) fn output_path(&self) -> &Path {
        match self {
            Self::Explicit(path) | Self::Fallback(path) => path,
        }
    }
}

/// More positional arguments than the single output path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UsageError {
    pub(crate) count: usize,
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected at most one argument, got {}", self.count)
    }
}

impl std::error::Error for UsageError {}

/// Default header location, the generator's own crate directory
pub(crate) fn default_output_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_HEADER_FILE_NAME)
}

/// Parse the arguments following the program name
pub(crate) fn parse<I>(args: I) -> Result<Invocation, UsageError>
where
    I: IntoIterator<Item = OsString>,
{
    let args: Vec<OsString> = args.into_iter().collect();
    match <[OsString; 1]>::try_from(args) {
        Ok([path]) => Ok(Invocation::Explicit(PathBuf::from(path))),
        Err(args) if args.is_empty() => Ok(Invocation::Fallback(default_output_path())),
        Err(args) => Err(UsageError { count: args.len() }),
    }
}

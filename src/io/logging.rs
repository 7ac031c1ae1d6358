//! Log backend setup for the binary
//!
//! The library only talks to the `log` facade; the binary installs
//! `env_logger` at a level picked from the command line.

use crate::io::error::Result;
use log::LevelFilter;

/// Filter for a verbosity count; `quiet` limits output to errors
pub const fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install `env_logger` as the global `log` backend
///
/// # Errors
///
/// Returns [`GenerationError::Logger`](crate::GenerationError::Logger) if
/// another logger was installed first.
pub fn init(level: LevelFilter) -> Result<()> {
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp_millis()
        .try_init()?;
    Ok(())
}

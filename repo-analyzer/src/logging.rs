// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Diagnostic logging setup for the binary.
//!
//! Logs go to standard error so they never interleave with the rendered
//! tables on standard output. The level comes from the `-v` count only.

use tracing::Level;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt};

use crate::error::Error;

/// Maps the number of `-v` flags to a log level.
pub fn level_for(verbosity: u8,) -> Level
{
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the global stderr subscriber.
///
/// # Errors
///
/// Returns [`Error::Logging`] when a global subscriber is already installed.
pub fn init(verbosity: u8,) -> Result<(), Error,>
{
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level_for(verbosity,),).into(),)
        .parse_lossy("",);

    fmt()
        .with_env_filter(filter,)
        .with_writer(std::io::stderr,)
        .with_target(false,)
        .try_init()
        .map_err(|e| Error::Logging {
            message: e.to_string(),
        },)
}

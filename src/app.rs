//! Application startup and utilities.
//!
//! This module contains exit codes and tracing setup that support the main
//! entry point.

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::run::RunError;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Usage error - the mode argument is missing. Same status clap uses for
    /// malformed command lines.
    pub const USAGE_ERROR_STATUS: u8 = 2;

    /// Configuration error - missing credentials or serial number.
    pub const CONFIG_ERROR_STATUS: u8 = 3;

    /// Runtime error - network failure, API error, output failure.
    pub const RUNTIME_ERROR_STATUS: u8 = 4;
}

/// Returns the process status for a run failure.
pub const fn status_for(error: &RunError) -> u8 {
    if error.is_config() {
        exit_code::CONFIG_ERROR_STATUS
    } else {
        exit_code::RUNTIME_ERROR_STATUS
    }
}

/// Maps a run failure to its exit code.
pub fn exit_code_for(error: &RunError) -> std::process::ExitCode {
    std::process::ExitCode::from(status_for(error))
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so that `check` output on stdout stays machine-readable.
/// `RUST_LOG` overrides the default `info` level.
pub fn setup_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

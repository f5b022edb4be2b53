//! ecoflow-ctl: EcoFlow power station controller
//!
//! Entry point for the ecoflow-ctl application.

use ecoflow_ctl::command::Mode;
use ecoflow_ctl::config::{Cli, ConfigResolver};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, exit_code_for, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_tracing();

    let config = ConfigResolver::from_process().resolve();
    tracing::debug!("{config}");

    let Some(token) = cli.mode else {
        tracing::error!(
            "Mode argument is required (list, check, selfpow, or anything else for time-of-use)"
        );
        return ExitCode::from(exit_code::USAGE_ERROR_STATUS);
    };
    let mode = Mode::from_token(&token);

    match run::run_blocking(mode, &config) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            exit_code_for(&e)
        }
    }
}

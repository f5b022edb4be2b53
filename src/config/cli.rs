//! CLI argument parsing using clap.
//!
//! The command line carries a single positional mode token and nothing else.
//! Credentials and the serial number come from the settings file or the
//! environment.

use clap::Parser;

/// ecoflow-ctl: EcoFlow power station controller
///
/// Lists devices, dumps device parameters, or switches the operating
/// strategy between self-powered and time-of-use.
///
/// Modes: `list`, `check`, `selfpow`; any other value applies the
/// time-of-use strategy.
#[derive(Debug, Parser)]
#[command(name = "ecoflow-ctl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Mode to run (list, check, selfpow, or anything else for time-of-use)
    #[arg(allow_hyphen_values = true)]
    pub mode: Option<String>,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

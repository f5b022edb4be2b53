//! Configuration layer for ecoflow-ctl.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`])
//! - Settings file parsing ([`SettingsFile`])
//! - Environment lookup ([`EnvSource`], [`ProcessEnv`])
//! - The resolved per-run configuration ([`EffectiveConfig`], [`ConfigResolver`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Each of `accessKey`, `secretKey` and `serialNumber` is resolved
//! independently, highest priority first:
//!
//! 1. **Environment** - `ACCESS_KEY`, `SECRET_KEY`, `SERIAL_NUMBER`, only when non-empty
//! 2. **Settings file** - `~/.ecoflow`, a JSON object
//! 3. **Empty**
//!
//! A value is always taken whole from one source; sources are never merged
//! within a field.
//!
//! # Settings File Failures
//!
//! A missing settings file is silently ignored. A file that exists but cannot
//! be read or parsed is logged as a warning and treated as empty; the run
//! continues with environment values only.

mod cli;
pub mod defaults;
mod env;
mod error;
mod resolved;
mod settings;

#[cfg(test)]
mod resolved_tests;

pub use cli::Cli;
pub use env::{EnvSource, ProcessEnv};
pub use error::{ConfigError, field};
pub use resolved::{ConfigResolver, EffectiveConfig};
pub use settings::{SettingsFile, default_settings_path};

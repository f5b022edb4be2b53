//! Effective configuration after merging the settings file and environment.
//!
//! Resolution never fails: unreadable settings are logged and skipped, and
//! empty fields are left for the command router to reject.

use std::fmt;
use std::path::PathBuf;

use super::defaults;
use super::env::{EnvSource, ProcessEnv};
use super::settings::{SettingsFile, default_settings_path};

/// Resolved settings used for a single run.
///
/// An empty string means the value was provided by neither source.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EffectiveConfig {
    access_key: String,
    secret_key: String,
    serial_number: String,
}

impl EffectiveConfig {
    /// Creates a configuration from already-resolved values.
    #[must_use]
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        serial_number: impl Into<String>,
    ) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            serial_number: serial_number.into(),
        }
    }

    /// Merges settings-file values with environment overrides.
    ///
    /// Each field takes the environment value when it is set and non-empty,
    /// otherwise the settings-file value, otherwise an empty string.
    #[must_use]
    pub fn merge(settings: &SettingsFile, env: &impl EnvSource) -> Self {
        let pick = |from_file: Option<&str>, key: &str| {
            env.non_empty(key)
                .or_else(|| from_file.map(str::to_owned))
                .unwrap_or_default()
        };

        Self {
            access_key: pick(settings.access_key.as_deref(), defaults::ENV_ACCESS_KEY),
            secret_key: pick(settings.secret_key.as_deref(), defaults::ENV_SECRET_KEY),
            serial_number: pick(settings.serial_number.as_deref(), defaults::ENV_SERIAL_NUMBER),
        }
    }

    /// API access key.
    #[must_use]
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// API secret key.
    #[must_use]
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Device serial number, possibly empty.
    #[must_use]
    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }
}

/// Shows at most the first four characters of a credential.
fn mask(value: &str) -> String {
    if value.is_empty() {
        return "<unset>".to_string();
    }
    let prefix: String = value.chars().take(4).collect();
    format!("{prefix}***")
}

impl fmt::Display for EffectiveConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secret = if self.secret_key.is_empty() {
            "<unset>"
        } else {
            "***"
        };
        let serial = if self.serial_number.is_empty() {
            "<unset>"
        } else {
            &self.serial_number
        };

        write!(
            f,
            "Config {{ access_key: {}, secret_key: {secret}, serial_number: {serial} }}",
            mask(&self.access_key),
        )
    }
}

impl fmt::Debug for EffectiveConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Builds an [`EffectiveConfig`] from a settings file and an environment.
///
/// # Precedence
///
/// 1. **Environment** - `ACCESS_KEY`, `SECRET_KEY`, `SERIAL_NUMBER` when non-empty
/// 2. **Settings file** - `~/.ecoflow` (JSON)
/// 3. **Empty** - left for the command router to reject
#[derive(Debug)]
pub struct ConfigResolver<E> {
    settings_path: Option<PathBuf>,
    env: E,
}

impl ConfigResolver<ProcessEnv> {
    /// Creates a resolver reading `~/.ecoflow` and the process environment.
    ///
    /// If the home directory cannot be determined, only the environment is used.
    #[must_use]
    pub fn from_process() -> Self {
        let settings_path = match default_settings_path() {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!("{e}, proceeding without settings file values");
                None
            }
        };
        Self::new(settings_path, ProcessEnv)
    }
}

impl<E: EnvSource> ConfigResolver<E> {
    /// Creates a resolver with an explicit settings path and environment.
    #[must_use]
    pub const fn new(settings_path: Option<PathBuf>, env: E) -> Self {
        Self { settings_path, env }
    }

    /// Resolves the effective configuration.
    #[must_use]
    pub fn resolve(&self) -> EffectiveConfig {
        let settings = self.load_settings();
        EffectiveConfig::merge(&settings, &self.env)
    }

    /// Loads the settings file, falling back to empty settings on failure.
    fn load_settings(&self) -> SettingsFile {
        let Some(path) = self.settings_path.as_deref() else {
            return SettingsFile::default();
        };

        match SettingsFile::load(path) {
            Ok(Some(settings)) => {
                tracing::debug!("Loaded settings from {}", path.display());
                settings
            }
            Ok(None) => SettingsFile::default(),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    "{e}, will rely on environment variables"
                );
                SettingsFile::default()
            }
        }
    }
}

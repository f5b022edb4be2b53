//! Persisted settings file parsing.
//!
//! The settings file is a small JSON object stored in the user's home
//! directory. Every field is optional; unknown fields are ignored.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::ConfigError;
use super::defaults;

/// Contents of the settings file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsFile {
    /// API access key
    pub access_key: Option<String>,

    /// API secret key
    pub secret_key: Option<String>,

    /// Serial number of the target device
    pub serial_number: Option<String>,
}

impl SettingsFile {
    /// Loads settings from a JSON file.
    ///
    /// A missing file is not an error and yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ConfigError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        Self::parse(&content).map(Some)
    }

    /// Parses settings from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or a field has the wrong type.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(ConfigError::from)
    }
}

/// Returns the well-known settings file location (`~/.ecoflow`).
///
/// # Errors
///
/// Returns [`ConfigError::HomeDirUnavailable`] if the home directory is unknown.
pub fn default_settings_path() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(defaults::SETTINGS_FILE_NAME))
        .ok_or(ConfigError::HomeDirUnavailable)
}

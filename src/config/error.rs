//! Error types for configuration loading and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Settings-file errors are recoverable: the resolver logs them and carries on
/// with environment values. `MissingRequired` is fatal for the run.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The home directory could not be determined.
    #[error("Could not determine the home directory")]
    HomeDirUnavailable,

    /// Failed to read the settings file.
    #[error("Failed to read settings file '{}': {source}", path.display())]
    FileRead {
        /// Path to the settings file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the settings JSON.
    #[error("Failed to parse settings JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A field required by the requested mode is empty after resolution.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },
}

/// Well-known field names for `MissingRequired` errors.
///
/// These match the keys of the settings file.
pub mod field {
    /// The API access key.
    pub const ACCESS_KEY: &str = "accessKey";
    /// The API secret key.
    pub const SECRET_KEY: &str = "secretKey";
    /// The device serial number.
    pub const SERIAL_NUMBER: &str = "serialNumber";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}

//! Default values for configuration options.
//!
//! Centralized constants to avoid magic strings scattered across the codebase.

/// Settings file name, relative to the user's home directory.
pub const SETTINGS_FILE_NAME: &str = ".ecoflow";

/// Environment variable overriding the access key.
pub const ENV_ACCESS_KEY: &str = "ACCESS_KEY";

/// Environment variable overriding the secret key.
pub const ENV_SECRET_KEY: &str = "SECRET_KEY";

/// Environment variable overriding the device serial number.
pub const ENV_SERIAL_NUMBER: &str = "SERIAL_NUMBER";

/// Base URL of the EcoFlow IoT open API.
pub const API_BASE_URL: &str = "https://api-e.ecoflow.com";

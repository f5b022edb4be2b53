//! Precondition gates and mode-to-action mapping.

use crate::config::{ConfigError, EffectiveConfig, field};

use super::Mode;
use super::payload::StrategyProfile;

/// What a run will do once configuration has been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// List the devices bound to the account.
    EnumerateDevices,

    /// Fetch every parameter of one device.
    FetchAllParameters {
        /// Target device
        serial_number: String,
    },

    /// Push an operating strategy to one device.
    SetStrategy {
        /// Target device
        serial_number: String,
        /// Strategy to apply
        profile: StrategyProfile,
    },
}

impl Action {
    /// Short name for log messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::EnumerateDevices => "enumerate devices",
            Self::FetchAllParameters { .. } => "fetch device parameters",
            Self::SetStrategy { .. } => "set device parameter",
        }
    }
}

/// Validates `config` for `mode` and selects the action to run.
///
/// Gates are checked in order and the first failure stops routing:
/// 1. Access and secret keys must be non-empty, for every mode.
/// 2. The serial number must be non-empty, except for [`Mode::List`].
///
/// # Errors
///
/// Returns [`ConfigError::MissingRequired`] naming the first empty field.
pub fn route(mode: Mode, config: &EffectiveConfig) -> Result<Action, ConfigError> {
    if config.access_key().is_empty() {
        return Err(ConfigError::missing(
            field::ACCESS_KEY,
            "Set accessKey in ~/.ecoflow (JSON) or the ACCESS_KEY environment variable",
        ));
    }
    if config.secret_key().is_empty() {
        return Err(ConfigError::missing(
            field::SECRET_KEY,
            "Set secretKey in ~/.ecoflow (JSON) or the SECRET_KEY environment variable",
        ));
    }

    if mode.requires_serial_number() && config.serial_number().is_empty() {
        return Err(ConfigError::missing(
            field::SERIAL_NUMBER,
            "Required for modes other than 'list'. Set serialNumber in ~/.ecoflow (JSON) \
             or the SERIAL_NUMBER environment variable",
        ));
    }

    let serial_number = config.serial_number().to_string();
    let action = match mode {
        Mode::List => Action::EnumerateDevices,
        Mode::Check => Action::FetchAllParameters { serial_number },
        Mode::SelfPowered => Action::SetStrategy {
            serial_number,
            profile: StrategyProfile::self_powered(),
        },
        Mode::DefaultStrategy => Action::SetStrategy {
            serial_number,
            profile: StrategyProfile::time_of_use(),
        },
    };

    Ok(action)
}

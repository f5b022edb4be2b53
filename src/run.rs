//! Application execution logic.
//!
//! Routes the requested mode, performs exactly one remote call, and reports
//! the result. Nothing is retried.

use std::io::Write;

use thiserror::Error;

use ecoflow_ctl::api::{
    ApiError, Credentials, DeviceApi, DeviceInfo, EcoflowClient, ReqwestClient,
};
use ecoflow_ctl::command::{Action, Mode, build, route};
use ecoflow_ctl::config::{ConfigError, EffectiveConfig};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// A validation gate rejected the configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The async runtime could not be started.
    #[error("Failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// The API client could not be constructed.
    #[error("Failed to create API client: {0}")]
    Client(#[source] ApiError),

    /// The remote call failed.
    #[error("Failed to {action}: {source}")]
    Api {
        /// What was being attempted
        action: &'static str,
        /// Underlying API error
        #[source]
        source: ApiError,
    },

    /// Device parameters could not be serialized.
    #[error("Failed to render device parameters: {0}")]
    Render(#[source] serde_json::Error),

    /// Writing to stdout failed.
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

impl RunError {
    /// Returns true if the run stopped at a validation gate.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

/// Runs `mode` against the EcoFlow API on a single-threaded runtime.
///
/// Excluded from coverage - requires network access.
#[cfg(not(tarpaulin_include))]
pub fn run_blocking(mode: Mode, config: &EffectiveConfig) -> Result<(), RunError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(RunError::Runtime)?;

    runtime.block_on(async {
        let http = ReqwestClient::try_new().map_err(|e| RunError::Client(e.into()))?;
        let api = EcoflowClient::new(http, Credentials::from(config)).map_err(RunError::Client)?;
        let mut stdout = std::io::stdout().lock();
        dispatch(mode, config, &api, &mut stdout).await
    })
}

/// Validates `config` for `mode`, then executes the selected action.
///
/// No call reaches `api` unless every validation gate passes.
///
/// # Errors
///
/// Returns [`RunError::Config`] if a gate fails, or the error of the action.
pub async fn dispatch<A: DeviceApi, W: Write>(
    mode: Mode,
    config: &EffectiveConfig,
    api: &A,
    out: &mut W,
) -> Result<(), RunError> {
    let action = route(mode, config)?;
    tracing::debug!(%mode, action = action.name(), "Routed");
    execute(action, api, out).await
}

/// Executes one action against `api`.
///
/// `FetchAllParameters` output is written to `out` as indented JSON; the
/// other actions report through the log.
///
/// # Errors
///
/// Returns [`RunError::Api`] if the remote call fails, or an output error.
pub async fn execute<A: DeviceApi, W: Write>(
    action: Action,
    api: &A,
    out: &mut W,
) -> Result<(), RunError> {
    let name = action.name();
    let api_error = |source| RunError::Api {
        action: name,
        source,
    };

    match action {
        Action::EnumerateDevices => {
            let devices = api.enumerate_devices().await.map_err(api_error)?;
            report_devices(&devices);
        }

        Action::FetchAllParameters { serial_number } => {
            let parameters = api
                .fetch_all_parameters(&serial_number)
                .await
                .map_err(api_error)?;
            tracing::debug!(
                sn = %serial_number,
                count = parameters.len(),
                "Fetched device parameters"
            );
            serde_json::to_writer_pretty(&mut *out, &parameters).map_err(RunError::Render)?;
            writeln!(out).map_err(RunError::Output)?;
        }

        Action::SetStrategy {
            serial_number,
            profile,
        } => {
            let envelope = build(&serial_number, profile);
            tracing::info!(
                sn = %serial_number,
                self_powered = profile.self_powered_enabled(),
                tou = profile.tou_mode_enabled(),
                backup_reserve_soc = profile.backup_reserve_start_soc(),
                "Setting energy strategy"
            );
            let response = api.set_parameter(&envelope).await.map_err(api_error)?;
            tracing::info!(?response, "Set device parameter response");
        }
    }

    Ok(())
}

fn report_devices(devices: &[DeviceInfo]) {
    if devices.is_empty() {
        tracing::info!("No devices bound to this account");
        return;
    }

    for device in devices {
        tracing::info!(
            sn = %device.sn,
            name = device.device_name.as_deref().unwrap_or("-"),
            product = device.product_name.as_deref().unwrap_or("-"),
            online = device.is_online(),
            "Device"
        );
    }
}

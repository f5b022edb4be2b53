//! Device API abstraction and its result types.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::command::CommandEnvelope;

use super::ApiError;

/// Every quota of a device, keyed by quota name.
pub type ParameterSet = serde_json::Map<String, serde_json::Value>;

/// Optional `data` returned by a set-parameter call.
pub type SetResult = Option<serde_json::Value>;

/// A device bound to the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    /// Serial number
    pub sn: String,

    /// User-assigned device name
    #[serde(default)]
    pub device_name: Option<String>,

    /// Product family, e.g. "PowerOcean"
    #[serde(default)]
    pub product_name: Option<String>,

    /// 1 when the device is connected to the cloud
    #[serde(default)]
    pub online: u8,
}

impl DeviceInfo {
    /// Returns true if the device is connected to the cloud.
    #[must_use]
    pub const fn is_online(&self) -> bool {
        self.online == 1
    }
}

/// Remote operations the controller needs from the device cloud.
///
/// [`EcoflowClient`](super::EcoflowClient) is the production implementation;
/// tests substitute a recording mock.
pub trait DeviceApi: Send + Sync {
    /// Lists the devices bound to the account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or is rejected.
    fn enumerate_devices(&self) -> impl Future<Output = Result<Vec<DeviceInfo>, ApiError>> + Send;

    /// Fetches every quota of one device.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or is rejected.
    fn fetch_all_parameters(
        &self,
        serial_number: &str,
    ) -> impl Future<Output = Result<ParameterSet, ApiError>> + Send;

    /// Sends a set-parameter command.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or is rejected.
    fn set_parameter(
        &self,
        envelope: &CommandEnvelope,
    ) -> impl Future<Output = Result<SetResult, ApiError>> + Send;
}

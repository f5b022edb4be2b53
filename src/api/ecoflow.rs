//! EcoFlow IoT open API client.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use http::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use rand::Rng;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::command::CommandEnvelope;
use crate::config::{EffectiveConfig, defaults};

use super::device::{DeviceApi, DeviceInfo, ParameterSet, SetResult};
use super::response::Response;
use super::sign;
use super::{ApiError, HttpClient, HttpError, HttpRequest};

/// Endpoint paths, relative to the API base URL.
pub mod path {
    /// Device list.
    pub const DEVICE_LIST: &str = "/iot-open/sign/device/list";
    /// All quotas of one device (`?sn=`).
    pub const QUOTA_ALL: &str = "/iot-open/sign/device/quota/all";
    /// Set quotas on one device.
    pub const QUOTA_SET: &str = "/iot-open/sign/device/quota";
}

/// Authentication header names.
///
/// The API documents them as `accessKey` etc.; HTTP header names are
/// case-insensitive and the `http` crate stores them lowercase.
pub mod header {
    /// Access key header.
    pub const ACCESS_KEY: &str = "accesskey";
    /// Random six-digit nonce header.
    pub const NONCE: &str = "nonce";
    /// Millisecond timestamp header.
    pub const TIMESTAMP: &str = "timestamp";
    /// Signature header.
    pub const SIGN: &str = "sign";
}

const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// API key pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_key: String,
    secret_key: String,
}

impl Credentials {
    /// Creates a key pair.
    #[must_use]
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Access key, sent in clear.
    #[must_use]
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Secret key, used only as the HMAC key.
    #[must_use]
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }
}

impl From<&EffectiveConfig> for Credentials {
    fn from(config: &EffectiveConfig) -> Self {
        Self::new(config.access_key(), config.secret_key())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"***")
            .finish()
    }
}

/// [`DeviceApi`] implementation over the EcoFlow open API.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
#[derive(Debug)]
pub struct EcoflowClient<H> {
    http: H,
    base_url: Url,
    credentials: Credentials,
}

impl<H: HttpClient> EcoflowClient<H> {
    /// Creates a client for the default API host.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in base URL fails to parse.
    pub fn new(http: H, credentials: Credentials) -> Result<Self, ApiError> {
        let base_url = Url::parse(defaults::API_BASE_URL)
            .map_err(|e| HttpError::InvalidUrl(e.to_string()))?;
        Ok(Self::with_base_url(http, base_url, credentials))
    }

    /// Creates a client for a specific API host.
    #[must_use]
    pub const fn with_base_url(http: H, base_url: Url, credentials: Credentials) -> Self {
        Self {
            http,
            base_url,
            credentials,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| HttpError::InvalidUrl(e.to_string()).into())
    }

    /// Adds the authentication headers for `params` to `req`.
    fn sign(&self, req: HttpRequest, params: &[(String, String)]) -> Result<HttpRequest, ApiError> {
        let nonce = rand::thread_rng().gen_range(100_000..1_000_000).to_string();
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis()
            .to_string();

        let message = sign::canonical_string(
            params,
            self.credentials.access_key(),
            &nonce,
            &timestamp,
        );
        let signature = sign::hmac_sha256_hex(self.credentials.secret_key(), &message)?;

        Ok(req
            .with_header(
                HeaderName::from_static(header::ACCESS_KEY),
                header_value(header::ACCESS_KEY, self.credentials.access_key())?,
            )
            .with_header(
                HeaderName::from_static(header::NONCE),
                header_value(header::NONCE, &nonce)?,
            )
            .with_header(
                HeaderName::from_static(header::TIMESTAMP),
                header_value(header::TIMESTAMP, &timestamp)?,
            )
            .with_header(
                HeaderName::from_static(header::SIGN),
                header_value(header::SIGN, &signature)?,
            ))
    }

    /// Sends `req` and unwraps the response envelope.
    async fn send<T: DeserializeOwned>(&self, req: HttpRequest) -> Result<Option<T>, ApiError> {
        let response = self.http.request(req).await?;

        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        let envelope: Response<T> =
            serde_json::from_slice(&response.body).map_err(ApiError::Decode)?;
        envelope.into_result()
    }
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(value).map_err(|_| ApiError::InvalidHeader { name })
}

impl<H: HttpClient> DeviceApi for EcoflowClient<H> {
    async fn enumerate_devices(&self) -> Result<Vec<DeviceInfo>, ApiError> {
        let req = self.sign(HttpRequest::get(self.endpoint(path::DEVICE_LIST)?), &[])?;

        self.send(req).await?.ok_or(ApiError::MissingData)
    }

    async fn fetch_all_parameters(&self, serial_number: &str) -> Result<ParameterSet, ApiError> {
        let mut url = self.endpoint(path::QUOTA_ALL)?;
        url.query_pairs_mut().append_pair("sn", serial_number);
        let params = [("sn".to_string(), serial_number.to_string())];

        let req = self.sign(HttpRequest::get(url), &params)?;

        self.send(req).await?.ok_or(ApiError::MissingData)
    }

    async fn set_parameter(&self, envelope: &CommandEnvelope) -> Result<SetResult, ApiError> {
        let body = serde_json::to_value(envelope).map_err(ApiError::Encode)?;
        let bytes = serde_json::to_vec(&body).map_err(ApiError::Encode)?;
        let params = sign::flatten(&body);

        let req = HttpRequest::put(self.endpoint(path::QUOTA_SET)?)
            .with_header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
            .with_body(bytes);
        let req = self.sign(req, &params)?;

        self.send::<Value>(req).await
    }
}

//! Error types for HTTP transport and device API operations.

use thiserror::Error;

/// Error type for HTTP transport operations.
///
/// Describes what went wrong at the transport level, independent of the
/// HTTP library in use.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The HTTP client could not be constructed.
    #[error("Failed to set up HTTP client: {0}")]
    Setup(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for device API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be delivered.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// Response status code
        status: http::StatusCode,
        /// Response body, lossily decoded
        body: String,
    },

    /// The API rejected the request.
    #[error("EcoFlow API error {code}: {message}")]
    Remote {
        /// API result code
        code: String,
        /// API message
        message: String,
    },

    /// A successful response carried no `data` where one was expected.
    #[error("Response contained no data")]
    MissingData,

    /// The response body was not the expected JSON.
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request body could not be encoded.
    #[error("Failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// A header value contained characters HTTP does not allow.
    #[error("Invalid header value for '{name}'")]
    InvalidHeader {
        /// Header name
        name: &'static str,
    },

    /// The signing key was rejected by the MAC implementation.
    #[error("Failed to sign request")]
    Signing,
}

//! Transport types for the EcoFlow open API.
//!
//! Requests are fully built (signed headers, JSON body) before they reach an
//! [`HttpClient`]; responses come back buffered for envelope decoding.

use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use url::Url;

use super::HttpError;

/// A signed API request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    /// Endpoint URL, including the `sn` query for device reads
    pub url: Url,
    pub headers: HeaderMap,
    /// JSON body, only present for quota writes
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    #[must_use]
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Read request (device list, quota dump).
    #[must_use]
    pub fn get(url: Url) -> Self {
        Self::new(Method::GET, url)
    }

    /// Write request (quota set).
    #[must_use]
    pub fn put(url: Url) -> Self {
        Self::new(Method::PUT, url)
    }

    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Appends a header; repeated names keep every value.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }
}

/// Status and buffered body of an API reply.
///
/// The API reports most failures inside a 200 body, so the status alone
/// does not decide success.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub const fn new(status: StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// True for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Sends one request and buffers the reply.
///
/// [`ReqwestClient`](super::ReqwestClient) is the network implementation;
/// tests substitute a recording mock.
pub trait HttpClient: Send + Sync {
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request never produced a response:
    /// connection failure, timeout or an unusable URL.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}

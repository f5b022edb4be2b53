//! Production HTTP client implementation using reqwest.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// User agent sent with every request.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Production HTTP client using reqwest.
///
/// A thin wrapper around `reqwest::Client` that implements [`HttpClient`].
/// Timeouts and connection pooling are reqwest's defaults.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a client identifying itself as `ecoflow-ctl/<version>`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Setup`] if the TLS backend cannot be initialized.
    pub fn try_new() -> Result<Self, HttpError> {
        let inner = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| HttpError::Setup(Box::new(e)))?;
        Ok(Self { inner })
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        tracing::debug!(method = %req.method, path = req.url.path(), "Sending request");

        let mut builder = self
            .inner
            .request(req.method, req.url.as_str())
            .headers(req.headers);
        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else if e.is_builder() {
                HttpError::InvalidUrl(e.to_string())
            } else {
                HttpError::Connection(Box::new(e))
            }
        })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::Connection(Box::new(e)))?
            .to_vec();
        tracing::debug!(%status, bytes = body.len(), "Received response");

        Ok(HttpResponse::new(status, body))
    }
}

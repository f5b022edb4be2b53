//! Generic EcoFlow API response envelope.

use serde::Deserialize;
use serde_json::Value;

use super::ApiError;

/// `{ "code": "0", "message": "Success", "data": ... }`
///
/// `code` is a string in current responses but has been seen as a number, so
/// both forms are accepted.
#[derive(Debug, Deserialize)]
pub struct Response<T> {
    code: Value,

    #[serde(default)]
    message: Option<String>,

    data: Option<T>,
}

impl<T> Response<T> {
    fn is_success(&self) -> bool {
        match &self.code {
            Value::String(code) => code == "0",
            Value::Number(code) => code.as_i64() == Some(0),
            _ => false,
        }
    }

    /// Returns `data` on success, or the API error.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Remote`] when `code` is not zero.
    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        if self.is_success() {
            return Ok(self.data);
        }

        let code = match self.code {
            Value::String(code) => code,
            other => other.to_string(),
        };
        Err(ApiError::Remote {
            code,
            message: self.message.unwrap_or_default(),
        })
    }
}

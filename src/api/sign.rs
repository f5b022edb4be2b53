//! Request signing for the EcoFlow open API.
//!
//! Every request carries `accessKey`, `nonce`, `timestamp` and `sign` headers.
//! The signature is a lowercase hex HMAC-SHA256, keyed by the secret key, over
//! the canonical string:
//!
//! ```text
//! <k1>=<v1>&<k2>=<v2>&...&accessKey=<ak>&nonce=<nonce>&timestamp=<ms>
//! ```
//!
//! where the `k=v` pairs are the request parameters (query or JSON body)
//! flattened and sorted by key.

use hmac::{Hmac, Mac};
use serde_json::Value;
use sha2::Sha256;

use super::ApiError;

type HmacSha256 = Hmac<Sha256>;

/// Flattens a JSON value into sorted `(key, value)` pairs.
///
/// Nested object keys are joined with `.` and array elements are indexed as
/// `key[i]`. Strings are used verbatim, numbers and booleans in their JSON
/// text form. `null` leaves are skipped.
#[must_use]
pub fn flatten(value: &Value) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    flatten_into("", value, &mut pairs);
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    pairs
}

fn flatten_into(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(&path, child, out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(&format!("{prefix}[{index}]"), child, out);
            }
        }
        Value::Null => {}
        _ if prefix.is_empty() => {}
        Value::String(s) => out.push((prefix.to_string(), s.clone())),
        Value::Number(n) => out.push((prefix.to_string(), n.to_string())),
        Value::Bool(b) => out.push((prefix.to_string(), b.to_string())),
    }
}

/// Builds the string that gets signed.
#[must_use]
pub fn canonical_string(
    params: &[(String, String)],
    access_key: &str,
    nonce: &str,
    timestamp: &str,
) -> String {
    let auth = format!("accessKey={access_key}&nonce={nonce}&timestamp={timestamp}");
    if params.is_empty() {
        return auth;
    }

    let mut joined = params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");
    joined.push('&');
    joined.push_str(&auth);
    joined
}

/// Computes the lowercase hex HMAC-SHA256 of `message`.
///
/// # Errors
///
/// Returns [`ApiError::Signing`] if the key is rejected.
pub fn hmac_sha256_hex(secret_key: &str, message: &str) -> Result<String, ApiError> {
    let mut mac =
        HmacSha256::new_from_slice(secret_key.as_bytes()).map_err(|_| ApiError::Signing)?;
    mac.update(message.as_bytes());
    Ok(format!("{:x}", mac.finalize().into_bytes()))
}

//! Typed JSON round-trips.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::RecordResult;

/// Serialize `value` to a compact JSON string.
///
/// # Errors
///
/// Returns [`RecordError::Json`](crate::RecordError::Json) if `value` cannot
/// be represented as JSON (e.g. a map with non-string keys).
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> RecordResult<String> {
    Ok(serde_json::to_string(value)?)
}

/// Parse `json` into an instance of `T`, so the result carries `T`'s methods.
///
/// # Errors
///
/// Returns [`RecordError::Json`](crate::RecordError::Json) if `json` is
/// malformed or does not fit `T`.
pub fn from_json<T: DeserializeOwned>(json: &str) -> RecordResult<T> {
    Ok(serde_json::from_str(json)?)
}

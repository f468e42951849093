//! Request-body helpers shared by the create handlers.
//!
//! Bodies are read as raw bytes and parsed here rather than through axum's
//! `Json` extractor, so every malformed or empty body becomes a 400
//! `{"error": ...}` envelope instead of an extractor rejection.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Parse a JSON object body.
///
/// Returns `Ok(None)` when the body is empty: no bytes, only whitespace,
/// `null`, or `{}`.
pub fn parse_json_body<T: DeserializeOwned>(
  bytes: &[u8],
) -> Result<Option<T>, ApiError> {
  if bytes.iter().all(u8::is_ascii_whitespace) {
    return Ok(None);
  }

  let value: Value = serde_json::from_slice(bytes)
    .map_err(|e| ApiError::Validation(format!("invalid JSON body: {e}")))?;

  match &value {
    Value::Null => return Ok(None),
    Value::Object(map) if map.is_empty() => return Ok(None),
    Value::Object(_) => {}
    _ => {
      return Err(ApiError::Validation(
        "request body must be a JSON object".to_owned(),
      ));
    }
  }

  serde_json::from_value(value)
    .map(Some)
    .map_err(|e| ApiError::Validation(format!("invalid request body: {e}")))
}

/// A required string field counts as missing when absent, `null`, or `""`.
pub fn non_empty(field: Option<String>) -> Option<String> {
  field.filter(|s| !s.is_empty())
}

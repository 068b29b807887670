//! Response body decoding.

use serde_json::Value;
use tracing::trace;

use crate::error::DecodeError;
use crate::model::ResultEnvelope;

/// Decode a response body into a [`ResultEnvelope`].
///
/// Missing or `null` fields become zero values. The body must be a JSON
/// object; anything else fails as a whole, so a caller never sees a
/// partially populated envelope. The `modified` dates are not interpreted
/// here.
///
/// # Example
///
/// ```
/// use marvel_core::decode;
///
/// let envelope = decode(br#"{"code": 200, "data": {"count": 0, "results": []}}"#).unwrap();
/// assert!(envelope.results().is_empty());
/// assert!(decode(b"{\"code\": 200").is_err());
/// ```
pub fn decode(bytes: &[u8]) -> Result<ResultEnvelope, DecodeError> {
    let value: Value = serde_json::from_slice(bytes).map_err(DecodeError::Syntax)?;

    if !value.is_object() {
        return Err(DecodeError::NotAnObject {
            found: json_kind(&value),
        });
    }

    let envelope: ResultEnvelope = serde_json::from_value(value).map_err(DecodeError::Shape)?;
    trace!(
        count = envelope.data.count,
        total = envelope.data.total,
        "decoded envelope"
    );

    Ok(envelope)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

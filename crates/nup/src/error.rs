//! Error type for decoding and scanning updates.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NupError {
    /// The field's text was neither `null` nor a valid encoding of the
    /// payload type.
    #[error("decode type mismatch: {0}")]
    DecodeTypeMismatch(#[from] serde_json::Error),
    /// A dynamically typed source value could not be converted into the
    /// payload type.
    #[error("cannot scan {src} (type {}) into {dest}", json_kind(.src))]
    ScanTypeMismatch { src: Value, dest: &'static str },
}

/// JSON kind name of a value, used in scan error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scan_mismatch_message() {
        let err = NupError::ScanTypeMismatch {
            src: json!("abc"),
            dest: "i64",
        };
        assert_eq!(err.to_string(), r#"cannot scan "abc" (type string) into i64"#);
    }

    #[test]
    fn kinds() {
        assert_eq!(json_kind(&json!(null)), "null");
        assert_eq!(json_kind(&json!(true)), "boolean");
        assert_eq!(json_kind(&json!(1.5)), "number");
        assert_eq!(json_kind(&json!([])), "array");
        assert_eq!(json_kind(&json!({})), "object");
    }
}

//! Structure encoder error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarshalError {
    /// A value could not be encoded. `key` names the record field it came
    /// from, or is `None` when a non-record input was handed to the standard
    /// encoder.
    #[error("{}", encode_failure_message(.key, .source))]
    EncodeFailure {
        key: Option<String>,
        #[source]
        source: serde_json::Error,
    },
    #[error("decode type mismatch: {0}")]
    DecodeTypeMismatch(#[source] serde_json::Error),
}

impl MarshalError {
    /// Output key of the field that failed to encode, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            MarshalError::EncodeFailure { key, .. } => key.as_deref(),
            MarshalError::DecodeTypeMismatch(_) => None,
        }
    }

    /// Prefix the failing key with the key of the record field it sits in,
    /// giving a dotted path such as `outer.inner`.
    pub(crate) fn nested_under(self, outer: &str) -> Self {
        match self {
            MarshalError::EncodeFailure { key, source } => MarshalError::EncodeFailure {
                key: Some(match key {
                    Some(key) => format!("{outer}.{key}"),
                    None => outer.to_owned(),
                }),
                source,
            },
            other => other,
        }
    }
}

fn encode_failure_message(key: &Option<String>, source: &serde_json::Error) -> String {
    match key {
        Some(key) => format!("failed to encode field `{key}`: {source}"),
        None => format!("failed to encode value: {source}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(key: Option<&str>) -> MarshalError {
        let source = serde_json::from_str::<i32>("x").unwrap_err();
        MarshalError::EncodeFailure {
            key: key.map(str::to_owned),
            source,
        }
    }

    #[test]
    fn nested_keys_form_a_path() {
        let err = failure(Some("inner")).nested_under("outer");
        assert_eq!(err.key(), Some("outer.inner"));
        let err = err.nested_under("top");
        assert_eq!(err.key(), Some("top.outer.inner"));
        assert_eq!(failure(None).nested_under("outer").key(), Some("outer"));
    }

    #[test]
    fn messages() {
        assert!(failure(Some("k"))
            .to_string()
            .starts_with("failed to encode field `k`: "));
        assert!(failure(None).to_string().starts_with("failed to encode value: "));
    }
}

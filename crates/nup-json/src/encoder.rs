//! Structure encoder.
//!
//! Writes records the way the standard encoder writes structs, except for
//! update fields: a no-op update is left out, a removal is written as `null`,
//! and a set is written as its payload, whatever the field's `omit_empty`
//! setting says.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument, trace};

use crate::error::MarshalError;
use crate::field::FieldValue;
use crate::marshaller::ToJson;
use crate::record::{Input, Record};

/// Encode `input` as JSON. Either the complete text or an error is returned,
/// never a partial buffer.
#[instrument(level = "trace", skip_all)]
pub fn marshal_json(input: Input<'_>) -> Result<Vec<u8>, MarshalError> {
    let mut out = Vec::new();
    match input {
        Input::Null => out.extend_from_slice(b"null"),
        Input::Value(value) => value
            .write_json(&mut out)
            .map_err(|source| MarshalError::EncodeFailure { key: None, source })?,
        Input::Record(record) => encode_record(record, &mut out)?,
    }
    Ok(out)
}

pub fn marshal_record<R: Record>(record: &R) -> Result<Vec<u8>, MarshalError> {
    marshal_json(Input::Record(record))
}

/// Encode a non-record value; equivalent to the standard encoder.
pub fn marshal_value<T: Serialize>(value: &T) -> Result<Vec<u8>, MarshalError> {
    marshal_json(Input::Value(value))
}

/// Decode JSON with the standard decoder. Update fields decode themselves;
/// record types must default them so absent keys stay no-ops.
pub fn unmarshal_json<T: DeserializeOwned>(data: &[u8]) -> Result<T, MarshalError> {
    serde_json::from_slice(data).map_err(MarshalError::DecodeTypeMismatch)
}

/// What a written field holds.
#[derive(Clone, Copy)]
pub(crate) enum Entry<'a> {
    Value(&'a dyn ToJson),
    Null,
    Record(&'a dyn Record),
}

/// The fields of `record` that are written, in order, with their keys.
pub(crate) fn entries<R: Record + ?Sized>(record: &R) -> Vec<(&str, Entry<'_>)> {
    let mut out = Vec::new();
    for field in record.fields() {
        if let Some(reason) = field.skip_reason() {
            trace!(field = field.name(), reason, "skipping field");
            continue;
        }
        let entry = match field.field_value() {
            FieldValue::Plain { value, .. } => Entry::Value(value),
            FieldValue::Record(inner) => Entry::Record(inner),
            FieldValue::Update(update) => {
                if !update.is_change() {
                    trace!(field = field.name(), "skipping no-op update");
                    continue;
                }
                update.raw_value().map_or(Entry::Null, Entry::Value)
            }
        };
        out.push((field.key(), entry));
    }
    out
}

fn encode_record(record: &dyn Record, buf: &mut Vec<u8>) -> Result<(), MarshalError> {
    buf.push(b'{');
    for (i, (key, entry)) in entries(record).into_iter().enumerate() {
        if i > 0 {
            buf.push(b',');
        }
        let encode_failure = |source: serde_json::Error| {
            debug!(key, error = %source, "field failed to encode");
            MarshalError::EncodeFailure {
                key: Some(key.to_owned()),
                source,
            }
        };
        key.write_json(buf).map_err(encode_failure)?;
        buf.push(b':');
        match entry {
            Entry::Value(value) => value.write_json(buf).map_err(encode_failure)?,
            Entry::Null => buf.extend_from_slice(b"null"),
            Entry::Record(inner) => {
                encode_record(inner, buf).map_err(|err| err.nested_under(key))?
            }
        }
    }
    buf.push(b'}');
    Ok(())
}

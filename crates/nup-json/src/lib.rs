//! JSON structure encoder for records with nup update fields.
//!
//! [`marshal_json`] writes a [`Record`] the way the standard encoder writes a
//! struct (declaration order, renamed keys, `-` and `omitempty` tags) but
//! recognizes update-like fields through [`UpdateMarshaller`]: no-ops are left
//! out, removals become `null`, and sets are always written. Non-record input
//! goes straight to the standard encoder.
//!
//! Records nest in two ways: [`Field::record`] walks an inner record directly,
//! and [`serialize_record`] / [`RecordJson`] run the same walk from any
//! `Serialize` context, so a record in a `Vec` or behind [`Field::nested`]
//! keeps its no-op fields out of the output.
//!
//! Decoding needs no special support: [`nup::Update`] and
//! [`nup::SliceUpdate`] deserialize themselves, so [`unmarshal_json`] is the
//! standard decoder with this crate's error type.

mod empty;
mod encoder;
mod error;
mod field;
mod marshaller;
mod record;
mod record_json;

pub use empty::EmptyValue;
pub use encoder::{marshal_json, marshal_record, marshal_value, unmarshal_json};
pub use error::MarshalError;
pub use field::{Field, FieldValue};
pub use marshaller::{ToJson, UpdateMarshaller};
pub use record::{Input, Record};
pub use record_json::{serialize_record, RecordJson};

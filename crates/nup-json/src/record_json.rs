//! Serde bridge for records.
//!
//! A record reached through `Serialize` (a `Vec` of records, a map value, a
//! field written with [`Field::nested`](crate::Field::nested)) would
//! otherwise be written by its derived impl, turning no-op updates into
//! `null`. Routing its `Serialize` through [`serialize_record`] keeps the
//! field walk in force at any depth:
//!
//! ```ignore
//! impl Serialize for PersonUpdate {
//!     fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
//!         nup_json::serialize_record(self, serializer)
//!     }
//! }
//! ```

use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};

use crate::encoder::{entries, Entry};
use crate::marshaller::ToJson;
use crate::record::Record;

/// Serialize `record` as a map of its written fields, with the same skip and
/// update rules as [`marshal_json`](crate::marshal_json).
pub fn serialize_record<R, S>(record: &R, serializer: S) -> Result<S::Ok, S::Error>
where
    R: Record + ?Sized,
    S: Serializer,
{
    let written = entries(record);
    let mut map = serializer.serialize_map(Some(written.len()))?;
    for (key, entry) in written {
        match entry {
            Entry::Value(value) => map.serialize_entry(key, &JsonValue(value))?,
            Entry::Null => map.serialize_entry(key, &Option::<()>::None)?,
            Entry::Record(inner) => map.serialize_entry(key, &RecordJson(inner))?,
        }
    }
    map.end()
}

/// A borrowed record whose `Serialize` runs the field walk.
pub struct RecordJson<'a, R: ?Sized>(pub &'a R);

impl<R: Record + ?Sized> Serialize for RecordJson<'_, R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_record(self.0, serializer)
    }
}

struct JsonValue<'a>(&'a dyn ToJson);

impl Serialize for JsonValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0
            .to_json_value()
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

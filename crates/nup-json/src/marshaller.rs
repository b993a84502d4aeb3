//! The capability the structure encoder uses to recognize update fields, and
//! the bridge from record fields to the standard encoder.

use nup::{SliceUpdate, Update};
use serde::Serialize;
use serde_json::Value;

/// Object-safe access to the standard JSON encoder.
///
/// Implemented for every `Serialize` type, so record fields can hold
/// heterogeneous values behind `&dyn ToJson`.
pub trait ToJson {
    /// Append the standard JSON encoding of `self` to `out`.
    fn write_json(&self, out: &mut Vec<u8>) -> Result<(), serde_json::Error>;

    /// The same encoding as a `Value`, for serializers other than the
    /// byte writer. Key order is kept (`preserve_order`).
    fn to_json_value(&self) -> Result<Value, serde_json::Error>;
}

impl<T: Serialize + ?Sized> ToJson for T {
    fn write_json(&self, out: &mut Vec<u8>) -> Result<(), serde_json::Error> {
        serde_json::to_writer(out, self)
    }

    fn to_json_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// Capability of an update-like field type.
///
/// The structure encoder omits a field whose `is_change` is false, and
/// otherwise writes `raw_value`, with `None` written as `null`. Any type can
/// implement this to be encoded the way [`Update`] and [`SliceUpdate`] are.
pub trait UpdateMarshaller {
    /// Whether the field should be written at all.
    fn is_change(&self) -> bool;

    /// The value to write, or `None` for the null marker.
    fn raw_value(&self) -> Option<&dyn ToJson>;
}

impl<T: Serialize> UpdateMarshaller for Update<T> {
    fn is_change(&self) -> bool {
        Update::is_change(self)
    }

    fn raw_value(&self) -> Option<&dyn ToJson> {
        self.as_set().map(|value| value as &dyn ToJson)
    }
}

impl<T: Serialize> UpdateMarshaller for SliceUpdate<T> {
    fn is_change(&self) -> bool {
        SliceUpdate::is_change(self)
    }

    fn raw_value(&self) -> Option<&dyn ToJson> {
        match self {
            SliceUpdate::Set(values) => Some(values as &dyn ToJson),
            SliceUpdate::Noop | SliceUpdate::Remove => None,
        }
    }
}

impl<U: UpdateMarshaller + ?Sized> UpdateMarshaller for &U {
    fn is_change(&self) -> bool {
        (**self).is_change()
    }

    fn raw_value(&self) -> Option<&dyn ToJson> {
        (**self).raw_value()
    }
}

//! Updates to value fields.

use std::any::type_name;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::NupError;
use crate::operation::Operation;

/// An update to a value field. It may set, remove, or have no effect on the
/// field's value. For list-valued fields see [`SliceUpdate`](crate::SliceUpdate).
///
/// The default value is [`Update::Noop`], so a defaulted record field does
/// nothing. `Noop` and `Remove` carry no payload, which makes two no-ops (or
/// two removals) equal no matter how they were built.
///
/// On the wire a no-op is an absent key, a removal is `null`, and a set is the
/// payload's own encoding (even when the payload is `T`'s zero value).
///
/// A payload that itself encodes as `null`, such as `Update<Option<X>>` set
/// to `None` or `Update<()>`, cannot be told apart from a removal: it decodes
/// back as [`Update::Remove`]. Use a payload type without a `null` encoding
/// where the two must stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Update<T> {
    /// Leave the field unchanged.
    Noop,
    /// Clear the field to its zero value.
    Remove,
    /// Replace the field's value.
    Set(T),
}

impl<T> Default for Update<T> {
    fn default() -> Self {
        Update::Noop
    }
}

impl<T> Update<T> {
    /// An update that does nothing. Equivalent to `Update::default()`.
    pub fn noop() -> Self {
        Update::Noop
    }

    /// An update that removes a field (sets it to the zero value).
    pub fn remove() -> Self {
        Update::Remove
    }

    /// An update that sets a field to `value`.
    pub fn set(value: T) -> Self {
        Update::Set(value)
    }

    /// Removes when `value` is `None`, otherwise sets to the contained value.
    pub fn remove_or_set(value: Option<T>) -> Self {
        match value {
            None => Update::Remove,
            Some(value) => Update::Set(value),
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Update::Noop => Operation::Noop,
            Update::Remove => Operation::Remove,
            Update::Set(_) => Operation::Set,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.operation() == Operation::Noop
    }

    pub fn is_remove(&self) -> bool {
        self.operation() == Operation::Remove
    }

    pub fn is_set(&self) -> bool {
        self.operation() == Operation::Set
    }

    /// Whether the update is a set or a removal, i.e. anything but a no-op.
    pub fn is_change(&self) -> bool {
        self.operation() != Operation::Noop
    }

    /// Borrow the payload of a set operation.
    pub fn as_set(&self) -> Option<&T> {
        match self {
            Update::Set(value) => Some(value),
            _ => None,
        }
    }

    /// A copy of the payload if this is a set operation, else `None`.
    pub fn value_or_none(&self) -> Option<T>
    where
        T: Clone,
    {
        self.as_set().cloned()
    }

    /// Apply the update to an optional value: a no-op passes `current`
    /// through, a removal yields `None`, and a set yields a copy of the
    /// payload.
    pub fn apply_option(&self, current: Option<T>) -> Option<T>
    where
        T: Clone,
    {
        match self {
            Update::Noop => current,
            Update::Remove => None,
            Update::Set(value) => Some(value.clone()),
        }
    }

    pub fn is_set_such_that(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Update::Set(value) => predicate(value),
            _ => false,
        }
    }
}

impl<T: Clone + Default> Update<T> {
    /// The payload together with the operation. Unless the operation is
    /// [`Operation::Set`] the value is `T::default()` and means nothing.
    pub fn value_operation(&self) -> (T, Operation) {
        (self.value_or_none().unwrap_or_default(), self.operation())
    }

    /// The payload and whether this is a set operation. Unless the flag is
    /// `true` the value is `T::default()`.
    pub fn value(&self) -> (T, bool) {
        (self.value_or_none().unwrap_or_default(), self.is_set())
    }

    /// Apply the update to `current`: a no-op returns it unchanged, a removal
    /// returns `T::default()`, and a set returns the payload.
    pub fn apply(&self, current: T) -> T {
        match self {
            Update::Noop => current,
            Update::Remove => T::default(),
            Update::Set(value) => value.clone(),
        }
    }
}

impl<T: PartialEq> Update<T> {
    pub fn is_set_to(&self, value: &T) -> bool {
        self.as_set() == Some(value)
    }

    /// Like [`Update::diff`] for an optional current value. Two absent values
    /// are equal.
    pub fn diff_option(self, current: Option<&T>) -> Self {
        let unchanged = match (&self, current) {
            (Update::Noop, _) => true,
            (Update::Remove, current) => current.is_none(),
            (Update::Set(value), Some(current)) => value == current,
            (Update::Set(_), None) => false,
        };
        if unchanged {
            Update::Noop
        } else {
            self
        }
    }
}

impl<T: PartialEq + Default> Update<T> {
    /// Returns a no-op if applying this update to `current` would leave it
    /// unchanged, otherwise returns the update itself.
    pub fn diff(self, current: &T) -> Self {
        let unchanged = match &self {
            Update::Noop => true,
            Update::Remove => *current == T::default(),
            Update::Set(value) => value == current,
        };
        if unchanged {
            Update::Noop
        } else {
            self
        }
    }
}

impl<T: DeserializeOwned> Update<T> {
    /// Decode a single field's JSON text. `null` is a removal; anything else
    /// is decoded into `T` and becomes a set.
    pub fn from_json(data: &[u8]) -> Result<Self, NupError> {
        if data.trim_ascii() == b"null" {
            return Ok(Update::Remove);
        }
        Ok(Update::Set(serde_json::from_slice(data)?))
    }

    /// Lift a dynamically typed source value into an update. `Null` is a
    /// removal; a value convertible into `T` is a set.
    pub fn scan(src: Value) -> Result<Self, NupError> {
        if src.is_null() {
            return Ok(Update::Remove);
        }
        match T::deserialize(&src) {
            Ok(value) => Ok(Update::Set(value)),
            Err(_) => Err(NupError::ScanTypeMismatch {
                src,
                dest: type_name::<T>(),
            }),
        }
    }
}

impl<T> From<Option<T>> for Update<T> {
    fn from(value: Option<T>) -> Self {
        Update::remove_or_set(value)
    }
}

/// `"<no-op>"`, `"<remove>"`, or the payload's own display.
impl<T: fmt::Display> fmt::Display for Update<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Update::Noop => f.write_str("<no-op>"),
            Update::Remove => f.write_str("<remove>"),
            Update::Set(value) => fmt::Display::fmt(value, f),
        }
    }
}

// Serialized like `Option<T>`. Pair with
// `#[serde(default, skip_serializing_if = "Update::is_noop")]` so no-ops stay
// off the wire and absent keys decode as no-ops.
impl<T: Serialize> Serialize for Update<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Update::Set(value) => value.serialize(serializer),
            Update::Noop | Update::Remove => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Update<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Update::remove_or_set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_is_noop() {
        let update: Update<i32> = Update::default();
        assert!(update.is_noop());
        assert!(!update.is_change());
        assert_eq!(update, Update::noop());
    }

    #[test]
    fn from_json_null_with_whitespace() {
        let update = Update::<i32>::from_json(b" null\n").unwrap();
        assert_eq!(update, Update::Remove);
    }

    #[test]
    fn from_json_zero_value_is_set() {
        assert_eq!(Update::<i32>::from_json(b"0").unwrap(), Update::Set(0));
        assert_eq!(
            Update::<String>::from_json(br#""""#).unwrap(),
            Update::Set(String::new())
        );
    }

    #[test]
    fn from_json_type_mismatch() {
        let err = Update::<i32>::from_json(br#""five""#).unwrap_err();
        assert!(matches!(err, NupError::DecodeTypeMismatch(_)));
    }

    #[test]
    fn scan_matrix() {
        assert_eq!(Update::<i64>::scan(json!(null)).unwrap(), Update::Remove);
        assert_eq!(Update::<i64>::scan(json!(7)).unwrap(), Update::Set(7));
        let err = Update::<i64>::scan(json!("7")).unwrap_err();
        assert_eq!(err.to_string(), r#"cannot scan "7" (type string) into i64"#);
    }

    #[test]
    fn display() {
        assert_eq!(Update::<i32>::noop().to_string(), "<no-op>");
        assert_eq!(Update::<i32>::remove().to_string(), "<remove>");
        assert_eq!(Update::set(42).to_string(), "42");
        assert_eq!(Update::set("hi").to_string(), "hi");
    }
}

//! Updates to list-valued fields.

use std::any::type_name;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::NupError;
use crate::operation::Operation;

/// An update to a list-valued field. It may set, remove, or have no effect on
/// the field's value. For value fields see [`Update`](crate::Update).
///
/// Kept apart from `Update<Vec<T>>` because list updates compare element-wise
/// and treat an empty list as the removed state: removing a list yields an
/// empty `Vec`, and a removal is a no-op against a list that is already
/// empty. Setting to an empty list is still a set and encodes as `[]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SliceUpdate<T> {
    /// Leave the field unchanged.
    Noop,
    /// Clear the field.
    Remove,
    /// Replace the field's elements.
    Set(Vec<T>),
}

impl<T> Default for SliceUpdate<T> {
    fn default() -> Self {
        SliceUpdate::Noop
    }
}

impl<T> SliceUpdate<T> {
    /// A slice update that does nothing. Equivalent to
    /// `SliceUpdate::default()`.
    pub fn noop() -> Self {
        SliceUpdate::Noop
    }

    /// A slice update that removes a field.
    pub fn remove() -> Self {
        SliceUpdate::Remove
    }

    /// A slice update that sets a field to `value`. The vector is stored as
    /// given.
    pub fn set(value: Vec<T>) -> Self {
        SliceUpdate::Set(value)
    }

    /// Removes when `value` is `None`, otherwise sets to the contained
    /// vector. `Some(vec![])` is a set to an empty list, not a removal.
    pub fn remove_or_set(value: Option<Vec<T>>) -> Self {
        match value {
            None => SliceUpdate::Remove,
            Some(value) => SliceUpdate::Set(value),
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            SliceUpdate::Noop => Operation::Noop,
            SliceUpdate::Remove => Operation::Remove,
            SliceUpdate::Set(_) => Operation::Set,
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

    /// Borrow the elements of a set operation.
    pub fn as_set(&self) -> Option<&[T]> {
        match self {
            SliceUpdate::Set(value) => Some(value.as_slice()),
            _ => None,
        }
    }

    pub fn is_set_such_that(&self, predicate: impl FnOnce(&[T]) -> bool) -> bool {
        self.as_set().is_some_and(predicate)
    }
}

impl<T: Clone> SliceUpdate<T> {
    /// A copy of the elements if this is a set operation, else `None`.
    pub fn value_or_none(&self) -> Option<Vec<T>> {
        self.as_set().map(<[T]>::to_vec)
    }

    /// A copy of the elements together with the operation. Unless the
    /// operation is [`Operation::Set`] the vector is empty.
    pub fn value_operation(&self) -> (Vec<T>, Operation) {
        (self.value_or_none().unwrap_or_default(), self.operation())
    }

    /// A copy of the elements and whether this is a set operation.
    pub fn value(&self) -> (Vec<T>, bool) {
        (self.value_or_none().unwrap_or_default(), self.is_set())
    }

    /// Apply the update to `current`: a no-op returns it unchanged, a removal
    /// returns an empty vector, and a set returns a copy of the elements.
    pub fn apply(&self, current: Vec<T>) -> Vec<T> {
        match self {
            SliceUpdate::Noop => current,
            SliceUpdate::Remove => Vec::new(),
            SliceUpdate::Set(value) => value.clone(),
        }
    }

    /// Apply the update to an optional list: a no-op passes `current`
    /// through, a removal yields `None`, and a set yields a copy of the
    /// elements.
    pub fn apply_option(&self, current: Option<Vec<T>>) -> Option<Vec<T>> {
        match self {
            SliceUpdate::Noop => current,
            SliceUpdate::Remove => None,
            SliceUpdate::Set(value) => Some(value.clone()),
        }
    }
}

impl<T: PartialEq> SliceUpdate<T> {
    /// Whether this update sets to a list element-wise equal to `value`.
    pub fn is_set_to(&self, value: &[T]) -> bool {
        self.as_set() == Some(value)
    }

    /// Returns a no-op if applying this update to `current` would leave it
    /// element-wise unchanged, otherwise returns the update itself.
    pub fn diff(self, current: &[T]) -> Self {
        let unchanged = match &self {
            SliceUpdate::Noop => true,
            SliceUpdate::Remove => current.is_empty(),
            SliceUpdate::Set(value) => value.as_slice() == current,
        };
        if unchanged {
            SliceUpdate::Noop
        } else {
            self
        }
    }

    /// Like [`SliceUpdate::diff`] for an optional current list. Two absent
    /// lists are equal.
    pub fn diff_option(self, current: Option<&[T]>) -> Self {
        let unchanged = match (&self, current) {
            (SliceUpdate::Noop, _) => true,
            (SliceUpdate::Remove, current) => current.is_none(),
            (SliceUpdate::Set(value), Some(current)) => value.as_slice() == current,
            (SliceUpdate::Set(_), None) => false,
        };
        if unchanged {
            SliceUpdate::Noop
        } else {
            self
        }
    }
}

impl<T: DeserializeOwned> SliceUpdate<T> {
    /// Decode a single field's JSON text. `null` is a removal; an array is
    /// decoded element by element and becomes a set (`[]` included).
    pub fn from_json(data: &[u8]) -> Result<Self, NupError> {
        if data.trim_ascii() == b"null" {
            return Ok(SliceUpdate::Remove);
        }
        Ok(SliceUpdate::Set(serde_json::from_slice(data)?))
    }

    /// Lift a dynamically typed source value into a slice update. `Null` is a
    /// removal; an array convertible into `Vec<T>` is a set.
    pub fn scan(src: Value) -> Result<Self, NupError> {
        if src.is_null() {
            return Ok(SliceUpdate::Remove);
        }
        match Vec::<T>::deserialize(&src) {
            Ok(value) => Ok(SliceUpdate::Set(value)),
            Err(_) => Err(NupError::ScanTypeMismatch {
                src,
                dest: type_name::<Vec<T>>(),
            }),
        }
    }
}

impl<T> From<Option<Vec<T>>> for SliceUpdate<T> {
    fn from(value: Option<Vec<T>>) -> Self {
        SliceUpdate::remove_or_set(value)
    }
}

/// `"<no-op>"`, `"<remove>"`, or the elements space-separated in brackets,
/// e.g. `[1 2]`.
impl<T: fmt::Display> fmt::Display for SliceUpdate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = match self {
            SliceUpdate::Noop => return f.write_str("<no-op>"),
            SliceUpdate::Remove => return f.write_str("<remove>"),
            SliceUpdate::Set(values) => values,
        };
        f.write_str("[")?;
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(value, f)?;
        }
        f.write_str("]")
    }
}

impl<T: Serialize> Serialize for SliceUpdate<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SliceUpdate::Set(values) => values.serialize(serializer),
            SliceUpdate::Noop | SliceUpdate::Remove => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SliceUpdate<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<Vec<T>>::deserialize(deserializer).map(SliceUpdate::remove_or_set)
    }
}

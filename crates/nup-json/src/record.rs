//! Records and encoder input.

use crate::field::Field;
use crate::marshaller::ToJson;

/// A structure the encoder writes field by field.
///
/// `fields` lists every field in declaration order, including the ones that
/// are never written (unexported, omitted, embedded); their attributes decide
/// what the encoder does with them.
///
/// ```ignore
/// struct PersonUpdate {
///     id: i64,
///     name: Update<String>,
///     flag: Update<bool>,
/// }
///
/// impl Record for PersonUpdate {
///     fn fields(&self) -> Vec<Field<'_>> {
///         vec![
///             Field::value("ID", &self.id).tag("-"),
///             Field::update("Name", &self.name).tag("name"),
///             Field::update("Flag", &self.flag).tag("flag"),
///         ]
///     }
/// }
/// ```
pub trait Record {
    fn fields(&self) -> Vec<Field<'_>>;
}

impl<R: Record + ?Sized> Record for &R {
    fn fields(&self) -> Vec<Field<'_>> {
        (**self).fields()
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn fields(&self) -> Vec<Field<'_>> {
        (**self).fields()
    }
}

/// What to encode.
#[derive(Clone, Copy)]
pub enum Input<'a> {
    /// Encodes as `null`.
    Null,
    /// Any value, handed wholly to the standard encoder.
    Value(&'a dyn ToJson),
    /// A record, walked field by field.
    Record(&'a dyn Record),
}

impl<'a, R: Record> From<&'a R> for Input<'a> {
    fn from(record: &'a R) -> Self {
        Input::Record(record)
    }
}

//! Field descriptions handed to the structure encoder by a [`Record`].

use serde::Serialize;

use crate::empty::EmptyValue;
use crate::marshaller::{ToJson, UpdateMarshaller};
use crate::record::Record;

/// The value side of a field.
#[derive(Clone, Copy)]
pub enum FieldValue<'a> {
    /// An ordinary value, written with the standard encoder. `empty` is the
    /// value's emptiness, consulted only for `omit_empty` fields.
    Plain { value: &'a dyn ToJson, empty: bool },
    /// An update-like value, written according to its operation.
    Update(&'a dyn UpdateMarshaller),
    /// A nested record, walked with the same rules as the outer one. Never
    /// empty.
    Record(&'a dyn Record),
}

/// One field of a record: its declared name, its value, and the attributes
/// that decide whether and under which key it is written.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    name: &'a str,
    value: FieldValue<'a>,
    rename: Option<&'a str>,
    omit_empty: bool,
    omitted: bool,
    embedded: bool,
    exported: bool,
}

impl<'a> Field<'a> {
    fn new(name: &'a str, value: FieldValue<'a>) -> Self {
        Self {
            name,
            value,
            rename: None,
            omit_empty: false,
            omitted: false,
            embedded: false,
            exported: true,
        }
    }

    /// An ordinary field whose emptiness is known.
    pub fn value<T: Serialize + EmptyValue>(name: &'a str, value: &'a T) -> Self {
        Self::new(
            name,
            FieldValue::Plain {
                value,
                empty: value.is_empty_value(),
            },
        )
    }

    /// An ordinary field holding a record or other composite that is never
    /// empty.
    pub fn nested<T: Serialize>(name: &'a str, value: &'a T) -> Self {
        Self::new(name, FieldValue::Plain { value, empty: false })
    }

    /// A field holding another record. Its update fields keep their no-op
    /// omission instead of going through the record's `Serialize`.
    pub fn record<R: Record>(name: &'a str, value: &'a R) -> Self {
        Self::new(name, FieldValue::Record(value))
    }

    /// An update-like field.
    pub fn update<U: UpdateMarshaller>(name: &'a str, value: &'a U) -> Self {
        Self::new(name, FieldValue::Update(value))
    }

    /// Write the field under `key` instead of its name. An empty key keeps
    /// the name.
    pub fn rename(mut self, key: &'a str) -> Self {
        self.rename = Some(key);
        self
    }

    /// Skip an ordinary field when its value is empty. Update fields ignore
    /// this; they are skipped exactly when they are no-ops.
    pub fn omit_empty(mut self) -> Self {
        self.omit_empty = true;
        self
    }

    /// Never write this field.
    pub fn omitted(mut self) -> Self {
        self.omitted = true;
        self
    }

    /// Mark the field as embedded. Embedded fields are not flattened into the
    /// record; they are skipped.
    pub fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    /// Mark the field as having no public name. Such fields are skipped.
    pub fn unexported(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Apply a tag of the form `name,opt,...`.
    ///
    /// - `""`: no change.
    /// - `"-"`: never write the field.
    /// - `"name"`: write under `name`, as [`Field::rename`]; an empty name
    ///   (`","`, `",omitempty"`) leaves the key as it was, and `"-,"` writes
    ///   under the key `-`.
    /// - `omitempty` after the first comma: see [`Field::omit_empty`]. Other
    ///   options are ignored.
    pub fn tag(mut self, tag: &'a str) -> Self {
        match tag {
            "" => {}
            "-" => self.omitted = true,
            _ => {
                let mut opts = tag.split(',');
                if let Some(key) = opts.next().filter(|key| !key.is_empty()) {
                    self.rename = Some(key);
                }
                if opts.any(|opt| opt == "omitempty") {
                    self.omit_empty = true;
                }
            }
        }
        self
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The key this field is written under.
    pub fn key(&self) -> &'a str {
        match self.rename {
            Some(key) if !key.is_empty() => key,
            _ => self.name,
        }
    }

    pub fn field_value(&self) -> FieldValue<'a> {
        self.value
    }

    /// Why the field is left out regardless of its update state, if it is.
    pub(crate) fn skip_reason(&self) -> Option<&'static str> {
        if self.embedded {
            return Some("embedded");
        }
        if !self.exported {
            return Some("unexported");
        }
        if self.omitted {
            return Some("omitted");
        }
        match self.value {
            FieldValue::Plain { empty: true, .. } if self.omit_empty => Some("empty"),
            _ => None,
        }
    }
}

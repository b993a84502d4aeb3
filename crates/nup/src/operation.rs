//! The operation an update performs.

use std::fmt;

/// Operation performed by an [`Update`](crate::Update) or
/// [`SliceUpdate`](crate::SliceUpdate).
///
/// `Noop`, `Remove` and `Set` are the only values. `Noop` is the default, so a
/// defaulted update field does nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Operation {
    /// The update leaves the field unchanged.
    #[default]
    Noop = 0,
    /// The update clears the field to its zero value.
    Remove = 1,
    /// The update replaces the field's value.
    Set = 2,
}

impl Operation {
    /// Display name: `"no-op"`, `"remove"` or `"set"`.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Noop => "no-op",
            Operation::Remove => "remove",
            Operation::Set => "set",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(Operation::Noop.name(), "no-op");
        assert_eq!(Operation::Remove.name(), "remove");
        assert_eq!(Operation::Set.name(), "set");
    }

    #[test]
    fn display_matches_name() {
        for op in [Operation::Noop, Operation::Remove, Operation::Set] {
            assert_eq!(op.to_string(), op.name());
        }
    }

    #[test]
    fn default_is_noop() {
        assert_eq!(Operation::default(), Operation::Noop);
        assert_eq!(Operation::Noop as u8, 0);
        assert_eq!(Operation::Set as u8, 2);
    }
}

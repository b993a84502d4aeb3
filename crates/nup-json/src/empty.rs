//! The "empty value" rule behind `omit_empty` fields.
//!
//! A value is empty when it is `false`, numeric zero, a zero-length string,
//! sequence, map or set, or an absent optional. Records and smart pointers
//! are never empty.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use serde_json::Value;

pub trait EmptyValue {
    fn is_empty_value(&self) -> bool;
}

macro_rules! impl_empty_for_integers {
    ($($t:ty),* $(,)?) => {
        $(
            impl EmptyValue for $t {
                fn is_empty_value(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_empty_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl EmptyValue for f32 {
    fn is_empty_value(&self) -> bool {
        *self == 0.0
    }
}

impl EmptyValue for f64 {
    fn is_empty_value(&self) -> bool {
        *self == 0.0
    }
}

impl EmptyValue for bool {
    fn is_empty_value(&self) -> bool {
        !*self
    }
}

impl EmptyValue for str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl EmptyValue for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> EmptyValue for [T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T, const N: usize> EmptyValue for [T; N] {
    fn is_empty_value(&self) -> bool {
        N == 0
    }
}

impl<T> EmptyValue for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> EmptyValue for VecDeque<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> EmptyValue for HashMap<K, V, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> EmptyValue for BTreeMap<K, V> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> EmptyValue for HashSet<T, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> EmptyValue for BTreeSet<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl EmptyValue for serde_json::Map<String, Value> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

// Optionals play the part of nillable pointers: only `None` is empty.
impl<T> EmptyValue for Option<T> {
    fn is_empty_value(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> EmptyValue for Box<T> {
    fn is_empty_value(&self) -> bool {
        false
    }
}

impl<T: ?Sized> EmptyValue for Rc<T> {
    fn is_empty_value(&self) -> bool {
        false
    }
}

impl<T: ?Sized> EmptyValue for Arc<T> {
    fn is_empty_value(&self) -> bool {
        false
    }
}

impl<T: EmptyValue + ?Sized> EmptyValue for &T {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl EmptyValue for Value {
    fn is_empty_value(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !*b,
            Value::Number(n) => n.as_f64().is_some_and(|v| v == 0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
        }
    }
}

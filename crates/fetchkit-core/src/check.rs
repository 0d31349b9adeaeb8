//! Emptiness and null checks.
//!
//! `Emptiness` gives one predicate over the types the helpers are used with;
//! numbers are deliberately never empty, and `None` defers to nothing while
//! `Some(v)` defers to `v`.

use std::collections::{BTreeMap, HashMap};

pub trait Emptiness {
    fn is_empty_value(&self) -> bool;
}

impl Emptiness for str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Emptiness for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for [T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Emptiness for HashMap<K, V, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Emptiness for BTreeMap<K, V> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Emptiness> Emptiness for Option<T> {
    fn is_empty_value(&self) -> bool {
        match self {
            None => true,
            Some(v) => v.is_empty_value(),
        }
    }
}

/// True for `None`, empty strings, and empty collections.
pub fn is_empty<T: Emptiness + ?Sized>(value: &T) -> bool {
    value.is_empty_value()
}

/// True when the value is absent.
pub fn is_null<T>(value: Option<&T>) -> bool {
    value.is_none()
}

/// Null check for optional strings: absent and `""` both count as null.
pub fn is_null_str(value: Option<&str>) -> bool {
    value.map_or(true, |s| s.is_empty())
}

//! Property access for record-like values (JSON objects and string maps).

use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// A value whose properties can be looked up by name.
pub trait Record {
    type Value;

    fn get_property(&self, key: &str) -> Option<&Self::Value>;
}

/// A record whose own properties can be enumerated and assigned.
pub trait RecordMut: Record {
    /// Own properties in enumeration order
    fn properties(&self) -> impl Iterator<Item = (&str, &Self::Value)>;

    fn set_property(&mut self, key: &str, value: Self::Value);

    fn has_property(&self, key: &str) -> bool {
        self.get_property(key).is_some()
    }
}

impl Record for Value {
    type Value = Value;

    /// Looks up a key when the value is an object; any other shape has no
    /// properties.
    fn get_property(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|object| object.get(key))
    }
}

impl Record for Map<String, Value> {
    type Value = Value;

    fn get_property(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

impl RecordMut for Map<String, Value> {
    fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.iter().map(|(key, value)| (key.as_str(), value))
    }

    fn set_property(&mut self, key: &str, value: Value) {
        self.insert(key.to_string(), value);
    }

    fn has_property(&self, key: &str) -> bool {
        self.contains_key(key)
    }
}

impl<V> Record for BTreeMap<String, V> {
    type Value = V;

    fn get_property(&self, key: &str) -> Option<&V> {
        self.get(key)
    }
}

impl<V> RecordMut for BTreeMap<String, V> {
    fn properties(&self) -> impl Iterator<Item = (&str, &V)> {
        self.iter().map(|(key, value)| (key.as_str(), value))
    }

    fn set_property(&mut self, key: &str, value: V) {
        self.insert(key.to_string(), value);
    }

    fn has_property(&self, key: &str) -> bool {
        self.contains_key(key)
    }
}

impl<V> Record for HashMap<String, V> {
    type Value = V;

    fn get_property(&self, key: &str) -> Option<&V> {
        self.get(key)
    }
}

impl<R: Record + ?Sized> Record for &R {
    type Value = R::Value;

    fn get_property(&self, key: &str) -> Option<&R::Value> {
        (**self).get_property(key)
    }
}

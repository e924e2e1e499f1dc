//! Stable sorting by a derived key.
//!
//! Elements whose key is undefined (`None`, a missing/`null` property, or
//! a key that is not comparable with itself such as `f64::NAN`) never take
//! part in comparisons. They are moved after every element with a defined
//! key and keep their original relative order.

use crate::core::collection::Collection;
use crate::core::query::map;
use crate::core::record::Record;
use serde_json::Value;
use std::cmp::Ordering;

/// Sort by the key `key_fn` derives for each element.
pub fn sort_by_key<C, K, F>(collection: &C, mut key_fn: F) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    K: PartialOrd,
    F: FnMut(&C::Item) -> Option<K>,
{
    let keyed = map(collection, |item| {
        let key = key_fn(item).filter(|key| key.partial_cmp(key) == Some(Ordering::Equal));
        (key, item.clone())
    });
    let (mut defined, undefined): (Vec<_>, Vec<_>) =
        keyed.into_iter().partition(|(key, _)| key.is_some());

    // Vec::sort_by is stable; equal keys keep their input order
    defined.sort_by(|(a, _), (b, _)| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    defined
        .into_iter()
        .chain(undefined)
        .map(|(_, item)| item)
        .collect()
}

/// Sort records by one of their JSON properties.
///
/// Booleans sort before numbers and numbers before strings. Within a kind,
/// numbers compare numerically and strings lexicographically. Arrays and
/// objects sort after every scalar and keep their input order among
/// themselves.
pub fn sort_by_property<C>(collection: &C, property: &str) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Record<Value = Value> + Clone,
{
    sort_by_key(collection, |item| {
        item.get_property(property)
            .filter(|value| !value.is_null())
            .cloned()
            .map(SortValue)
    })
}

/// Total ordering wrapper for JSON sort keys.
struct SortValue(Value);

impl SortValue {
    fn kind_rank(&self) -> u8 {
        match self.0 {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            Value::Array(_) | Value::Object(_) => 4,
        }
    }
}

impl PartialEq for SortValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortValue {}

impl PartialOrd for SortValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Value::Number(a), Value::Number(b)) => {
                let a = a.as_f64().unwrap_or(f64::NAN);
                let b = b.as_f64().unwrap_or(f64::NAN);
                a.total_cmp(&b)
            }
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

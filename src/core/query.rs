//! Query operations derived from `each` and `fold`.
//!
//! These never short-circuit the traversal: `every` and `contains` keep
//! folding after the answer is known, they just stop calling the
//! predicate.

use super::canonical::{CanonicalKey, Truthy};
use super::collection::{each, Collection};
use super::record::Record;
use super::reduce::fold;
use std::collections::BTreeMap;

/// Elements passing `test`, in their original order.
pub fn filter<C, F>(collection: &C, mut test: F) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(&C::Item) -> bool,
{
    let mut passed = Vec::new();
    each(collection, |value, _, _| {
        if test(value) {
            passed.push(value.clone());
        }
    });
    passed
}

/// Elements failing `test`, in their original order.
pub fn reject<C, F>(collection: &C, mut test: F) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(&C::Item) -> bool,
{
    filter(collection, |value| !test(value))
}

/// Remove duplicates by canonical key.
///
/// Results come back in canonical-key order, not first-seen order. When
/// two distinct values share a key (`1` and `"1"` as JSON), the one seen
/// last is kept.
pub fn uniq<C>(collection: &C) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: CanonicalKey + Clone,
{
    let mut unique = BTreeMap::new();
    each(collection, |value, _, _| {
        unique.insert(value.canonical_key(), value.clone());
    });
    unique.into_values().collect()
}

/// Order-preserving transform.
pub fn map<C, U, F>(collection: &C, mut iteratee: F) -> Vec<U>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> U,
{
    let mut mapped = Vec::with_capacity(collection.len());
    each(collection, |value, _, _| mapped.push(iteratee(value)));
    mapped
}

/// Project one property out of every record. Missing properties are `None`.
pub fn pluck<C>(collection: &C, key: &str) -> Vec<Option<<C::Item as Record>::Value>>
where
    C: Collection + ?Sized,
    C::Item: Record,
    <C::Item as Record>::Value: Clone,
{
    map(collection, |item| item.get_property(key).cloned())
}

/// Whether `target` is an element, by value equality.
pub fn contains<C>(collection: &C, target: &C::Item) -> bool
where
    C: Collection + ?Sized,
    C::Item: PartialEq,
{
    fold(collection, false, |found, item| found || item == target)
}

/// Whether every element passes `test`. Vacuously true when empty.
pub fn every<C, F>(collection: &C, mut test: F) -> bool
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> bool,
{
    fold(collection, true, |passed, item| passed && test(item))
}

/// [`every`] using each element's own truthiness.
pub fn every_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    every(collection, Truthy::is_truthy)
}

/// Whether any element passes `test`. Vacuously false when empty.
///
/// Defined as "not every element fails".
pub fn some<C, F>(collection: &C, mut test: F) -> bool
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> bool,
{
    !every(collection, |item| !test(item))
}

/// [`some`] using each element's own truthiness.
pub fn some_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    some(collection, Truthy::is_truthy)
}

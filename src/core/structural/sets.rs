//! Multi-set intersection and difference.

use crate::core::canonical::CanonicalKey;
use crate::core::collection::each;
use crate::core::query::{contains, filter, map, reject, some};
use std::collections::{HashMap, HashSet};

/// Every distinct value present in all of `sequences`.
///
/// Presence is counted once per sequence: a value repeated inside one
/// sequence still only counts as present in that sequence. Values are
/// compared by canonical key and returned in the order they first appear
/// in the first sequence.
pub fn intersection<T>(sequences: &[&[T]]) -> Vec<T>
where
    T: CanonicalKey + Clone,
{
    let Some(head) = sequences.first() else {
        return Vec::new();
    };

    let mut occurrences: HashMap<String, usize> = HashMap::new();
    each(sequences, |sequence, _, _| {
        let present: HashSet<String> = map(*sequence, CanonicalKey::canonical_key)
            .into_iter()
            .collect();
        for key in present {
            *occurrences.entry(key).or_insert(0) += 1;
        }
    });

    let required = sequences.len();
    let mut emitted = HashSet::new();
    filter(*head, |item| {
        let key = item.canonical_key();
        occurrences.get(&key) == Some(&required) && emitted.insert(key)
    })
}

/// Elements of `array` that appear in none of `others`, keeping the order
/// and multiplicity of `array`. Membership is plain equality, so values
/// that only share a canonical key are not excluded.
pub fn difference<T>(array: &[T], others: &[&[T]]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    reject(array, |item| some(others, |other| contains(*other, item)))
}

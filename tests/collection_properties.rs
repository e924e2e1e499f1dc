//! Property tests for the collection operations
//!
//! Verifies the partition, reduction, vacuous-truth, set and permutation
//! laws over generated inputs, plus the fixed examples each law is usually
//! illustrated with.

mod common;

use common::same_multiset;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use utilkit::core::{
    contains, difference, each, every, filter, flatten, fold, intersection, reduce, reject, shuffle,
    shuffle_with, some, sort_by_key, sort_by_property, uniq, zip, CanonicalKey, ShufflePolicy,
    Tree,
};

// ============================================================================
// Partition and reduction
// ============================================================================

proptest! {
    #[test]
    fn filter_and_reject_partition(values in prop::collection::vec(any::<i32>(), 0..64), modulus in 1i32..7) {
        let divisible = |n: &i32| n.rem_euclid(modulus) == 0;
        let kept = filter(&values, divisible);
        let dropped = reject(&values, divisible);

        prop_assert_eq!(kept.len() + dropped.len(), values.len());
        prop_assert!(kept.iter().all(divisible));
        prop_assert!(!dropped.iter().any(divisible));

        let expected_kept: Vec<i32> = values.iter().copied().filter(divisible).collect();
        prop_assert_eq!(kept, expected_kept);

        let mut recombined = filter(&values, divisible);
        recombined.extend(reject(&values, divisible));
        prop_assert!(same_multiset(&recombined, &values));
    }

    #[test]
    fn reduce_with_zero_sums(values in prop::collection::vec(-1000i64..1000, 0..64)) {
        let total = reduce(&values, |sum, n| sum + n, Some(0));
        prop_assert_eq!(total, Some(values.iter().sum::<i64>()));
    }

    #[test]
    fn reduce_single_without_initial_skips_combiner(x in any::<i64>()) {
        let result = reduce(&vec![x], |_, _| panic!("combiner must not run"), None);
        prop_assert_eq!(result, Some(x));
    }

    #[test]
    fn fold_matches_iterator_fold(values in prop::collection::vec(any::<u8>(), 0..64)) {
        let longest = fold(&values, 0usize, |run, n| if *n > 127 { run + 1 } else { run });
        prop_assert_eq!(longest, values.iter().filter(|n| **n > 127).count());
    }
}

#[test]
fn reduce_empty_without_initial_is_none() {
    let empty: Vec<i32> = Vec::new();
    assert_eq!(reduce(&empty, |a, b| a + b, None), None);
}

#[test]
fn every_and_some_are_vacuous_on_empty() {
    let empty: Vec<i32> = Vec::new();
    assert!(every(&empty, |_| false));
    assert!(!some(&empty, |_| true));
}

// ============================================================================
// Keyed collections
// ============================================================================

#[test]
fn maps_are_visited_in_key_order() {
    let mut scores = BTreeMap::new();
    scores.insert("carol".to_string(), 7);
    scores.insert("alice".to_string(), 9);
    scores.insert("bob".to_string(), 4);

    let mut visited = Vec::new();
    each(&scores, |score, name, _| visited.push(format!("{}={}", name, score)));
    assert_eq!(visited, vec!["alice=9", "bob=4", "carol=7"]);

    assert_eq!(filter(&scores, |score| *score > 5), vec![9, 7]);
    assert_eq!(reduce(&scores, |a, b| a + b, None), Some(20));
}

#[test]
fn json_object_is_a_collection() {
    let object = json!({"b": 2, "a": 1, "c": null});
    let Value::Object(map) = object else {
        panic!("expected an object");
    };
    assert!(contains(&map, &json!(null)));
    assert!(!every(&map, |value| value.is_number()));
}

// ============================================================================
// Structural operations
// ============================================================================

#[test]
fn zip_pads_shorter_sequences() {
    let letters = vec![json!("a"), json!("b"), json!("c"), json!("d")];
    let numbers = vec![json!(1), json!(2), json!(3)];

    let zipped = zip(&[letters.as_slice(), numbers.as_slice()]);
    assert_eq!(
        zipped,
        vec![
            vec![Some(json!("a")), Some(json!(1))],
            vec![Some(json!("b")), Some(json!(2))],
            vec![Some(json!("c")), Some(json!(3))],
            vec![Some(json!("d")), None],
        ]
    );
}

#[test]
fn flatten_json_nesting() {
    let nested = vec![json!(1), json!([2, [3, [[4]]], 5])];
    assert_eq!(
        flatten(&nested),
        vec![json!(1), json!(2), json!(3), json!(4), json!(5)]
    );
}

#[test]
fn flatten_tree_nesting() {
    let nested = vec![
        Tree::leaf(1),
        Tree::branch([
            Tree::leaf(2),
            Tree::branch([Tree::leaf(3), Tree::branch([Tree::branch([Tree::leaf(4)])])]),
            Tree::leaf(5),
        ]),
    ];
    assert_eq!(flatten(&nested), vec![1, 2, 3, 4, 5]);
}

#[test]
fn intersection_and_difference_examples() {
    let mut common = intersection(&[&[1, 2, 3][..], &[2, 3, 4][..]]);
    common.sort();
    assert_eq!(common, vec![2, 3]);

    assert_eq!(difference(&[1, 2, 3, 4], &[&[2, 4][..]]), vec![1, 3]);
}

#[test]
fn sort_by_property_puts_missing_last() {
    let items = vec![json!({"k": 3}), json!({"other": true}), json!({"k": 1})];
    assert_eq!(
        sort_by_property(&items, "k"),
        vec![json!({"k": 1}), json!({"k": 3}), json!({"other": true})]
    );
}

proptest! {
    #[test]
    fn uniq_has_no_repeated_keys(values in prop::collection::vec(0u8..20, 0..64)) {
        let unique = uniq(&values);
        let mut keys: Vec<String> = unique.iter().map(CanonicalKey::canonical_key).collect();
        let total = keys.len();
        keys.dedup();
        prop_assert_eq!(keys.len(), total);
        prop_assert!(values.iter().all(|v| unique.contains(v)));
    }

    #[test]
    fn intersection_members_are_in_every_input(
        a in prop::collection::vec(0u8..10, 0..20),
        b in prop::collection::vec(0u8..10, 0..20),
        c in prop::collection::vec(0u8..10, 0..20),
    ) {
        let common = intersection(&[a.as_slice(), b.as_slice(), c.as_slice()]);
        for value in &common {
            prop_assert!(a.contains(value) && b.contains(value) && c.contains(value));
        }
        for value in &a {
            if b.contains(value) && c.contains(value) {
                prop_assert!(common.contains(value));
            }
        }
    }

    #[test]
    fn difference_excludes_every_other_value(
        a in prop::collection::vec(0u8..10, 0..20),
        b in prop::collection::vec(0u8..10, 0..20),
    ) {
        let rest = difference(&a, &[b.as_slice()]);
        prop_assert!(rest.iter().all(|v| !b.contains(v)));
        let expected: Vec<u8> = a.iter().copied().filter(|v| !b.contains(v)).collect();
        prop_assert_eq!(rest, expected);
    }

    #[test]
    fn sort_by_key_is_sorted_and_stable(values in prop::collection::vec((0u8..5, any::<u16>()), 0..40)) {
        let sorted = sort_by_key(&values, |(rank, _)| Some(*rank));
        prop_assert!(sorted.windows(2).all(|pair| pair[0].0 <= pair[1].0));

        let mut expected = values.clone();
        expected.sort_by_key(|(rank, _)| *rank);
        prop_assert_eq!(sorted, expected);
    }
}

// ============================================================================
// Shuffle
// ============================================================================

#[test]
fn shuffle_never_returns_input_order() {
    let input = vec![1, 2, 3];
    for _ in 0..200 {
        let shuffled = shuffle(&input);
        assert_ne!(shuffled, input);
        assert!(same_multiset(&shuffled, &input));
    }
    assert_eq!(input, vec![1, 2, 3]);
}

proptest! {
    #[test]
    fn shuffle_is_a_permutation(values in prop::collection::vec(0i32..5, 0..12), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let shuffled = shuffle_with(&values, &mut rng, ShufflePolicy::RejectIdentity);
        prop_assert!(same_multiset(&shuffled, &values));

        let has_other_order = values.iter().any(|v| *v != values[0]);
        if has_other_order {
            prop_assert_ne!(shuffled, values);
        } else {
            prop_assert_eq!(shuffled, values);
        }
    }

    #[test]
    fn uniform_shuffle_is_a_permutation(values in prop::collection::vec(any::<i32>(), 0..12), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let shuffled = shuffle_with(&values, &mut rng, ShufflePolicy::Uniform);
        prop_assert!(same_multiset(&shuffled, &values));
    }
}

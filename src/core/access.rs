//! Positional access helpers for sequences.

use super::collection::each;

/// Returns its argument unchanged. Useful as a default iteratee.
pub fn identity<T>(value: T) -> T {
    value
}

pub fn first<T>(array: &[T]) -> Option<&T> {
    array.first()
}

/// The first `n` elements, or the whole sequence when `n` exceeds its length.
pub fn first_n<T>(array: &[T], n: usize) -> &[T] {
    &array[..n.min(array.len())]
}

pub fn last<T>(array: &[T]) -> Option<&T> {
    array.last()
}

/// The last `n` elements, or the whole sequence when `n` exceeds its length.
pub fn last_n<T>(array: &[T], n: usize) -> &[T] {
    &array[array.len().saturating_sub(n)..]
}

/// Index of the first element equal to `target`.
pub fn index_of<T: PartialEq>(array: &[T], target: &T) -> Option<usize> {
    let mut found = None;
    each(array, |item, index, _| {
        if found.is_none() && item == target {
            found = Some(index);
        }
    });
    found
}

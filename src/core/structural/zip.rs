//! N-ary zipping over sequences of unequal length.

use crate::core::query::map;
use crate::core::reduce::fold;

/// Group the i-th elements of every sequence together.
///
/// The output has as many tuples as the longest input. Positions past the
/// end of a shorter input are `None`.
pub fn zip<T: Clone>(sequences: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let longest = fold(sequences, 0, |longest, sequence| longest.max(sequence.len()));
    (0..longest)
        .map(|index| map(sequences, |sequence| sequence.get(index).cloned()))
        .collect()
}

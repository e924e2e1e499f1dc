//! The reduction primitive, built on
//! [`Collection::try_fold_visit`](super::collection::Collection::try_fold_visit).
//!
//! Two seeding modes are distinguished by type rather than by value:
//! [`fold`] always takes an initial accumulator, while [`reduce`] takes an
//! `Option`. `reduce(xs, f, Some(0))` seeds with zero; `reduce(xs, f, None)`
//! seeds with the first element and never passes that element to `f`.

use super::collection::{each, Collection};
use std::convert::Infallible;

/// Fold a collection starting from `initial`. The combiner runs once per
/// element.
pub fn fold<C, A, F>(collection: &C, initial: A, mut combiner: F) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &C::Item) -> A,
{
    let outcome = collection.try_fold_visit(initial, |accumulator, item, _, _| {
        Ok::<A, Infallible>(combiner(accumulator, item))
    });
    match outcome {
        Ok(accumulator) => accumulator,
        Err(never) => match never {},
    }
}

/// Fallible [`fold`]. The first combiner error is returned unchanged.
pub fn try_fold<C, A, E, F>(collection: &C, initial: A, mut combiner: F) -> Result<A, E>
where
    C: Collection + ?Sized,
    F: FnMut(A, &C::Item) -> Result<A, E>,
{
    collection.try_fold_visit(initial, |accumulator, item, _, _| combiner(accumulator, item))
}

/// Reduce a collection to a single value of its own element type.
///
/// With `initial: None` the first element becomes the accumulator and the
/// combiner starts at the second element; an empty collection yields
/// `None` without calling the combiner. With `Some(x)` the fold is seeded
/// by `x`, even when `x` is zero or `false`.
pub fn reduce<C, F>(collection: &C, mut combiner: F, initial: Option<C::Item>) -> Option<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(C::Item, &C::Item) -> C::Item,
{
    let mut accumulator = initial;
    each(collection, |item, _, _| {
        accumulator = Some(match accumulator.take() {
            Some(current) => combiner(current, item),
            None => item.clone(),
        });
    });
    accumulator
}

//! The traversal primitive.
//!
//! A `Collection` is either an ordered sequence (keys are indices) or a
//! string-keyed map (keys are the map keys, visited in key order). Every
//! other operation in `core` is expressed through [`each`] or
//! [`try_each`], so the choice of container is resolved at compile time
//! by the caller's type rather than by inspecting the value.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt::Debug;

/// A container whose elements can be visited as `(value, key, collection)`.
pub trait Collection {
    /// Element type
    type Item;

    /// Position of an element: an index for sequences, a key for maps
    type Key<'a>: Copy + Debug
    where
        Self: 'a;

    /// Number of elements
    fn len(&self) -> usize;

    /// Whether the collection has no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Thread `state` through every element in enumeration order, stopping
    /// at the first error returned by the visitor.
    fn try_fold_visit<'a, A, E, F>(&'a self, state: A, visitor: F) -> Result<A, E>
    where
        F: FnMut(A, &'a Self::Item, Self::Key<'a>, &'a Self) -> Result<A, E>;

    /// Visit every element in enumeration order, stopping at the first
    /// error returned by the visitor.
    fn try_visit<'a, E, F>(&'a self, mut visitor: F) -> Result<(), E>
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>, &'a Self) -> Result<(), E>,
    {
        self.try_fold_visit((), |(), value, key, collection| {
            visitor(value, key, collection)
        })
    }
}

impl<T> Collection for [T] {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn try_fold_visit<'a, A, E, F>(&'a self, mut state: A, mut visitor: F) -> Result<A, E>
    where
        F: FnMut(A, &'a Self::Item, Self::Key<'a>, &'a Self) -> Result<A, E>,
    {
        for (index, value) in self.iter().enumerate() {
            state = visitor(state, value, index, self)?;
        }
        Ok(state)
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn try_fold_visit<'a, A, E, F>(&'a self, mut state: A, mut visitor: F) -> Result<A, E>
    where
        F: FnMut(A, &'a Self::Item, Self::Key<'a>, &'a Self) -> Result<A, E>,
    {
        for (index, value) in self.iter().enumerate() {
            state = visitor(state, value, index, self)?;
        }
        Ok(state)
    }
}

impl<T> Collection for BTreeMap<String, T> {
    type Item = T;
    type Key<'a>
        = &'a str
    where
        Self: 'a;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn try_fold_visit<'a, A, E, F>(&'a self, mut state: A, mut visitor: F) -> Result<A, E>
    where
        F: FnMut(A, &'a Self::Item, Self::Key<'a>, &'a Self) -> Result<A, E>,
    {
        for (key, value) in self {
            state = visitor(state, value, key.as_str(), self)?;
        }
        Ok(state)
    }
}

impl Collection for Map<String, Value> {
    type Item = Value;
    type Key<'a>
        = &'a str
    where
        Self: 'a;

    fn len(&self) -> usize {
        Map::len(self)
    }

    fn try_fold_visit<'a, A, E, F>(&'a self, mut state: A, mut visitor: F) -> Result<A, E>
    where
        F: FnMut(A, &'a Self::Item, Self::Key<'a>, &'a Self) -> Result<A, E>,
    {
        for (key, value) in self {
            state = visitor(state, value, key.as_str(), self)?;
        }
        Ok(state)
    }
}

/// Call `visitor(value, key, collection)` once per element, in order.
///
/// Empty collections produce zero calls.
pub fn each<'a, C, F>(collection: &'a C, mut visitor: F)
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Item, C::Key<'a>, &'a C),
{
    let outcome = collection.try_visit(|value, key, coll| {
        visitor(value, key, coll);
        Ok::<(), Infallible>(())
    });
    match outcome {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// Like [`each`], but the visitor may fail. The first error is returned
/// as-is and no further elements are visited.
pub fn try_each<'a, C, E, F>(collection: &'a C, visitor: F) -> Result<(), E>
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Item, C::Key<'a>, &'a C) -> Result<(), E>,
{
    collection.try_visit(visitor)
}

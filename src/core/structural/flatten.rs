//! Recursive flattening of nested sequences.

use crate::core::collection::each;
use serde_json::Value;

/// One level of a nested structure: either more nesting or a leaf.
#[derive(Debug)]
pub enum Node<'a, N, L> {
    Branch(&'a [N]),
    Leaf(&'a L),
}

/// A value that is either a sequence of itself or a leaf.
pub trait Nested: Sized {
    type Leaf: Clone;

    fn node(&self) -> Node<'_, Self, Self::Leaf>;
}

/// JSON arrays nest; every other JSON value is a leaf.
impl Nested for Value {
    type Leaf = Value;

    fn node(&self) -> Node<'_, Value, Value> {
        match self {
            Value::Array(items) => Node::Branch(items.as_slice()),
            other => Node::Leaf(other),
        }
    }
}

/// An arbitrarily nested sequence of `T`.
#[derive(Debug, Clone, PartialEq)]
pub enum Tree<T> {
    Leaf(T),
    Branch(Vec<Tree<T>>),
}

impl<T> Tree<T> {
    pub fn leaf(value: T) -> Self {
        Tree::Leaf(value)
    }

    pub fn branch(children: impl IntoIterator<Item = Tree<T>>) -> Self {
        Tree::Branch(children.into_iter().collect())
    }
}

impl<T> From<T> for Tree<T> {
    fn from(value: T) -> Self {
        Tree::Leaf(value)
    }
}

impl<T: Clone> Nested for Tree<T> {
    type Leaf = T;

    fn node(&self) -> Node<'_, Tree<T>, T> {
        match self {
            Tree::Branch(children) => Node::Branch(children.as_slice()),
            Tree::Leaf(value) => Node::Leaf(value),
        }
    }
}

/// Expand nested sequences into one flat sequence, depth-first, left to
/// right.
pub fn flatten<N: Nested>(nested: &[N]) -> Vec<N::Leaf> {
    let mut flat = Vec::new();
    flatten_into(nested, &mut flat);
    flat
}

fn flatten_into<N: Nested>(items: &[N], flat: &mut Vec<N::Leaf>) {
    each(items, |item, _, _| match item.node() {
        Node::Branch(children) => flatten_into(children, flat),
        Node::Leaf(value) => flat.push(value.clone()),
    });
}

//! Structural operations: reshaping, set algebra, ordering and invocation.

pub mod flatten;
pub mod invoke;
pub mod sets;
pub mod shuffle;
pub mod sort;
pub mod zip;

pub use flatten::{flatten, Nested, Node, Tree};
pub use invoke::{invoke, invoke_named, MethodTable};
pub use sets::{difference, intersection};
pub use shuffle::{shuffle, shuffle_with, ShufflePolicy};
pub use sort::{sort_by_key, sort_by_property};
pub use zip::zip;

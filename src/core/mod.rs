//! Pure collection operations
//!
//! Everything in this module is built on two primitives: `each`, which
//! visits a collection, and `fold`/`reduce`, which thread an accumulator
//! through it. Following the "functional core, imperative shell" pattern,
//! nothing here reads clocks, schedules work, or performs I/O.

pub mod access;
pub mod canonical;
pub mod collection;
pub mod merge;
pub mod query;
pub mod record;
pub mod reduce;
pub mod structural;

pub use access::{first, first_n, identity, index_of, last, last_n};
pub use canonical::{CanonicalKey, Truthy};
pub use collection::{each, try_each, Collection};
pub use merge::{defaults, extend};
pub use query::{
    contains, every, every_truthy, filter, map, pluck, reject, some, some_truthy, uniq,
};
pub use record::{Record, RecordMut};
pub use reduce::{fold, reduce, try_fold};
pub use structural::{
    difference, flatten, intersection, invoke, invoke_named, shuffle, shuffle_with, sort_by_key,
    sort_by_property, zip, MethodTable, Nested, ShufflePolicy, Tree,
};

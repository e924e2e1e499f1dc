//! Function-control decorators
//!
//! Each decorator owns the wrapped function and exposes `call`. Arguments
//! are a single value; use a tuple for several and `()` for none. State
//! lives in the decorator itself, so no locking is involved.
//!
//! `delay` and `throttle` read time through the `env` services so tests can
//! drive them with a mock clock.

mod delay;
mod memoize;
mod once;
mod throttle;

pub use delay::delay;
pub use memoize::{memoize, memoize_with_policy, MemoKeyPolicy, Memoize};
pub use once::{once, Once};
pub use throttle::{throttle, throttle_with_clock, Throttle};

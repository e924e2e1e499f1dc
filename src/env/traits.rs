//! Environment trait definitions for dependency injection and testing
//!
//! The decorators need exactly two services from the outside world: a
//! monotonic clock to measure throttle windows and a scheduler to run
//! delayed calls. Both are traits so tests can drive time by hand.

use crate::error::Result;
use std::time::Duration;

/// A unit of deferred work handed to a [`Scheduler`].
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Monotonic time source
///
/// # Examples
///
/// ```
/// use utilkit::env::{Clock, MockClock};
/// use std::time::Duration;
///
/// let clock = MockClock::new();
/// clock.advance(Duration::from_millis(150));
/// assert_eq!(clock.now(), Duration::from_millis(150));
/// ```
pub trait Clock: Send + Sync {
    /// Time elapsed since the clock's origin. Never decreases.
    fn now(&self) -> Duration;
}

/// Deferred execution service
///
/// Implementations must run `task` no sooner than `delay` after
/// `schedule` is called, and must not block the caller.
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: Task) -> Result<()>;
}

//! Combined kernel environment
//!
//! Bundles the clock and scheduler the decorators depend on.

use super::mock::{ManualScheduler, MockClock};
use super::real::{MonotonicClock, TokioScheduler};
use super::traits::{Clock, Scheduler};
use std::sync::Arc;

/// Time and scheduling services for decorators
///
/// # Examples
///
/// ```
/// use utilkit::env::{KernelEnv, ManualScheduler};
///
/// // Real environment for production use
/// let env = KernelEnv::real();
///
/// // Hand-driven environment for tests
/// let scheduler = ManualScheduler::new();
/// let test_env = KernelEnv::manual(&scheduler);
/// ```
#[derive(Clone)]
pub struct KernelEnv {
    pub clock: Arc<dyn Clock>,
    pub scheduler: Arc<dyn Scheduler>,
}

impl KernelEnv {
    /// Monotonic clock and the ambient tokio runtime
    pub fn real() -> Self {
        Self {
            clock: Arc::new(MonotonicClock::new()),
            scheduler: Arc::new(TokioScheduler::new()),
        }
    }

    /// A fresh mock clock and a manual scheduler driven by that clock
    pub fn mock() -> Self {
        Self::manual(&ManualScheduler::with_clock(MockClock::new()))
    }

    /// Use `scheduler` and its clock. The caller keeps `scheduler` to
    /// advance time.
    pub fn manual(scheduler: &ManualScheduler) -> Self {
        Self {
            clock: Arc::new(scheduler.clock().clone()),
            scheduler: Arc::new(scheduler.clone()),
        }
    }

    pub fn custom(clock: Arc<dyn Clock>, scheduler: Arc<dyn Scheduler>) -> Self {
        Self { clock, scheduler }
    }
}

impl Default for KernelEnv {
    fn default() -> Self {
        Self::real()
    }
}

impl std::fmt::Debug for KernelEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KernelEnv")
            .field("clock", &"dyn Clock")
            .field("scheduler", &"dyn Scheduler")
            .finish()
    }
}

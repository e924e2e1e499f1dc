//! Real environment implementations backed by the system clock and tokio.

use super::traits::{Clock, Scheduler, Task};
use crate::error::{ErrorCode, KernelError, Result};
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tracing::trace;

/// Monotonic clock measuring from the moment it was created.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Scheduler that spawns a sleeping task on the current tokio runtime.
///
/// The runtime is looked up at scheduling time, so a `TokioScheduler` can
/// be built anywhere but `schedule` fails outside a runtime context.
#[derive(Debug, Clone, Default)]
pub struct TokioScheduler {
    handle: Option<Handle>,
}

impl TokioScheduler {
    pub fn new() -> Self {
        Self { handle: None }
    }

    /// Always spawn onto `handle`, regardless of the caller's context.
    pub fn with_handle(handle: Handle) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    fn runtime(&self) -> Result<Handle> {
        match &self.handle {
            Some(handle) => Ok(handle.clone()),
            None => Handle::try_current().map_err(|e| {
                KernelError::schedule_with_code(
                    ErrorCode::SCHEDULE_NO_RUNTIME,
                    "no tokio runtime is running on this thread",
                )
                .with_source(e)
            }),
        }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> Result<()> {
        let runtime = self.runtime()?;
        trace!(delay_ms = delay.as_millis() as u64, "Spawning delayed task");
        runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
        Ok(())
    }
}

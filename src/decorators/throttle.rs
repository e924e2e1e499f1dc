//! Rate-limit calls to a function.

use crate::env::{Clock, MonotonicClock};
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Callable that runs its function at most once per `wait` window
///
/// The first call runs immediately. A call arriving less than `wait` after
/// the last executed call returns that call's result and is otherwise
/// dropped; nothing is queued. A call at or after `wait` runs again and
/// starts a new window.
pub struct Throttle<A, R, F> {
    func: F,
    wait: Duration,
    clock: Arc<dyn Clock>,
    last: Option<(Duration, R)>,
    _args: PhantomData<fn(A)>,
}

/// Throttle `func` against a monotonic clock started now.
pub fn throttle<A, R, F>(func: F, wait: Duration) -> Throttle<A, R, F>
where
    F: FnMut(A) -> R,
{
    throttle_with_clock(func, wait, Arc::new(MonotonicClock::new()))
}

pub fn throttle_with_clock<A, R, F>(
    func: F,
    wait: Duration,
    clock: Arc<dyn Clock>,
) -> Throttle<A, R, F>
where
    F: FnMut(A) -> R,
{
    Throttle {
        func,
        wait,
        clock,
        last: None,
        _args: PhantomData,
    }
}

impl<A, R, F> Throttle<A, R, F>
where
    F: FnMut(A) -> R,
{
    pub fn call(&mut self, args: A) -> R
    where
        R: Clone,
    {
        let now = self.clock.now();
        if let Some((at, result)) = &self.last {
            let elapsed = now.saturating_sub(*at);
            if elapsed < self.wait {
                debug!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    wait_ms = self.wait.as_millis() as u64,
                    "Throttled call suppressed"
                );
                return result.clone();
            }
        }

        let result = (self.func)(args);
        self.last = Some((now, result.clone()));
        result
    }

    /// Clock reading of the last executed call
    pub fn last_invoked(&self) -> Option<Duration> {
        self.last.as_ref().map(|(at, _)| *at)
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }
}

impl<A, R, F> std::fmt::Debug for Throttle<A, R, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Throttle")
            .field("wait", &self.wait)
            .field("last_invoked", &self.last.as_ref().map(|(at, _)| *at))
            .finish()
    }
}

//! Mock environment implementations for testing
//!
//! Time only moves when a test says so. `ManualScheduler` keeps its tasks
//! in a queue and runs them, in due order, while its clock is advanced.

use super::traits::{Clock, Scheduler, Task};
use crate::error::Result;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::trace;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Manually advanced clock
///
/// Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct MockClock {
    now: Arc<Mutex<Duration>>,
}

impl MockClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `by`
    pub fn advance(&self, by: Duration) {
        *lock(&self.now) += by;
    }

    /// Jump to `to`. Ignored if `to` is in the past.
    pub fn set(&self, to: Duration) {
        let mut now = lock(&self.now);
        if to > *now {
            *now = to;
        }
    }
}

impl Clock for MockClock {
    fn now(&self) -> Duration {
        *lock(&self.now)
    }
}

struct PendingTask {
    due: Duration,
    sequence: u64,
    task: Task,
}

#[derive(Default)]
struct TaskQueue {
    pending: Vec<PendingTask>,
    next_sequence: u64,
}

impl TaskQueue {
    /// Remove the earliest task due at or before `deadline`. Ties run in
    /// scheduling order.
    fn pop_due(&mut self, deadline: Duration) -> Option<PendingTask> {
        let position = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, task)| task.due <= deadline)
            .min_by_key(|(_, task)| (task.due, task.sequence))
            .map(|(position, _)| position)?;
        Some(self.pending.remove(position))
    }
}

/// Scheduler whose tasks run only when its clock is advanced
///
/// # Examples
///
/// ```
/// use utilkit::env::{ManualScheduler, Scheduler};
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let scheduler = ManualScheduler::new();
/// let fired = Arc::new(AtomicBool::new(false));
/// let flag = fired.clone();
///
/// scheduler
///     .schedule(Duration::from_millis(500), Box::new(move || flag.store(true, Ordering::SeqCst)))
///     .unwrap();
///
/// scheduler.advance(Duration::from_millis(499));
/// assert!(!fired.load(Ordering::SeqCst));
/// scheduler.advance(Duration::from_millis(1));
/// assert!(fired.load(Ordering::SeqCst));
/// ```
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: MockClock,
    queue: Arc<Mutex<TaskQueue>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a scheduler that reads and advances an existing clock.
    pub fn with_clock(clock: MockClock) -> Self {
        Self {
            clock,
            queue: Arc::default(),
        }
    }

    pub fn clock(&self) -> &MockClock {
        &self.clock
    }

    /// Number of tasks that have not run yet
    pub fn pending(&self) -> usize {
        lock(&self.queue).pending.len()
    }

    /// Advance time by `by`, running every task that falls due on the way.
    ///
    /// The clock reads each task's due time while that task runs. Tasks
    /// scheduled by a running task are picked up in the same call when they
    /// fall due before the target time. Returns the number of tasks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.clock.now() + by;
        let mut ran = 0;

        loop {
            // The queue lock is released before running a task so the task
            // can schedule more work.
            let next = lock(&self.queue).pop_due(target);
            let Some(next) = next else {
                break;
            };
            self.clock.set(next.due);
            trace!(due_ms = next.due.as_millis() as u64, "Running scheduled task");
            (next.task)();
            ran += 1;
        }

        self.clock.set(target);
        ran
    }

    /// Run tasks already due at the current time.
    pub fn run_due(&self) -> usize {
        self.advance(Duration::ZERO)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> Result<()> {
        let mut queue = lock(&self.queue);
        let sequence = queue.next_sequence;
        queue.next_sequence += 1;
        queue.pending.push(PendingTask {
            due: self.clock.now() + delay,
            sequence,
            task,
        });
        Ok(())
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("now", &self.clock.now())
            .field("pending", &self.pending())
            .finish()
    }
}

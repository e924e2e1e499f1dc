//! Fire-and-forget deferred calls.

use crate::env::Scheduler;
use crate::error::Result;
use std::time::Duration;
use tracing::debug;

/// Run `func(args)` no sooner than `wait` from now.
///
/// Returns as soon as the call is handed to `scheduler`. The eventual
/// result is dropped. An error means the call was not scheduled at all.
///
/// # Examples
///
/// ```
/// use utilkit::decorators::delay;
/// use utilkit::env::ManualScheduler;
/// use std::sync::atomic::{AtomicU32, Ordering};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let scheduler = ManualScheduler::new();
/// let total = Arc::new(AtomicU32::new(0));
/// let sink = total.clone();
///
/// delay(
///     &scheduler,
///     move |(a, b): (u32, u32)| sink.fetch_add(a + b, Ordering::SeqCst),
///     Duration::from_millis(100),
///     (2, 3),
/// )
/// .unwrap();
///
/// scheduler.advance(Duration::from_millis(100));
/// assert_eq!(total.load(Ordering::SeqCst), 5);
/// ```
pub fn delay<S, A, R, F>(scheduler: &S, func: F, wait: Duration, args: A) -> Result<()>
where
    S: Scheduler + ?Sized,
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
{
    debug!(wait_ms = wait.as_millis() as u64, "Scheduling delayed call");
    scheduler.schedule(
        wait,
        Box::new(move || {
            let _ = func(args);
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ManualScheduler;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_not_run_before_wait() {
        let scheduler = ManualScheduler::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();

        delay(
            &scheduler,
            move |word: &'static str| sink.lock().unwrap().push(word),
            Duration::from_millis(50),
            "late",
        )
        .unwrap();

        scheduler.advance(Duration::from_millis(49));
        assert!(seen.lock().unwrap().is_empty());

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(*seen.lock().unwrap(), vec!["late"]);
    }

    #[test]
    fn test_delays_run_in_wait_order() {
        let scheduler = ManualScheduler::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for (wait, label) in [(30, "c"), (10, "a"), (20, "b")] {
            let sink = seen.clone();
            delay(
                &scheduler,
                move |label: &'static str| sink.lock().unwrap().push(label),
                Duration::from_millis(wait),
                label,
            )
            .unwrap();
        }

        assert_eq!(scheduler.advance(Duration::from_millis(30)), 3);
        assert_eq!(*seen.lock().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_works_through_trait_object() {
        let scheduler = ManualScheduler::new();
        let dynamic: &dyn Scheduler = &scheduler;
        let hit = Arc::new(Mutex::new(false));
        let flag = hit.clone();

        delay(
            dynamic,
            move |()| *flag.lock().unwrap() = true,
            Duration::ZERO,
            (),
        )
        .unwrap();
        scheduler.run_due();
        assert!(*hit.lock().unwrap());
    }
}

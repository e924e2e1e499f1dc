//! Run a function at most one time.

use std::marker::PhantomData;
use tracing::debug;

enum Latch<F, R> {
    Pending(F),
    Done(R),
    /// The first call panicked, so there is neither a function nor a result.
    Poisoned,
}

/// Callable that runs its function on the first call only
///
/// Every call, the first included, returns the result of that first run.
/// Arguments passed to later calls are ignored. Functions of several
/// arguments take a tuple.
///
/// # Examples
///
/// ```
/// use utilkit::decorators::once;
///
/// let mut init = once(|n: i32| n + 1);
/// assert_eq!(init.call(1), 2);
/// assert_eq!(init.call(100), 2);
/// ```
pub struct Once<A, R, F> {
    state: Latch<F, R>,
    _args: PhantomData<fn(A)>,
}

/// Wrap `func` so it runs at most once.
pub fn once<A, R, F>(func: F) -> Once<A, R, F>
where
    F: FnOnce(A) -> R,
{
    Once {
        state: Latch::Pending(func),
        _args: PhantomData,
    }
}

impl<A, R, F> Once<A, R, F>
where
    F: FnOnce(A) -> R,
{
    /// # Panics
    ///
    /// Panics if an earlier first call panicked and was caught.
    pub fn call(&mut self, args: A) -> R
    where
        R: Clone,
    {
        match std::mem::replace(&mut self.state, Latch::Poisoned) {
            Latch::Pending(func) => {
                let result = func(args);
                debug!("Once-wrapped function ran; later calls reuse its result");
                self.state = Latch::Done(result.clone());
                result
            }
            Latch::Done(result) => {
                self.state = Latch::Done(result.clone());
                result
            }
            Latch::Poisoned => panic!("once-wrapped function panicked on its first call"),
        }
    }

    /// Whether the wrapped function has already run
    pub fn is_latched(&self) -> bool {
        matches!(self.state, Latch::Done(_))
    }

    /// The stored result, if the function has run
    pub fn result(&self) -> Option<&R> {
        match &self.state {
            Latch::Done(result) => Some(result),
            _ => None,
        }
    }
}

impl<A, R: std::fmt::Debug, F> std::fmt::Debug for Once<A, R, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match &self.state {
            Latch::Pending(_) => "pending".to_string(),
            Latch::Done(result) => format!("done({:?})", result),
            Latch::Poisoned => "poisoned".to_string(),
        };
        f.debug_struct("Once").field("state", &state).finish()
    }
}

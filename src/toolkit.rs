//! Configured entry point
//!
//! `Toolkit` pairs a [`KernelConfig`] with a [`KernelEnv`] so callers get
//! the configured shuffle and memo-key policies and the environment's
//! clock and scheduler without passing them to every call.

use crate::config::KernelConfig;
use crate::core::shuffle_with;
use crate::decorators::{self, Memoize, Once, Throttle};
use crate::env::KernelEnv;
use crate::error::Result;
use rand::Rng;
use std::time::Duration;

/// Policy- and environment-bound operations
///
/// # Examples
///
/// ```
/// use utilkit::config::KernelConfig;
/// use utilkit::env::{KernelEnv, ManualScheduler};
/// use utilkit::Toolkit;
/// use std::time::Duration;
///
/// let scheduler = ManualScheduler::new();
/// let kit = Toolkit::new(KernelConfig::default(), KernelEnv::manual(&scheduler));
///
/// let mut limited = kit.throttle(|n: i32| n, Duration::from_millis(10));
/// assert_eq!(limited.call(1), 1);
/// assert_eq!(limited.call(2), 1);
/// scheduler.advance(Duration::from_millis(10));
/// assert_eq!(limited.call(3), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Toolkit {
    config: KernelConfig,
    env: KernelEnv,
}

impl Toolkit {
    pub fn new(config: KernelConfig, env: KernelEnv) -> Self {
        Self { config, env }
    }

    /// Default configuration with the real environment
    pub fn real() -> Self {
        Self::new(KernelConfig::default(), KernelEnv::real())
    }

    /// Default configuration overridden from `UTILKIT_*` variables, with
    /// the real environment
    pub fn from_env() -> Result<Self> {
        let mut config = KernelConfig::default();
        config.merge_env_vars()?;
        Ok(Self::new(config, KernelEnv::real()))
    }

    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    pub fn env(&self) -> &KernelEnv {
        &self.env
    }

    /// Shuffle a copy of `array` under the configured policy.
    pub fn shuffle<T: Clone + PartialEq>(&self, array: &[T]) -> Vec<T> {
        self.shuffle_using(array, &mut rand::rng())
    }

    pub fn shuffle_using<T, R>(&self, array: &[T], rng: &mut R) -> Vec<T>
    where
        T: Clone + PartialEq,
        R: Rng + ?Sized,
    {
        shuffle_with(array, rng, self.config.shuffle_policy)
    }

    pub fn once<A, R, F>(&self, func: F) -> Once<A, R, F>
    where
        F: FnOnce(A) -> R,
    {
        decorators::once(func)
    }

    /// Memoize `func` with the configured key policy.
    pub fn memoize<A, R, F>(&self, func: F) -> Memoize<A, R, F>
    where
        F: FnMut(A) -> R,
    {
        decorators::memoize_with_policy(func, self.config.memo_key)
    }

    /// Throttle `func` against the environment's clock.
    pub fn throttle<A, R, F>(&self, func: F, wait: Duration) -> Throttle<A, R, F>
    where
        F: FnMut(A) -> R,
    {
        decorators::throttle_with_clock(func, wait, self.env.clock.clone())
    }

    /// Schedule `func(args)` on the environment's scheduler.
    pub fn delay<A, R, F>(&self, func: F, wait: Duration, args: A) -> Result<()>
    where
        F: FnOnce(A) -> R + Send + 'static,
        A: Send + 'static,
    {
        decorators::delay(self.env.scheduler.as_ref(), func, wait, args)
    }
}

impl Default for Toolkit {
    fn default() -> Self {
        Self::real()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ShufflePolicy;
    use crate::decorators::MemoKeyPolicy;
    use crate::env::ManualScheduler;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn kit_with(config: KernelConfig) -> (Toolkit, ManualScheduler) {
        let scheduler = ManualScheduler::new();
        (Toolkit::new(config, KernelEnv::manual(&scheduler)), scheduler)
    }

    #[test]
    fn test_memoize_uses_configured_policy() {
        let (kit, _) = kit_with(KernelConfig {
            memo_key: MemoKeyPolicy::Structural,
            ..KernelConfig::default()
        });
        let memo = kit.memoize(|n: i32| n);
        assert_eq!(memo.policy(), MemoKeyPolicy::Structural);
    }

    #[test]
    fn test_reject_identity_shuffle_never_returns_input() {
        let (kit, _) = kit_with(KernelConfig::default());
        let input = [1, 2];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(kit.shuffle_using(&input, &mut rng), vec![2, 1]);
        }
    }

    #[test]
    fn test_uniform_shuffle_is_a_permutation() {
        let (kit, _) = kit_with(KernelConfig {
            shuffle_policy: ShufflePolicy::Uniform,
            ..KernelConfig::default()
        });
        let mut shuffled = kit.shuffle(&[3, 1, 2]);
        shuffled.sort();
        assert_eq!(shuffled, vec![1, 2, 3]);
    }

    #[test]
    fn test_delay_goes_through_env_scheduler() {
        let (kit, scheduler) = kit_with(KernelConfig::default());
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();

        kit.delay(
            move |()| flag.store(true, Ordering::SeqCst),
            Duration::from_millis(5),
            (),
        )
        .unwrap();

        assert_eq!(scheduler.pending(), 1);
        scheduler.advance(Duration::from_millis(5));
        assert!(fired.load(Ordering::SeqCst));
    }

    #[test]
    fn test_once_through_toolkit() {
        let kit = Toolkit::real();
        let mut first = kit.once(|s: &str| s.len());
        assert_eq!(first.call("abc"), 3);
        assert_eq!(first.call("abcdef"), 3);
    }
}

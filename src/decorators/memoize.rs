//! Cache a function's results by argument key.

use crate::core::canonical::CanonicalKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use tracing::trace;

/// How [`Memoize`] turns an argument list into a cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoKeyPolicy {
    /// Join the stringified arguments with commas. Cheap, but `(1, 2)`
    /// and `("1,2",)` land in the same slot.
    #[default]
    Joined,
    /// Type-tagged encoding. Distinct argument lists never collide.
    Structural,
}

impl MemoKeyPolicy {
    pub fn key_for<A: CanonicalKey + ?Sized>(&self, args: &A) -> String {
        match self {
            MemoKeyPolicy::Joined => args.canonical_key(),
            MemoKeyPolicy::Structural => args.structural_key(),
        }
    }
}

impl fmt::Display for MemoKeyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoKeyPolicy::Joined => write!(f, "joined"),
            MemoKeyPolicy::Structural => write!(f, "structural"),
        }
    }
}

impl FromStr for MemoKeyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "joined" => Ok(MemoKeyPolicy::Joined),
            "structural" => Ok(MemoKeyPolicy::Structural),
            other => Err(format!(
                "unknown memo key policy '{}' (expected joined or structural)",
                other
            )),
        }
    }
}

/// Callable that runs its function once per distinct argument key
///
/// The cache is never evicted; it lives as long as the `Memoize` does.
///
/// # Examples
///
/// ```
/// use utilkit::decorators::memoize;
///
/// let mut square = memoize(|n: u64| n * n);
/// assert_eq!(square.call(12), 144);
/// assert!(square.is_cached(&12));
/// assert_eq!(square.len(), 1);
/// ```
pub struct Memoize<A, R, F> {
    func: F,
    cache: HashMap<String, R>,
    policy: MemoKeyPolicy,
    _args: PhantomData<fn(A)>,
}

/// Memoize `func` with joined argument keys.
pub fn memoize<A, R, F>(func: F) -> Memoize<A, R, F>
where
    F: FnMut(A) -> R,
{
    memoize_with_policy(func, MemoKeyPolicy::default())
}

pub fn memoize_with_policy<A, R, F>(func: F, policy: MemoKeyPolicy) -> Memoize<A, R, F>
where
    F: FnMut(A) -> R,
{
    Memoize {
        func,
        cache: HashMap::new(),
        policy,
        _args: PhantomData,
    }
}

impl<A, R, F> Memoize<A, R, F>
where
    A: CanonicalKey,
    F: FnMut(A) -> R,
{
    pub fn call(&mut self, args: A) -> R
    where
        R: Clone,
    {
        let key = self.policy.key_for(&args);
        if let Some(hit) = self.cache.get(&key) {
            trace!(key = %key, "Memo cache hit");
            return hit.clone();
        }

        trace!(key = %key, "Memo cache miss");
        let result = (self.func)(args);
        self.cache.insert(key, result.clone());
        result
    }

    /// Whether a call with `args` would be answered from the cache
    pub fn is_cached(&self, args: &A) -> bool {
        self.cache.contains_key(&self.policy.key_for(args))
    }
}

impl<A, R, F> Memoize<A, R, F> {
    /// Number of cached keys
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn policy(&self) -> MemoKeyPolicy {
        self.policy
    }
}

impl<A, R, F> fmt::Debug for Memoize<A, R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoize")
            .field("policy", &self.policy)
            .field("cached", &self.cache.len())
            .finish()
    }
}

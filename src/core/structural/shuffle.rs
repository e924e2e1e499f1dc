//! Randomised reordering of sequences.

use crate::core::query::some;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// How [`shuffle_with`] treats a draw that reproduces the input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShufflePolicy {
    /// Redraw until the order differs from the input whenever another order
    /// exists. The output is never the input order, so it is not uniform.
    #[default]
    RejectIdentity,
    /// Plain Fisher-Yates; the input order is as likely as any other.
    Uniform,
}

impl fmt::Display for ShufflePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShufflePolicy::RejectIdentity => write!(f, "reject_identity"),
            ShufflePolicy::Uniform => write!(f, "uniform"),
        }
    }
}

impl FromStr for ShufflePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject_identity" | "reject-identity" => Ok(ShufflePolicy::RejectIdentity),
            "uniform" => Ok(ShufflePolicy::Uniform),
            other => Err(format!(
                "unknown shuffle policy '{}' (expected reject_identity or uniform)",
                other
            )),
        }
    }
}

/// Shuffle a copy of `array` with the thread-local generator and the
/// default policy. The input is never modified.
pub fn shuffle<T: Clone + PartialEq>(array: &[T]) -> Vec<T> {
    shuffle_with(array, &mut rand::rng(), ShufflePolicy::default())
}

/// Shuffle a copy of `array` using `rng` under `policy`.
pub fn shuffle_with<T, R>(array: &[T], rng: &mut R, policy: ShufflePolicy) -> Vec<T>
where
    T: Clone + PartialEq,
    R: Rng + ?Sized,
{
    let mut shuffled = array.to_vec();
    shuffled.shuffle(rng);

    if policy == ShufflePolicy::Uniform || !has_other_orderings(array) {
        return shuffled;
    }

    let mut redraws = 0usize;
    while shuffled.as_slice() == array {
        shuffled.shuffle(rng);
        redraws += 1;
    }
    if redraws > 0 {
        trace!(redraws, len = array.len(), "Rejected identity permutation");
    }
    shuffled
}

/// A sequence has another ordering unless it has fewer than two elements
/// or all of its elements are equal.
fn has_other_orderings<T: PartialEq>(array: &[T]) -> bool {
    match array.first() {
        Some(head) => some(array, |item| item != head),
        None => false,
    }
}

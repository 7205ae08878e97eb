//! Exact game-tree search
//!
//! Computes the true optimal worst-case and expected number of guesses for a
//! bank by trying every guess, partitioning the goals by feedback pattern,
//! and recursing. Exponential in the worst case: intended for small banks
//! (tens of words) and as ground truth for validating the heuristic scorer.
//!
//! Identical sub-banks recur throughout the tree, so both searches memoize
//! on the bank itself (canonical ordering makes structurally-equal banks
//! hash identically).

mod expected;
mod worstcase;

pub use expected::{expected_for_guess, optimal_expected};
pub use worstcase::{optimal_worstcase, worstcase_for_guess};

use crate::core::{Pattern, Word, WordBank};
use rustc_hash::FxHashMap;

/// Partition the bank's goals by the pattern they produce for a guess
///
/// Each bucket is exactly `bank.restrict(guess, pattern)` for its pattern:
/// the words a goal in that bucket would leave viable.
pub(crate) fn partition(guess: &Word, bank: &WordBank) -> FxHashMap<Pattern, WordBank> {
    let mut buckets: FxHashMap<Pattern, Vec<Word>> = FxHashMap::default();

    for goal in bank {
        let pattern = Pattern::evaluate(guess, goal);
        buckets.entry(pattern).or_default().push(goal.clone());
    }

    buckets
        .into_iter()
        .map(|(pattern, words)| (pattern, WordBank::from(words)))
        .collect()
}

//! Shannon entropy of feedback patterns
//!
//! Given a guess and a bank of possible goals, computes the expected
//! information gain of the guess in bits.

use crate::core::{Pattern, Word, WordBank};
use rustc_hash::FxHashMap;

/// Calculate the Shannon entropy of a guess against a bank
///
/// Buckets every goal in `bank` by the feedback pattern it would produce for
/// `word` and returns the entropy of the bucket-size distribution:
///
/// `H = -sum(p * log2(p))` with `p = bucket_size / |bank|`
///
/// Higher is better: the guess is expected to reveal more bits of
/// information. The value lies in `[0, log2(|bank|)]`, reaching the upper
/// bound only when every goal yields a distinct pattern. Non-empty bank is a
/// documented precondition; an empty bank yields 0.0.
///
/// # Examples
/// ```
/// use wordle_advisor::core::{Word, WordBank};
/// use wordle_advisor::scoring::pattern_entropy;
///
/// let bank = WordBank::from_iter([
///     Word::new("abide").unwrap(),
///     Word::new("speed").unwrap(),
/// ]);
///
/// // Two goals, two distinct patterns: exactly one bit
/// let bits = pattern_entropy(&Word::new("speed").unwrap(), &bank);
/// assert!((bits - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn pattern_entropy(word: &Word, bank: &WordBank) -> f64 {
    debug_assert!(!bank.is_empty(), "entropy needs a non-empty bank");
    if bank.is_empty() {
        return 0.0;
    }

    let buckets = pattern_buckets(word, bank);
    let total = bank.len() as f64;

    buckets
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Group bank goals by the pattern they produce with the guess
fn pattern_buckets(guess: &Word, bank: &WordBank) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for goal in bank {
        let pattern = Pattern::evaluate(guess, goal);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

//! Minimax worst-case search
//!
//! How many guesses does an optimal player need if an adversary may pick (or
//! re-pick) the goal to maximize the game length?

use super::partition;
use crate::core::{Word, WordBank};
use rustc_hash::FxHashMap;

/// Optimal worst-case number of guesses to win from this bank
///
/// Minimum over every candidate first guess in the bank of the maximum over
/// every possible goal of `1 + optimal_worstcase(restricted bank)`. A bank
/// of one word (or none) takes exactly one guess.
///
/// # Examples
/// ```
/// use wordle_advisor::core::{Word, WordBank};
/// use wordle_advisor::search::optimal_worstcase;
///
/// let bank = WordBank::from_iter([
///     Word::new("ab").unwrap(),
///     Word::new("cd").unwrap(),
/// ]);
///
/// // Either guess settles the goal; confirming it takes the second guess
/// assert_eq!(optimal_worstcase(&bank), 2);
/// ```
#[must_use]
pub fn optimal_worstcase(bank: &WordBank) -> usize {
    Minimax::default().optimal(bank)
}

/// Worst-case guesses when committing to a fixed first guess
///
/// The inner maximum of [`optimal_worstcase`] for one guess, which may come
/// from outside the bank. Play is optimal from the second guess on. Banks of
/// size ≤ 1 return the base value regardless of the guess.
#[must_use]
pub fn worstcase_for_guess(guess: &Word, bank: &WordBank) -> usize {
    if bank.len() <= 1 {
        return 1;
    }

    let mut search = Minimax::default();
    partition(guess, bank)
        .values()
        .map(|bucket| 1 + search.optimal(bucket))
        .max()
        .unwrap_or(1)
}

/// Recursive minimax with memoization on bank contents
#[derive(Default)]
struct Minimax {
    memo: FxHashMap<WordBank, usize>,
}

impl Minimax {
    fn optimal(&mut self, bank: &WordBank) -> usize {
        if bank.len() <= 1 {
            return 1;
        }
        if let Some(&cached) = self.memo.get(bank) {
            return cached;
        }

        // Guessing every word in turn bounds the answer
        let mut best = bank.len();
        for guess in bank {
            let mut worst = 1;
            for bucket in partition(guess, bank).values() {
                // Every bucket is strictly smaller than the bank: the guess
                // itself sits alone in the all-hit bucket
                worst = worst.max(1 + self.optimal(bucket));
                if worst >= best {
                    break;
                }
            }
            best = best.min(worst);
        }

        self.memo.insert(bank.clone(), best);
        best
    }
}

//! Expected-value search
//!
//! The true expected number of guesses for a uniformly-drawn goal under
//! optimal play, with branch-and-bound pruning of the inner average.

use super::partition;
use crate::core::{Word, WordBank};
use rustc_hash::FxHashMap;

/// Optimal expected number of guesses to win from this bank
///
/// Minimum over every candidate first guess in the bank of the average over
/// every possible goal (uniform, weight `1/|bank|`) of
/// `1 + optimal_expected(restricted bank)`. A bank of one word (or none)
/// takes exactly one guess.
///
/// The inner average stops early once its partial sum already exceeds the
/// best guess found so far; partial sums only grow, so pruning never changes
/// the result.
#[must_use]
pub fn optimal_expected(bank: &WordBank) -> f64 {
    ExpectedValue::default().optimal(bank)
}

/// Expected guesses when committing to a fixed first guess
///
/// The inner average of [`optimal_expected`] for one guess, which may come
/// from outside the bank. Play is optimal from the second guess on. Useful
/// for ranking a shortlist of openers without searching every first guess.
/// Banks of size ≤ 1 return the base value regardless of the guess.
#[must_use]
pub fn expected_for_guess(guess: &Word, bank: &WordBank) -> f64 {
    if bank.len() <= 1 {
        return 1.0;
    }

    let mut search = ExpectedValue::default();
    let total = bank.len() as f64;

    partition(guess, bank)
        .values()
        .map(|bucket| {
            let weight = bucket.len() as f64 / total;
            weight * (1.0 + search.optimal(bucket))
        })
        .sum()
}

/// Recursive expected-value search with memoization on bank contents
#[derive(Default)]
struct ExpectedValue {
    memo: FxHashMap<WordBank, f64>,
}

impl ExpectedValue {
    fn optimal(&mut self, bank: &WordBank) -> f64 {
        if bank.len() <= 1 {
            return 1.0;
        }
        if let Some(&cached) = self.memo.get(bank) {
            return cached;
        }

        let total = bank.len() as f64;
        // Guessing every word in turn bounds the answer
        let mut best = total;

        for guess in bank {
            let mut expected = 0.0;
            for bucket in partition(guess, bank).values() {
                let weight = bucket.len() as f64 / total;
                expected += weight * (1.0 + self.optimal(bucket));
                if expected >= best {
                    break;
                }
            }
            best = best.min(expected);
        }

        self.memo.insert(bank.clone(), best);
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::optimal_worstcase;

    fn bank(words: &[&str]) -> WordBank {
        words
            .iter()
            .map(|&text| Word::new(text).unwrap())
            .collect()
    }

    #[test]
    fn singleton_bank_takes_one_guess() {
        assert!((optimal_expected(&bank(&["abide"])) - 1.0).abs() < 1e-12);
        assert!((optimal_expected(&WordBank::default()) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn two_word_bank_averages_two_guesses() {
        // Either goal costs two guesses: one to settle, one to confirm
        assert!((optimal_expected(&bank(&["ab", "cd"])) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn disjoint_three_word_bank() {
        // Guessing any word wins outright with probability 1/3 and
        // otherwise leaves a two-word endgame: 1/3 * 2 + 2/3 * 3 = 8/3
        let expected = optimal_expected(&bank(&["ab", "cd", "ef"]));
        assert!((expected - 8.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn expected_never_exceeds_worstcase() {
        let banks = [
            bank(&["ab", "cd"]),
            bank(&["ab", "cd", "ef"]),
            bank(&["ace", "axx", "cxx", "exx"]),
            bank(&["crane", "slate", "irate", "grate"]),
        ];

        for b in &banks {
            let expected = optimal_expected(b);
            let worstcase = optimal_worstcase(b) as f64;
            assert!(
                expected <= worstcase + 1e-12,
                "expected {expected} > worst case {worstcase}"
            );
            assert!(expected >= 1.0);
        }
    }

    #[test]
    fn expected_for_guess_matches_optimal_on_best_guess() {
        let b = bank(&["ab", "cd", "ef"]);

        let best = b
            .iter()
            .map(|guess| expected_for_guess(guess, &b))
            .fold(f64::INFINITY, f64::min);
        assert!((best - optimal_expected(&b)).abs() < 1e-12);
    }

    #[test]
    fn expected_for_outside_guess_can_waste_a_turn() {
        let b = bank(&["ab", "cd"]);
        let outside = Word::new("xy").unwrap();

        let wasted = expected_for_guess(&outside, &b);
        assert!((wasted - (1.0 + optimal_expected(&b))).abs() < 1e-12);
    }

    #[test]
    fn informative_outside_guess_beats_wasteful_one() {
        // "ba" splits {ab, ad, bd} into three singletons; "xy" learns nothing
        let b = bank(&["ab", "ad", "bd"]);
        let sharp = expected_for_guess(&Word::new("ba").unwrap(), &b);
        let dull = expected_for_guess(&Word::new("xy").unwrap(), &b);

        assert!((sharp - 2.0).abs() < 1e-12);
        assert!(sharp < dull);
    }
}

//! Bank-wide guess ranking
//!
//! Orders the words of a bank by heuristic score or entropy. Each word's
//! evaluation is independent, so the loops parallelize with rayon.

use super::entropy::pattern_entropy;
use super::frequency::{letter_frequencies, positional_frequencies};
use super::heuristic::score_word;
use crate::core::{Word, WordBank};
use rayon::prelude::*;

/// Rank the bank's words by the combined frequency heuristic, best first
///
/// Returns at most `limit` `(word, score)` pairs, descending by score with
/// alphabetical tie-breaking for determinism. Assumes a uniform-length bank
/// (the positional table is sized from the first word).
#[must_use]
pub fn rank_by_score(bank: &WordBank, limit: usize) -> Vec<(Word, f64)> {
    let Some(first) = bank.words().first() else {
        return Vec::new();
    };

    let letters = letter_frequencies(bank);
    let positions = positional_frequencies(first.len(), bank);

    let mut ranked: Vec<(Word, f64)> = bank
        .words()
        .par_iter()
        .map(|word| {
            let score = score_word(word, &letters, &positions);
            (word.clone(), score)
        })
        .collect();

    sort_descending(&mut ranked);
    ranked.truncate(limit);
    ranked
}

/// Rank the bank's words by pattern entropy, best first
///
/// Returns at most `limit` `(word, bits)` pairs, descending by entropy with
/// alphabetical tie-breaking.
#[must_use]
pub fn rank_by_entropy(bank: &WordBank, limit: usize) -> Vec<(Word, f64)> {
    let mut ranked: Vec<(Word, f64)> = bank
        .words()
        .par_iter()
        .map(|word| {
            let bits = pattern_entropy(word, bank);
            (word.clone(), bits)
        })
        .collect();

    sort_descending(&mut ranked);
    ranked.truncate(limit);
    ranked
}

fn sort_descending(ranked: &mut [(Word, f64)]) {
    ranked.sort_by(|(w1, s1), (w2, s2)| s2.total_cmp(s1).then_with(|| w1.cmp(w2)));
}

//! Frequency-based guess heuristics
//!
//! Cheap probabilistic scores for ranking candidate guesses against the
//! uniform distribution implied by the remaining bank. These approximate the
//! chance a guess reveals something new; the exact signal lives in
//! [`super::entropy`].

use super::frequency::{LetterFrequencies, PositionalFrequencies, distinct_letters};
use crate::core::Word;

/// Probability that `word` shares at least one letter with a goal drawn from
/// the frequency model
///
/// Computed as `1 - prod(1 - f)` over the distinct letters of `word`.
/// Letters appearing in every bank word (frequency 1.0) are excluded from
/// the product: they are certain to match and carry no information.
#[must_use]
pub fn letter_match_probability(word: &Word, letter_freqs: &LetterFrequencies) -> f64 {
    let mut p = 1.0;
    for letter in distinct_letters(word) {
        let freq = letter_freqs.frequency(letter);
        if freq < 1.0 {
            p *= 1.0 - freq;
        }
    }
    1.0 - p
}

/// Probability that `word` matches a goal at one or more positions
///
/// Computed as `1 - prod(1 - f_i)` over the positions of `word`. The word
/// length must equal the table's word size.
#[must_use]
pub fn position_match_probability(word: &Word, positional_freqs: &PositionalFrequencies) -> f64 {
    debug_assert_eq!(
        word.len(),
        positional_freqs.word_size(),
        "word length must match the positional table"
    );

    let mut p = 1.0;
    for (i, &letter) in word.bytes().iter().enumerate() {
        p *= 1.0 - positional_freqs.frequency(i, letter);
    }
    1.0 - p
}

/// Combined information heuristic for a guess
///
/// Approximates the probability that the guess reveals new information about
/// the goal: either that a not-yet-universal letter is present, or that a
/// universal letter sits at a specific slot.
///
/// For each position: a letter with frequency 1.0 (present in every
/// remaining word) contributes its positional uncertainty `1 - f_pos` when
/// the slot is still undecided; any other letter contributes its presence
/// uncertainty `1 - f_letter`, once per distinct letter. The score is one
/// minus the product of the contributions.
#[must_use]
pub fn score_word(
    word: &Word,
    letter_freqs: &LetterFrequencies,
    positional_freqs: &PositionalFrequencies,
) -> f64 {
    let mut seen = [false; 26];
    let mut p = 1.0;

    for (i, &letter) in word.bytes().iter().enumerate() {
        let freq = letter_freqs.frequency(letter);
        if freq >= 1.0 {
            let positional = positional_freqs.frequency(i, letter);
            if positional < 1.0 {
                p *= 1.0 - positional;
            }
        } else {
            let slot = &mut seen[usize::from(letter - b'a')];
            if !*slot {
                *slot = true;
                p *= 1.0 - freq;
            }
        }
    }

    1.0 - p
}

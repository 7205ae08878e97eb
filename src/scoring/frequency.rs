//! Letter and positional frequency tables
//!
//! Frequency tables are immutable value objects computed from a bank and
//! passed explicitly to the heuristic scoring functions.

use crate::core::{Word, WordBank};
use rustc_hash::FxHashMap;

/// Fraction of bank words containing each letter at least once
///
/// Multiplicity-insensitive: a word with two E's counts once toward the E
/// frequency. Values are in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterFrequencies {
    freqs: FxHashMap<u8, f64>,
}

impl LetterFrequencies {
    /// Frequency of a letter, 0.0 if it appears in no bank word
    #[inline]
    #[must_use]
    pub fn frequency(&self, letter: u8) -> f64 {
        self.freqs.get(&letter).copied().unwrap_or(0.0)
    }
}

/// Per-position letter frequencies over a uniform-length bank
#[derive(Debug, Clone, PartialEq)]
pub struct PositionalFrequencies {
    positions: Vec<FxHashMap<u8, f64>>,
}

impl PositionalFrequencies {
    /// The word size this table was computed for
    #[inline]
    #[must_use]
    pub fn word_size(&self) -> usize {
        self.positions.len()
    }

    /// Frequency of a letter at a position, 0.0 if unseen there
    ///
    /// # Panics
    /// Panics if `position >= word_size`.
    #[inline]
    #[must_use]
    pub fn frequency(&self, position: usize, letter: u8) -> f64 {
        self.positions[position].get(&letter).copied().unwrap_or(0.0)
    }
}

/// Compute the letter frequency table for a bank
///
/// For each letter, the fraction of words in `bank` containing it at least
/// once. Non-empty bank is a documented precondition; an empty bank yields an
/// empty table.
#[must_use]
pub fn letter_frequencies(bank: &WordBank) -> LetterFrequencies {
    debug_assert!(!bank.is_empty(), "letter frequencies need a non-empty bank");

    let mut counts: FxHashMap<u8, usize> = FxHashMap::default();
    for word in bank {
        for letter in distinct_letters(word) {
            *counts.entry(letter).or_insert(0) += 1;
        }
    }

    let total = bank.len() as f64;
    let freqs = counts
        .into_iter()
        .map(|(letter, count)| (letter, count as f64 / total))
        .collect();

    LetterFrequencies { freqs }
}

/// Compute the per-position frequency table for a bank
///
/// Assumes all words in `bank` have length `word_size`; words of any other
/// length are skipped (callers should pre-filter by length).
#[must_use]
pub fn positional_frequencies(word_size: usize, bank: &WordBank) -> PositionalFrequencies {
    debug_assert!(
        !bank.is_empty(),
        "positional frequencies need a non-empty bank"
    );

    let mut counts: Vec<FxHashMap<u8, usize>> = vec![FxHashMap::default(); word_size];
    for word in bank {
        if word.len() != word_size {
            continue;
        }
        for (i, &letter) in word.bytes().iter().enumerate() {
            *counts[i].entry(letter).or_insert(0) += 1;
        }
    }

    let total = bank.len() as f64;
    let positions = counts
        .into_iter()
        .map(|slot| {
            slot.into_iter()
                .map(|(letter, count)| (letter, count as f64 / total))
                .collect()
        })
        .collect();

    PositionalFrequencies { positions }
}

/// Letters of a word with duplicates removed, in first-seen order
pub(crate) fn distinct_letters(word: &Word) -> impl Iterator<Item = u8> {
    let mut seen = [false; 26];
    word.bytes().iter().copied().filter(move |&letter| {
        let slot = &mut seen[usize::from(letter - b'a')];
        let fresh = !*slot;
        *slot = true;
        fresh
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank(words: &[&str]) -> WordBank {
        words
            .iter()
            .map(|&text| Word::new(text).unwrap())
            .collect()
    }

    #[test]
    fn letter_frequencies_are_fractions_of_words() {
        let freqs = letter_frequencies(&bank(&["ab", "ac"]));

        assert!((freqs.frequency(b'a') - 1.0).abs() < f64::EPSILON);
        assert!((freqs.frequency(b'b') - 0.5).abs() < f64::EPSILON);
        assert!((freqs.frequency(b'c') - 0.5).abs() < f64::EPSILON);
        assert!(freqs.frequency(b'z').abs() < f64::EPSILON);
    }

    #[test]
    fn letter_frequencies_ignore_multiplicity() {
        // "aa" counts once toward the A frequency
        let freqs = letter_frequencies(&bank(&["aa", "ab"]));
        assert!((freqs.frequency(b'a') - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn positional_frequencies_track_each_slot() {
        let freqs = positional_frequencies(2, &bank(&["ab", "ac"]));

        assert_eq!(freqs.word_size(), 2);
        assert!((freqs.frequency(0, b'a') - 1.0).abs() < f64::EPSILON);
        assert!((freqs.frequency(1, b'b') - 0.5).abs() < f64::EPSILON);
        assert!((freqs.frequency(1, b'c') - 0.5).abs() < f64::EPSILON);
        assert!(freqs.frequency(1, b'a').abs() < f64::EPSILON);
    }

    #[test]
    fn positional_frequencies_skip_other_lengths() {
        let freqs = positional_frequencies(2, &bank(&["ab", "abc"]));

        // Only "ab" contributes; the fraction is still over the whole bank
        assert!((freqs.frequency(0, b'a') - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn frequencies_stay_in_unit_range() {
        let b = bank(&["crane", "slate", "irate", "trace", "creed"]);
        let letters = letter_frequencies(&b);
        let positions = positional_frequencies(5, &b);

        for letter in b'a'..=b'z' {
            let f = letters.frequency(letter);
            assert!((0.0..=1.0).contains(&f));
            for slot in 0..5 {
                let p = positions.frequency(slot, letter);
                assert!((0.0..=1.0).contains(&p));
            }
        }
    }

    #[test]
    fn distinct_letters_first_seen_order() {
        let letters: Vec<u8> = distinct_letters(&Word::new("speed").unwrap()).collect();
        assert_eq!(letters, vec![b's', b'p', b'e', b'd']);
    }
}

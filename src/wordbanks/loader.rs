//! Word-list loading utilities
//!
//! Reads line-oriented word lists into a [`WordBank`]. Loading is an
//! external-collaborator concern; the core only ever sees finished banks.

use crate::core::{Word, WordBank};
use std::fs;
use std::io;
use std::path::Path;

/// Load a bank from a file, one word per line
///
/// Lines are trimmed; empty and invalid lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_advisor::wordbanks::load_from_file;
///
/// let bank = load_from_file("dictionaries/english-words.txt").unwrap();
/// println!("Loaded {} words", bank.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordBank> {
    let content = fs::read_to_string(path)?;

    let bank = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(bank)
}

/// Load a bank from a file, keeping only words of a fixed length
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_sized_from_file<P: AsRef<Path>>(path: P, word_size: usize) -> io::Result<WordBank> {
    let bank = load_from_file(path)?;
    Ok(filter_by_length(&bank, word_size))
}

/// Keep only the words of a given length
#[must_use]
pub fn filter_by_length(bank: &WordBank, word_size: usize) -> WordBank {
    bank.iter()
        .filter(|word| word.len() == word_size)
        .cloned()
        .collect()
}

/// Convert a string slice to a bank, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_advisor::wordbanks::bank_from_slice;
///
/// let bank = bank_from_slice(&["crane", "slate", "irate"]);
/// assert_eq!(bank.len(), 3);
/// ```
#[must_use]
pub fn bank_from_slice(slice: &[&str]) -> WordBank {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_from_slice_converts_valid_words() {
        let bank = bank_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(bank.len(), 3);
        assert!(bank.contains(&Word::new("crane").unwrap()));
    }

    #[test]
    fn bank_from_slice_skips_invalid() {
        let bank = bank_from_slice(&["crane", "sl4te", "", "slate"]);

        assert_eq!(bank.len(), 2);
        assert!(bank.contains(&Word::new("slate").unwrap()));
    }

    #[test]
    fn bank_from_slice_deduplicates() {
        let bank = bank_from_slice(&["crane", "CRANE", "crane"]);
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn filter_by_length_keeps_one_size() {
        let bank = bank_from_slice(&["crane", "ab", "slate", "abc"]);
        let sized = filter_by_length(&bank, 5);

        assert_eq!(sized.len(), 2);
        for word in &sized {
            assert_eq!(word.len(), 5);
        }
    }

    #[test]
    fn filter_by_length_can_empty_the_bank() {
        let bank = bank_from_slice(&["crane", "slate"]);
        assert!(filter_by_length(&bank, 7).is_empty());
    }
}

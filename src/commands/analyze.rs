//! Word analysis command
//!
//! Computes the heuristic and information-theoretic signals of one word
//! against the current bank.

use crate::core::{Word, WordBank};
use crate::scoring::{
    letter_frequencies, letter_match_probability, pattern_entropy, position_match_probability,
    positional_frequencies, score_word,
};

/// Result of analyzing a word against a bank
pub struct AnalysisReport {
    pub word: String,
    pub letter_match: f64,
    pub position_match: f64,
    pub score: f64,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub bank_size: usize,
}

/// Analyze a word against a bank of candidate goals
///
/// # Errors
///
/// Returns an error if the word is invalid, the bank is empty, or the word
/// length does not match the bank's word size.
pub fn analyze_word(word: &str, bank: &WordBank) -> Result<AnalysisReport, String> {
    let word_obj = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;

    let Some(first) = bank.words().first() else {
        return Err("The word bank is empty".to_string());
    };
    let word_size = first.len();

    if word_obj.len() != word_size {
        return Err(format!(
            "Word must have {word_size} letters to match the bank, got {}",
            word_obj.len()
        ));
    }

    let letters = letter_frequencies(bank);
    let positions = positional_frequencies(word_size, bank);

    let entropy = pattern_entropy(&word_obj, bank);
    let expected_remaining = bank.len() as f64 / entropy.exp2();

    Ok(AnalysisReport {
        word: word_obj.text().to_string(),
        letter_match: letter_match_probability(&word_obj, &letters),
        position_match: position_match_probability(&word_obj, &positions),
        score: score_word(&word_obj, &letters, &positions),
        entropy,
        expected_remaining,
        bank_size: bank.len(),
    })
}

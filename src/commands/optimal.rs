//! Exact search command
//!
//! Reports the optimal worst-case and expected guess counts for a bank, and
//! optionally the per-guess breakdown for every candidate opener. The search
//! is exponential, so the command is meant for small banks; the caller is
//! warned above [`EXACT_SEARCH_COMFORT_LIMIT`].

use crate::core::{Word, WordBank};
use crate::search::{expected_for_guess, optimal_expected, optimal_worstcase, worstcase_for_guess};
use indicatif::{ProgressBar, ProgressStyle};

/// Bank sizes above this take noticeably long to search exactly
pub const EXACT_SEARCH_COMFORT_LIMIT: usize = 20;

/// Exact-search figures for one candidate opener
pub struct GuessReport {
    pub word: String,
    pub worstcase: usize,
    pub expected: f64,
}

/// Result of the exact search over a bank
pub struct OptimalReport {
    pub bank_size: usize,
    pub worstcase: usize,
    pub expected: f64,
    pub per_guess: Vec<GuessReport>,
}

/// Run the exact search over a bank
///
/// With `per_guess`, every word in the bank is scored as a committed first
/// guess (worst case and expected), sorted by expected guesses ascending,
/// behind a progress bar.
///
/// # Errors
///
/// Returns an error if the bank is empty.
pub fn exact_report(bank: &WordBank, per_guess: bool) -> Result<OptimalReport, String> {
    if bank.is_empty() {
        return Err("The word bank is empty".to_string());
    }

    let worstcase = optimal_worstcase(bank);
    let expected = optimal_expected(bank);

    let per_guess = if per_guess {
        rank_openers(bank)
    } else {
        Vec::new()
    };

    Ok(OptimalReport {
        bank_size: bank.len(),
        worstcase,
        expected,
        per_guess,
    })
}

/// Score every bank word as a committed first guess
fn rank_openers(bank: &WordBank) -> Vec<GuessReport> {
    let pb = ProgressBar::new(bank.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut reports: Vec<GuessReport> = bank
        .iter()
        .map(|guess| {
            pb.set_message(guess.text().to_string());
            let report = GuessReport {
                word: guess.text().to_string(),
                worstcase: worstcase_for_guess(guess, bank),
                expected: expected_for_guess(guess, bank),
            };
            pb.inc(1);
            report
        })
        .collect();

    pb.finish_and_clear();

    reports.sort_by(|a, b| {
        a.expected
            .total_cmp(&b.expected)
            .then_with(|| a.word.cmp(&b.word))
    });
    reports
}

/// Check a guess string against the bank's word size and score it exactly
///
/// # Errors
///
/// Returns an error if the guess is invalid or the bank is empty.
pub fn exact_guess_report(guess: &str, bank: &WordBank) -> Result<GuessReport, String> {
    if bank.is_empty() {
        return Err("The word bank is empty".to_string());
    }

    let word = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    Ok(GuessReport {
        word: word.text().to_string(),
        worstcase: worstcase_for_guess(&word, bank),
        expected: expected_for_guess(&word, bank),
    })
}

//! Formatting utilities for terminal output

use crate::core::{Feedback, Pattern};
use colored::Colorize;

/// Render a guess with its feedback, coloring each letter
///
/// Hits are green, presents yellow, misses dimmed.
#[must_use]
pub fn colorize_guess(guess: &str, pattern: &Pattern) -> String {
    guess
        .chars()
        .zip(pattern.marks())
        .map(|(letter, &mark)| {
            let letter = letter.to_ascii_uppercase().to_string();
            match mark {
                Feedback::Hit => letter.bright_green().bold().to_string(),
                Feedback::Present => letter.bright_yellow().to_string(),
                Feedback::Miss => letter.bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a probability score as a bar
#[must_use]
pub fn score_bar(score: f64, width: usize) -> String {
    create_progress_bar(score, 1.0, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorized_guess_has_one_cell_per_letter() {
        colored::control::set_override(false);

        let pattern: Pattern = "X_x__".parse().unwrap();

        assert_eq!(colorize_guess("crane", &pattern), "CRANE");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn score_bar_is_unit_scaled() {
        assert_eq!(score_bar(0.5, 10), create_progress_bar(0.5, 1.0, 10));
    }
}

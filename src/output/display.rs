//! Display functions for command results

use super::formatters::{colorize_guess, score_bar};
use crate::commands::{AnalysisReport, OptimalReport, SimulationResult};
use colored::Colorize;

/// Print the result of word analysis
pub fn print_analysis_report(report: &AnalysisReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD ANALYSIS:".bright_cyan().bold(),
        report.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\nAgainst {} possible goals:", report.bank_size);
    println!(
        "   Score:        [{}] {}",
        score_bar(report.score, 30).green(),
        format!("{:.3}", report.score).bright_yellow()
    );
    println!("   Letter match: {:.3}", report.letter_match);
    println!("   Pos. match:   {:.3}", report.position_match);
    println!("   Entropy:      {:.3} bits", report.entropy);
    println!(
        "   Expected:     {:.1} candidates remain",
        report.expected_remaining
    );
}

/// Print the result of the exact search
pub fn print_optimal_report(report: &OptimalReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "EXACT SEARCH".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\nBank size:           {}", report.bank_size);
    println!(
        "Optimal worst case:  {} guesses",
        report.worstcase.to_string().bright_yellow().bold()
    );
    println!(
        "Optimal expected:    {} guesses",
        format!("{:.4}", report.expected).bright_yellow().bold()
    );

    if !report.per_guess.is_empty() {
        println!("\n{}", "Committed first guesses:".bright_cyan().bold());
        for entry in &report.per_guess {
            println!(
                "   {}  expected: {:.4}  worst case: {}",
                entry.word.to_uppercase(),
                entry.expected,
                entry.worstcase
            );
        }
    }
}

/// Print the steps of a simulated game
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Goal: {}",
        result.goal.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            colorize_guess(&step.word, &step.pattern),
            step.pattern
        );
        println!(
            "  Candidates: {} → {}",
            step.viable_before, step.viable_after
        );
    }

    println!();
    if result.won {
        println!(
            "{}",
            format!("Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

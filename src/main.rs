//! Word-Guessing Advisor - CLI
//!
//! Suggests guesses for Wordle-style games using frequency heuristics,
//! entropy, and exact game-tree search.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use wordle_advisor::{
    commands::{
        EXACT_SEARCH_COMFORT_LIMIT, SimulateConfig, analyze_word, exact_guess_report,
        exact_report, run_suggest, simulate_game,
    },
    core::WordBank,
    output::{print_analysis_report, print_optimal_report, print_simulation_result},
    wordbanks::load_sized_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_advisor",
    about = "Word-guessing advisor using frequency heuristics, entropy, and exact search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a line-oriented word-list file
    #[arg(short = 'w', long, global = true, default_value = "dictionaries/english-words.txt")]
    wordlist: String,

    /// Word size; other lengths in the list are ignored
    #[arg(short = 's', long, global = true, default_value = "5")]
    size: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive advisor (default): suggest guesses, read feedback, narrow the bank
    Suggest,

    /// Analyze the heuristic score and entropy of a specific word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Exact search: optimal worst-case and expected guess counts for the bank
    Optimal {
        /// Also score every bank word as a committed first guess
        #[arg(short, long)]
        per_guess: bool,

        /// Score a single committed first guess instead
        #[arg(short, long)]
        guess: Option<String>,

        /// Run even on banks large enough to make the search very slow
        #[arg(short, long)]
        force: bool,
    },

    /// Play a full game against a known goal, printing each step
    Simulate {
        /// The goal word to solve for
        goal: String,

        /// Accept any bank word as a guess, not just viable ones
        #[arg(short, long)]
        easy: bool,

        /// Maximum number of guesses
        #[arg(short, long, default_value = "6")]
        max_guesses: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let bank = load_sized_from_file(&cli.wordlist, cli.size)
        .with_context(|| format!("Failed to load word list from {}", cli.wordlist))?;

    if bank.is_empty() {
        bail!(
            "No words of length {} found in {}",
            cli.size,
            cli.wordlist
        );
    }

    // Default to the interactive advisor if no command given
    let command = cli.command.unwrap_or(Commands::Suggest);

    match command {
        Commands::Suggest => run_suggest(bank, cli.size).map_err(|e| anyhow::anyhow!(e)),
        Commands::Analyze { word } => run_analyze_command(&word, &bank),
        Commands::Optimal {
            per_guess,
            guess,
            force,
        } => run_optimal_command(&bank, per_guess, guess.as_deref(), force),
        Commands::Simulate {
            goal,
            easy,
            max_guesses,
        } => run_simulate_command(&goal, easy, max_guesses, &bank),
    }
}

fn run_analyze_command(word: &str, bank: &WordBank) -> Result<()> {
    let report = analyze_word(word, bank).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_report(&report);
    Ok(())
}

fn run_optimal_command(
    bank: &WordBank,
    per_guess: bool,
    guess: Option<&str>,
    force: bool,
) -> Result<()> {
    if bank.len() > EXACT_SEARCH_COMFORT_LIMIT && !force {
        bail!(
            "Bank has {} words; exact search is exponential and may take very long. \
             Re-run with --force to search anyway.",
            bank.len()
        );
    }

    if let Some(guess) = guess {
        let report = exact_guess_report(guess, bank).map_err(|e| anyhow::anyhow!(e))?;
        println!(
            "\n{}: expected {:.4} guesses, worst case {}",
            report.word.to_uppercase(),
            report.expected,
            report.worstcase
        );
        return Ok(());
    }

    let report = exact_report(bank, per_guess).map_err(|e| anyhow::anyhow!(e))?;
    print_optimal_report(&report);
    Ok(())
}

fn run_simulate_command(goal: &str, easy: bool, max_guesses: usize, bank: &WordBank) -> Result<()> {
    let config = SimulateConfig {
        goal: goal.to_string(),
        max_guesses: Some(max_guesses),
        hard_mode: !easy,
    };

    let result = simulate_game(&config, bank).map_err(|e| anyhow::anyhow!(e))?;
    print_simulation_result(&result);
    Ok(())
}

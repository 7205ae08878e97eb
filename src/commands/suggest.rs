//! Interactive advisor loop
//!
//! Line-based advisor without any game state of its own: it suggests
//! guesses, reads the feedback the real game produced, and narrows the bank.

use crate::core::{Pattern, Word, WordBank};
use crate::scoring::{pattern_entropy, rank_by_score};
use std::io::{self, Write};

const SUGGESTION_COUNT: usize = 10;

/// Run the interactive advisor
///
/// Each round prints the top suggestions by heuristic score (with entropy
/// annotation), reads the user's guess and the `X`/`x`/`_` feedback string,
/// and restricts the bank to the words consistent with that feedback.
///
/// # Errors
///
/// Returns an error if reading user input fails.
#[allow(clippy::too_many_lines)] // Interactive advisor loop requires detailed handling
pub fn run_suggest(bank: WordBank, word_size: usize) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Word Advisor - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest guesses and narrow the bank from your feedback.");
    println!("After each guess, enter the feedback pattern:\n");
    println!("  - Use X if a letter was in the correct location");
    println!("  - Use x if a letter is in the word, but in the wrong location");
    println!("  - Use _ if a letter is not in the word\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");

    let mut current = bank.clone();
    let mut history: Vec<WordBank> = Vec::new();
    let mut turn = 1;

    loop {
        match current.len() {
            0 => {
                println!("\nNo viable words remain! Your feedback may be incorrect.");
                println!("Type 'undo' to go back, or 'new' to start over.\n");

                match read_input("Command")?.as_str() {
                    "undo" => {
                        if let Some(previous) = history.pop() {
                            current = previous;
                            turn -= 1;
                            println!("Undone! Back to turn {turn}\n");
                        } else {
                            println!("Nothing to undo!\n");
                        }
                        continue;
                    }
                    "new" => {
                        current = bank.clone();
                        history.clear();
                        turn = 1;
                        println!("\nNew game started!\n");
                        continue;
                    }
                    "quit" | "q" | "exit" => return Ok(()),
                    _ => continue,
                }
            }
            1 => {
                let only = &current.words()[0];
                println!("\nThe only word left is {}!\n", only.text().to_uppercase());
                match read_input("Play again? (yes/no)")?.as_str() {
                    "yes" | "y" => {
                        current = bank.clone();
                        history.clear();
                        turn = 1;
                        println!("\nNew game started!\n");
                        continue;
                    }
                    _ => return Ok(()),
                }
            }
            _ => {}
        }

        println!("────────────────────────────────────────────────────────────");
        println!("Turn {turn}: {} candidates remaining", current.len());
        println!("────────────────────────────────────────────────────────────\n");

        println!("Best words:");
        for (i, (word, score)) in rank_by_score(&current, SUGGESTION_COUNT)
            .iter()
            .enumerate()
        {
            let bits = pattern_entropy(word, &current);
            println!(
                "{:2}. {}  score: {score:.3}  entropy: {bits:.3} bits",
                i + 1,
                word.text().to_uppercase()
            );
        }
        println!();

        // Read the guess that was actually played
        let guess = loop {
            let input = read_input("Guess a word")?;

            match input.as_str() {
                "quit" | "q" | "exit" => return Ok(()),
                "new" | "n" => {
                    current = bank.clone();
                    history.clear();
                    turn = 1;
                    println!("\nNew game started!\n");
                    break None;
                }
                "undo" | "u" => {
                    if let Some(previous) = history.pop() {
                        current = previous;
                        turn -= 1;
                        println!("Undone! Back to turn {turn}\n");
                    } else {
                        println!("Nothing to undo!\n");
                    }
                    break None;
                }
                text => match validate_guess(text, word_size, &current) {
                    Ok(word) => break Some(word),
                    Err(reason) => println!("{reason}\n"),
                },
            }
        };

        let Some(guess) = guess else {
            continue;
        };

        // Read the feedback the game produced for that guess
        let pattern = loop {
            let input = read_input("Enter word evaluation (X/x/_)")?;

            match input.as_str() {
                "quit" | "q" | "exit" => return Ok(()),
                text => match validate_pattern(text, word_size) {
                    Ok(pattern) => break pattern,
                    Err(reason) => println!("{reason}\n"),
                },
            }
        };

        if pattern.is_all_hits() {
            use colored::Colorize;

            println!(
                "\n{}",
                format!("Congrats! You found the goal word in {turn} guesses")
                    .bright_green()
                    .bold()
            );

            match read_input("Play again? (yes/no)")?.as_str() {
                "yes" | "y" => {
                    current = bank.clone();
                    history.clear();
                    turn = 1;
                    println!("\nNew game started!\n");
                }
                _ => return Ok(()),
            }
        } else {
            history.push(current.clone());
            current = current.restrict(&guess, &pattern);
            turn += 1;
        }
    }
}

/// Validate a guess against the advisor's rules
///
/// The guess must be alphabetic, of the configured length, and one of the
/// remaining viable words.
fn validate_guess(text: &str, word_size: usize, current: &WordBank) -> Result<Word, String> {
    let word = Word::new(text).map_err(|e| e.to_string())?;

    if word.len() != word_size {
        return Err(format!("{word} does not have a length of {word_size}"));
    }
    if !current.contains(&word) {
        return Err(format!("{word} is not one of the remaining possible words"));
    }

    Ok(word)
}

/// Parse a feedback string, checking symbols and length
fn validate_pattern(text: &str, word_size: usize) -> Result<Pattern, String> {
    let pattern: Pattern = text.parse().map_err(|e| format!("{e}"))?;

    if pattern.len() != word_size {
        return Err(format!(
            "Evaluation string must have a length of {word_size}"
        ));
    }

    Ok(pattern)
}

/// Get user input with a prompt
fn read_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

//! Game session state machine
//!
//! Holds per-game state (goal, bank, viable set, guess counter) and applies
//! one guess/feedback step at a time. Hard mode only changes which guesses
//! are accepted, never how the viable set is filtered.

use crate::core::{Pattern, Word, WordBank, WordError};
use std::fmt;

/// Per-session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Required guess length
    pub word_size: usize,
    /// Guess budget; `None` plays without a limit
    pub max_guesses: Option<usize>,
    /// Hard mode restricts guesses to the current viable set
    pub hard_mode: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            word_size: 5,
            max_guesses: Some(6),
            hard_mode: true,
        }
    }
}

/// Observable session states
///
/// The evaluation step between accepting a guess and arriving at the next
/// state is atomic, so only these three are observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the next guess
    AwaitingGuess,
    /// A guess reproduced the goal exactly
    Won,
    /// The guess budget ran out
    Exhausted,
}

/// Why a guess was rejected
///
/// A rejected guess leaves the session untouched: same state, same counter,
/// same viable set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    NotAWord(WordError),
    WrongLength { expected: usize, actual: usize },
    NotViable(String),
    NotInBank(String),
    Finished,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAWord(err) => write!(f, "{err}"),
            Self::WrongLength { expected, actual } => {
                write!(f, "Guess must have {expected} letters, got {actual}")
            }
            Self::NotViable(guess) => {
                write!(f, "{guess} is not one of the remaining viable words")
            }
            Self::NotInBank(guess) => write!(f, "{guess} is not in the word bank"),
            Self::Finished => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for GuessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotAWord(err) => Some(err),
            _ => None,
        }
    }
}

/// A single game against a fixed goal word
#[derive(Debug, Clone)]
pub struct GameSession {
    goal: Word,
    bank: WordBank,
    viable: WordBank,
    guesses_made: usize,
    state: GameState,
    config: SessionConfig,
}

impl GameSession {
    /// Start a session for `goal` over `bank`
    ///
    /// The viable set starts as the full bank and shrinks with every
    /// accepted guess.
    #[must_use]
    pub fn new(goal: Word, bank: WordBank, config: SessionConfig) -> Self {
        Self {
            goal,
            viable: bank.clone(),
            bank,
            guesses_made: 0,
            state: GameState::AwaitingGuess,
            config,
        }
    }

    /// The current state
    #[inline]
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Words still consistent with all feedback so far
    #[inline]
    #[must_use]
    pub fn viable(&self) -> &WordBank {
        &self.viable
    }

    /// Number of accepted guesses
    #[inline]
    #[must_use]
    pub fn guesses_made(&self) -> usize {
        self.guesses_made
    }

    /// The session configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Apply one guess
    ///
    /// Validates the guess (alphabetic, configured length, and membership in
    /// the viable set under hard mode or the full bank otherwise), then
    /// computes its feedback against the goal, narrows the viable set, and
    /// advances the state machine.
    ///
    /// # Errors
    /// Returns a [`GuessError`] describing the rejection. Rejection mutates
    /// nothing; the same guess can be corrected and retried.
    pub fn apply_guess(&mut self, guess: &str) -> Result<Pattern, GuessError> {
        if self.state != GameState::AwaitingGuess {
            return Err(GuessError::Finished);
        }

        let word = Word::new(guess).map_err(GuessError::NotAWord)?;

        if word.len() != self.config.word_size {
            return Err(GuessError::WrongLength {
                expected: self.config.word_size,
                actual: word.len(),
            });
        }

        if self.config.hard_mode {
            if !self.viable.contains(&word) {
                return Err(GuessError::NotViable(word.text().to_string()));
            }
        } else if !self.bank.contains(&word) {
            return Err(GuessError::NotInBank(word.text().to_string()));
        }

        let pattern = Pattern::evaluate(&word, &self.goal);
        self.viable = self.viable.restrict(&word, &pattern);
        self.guesses_made += 1;

        self.state = if pattern.is_all_hits() {
            GameState::Won
        } else if self
            .config
            .max_guesses
            .is_some_and(|max| self.guesses_made >= max)
        {
            GameState::Exhausted
        } else {
            GameState::AwaitingGuess
        };

        Ok(pattern)
    }
}

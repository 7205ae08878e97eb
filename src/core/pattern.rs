//! Feedback pattern calculation and representation
//!
//! A pattern encodes the per-position feedback from a guess:
//! - `Hit` - letter occupies its correct position in the goal word
//! - `Present` - letter occurs in the goal word at another, unconsumed position
//! - `Miss` - letter has no remaining unconsumed occurrence in the goal word
//!
//! The textual rendering uses one character per position: `X` = Hit,
//! `x` = Present, `_` = Miss.

use super::Word;
use std::fmt;

/// Feedback symbol for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter has no unconsumed occurrence in the goal word
    Miss,
    /// Letter occurs in the goal word, but not at this position
    Present,
    /// Letter is in the correct position
    Hit,
}

impl Feedback {
    /// The one-character external rendering of this symbol
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hit => 'X',
            Self::Present => 'x',
            Self::Miss => '_',
        }
    }

    /// Parse a single feedback character
    #[inline]
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' => Some(Self::Hit),
            'x' => Some(Self::Present),
            '_' => Some(Self::Miss),
            _ => None,
        }
    }
}

/// Error type for unparseable pattern strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternParseError {
    pub symbol: char,
}

impl fmt::Display for PatternParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} is not a valid feedback character (expected 'X', 'x', or '_')",
            self.symbol
        )
    }
}

impl std::error::Error for PatternParseError {}

/// Feedback pattern for a guess
///
/// An ordered sequence of per-position feedback symbols, one per guess letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    marks: Vec<Feedback>,
}

impl Pattern {
    /// Calculate the pattern when `guess` is guessed and `goal` is the target
    ///
    /// Implements the standard feedback rules, including proper handling of
    /// duplicate letters. Total for any two words: if the lengths differ, Hits
    /// are only possible over the overlapping prefix and the pattern length is
    /// always the guess length.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches (Hits) and remove them from the
    ///    goal's available letter pool
    /// 2. Second pass: mark present-but-wrong-position letters from the
    ///    remaining pool, left to right, consuming one occurrence per mark
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let goal = Word::new("slate").unwrap();
    /// let pattern = Pattern::evaluate(&guess, &goal);
    ///
    /// // C(miss) R(miss) A(hit) N(miss) E(hit)
    /// assert_eq!(pattern.to_string(), "__X_X");
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, goal: &Word) -> Self {
        let guess_bytes = guess.bytes();
        let goal_bytes = goal.bytes();

        let mut marks = vec![Feedback::Miss; guess_bytes.len()];
        let mut available = goal.letter_counts();

        // First pass: Hits over the overlapping prefix, consuming from the pool
        for i in 0..guess_bytes.len().min(goal_bytes.len()) {
            if guess_bytes[i] == goal_bytes[i] {
                marks[i] = Feedback::Hit;

                if let Some(count) = available.get_mut(&guess_bytes[i]) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: Presents from whatever the Hits left unconsumed
        for (i, letter) in guess_bytes.iter().enumerate() {
            if marks[i] == Feedback::Hit {
                continue;
            }
            if let Some(count) = available.get_mut(letter)
                && *count > 0
            {
                marks[i] = Feedback::Present;
                *count -= 1;
            }
        }

        Self { marks }
    }

    /// Number of positions in the pattern (equals the guess length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// True if the pattern has no positions
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// The per-position feedback symbols
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Feedback] {
        &self.marks
    }

    /// Check if every position is a Hit (the winning pattern)
    #[must_use]
    pub fn is_all_hits(&self) -> bool {
        !self.marks.is_empty() && self.marks.iter().all(|&m| m == Feedback::Hit)
    }

    /// Count positions marked with a given symbol
    #[must_use]
    pub fn count_of(&self, feedback: Feedback) -> usize {
        self.marks.iter().filter(|&&m| m == feedback).count()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.marks {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternParseError;

    /// Parse a pattern from its `X`/`x`/`_` rendering
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks = s
            .chars()
            .map(|c| Feedback::from_symbol(c).ok_or(PatternParseError { symbol: c }))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { marks })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordBank;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn pattern(guess: &str, goal: &str) -> String {
        Pattern::evaluate(&word(guess), &word(goal)).to_string()
    }

    #[test]
    fn pattern_self_is_all_hits() {
        for text in ["crane", "slate", "audio", "zzzzz", "aaaaa", "ab"] {
            let w = word(text);
            let p = Pattern::evaluate(&w, &w);
            assert!(p.is_all_hits());
            assert_eq!(p.count_of(Feedback::Hit), text.len());
        }
    }

    #[test]
    fn pattern_all_miss() {
        assert_eq!(pattern("abcde", "fghij"), "_____");
    }

    #[test]
    fn pattern_mixed_hits_and_misses() {
        // CRANE vs SLATE: A and E are hits, R is absent from SLATE
        assert_eq!(pattern("crane", "slate"), "__X_X");
    }

    #[test]
    fn pattern_duplicate_letters_limited_by_goal_count() {
        // SPEED vs ERASE: both E's find a counterpart (ERASE has two E's),
        // S is present, P and D are absent
        assert_eq!(pattern("speed", "erase"), "x_xx_");
    }

    #[test]
    fn pattern_duplicate_letters_hit_takes_priority() {
        // ROBOT vs FLOOR: second O is a hit, first O takes the remaining O
        assert_eq!(pattern("robot", "floor"), "xx_X_");
    }

    #[test]
    fn pattern_sheep_vs_abide() {
        // Single goal E is claimed by the leftmost unmatched guess E
        assert_eq!(pattern("sheep", "abide"), "__x__");
    }

    #[test]
    fn pattern_speed_vs_abide() {
        // E at index 2 claims the goal's E; D finds the goal's D; second E misses
        assert_eq!(pattern("speed", "abide"), "__x_x");
    }

    #[test]
    fn pattern_duplicate_letter_invariant() {
        let cases = [
            ("sheep", "abide"),
            ("speed", "abide"),
            ("speed", "erase"),
            ("robot", "floor"),
            ("aaaaa", "abide"),
            ("eexxe", "xeeyy"),
            ("banana", "ananas"),
        ];

        for (guess, goal) in cases {
            let g = word(guess);
            let t = word(goal);
            let p = Pattern::evaluate(&g, &t);

            for letter in b'a'..=b'z' {
                let marked = p
                    .marks()
                    .iter()
                    .zip(g.bytes())
                    .filter(|&(&m, &l)| l == letter && m != Feedback::Miss)
                    .count();
                let in_guess = g.bytes().iter().filter(|&&l| l == letter).count();
                let in_goal = t.bytes().iter().filter(|&&l| l == letter).count();

                assert!(
                    marked <= in_guess.min(in_goal),
                    "{guess} vs {goal}: letter {} marked {marked} times",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn pattern_length_always_matches_guess() {
        assert_eq!(pattern("speeds", "speed"), "XXXXX_");
        assert_eq!(pattern("ab", "abide"), "XX");
        assert_eq!(pattern("abide", "ab"), "XX___");
    }

    #[test]
    fn pattern_trailing_positions_never_hit() {
        // Guess positions beyond the goal length can be Present but not Hit
        let p = Pattern::evaluate(&word("dba"), &word("ab"));
        assert_eq!(p.to_string(), "_Xx");
    }

    #[test]
    fn pattern_parse_and_display_roundtrip() {
        for text in ["__X_X", "x_xx_", "XXXXX", "_____", "Xx_"] {
            let p: Pattern = text.parse().unwrap();
            assert_eq!(p.to_string(), text);
        }
    }

    #[test]
    fn pattern_parse_rejects_unknown_symbols() {
        let err = "X?X__".parse::<Pattern>().unwrap_err();
        assert_eq!(err.symbol, '?');
        assert!("GYGGY".parse::<Pattern>().is_err());
    }

    #[test]
    fn pattern_all_hits_detection() {
        assert!("XXXXX".parse::<Pattern>().unwrap().is_all_hits());
        assert!(!"XXXXx".parse::<Pattern>().unwrap().is_all_hits());
        assert!(!"".parse::<Pattern>().unwrap().is_all_hits());
    }

    #[test]
    fn pattern_distinguishes_goals() {
        // The {abide, speed} bank bucket check from the scoring layer's
        // entropy rests on these two patterns being distinct
        let bank = WordBank::from_iter([word("abide"), word("speed")]);
        let guess = word("speed");

        let patterns: Vec<String> = bank
            .iter()
            .map(|goal| Pattern::evaluate(&guess, goal).to_string())
            .collect();

        assert_eq!(patterns, vec!["__x_x", "XXXXX"]);
    }
}

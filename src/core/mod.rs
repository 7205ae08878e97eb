//! Core domain types
//!
//! This module contains the fundamental domain types with zero external
//! dependencies beyond hashing. All types here are pure, testable, and have
//! clear mathematical properties.

mod bank;
mod pattern;
mod word;

pub use bank::WordBank;
pub use pattern::{Feedback, Pattern, PatternParseError};
pub use word::{Word, WordError};

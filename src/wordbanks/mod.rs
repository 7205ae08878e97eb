//! Word banks
//!
//! Loading of candidate word banks from line-oriented word-list files.

mod loader;

pub use loader::{bank_from_slice, filter_by_length, load_from_file, load_sized_from_file};

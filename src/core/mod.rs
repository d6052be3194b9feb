//! Core domain types
//!
//! Words, letter sets, feedback patterns and the engine's error type.
//! Everything here is pure and independent of the search machinery.

mod error;
mod letters;
mod pattern;
mod word;

pub use error::SolverError;
pub use letters::{ALPHABET_SIZE, LetterSet};
pub use pattern::{Feedback, Pattern, evaluate};
pub use word::{MAX_WORD_LEN, Word, WordError};

/// A guess paired with the feedback it received
pub type GuessRecord = (Word, Pattern);

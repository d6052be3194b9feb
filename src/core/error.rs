//! Errors raised by the guess-selection engine

use thiserror::Error;

/// Precondition violations detected before any search work begins
///
/// None of these are retried by the engine; the game loop reports the round as a loss.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Guess, feedback and constraint state disagree on the word length
    #[error(
        "inconsistent lengths: guess has {guess} letters, feedback has {feedback} tiles, state tracks {positions} positions"
    )]
    InvalidState {
        guess: usize,
        feedback: usize,
        positions: usize,
    },

    /// The accumulated feedback rules out every dictionary word
    #[error("no dictionary words are consistent with the feedback so far")]
    NoCandidates,

    /// A word was compared against an answer of a different length
    #[error("expected a {expected}-letter word, got {actual} letters")]
    LengthMismatch { expected: usize, actual: usize },
}

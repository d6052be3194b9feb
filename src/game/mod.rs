//! Game orchestration
//!
//! A [`Game`] plays one opening guess and then alternates between asking a
//! [`FeedbackSource`] for the pattern and asking the [`GuessSelector`] for the
//! next guess, until the answer is found or the attempt budget runs out.
//!
//! # Examples
//! ```
//! use wordle_csp::core::Word;
//! use wordle_csp::game::Game;
//! use wordle_csp::solver::{EntropyStrategy, GuessSelector, SelectorConfig};
//! use wordle_csp::trie::Trie;
//! use wordle_csp::wordlists::loader::words_from_slice;
//!
//! let trie = Trie::build(&words_from_slice(&["abcde", "abcdf", "xyzzy"], None));
//! let opening = Word::new("abcde").unwrap();
//! let game = Game::new(GuessSelector::new(
//!     &trie,
//!     EntropyStrategy,
//!     SelectorConfig::default(),
//!     opening,
//! ));
//!
//! let outcome = game.solve(&Word::new("abcde").unwrap());
//! assert!(outcome.won);
//! assert_eq!(outcome.attempts_used, 1);
//! ```

use crate::constraints::ConstraintState;
use crate::core::{GuessRecord, Pattern, SolverError, Word, evaluate};
use crate::solver::{GuessSelector, Strategy};
use crate::trie::Trie;
use log::{debug, info, warn};
use std::fmt;

/// Where the feedback for each guess comes from
pub trait FeedbackSource {
    type Error: fmt::Display;

    /// Pattern produced by `guess`
    ///
    /// # Errors
    /// Implementation specific; the game ends as a loss when this fails.
    fn feedback(&mut self, guess: &Word) -> Result<Pattern, Self::Error>;
}

/// Feedback computed against a known answer
#[derive(Debug, Clone)]
pub struct SimulatedAnswer {
    answer: Word,
}

impl SimulatedAnswer {
    #[must_use]
    pub const fn new(answer: Word) -> Self {
        Self { answer }
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }
}

impl FeedbackSource for SimulatedAnswer {
    type Error = SolverError;

    fn feedback(&mut self, guess: &Word) -> Result<Pattern, SolverError> {
        evaluate(guess, &self.answer)
    }
}

/// Result of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub won: bool,
    /// Guesses actually played
    pub attempts_used: usize,
    pub history: Vec<GuessRecord>,
}

impl GameOutcome {
    fn finish(won: bool, history: Vec<GuessRecord>) -> Self {
        Self {
            won,
            attempts_used: history.len(),
            history,
        }
    }
}

/// Plays games with one selector
///
/// A game holds no per-game state itself, so `play` can be called from many
/// threads at once.
pub struct Game<'t, S: Strategy> {
    selector: GuessSelector<'t, S>,
}

impl<'t, S: Strategy> Game<'t, S> {
    pub const fn new(selector: GuessSelector<'t, S>) -> Self {
        Self { selector }
    }

    #[must_use]
    pub const fn selector(&self) -> &GuessSelector<'t, S> {
        &self.selector
    }

    /// Play one game against a feedback source
    ///
    /// Errors from the selector or the source are logged and reported as a loss.
    pub fn play<F: FeedbackSource>(&self, source: &mut F) -> GameOutcome {
        let max_attempts = self.selector.config().max_attempts;
        let mut state = ConstraintState::new(self.selector.opening().len());
        let mut history: Vec<GuessRecord> = Vec::with_capacity(max_attempts);

        while history.len() < max_attempts {
            let guess = match self.selector.select_next_guess(&history, &mut state) {
                Ok(guess) => guess,
                Err(err) => {
                    warn!("game aborted after {} guesses: {err}", history.len());
                    return GameOutcome::finish(false, history);
                }
            };

            let pattern = match source.feedback(&guess) {
                Ok(pattern) => pattern,
                Err(err) => {
                    warn!("no feedback for {guess}: {err}");
                    return GameOutcome::finish(false, history);
                }
            };

            if pattern.len() != guess.len() {
                let err = SolverError::InvalidState {
                    guess: guess.len(),
                    feedback: pattern.len(),
                    positions: state.word_len(),
                };
                warn!("game aborted after {} guesses: {err}", history.len());
                return GameOutcome::finish(false, history);
            }

            debug!("guess {}: {guess} {pattern}", history.len() + 1);
            history.push((guess, pattern));

            if pattern.is_perfect() {
                return GameOutcome::finish(true, history);
            }
        }

        GameOutcome::finish(false, history)
    }

    /// Play against a known answer
    #[must_use]
    pub fn solve(&self, answer: &Word) -> GameOutcome {
        self.play(&mut SimulatedAnswer::new(answer.clone()))
    }
}

/// Highest entropy word of length `len` over the whole dictionary
///
/// This is quadratic in the number of words of that length; compute it once and
/// pass the result to every selector.
///
/// # Errors
/// Returns [`SolverError::NoCandidates`] if the dictionary has no word of that length.
pub fn best_opening<S: Strategy>(
    trie: &Trie,
    len: usize,
    strategy: &S,
) -> Result<Word, SolverError> {
    let words = trie.words_of_len(len);
    let best = strategy
        .select_guess(&words, &words)
        .cloned()
        .ok_or(SolverError::NoCandidates)?;

    info!(
        "best opening among {} words of length {len}: {best}",
        words.len()
    );
    Ok(best)
}

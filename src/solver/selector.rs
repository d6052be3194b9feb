//! Next-guess selection
//!
//! Each round the selector folds the latest feedback into the constraint state,
//! enumerates the remaining candidates from the trie, and picks one of three
//! regimes:
//!
//! ```text
//! if candidates <= attempts left                      → EarlyExit (first candidate)
//! else if solved > (L-1) × late_game_fraction
//!      and candidates > 1 and not on the last attempt → LateGame (conflict scoring)
//! else                                                → EarlyGame (strategy, entropy)
//! ```

use super::heuristic::{LateGameScorer, TieBreak};
use super::strategy::Strategy;
use crate::constraints::ConstraintState;
use crate::core::{GuessRecord, SolverError, Word};
use crate::trie::Trie;
use log::debug;
use rustc_hash::FxHashSet;

/// Tunable selection parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorConfig {
    /// Total guesses allowed in a game
    pub max_attempts: usize,

    /// Late game starts once more than `(L-1) × late_game_fraction` positions are
    /// fixed (default 0.5)
    pub late_game_fraction: f64,

    /// Tie-break among equally scored late-game words
    pub tie_break: TieBreak,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            max_attempts: 6,
            late_game_fraction: 0.5,
            tie_break: TieBreak::default(),
        }
    }
}

impl SelectorConfig {
    /// Regime for the current round
    ///
    /// `attempts_used` counts guesses already made, so the guess being chosen is
    /// attempt `attempts_used + 1`.
    #[must_use]
    pub fn regime(
        &self,
        num_candidates: usize,
        solved: usize,
        word_len: usize,
        attempts_used: usize,
    ) -> Regime {
        let remaining = self.max_attempts.saturating_sub(attempts_used);
        if num_candidates <= remaining {
            return Regime::EarlyExit;
        }

        let threshold = word_len.saturating_sub(1) as f64 * self.late_game_fraction;
        if solved as f64 > threshold && num_candidates > 1 && attempts_used + 1 < self.max_attempts
        {
            Regime::LateGame
        } else {
            Regime::EarlyGame
        }
    }
}

/// Which ranking a round uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// Few enough candidates to try them all in order
    EarlyExit,
    /// Most positions fixed: conflict-aware coverage scoring
    LateGame,
    /// Entropy (or another `Strategy`) over the candidates
    EarlyGame,
}

/// Chooses guesses for games played against one dictionary
///
/// The selector only borrows the trie, so one trie can back any number of
/// selectors and games at once.
pub struct GuessSelector<'t, S: Strategy> {
    trie: &'t Trie,
    strategy: S,
    config: SelectorConfig,
    opening: Word,
    /// Every trie word with the opening's length, the late-game guess pool
    dictionary: Vec<Word>,
}

impl<'t, S: Strategy> GuessSelector<'t, S> {
    /// Create a selector
    ///
    /// `opening` is played in round 1; see [`crate::game::best_opening`] to compute it.
    /// Its length fixes the word length of every game the selector plays.
    pub fn new(trie: &'t Trie, strategy: S, config: SelectorConfig, opening: Word) -> Self {
        let dictionary = trie.words_of_len(opening.len());
        Self {
            trie,
            strategy,
            config,
            opening,
            dictionary,
        }
    }

    #[must_use]
    pub const fn trie(&self) -> &'t Trie {
        self.trie
    }

    #[must_use]
    pub const fn config(&self) -> &SelectorConfig {
        &self.config
    }

    #[must_use]
    pub const fn opening(&self) -> &Word {
        &self.opening
    }

    /// Pick the next guess
    ///
    /// With an empty history this is the opening guess. Otherwise the last record
    /// is folded into `state` (earlier records must already have been applied by
    /// previous calls), the candidates are recomputed, and a regime is chosen.
    ///
    /// # Errors
    /// - [`SolverError::InvalidState`] if the last guess, its pattern and `state`
    ///   disagree on the word length
    /// - [`SolverError::NoCandidates`] if no dictionary word fits the feedback
    pub fn select_next_guess(
        &self,
        history: &[GuessRecord],
        state: &mut ConstraintState,
    ) -> Result<Word, SolverError> {
        let Some((last_guess, last_pattern)) = history.last() else {
            return Ok(self.opening.clone());
        };

        state.apply_feedback(last_guess, *last_pattern)?;

        let guessed: Vec<Word> = history.iter().map(|(word, _)| word.clone()).collect();
        let candidates = state.candidates(self.trie, &guessed);
        state.contract_to(&candidates);

        if candidates.is_empty() {
            debug!("round {}: no candidates left ({state})", history.len() + 1);
            return Err(SolverError::NoCandidates);
        }

        let word_len = state.word_len();
        let regime = self.config.regime(
            candidates.len(),
            state.solved_count(),
            word_len,
            history.len(),
        );
        debug!(
            "round {}: {} candidates, {} solved, {regime:?} ({state})",
            history.len() + 1,
            candidates.len(),
            state.solved_count(),
        );

        let guess = match regime {
            Regime::EarlyExit => candidates.first().cloned(),
            Regime::LateGame => self
                .late_game_guess(state, &candidates, &guessed)
                .or_else(|| self.strategy.select_guess(&candidates, &candidates).cloned()),
            Regime::EarlyGame => self.strategy.select_guess(&candidates, &candidates).cloned(),
        };

        guess.ok_or(SolverError::NoCandidates)
    }

    /// Best coverage word among the candidates and the whole dictionary
    fn late_game_guess(
        &self,
        state: &ConstraintState,
        candidates: &[Word],
        guessed: &[Word],
    ) -> Option<Word> {
        let uncached;
        let dictionary = if state.word_len() == self.opening.len() {
            &self.dictionary
        } else {
            uncached = self.trie.words_of_len(state.word_len());
            &uncached
        };

        let mut seen: FxHashSet<&Word> = guessed.iter().collect();
        let pool: Vec<&Word> = candidates
            .iter()
            .chain(dictionary)
            .filter(|word| seen.insert(word))
            .collect();

        let scorer = LateGameScorer::new(state.domains(), candidates, self.config.tie_break);
        let (best, score) = scorer.best(&pool)?;
        debug!(
            "late game: unsolved {} -> {best} scores {score:?}",
            scorer.unsolved()
        );
        Some(best.clone())
    }
}

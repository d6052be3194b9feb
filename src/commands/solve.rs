//! Word solving command
//!
//! Plays one simulated game and annotates every guess with the number of
//! candidates before and after its feedback.

use crate::constraints::ConstraintState;
use crate::core::{GuessRecord, Pattern, Word};
use crate::game::{Game, GameOutcome};
use crate::solver::Strategy;
use crate::trie::Trie;
use log::warn;

/// Result of solving a word
pub struct SolveResult {
    pub answer: Word,
    pub outcome: GameOutcome,
    pub steps: Vec<GuessStep>,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve `answer` with the given game
#[must_use]
pub fn solve_word<S: Strategy>(game: &Game<'_, S>, answer: &Word) -> SolveResult {
    let outcome = game.solve(answer);
    let steps = annotate(game.selector().trie(), answer.len(), &outcome.history);

    SolveResult {
        answer: answer.clone(),
        outcome,
        steps,
    }
}

/// Replay the history and count the dictionary words consistent with each prefix
///
/// A record that cannot be replayed is logged and ends the annotation there.
fn annotate(trie: &Trie, word_len: usize, history: &[GuessRecord]) -> Vec<GuessStep> {
    let mut state = ConstraintState::new(word_len);
    let mut candidates_before = trie.words_of_len(word_len).len();
    let mut steps = Vec::with_capacity(history.len());

    for (word, pattern) in history {
        if let Err(err) = state.apply_feedback(word, *pattern) {
            warn!("cannot replay {word} {pattern}: {err}");
            break;
        }
        let candidates_after = state.candidates(trie, &[]).len();

        steps.push(GuessStep {
            word: word.clone(),
            pattern: *pattern,
            candidates_before,
            candidates_after,
        });
        candidates_before = candidates_after;
    }

    steps
}

//! Late-game conflict-aware scoring
//!
//! Once more than half the positions are fixed, the remaining candidates usually
//! differ in only one or two letters ("_ight" words, for example). Guessing them one
//! by one can run out of attempts, so instead the solver looks for any dictionary
//! word that covers as many still-open letters as possible at once.
//!
//! A word scores one point per distinct unsolved letter it contains. Words whose
//! letters at the open positions repeat more than one letter of some candidate's
//! open-position letters are scored 0: they would only re-test a combination that
//! is already known to be ambiguous.

use crate::core::{LetterSet, Word};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// How ties between equally scored words are broken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Prefer words whose first letter is allowed by the first open domain
    #[default]
    FirstUnsolvedDomain,
    /// Keep the pool order
    None,
}

/// Score of one word: unsolved-letter coverage, then the tie-break flag
pub type LateGameScore = (usize, bool);

/// Scorer built from the current domains and candidates
#[derive(Debug, Clone)]
pub struct LateGameScorer {
    open_positions: Vec<usize>,
    unsolved: LetterSet,
    conflicts: Vec<LetterSet>,
    priority: LetterSet,
}

impl LateGameScorer {
    #[must_use]
    pub fn new(domains: &[LetterSet], candidates: &[Word], tie_break: TieBreak) -> Self {
        let open_positions: Vec<usize> = domains
            .iter()
            .enumerate()
            .filter(|(_, d)| d.len() > 1)
            .map(|(i, _)| i)
            .collect();

        let mut seen = FxHashSet::default();
        let conflicts = candidates
            .iter()
            .map(|word| letters_at(word, &open_positions))
            .filter(|tuple| seen.insert(*tuple))
            .collect();

        let priority = match tie_break {
            TieBreak::FirstUnsolvedDomain => open_positions
                .first()
                .map_or(LetterSet::EMPTY, |&i| domains[i]),
            TieBreak::None => LetterSet::EMPTY,
        };

        Self {
            open_positions,
            unsolved: unsolved_letters(domains),
            conflicts,
            priority,
        }
    }

    /// Letters still needed by some open position
    #[must_use]
    pub const fn unsolved(&self) -> LetterSet {
        self.unsolved
    }

    #[must_use]
    pub fn score(&self, word: &Word) -> LateGameScore {
        let own = letters_at(word, &self.open_positions);
        let conflicting = self
            .conflicts
            .iter()
            .any(|tuple| tuple.intersection(own).len() > 1);

        let coverage = if conflicting {
            0
        } else {
            word.letter_set().intersection(self.unsolved).len()
        };

        let starts_with_priority = word
            .chars()
            .first()
            .is_some_and(|&first| self.priority.contains(first));

        (coverage, starts_with_priority)
    }

    /// Highest scoring word of the pool; the earliest wins among equals
    #[must_use]
    pub fn best<'a>(&self, pool: &[&'a Word]) -> Option<(&'a Word, LateGameScore)> {
        let scores: Vec<LateGameScore> = pool.par_iter().map(|word| self.score(word)).collect();

        pool.iter()
            .zip(scores)
            .fold(None, |best, (&word, score)| match best {
                Some((_, best_score)) if best_score >= score => best,
                _ => Some((word, score)),
            })
    }
}

/// Distinct letters at the given positions
fn letters_at(word: &Word, positions: &[usize]) -> LetterSet {
    positions.iter().map(|&i| word.char_at(i)).collect()
}

/// Letters of the open domains, one occurrence per domain, minus one occurrence
/// for each fixed position holding that letter
fn unsolved_letters(domains: &[LetterSet]) -> LetterSet {
    let mut counts = [0usize; crate::core::ALPHABET_SIZE];

    for domain in domains.iter().filter(|d| d.len() > 1) {
        for letter in domain.iter() {
            counts[usize::from(letter - b'a')] += 1;
        }
    }
    for letter in domains.iter().filter_map(|d| d.only()) {
        let count = &mut counts[usize::from(letter - b'a')];
        *count = count.saturating_sub(1);
    }

    (b'a'..=b'z')
        .filter(|&letter| counts[usize::from(letter - b'a')] > 0)
        .collect()
}

//! Per-position letter domains accumulated from feedback
//!
//! A `ConstraintState` belongs to exactly one game. It changes in two ways:
//! - [`ConstraintState::apply_feedback`] folds in one guess and its pattern
//! - [`ConstraintState::contract_to`] narrows every open domain to the letters
//!   that still occur at that position among the current candidates
//!
//! # Examples
//! ```
//! use wordle_csp::constraints::ConstraintState;
//! use wordle_csp::core::{Pattern, Word};
//!
//! let mut state = ConstraintState::new(5);
//! let guess = Word::new("crane").unwrap();
//! let pattern = Pattern::from_str("G-Y--").unwrap();
//! state.apply_feedback(&guess, pattern).unwrap();
//!
//! assert_eq!(state.domain(0).only(), Some(b'c'));
//! assert!(!state.domain(2).contains(b'a'));
//! assert!(state.known_present().contains(b'a'));
//! assert!(!state.domain(4).contains(b'e'));
//! ```

use crate::core::{Feedback, LetterSet, Pattern, SolverError, Word};
use crate::trie::Trie;
use std::fmt;

/// Letter domains for each position plus the letters known to be present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintState {
    domains: Vec<LetterSet>,
    known_present: LetterSet,
}

impl ConstraintState {
    /// Fresh state where every position allows the whole alphabet
    #[must_use]
    pub fn new(word_len: usize) -> Self {
        Self {
            domains: vec![LetterSet::ALPHABET; word_len],
            known_present: LetterSet::EMPTY,
        }
    }

    #[must_use]
    pub fn word_len(&self) -> usize {
        self.domains.len()
    }

    #[must_use]
    pub fn domains(&self) -> &[LetterSet] {
        &self.domains
    }

    /// Domain at one position
    ///
    /// # Panics
    /// Panics if `position >= word_len()`
    #[must_use]
    pub fn domain(&self, position: usize) -> LetterSet {
        self.domains[position]
    }

    /// Letters known to be in the answer whose position is still open
    #[must_use]
    pub const fn known_present(&self) -> LetterSet {
        self.known_present
    }

    /// Number of positions narrowed to a single letter
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.domains.iter().filter(|d| d.is_singleton()).count()
    }

    /// True if some position has no letter left
    #[must_use]
    pub fn is_contradictory(&self) -> bool {
        self.domains.iter().any(|d| d.is_empty())
    }

    /// Fold one guess and its feedback into the domains
    ///
    /// Correct tiles are applied first, then the rest, so a letter that is both
    /// correct and present in the same guess stays known present.
    ///
    /// - Correct: the position is fixed to the letter, which stops being "known present"
    /// - Present: the letter is removed from this position and recorded as present
    /// - Absent: the letter is removed from this position, and afterwards from every
    ///   open domain unless it is known to be present elsewhere (an absent tile for a
    ///   present letter only means there is no further copy)
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidState`] if the guess, the pattern and the state
    /// disagree on the word length. Nothing is modified in that case.
    pub fn apply_feedback(&mut self, guess: &Word, pattern: Pattern) -> Result<(), SolverError> {
        if guess.len() != pattern.len() || guess.len() != self.word_len() {
            return Err(SolverError::InvalidState {
                guess: guess.len(),
                feedback: pattern.len(),
                positions: self.word_len(),
            });
        }

        let tiles: Vec<(usize, u8, Feedback)> = guess
            .chars()
            .iter()
            .zip(pattern.iter())
            .enumerate()
            .map(|(i, (&letter, tile))| (i, letter, tile))
            .collect();

        for &(i, letter, _) in tiles.iter().filter(|t| t.2 == Feedback::Correct) {
            self.domains[i] = LetterSet::single(letter);
            self.known_present.remove(letter);
        }

        let mut excluded = LetterSet::EMPTY;
        for &(i, letter, tile) in &tiles {
            match tile {
                Feedback::Correct => {}
                Feedback::Present => {
                    self.domains[i].remove(letter);
                    self.known_present.insert(letter);
                }
                Feedback::Absent => {
                    self.domains[i].remove(letter);
                    excluded.insert(letter);
                }
            }
        }

        let excluded = excluded.difference(self.known_present);
        for domain in &mut self.domains {
            if domain.len() > 1 {
                *domain = domain.difference(excluded);
            }
        }

        Ok(())
    }

    /// Dictionary words consistent with the current domains and known letters,
    /// skipping anything in `exclude`
    #[must_use]
    pub fn candidates(&self, trie: &Trie, exclude: &[Word]) -> Vec<Word> {
        let mut found = trie.search_with_constraints(self.known_present, &self.domains);
        if !exclude.is_empty() {
            found.retain(|word| !exclude.contains(word));
        }
        found
    }

    /// Replace every open domain by the letters that occur at that position among
    /// `candidates`
    ///
    /// Singleton domains are left untouched. Applying this twice with the same
    /// candidates changes nothing the second time.
    pub fn contract_to(&mut self, candidates: &[Word]) {
        for (i, domain) in self.domains.iter_mut().enumerate() {
            if domain.len() > 1 {
                *domain = candidates.iter().map(|word| word.char_at(i)).collect();
            }
        }
    }
}

impl fmt::Display for ConstraintState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, domain) in self.domains.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match domain.only() {
                Some(letter) => write!(f, "{}", letter as char)?,
                None => write!(f, "{domain}")?,
            }
        }
        write!(f, " +{}", self.known_present)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;
    use crate::wordlists::loader::words_from_slice;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn apply(state: &mut ConstraintState, guess: &str, answer: &str) {
        let guess = word(guess);
        let pattern = evaluate(&guess, &word(answer)).unwrap();
        state.apply_feedback(&guess, pattern).unwrap();
    }

    #[test]
    fn fresh_state_allows_everything() {
        let state = ConstraintState::new(5);
        assert_eq!(state.word_len(), 5);
        assert_eq!(state.solved_count(), 0);
        assert!(state.domains().iter().all(|d| *d == LetterSet::ALPHABET));
        assert!(state.known_present().is_empty());
    }

    #[test]
    fn correct_fixes_position_and_clears_known_present() {
        let mut state = ConstraintState::new(5);
        apply(&mut state, "crane", "abbey"); // 'a' present at 2
        assert!(state.known_present().contains(b'a'));

        apply(&mut state, "about", "abbey"); // 'a' correct at 0
        assert_eq!(state.domain(0).only(), Some(b'a'));
        assert!(!state.known_present().contains(b'a'));
    }

    #[test]
    fn absent_letters_leave_every_open_domain() {
        let mut state = ConstraintState::new(5);
        apply(&mut state, "crane", "light");

        for letter in b"crane" {
            assert!(state.domains().iter().all(|d| !d.contains(*letter)));
        }
        assert_eq!(state.domain(0).len(), 21);
    }

    #[test]
    fn absent_duplicate_of_present_letter_stays_possible_elsewhere() {
        // SPEED vs ABIDE: first E present, second E absent (only one E in ABIDE)
        let mut state = ConstraintState::new(5);
        apply(&mut state, "speed", "abide");

        assert!(state.known_present().contains(b'e'));
        // Not at either guessed position...
        assert!(!state.domain(2).contains(b'e'));
        assert!(!state.domain(3).contains(b'e'));
        // ...but still possible where it actually is
        assert!(state.domain(4).contains(b'e'));
        assert!(state.domain(0).contains(b'e'));
        // D is present too, so it must not be removed globally
        assert!(state.known_present().contains(b'd'));
        assert!(!state.domain(1).contains(b'p'));
    }

    #[test]
    fn present_copy_before_correct_copy_stays_known_present() {
        // EMCEE vs FENCE: first E present, second absent, last correct
        let words = words_from_slice(&["emcee", "fence", "hence", "pence"], None);
        let trie = Trie::build(&words);
        let mut state = ConstraintState::new(5);
        apply(&mut state, "emcee", "fence");

        assert!(state.known_present().contains(b'e'));
        assert!(state.domain(1).contains(b'e'));
        assert_eq!(state.domain(4).only(), Some(b'e'));
        assert!(state.candidates(&trie, &[]).contains(&word("fence")));
    }

    #[test]
    fn singleton_domains_survive_absent_subtraction() {
        // GEESE vs THOSE: E correct at 4, extra E's absent
        let mut state = ConstraintState::new(5);
        apply(&mut state, "geese", "those");

        assert_eq!(state.domain(4).only(), Some(b'e'));
        assert_eq!(state.domain(3).only(), Some(b's'));
        assert!(!state.domain(0).contains(b'e'));
        assert_eq!(state.solved_count(), 2);
    }

    #[test]
    fn length_mismatch_is_rejected_without_changes() {
        let mut state = ConstraintState::new(5);
        let before = state.clone();

        let err = state
            .apply_feedback(&word("abcd"), Pattern::from_str("----").unwrap())
            .unwrap_err();
        assert_eq!(
            err,
            SolverError::InvalidState {
                guess: 4,
                feedback: 4,
                positions: 5
            }
        );

        let err = state
            .apply_feedback(&word("abcde"), Pattern::from_str("----").unwrap())
            .unwrap_err();
        assert!(matches!(err, SolverError::InvalidState { feedback: 4, .. }));
        assert_eq!(state, before);
    }

    #[test]
    fn candidates_respect_domains_required_letters_and_exclusions() {
        let words = words_from_slice(&["crane", "crate", "grate", "irate", "slate"], None);
        let trie = Trie::build(&words);
        let mut state = ConstraintState::new(5);
        apply(&mut state, "crane", "grate");

        let found = state.candidates(&trie, &[]);
        let texts: Vec<&str> = found.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["grate", "irate"]);

        let found = state.candidates(&trie, &[word("grate")]);
        assert_eq!(found, vec![word("irate")]);
    }

    #[test]
    fn contraction_narrows_open_domains_to_candidate_letters() {
        let mut state = ConstraintState::new(5);
        apply(&mut state, "crane", "grate");
        let candidates = vec![word("grate"), word("irate")];

        state.contract_to(&candidates);
        assert_eq!(state.domain(0).to_string(), "{gi}");
        assert_eq!(state.domain(2).only(), Some(b'a'));
        assert_eq!(state.domain(3).only(), Some(b't'));
    }

    #[test]
    fn contraction_is_idempotent() {
        let mut state = ConstraintState::new(5);
        apply(&mut state, "slate", "crane");
        let candidates = words_from_slice(&["crane", "frame", "brake", "drape"], None);

        state.contract_to(&candidates);
        let once = state.clone();
        state.contract_to(&candidates);
        assert_eq!(state, once);
    }

    #[test]
    fn contraction_with_no_candidates_empties_open_domains() {
        let mut state = ConstraintState::new(3);
        state.contract_to(&[]);
        assert!(state.is_contradictory());
    }

    #[test]
    fn display_shows_solved_and_open_positions() {
        let mut state = ConstraintState::new(3);
        state
            .apply_feedback(&word("abc"), Pattern::from_str("G--").unwrap())
            .unwrap();
        state.contract_to(&[word("axy"), word("azy")]);
        assert_eq!(state.to_string(), "a {xz} y +{}");
    }
}

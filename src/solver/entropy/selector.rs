//! Entropy-maximising word selection
//!
//! Selects words that maximize Shannon entropy (expected information gain).

use super::calculator::calculate_entropy;
use crate::core::Word;
use rayon::prelude::*;

/// Select best guess by maximizing entropy
///
/// Every guess is scored independently in parallel. Ties resolve to the guess
/// that comes first in `guess_pool`, exactly as a sequential left-to-right scan
/// keeping only strictly better scores would.
///
/// Returns `None` if the guess pool is empty.
///
/// # Examples
/// ```
/// use wordle_csp::core::Word;
/// use wordle_csp::solver::entropy::select_best_guess;
///
/// let guesses = vec![
///     Word::new("aaaaa").unwrap(),
///     Word::new("aeros").unwrap(),
/// ];
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let (best, entropy) = select_best_guess(&guesses, &candidates).unwrap();
/// assert_eq!(best.text(), "aeros");
/// assert!(entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &'a [Word],
    candidates: &[Word],
) -> Option<(&'a Word, f64)> {
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| (index, calculate_entropy(guess, candidates)))
        .reduce_with(|a, b| {
            if b.1 > a.1 || (b.1.total_cmp(&a.1).is_eq() && b.0 < a.0) {
                b
            } else {
                a
            }
        })
        .map(|(index, entropy)| (&guess_pool[index], entropy))
}

/// Best guess among the candidates themselves
///
/// This is the early-game ranking: each remaining candidate is scored against
/// the full candidate set. Cost is quadratic in the number of candidates.
#[must_use]
pub fn max_entropy_guess(candidates: &[Word]) -> Option<(&Word, f64)> {
    select_best_guess(candidates, candidates)
}

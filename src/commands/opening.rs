//! Opening word command
//!
//! Ranks every dictionary word as a first guess.

use crate::core::{SolverError, Word};
use crate::game::best_opening;
use crate::solver::Strategy;
use crate::solver::entropy::{GuessMetrics, calculate_metrics};
use crate::trie::Trie;
use rayon::prelude::*;

/// Best opening plus the runners-up
pub struct OpeningResult {
    pub best: Word,
    /// Top words by entropy, best first
    pub ranking: Vec<(Word, GuessMetrics)>,
    pub dictionary_size: usize,
}

/// Pick the opening with `strategy` and list the `top` highest entropy words
///
/// # Errors
///
/// Returns [`SolverError::NoCandidates`] if the dictionary has no word of length `len`.
pub fn find_opening<S: Strategy>(
    trie: &Trie,
    len: usize,
    strategy: &S,
    top: usize,
) -> Result<OpeningResult, SolverError> {
    let best = best_opening(trie, len, strategy)?;
    let words = trie.words_of_len(len);

    let mut ranking: Vec<(Word, GuessMetrics)> = words
        .par_iter()
        .map(|word| (word.clone(), calculate_metrics(word, &words)))
        .collect();
    // Stable, so equal entropies keep dictionary order
    ranking.sort_by(|a, b| b.1.entropy.total_cmp(&a.1.entropy));
    ranking.truncate(top);

    Ok(OpeningResult {
        best,
        ranking,
        dictionary_size: words.len(),
    })
}

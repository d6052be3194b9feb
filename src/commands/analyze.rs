//! Word analysis command
//!
//! Scores a single word against every dictionary word of the same length.

use crate::core::{SolverError, Word};
use crate::solver::entropy::{GuessMetrics, calculate_metrics};

/// Result of analyzing a word
#[derive(Debug)]
pub struct AnalysisResult {
    pub word: Word,
    pub metrics: GuessMetrics,
    /// 2^entropy: how many times smaller the candidate set gets on average
    pub expected_reduction: f64,
    pub total_candidates: usize,
    pub in_dictionary: bool,
}

/// Entropy of `word` as an opening guess over `dictionary`
///
/// The word does not have to be in the dictionary itself.
///
/// # Errors
///
/// Returns [`SolverError::LengthMismatch`] if the dictionary's words are not as
/// long as `word`.
pub fn analyze_word(word: &Word, dictionary: &[Word]) -> Result<AnalysisResult, SolverError> {
    if let Some(other) = dictionary.iter().find(|w| w.len() != word.len()) {
        return Err(SolverError::LengthMismatch {
            expected: word.len(),
            actual: other.len(),
        });
    }

    let metrics = calculate_metrics(word, dictionary);

    Ok(AnalysisResult {
        word: word.clone(),
        metrics,
        expected_reduction: metrics.entropy.exp2(),
        total_candidates: dictionary.len(),
        in_dictionary: dictionary.contains(word),
    })
}

//! Shannon entropy calculation for feedback patterns
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits. Patterns that no candidate
/// produces have probability zero and contribute nothing, so only observed
/// patterns are counted. An empty candidate set has entropy 0 by convention.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// # Examples
/// ```
/// use wordle_csp::core::Word;
/// use wordle_csp::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let pattern_counts = group_by_pattern(guess, candidates);
    shannon_entropy(&pattern_counts)
}

/// Group candidates by the pattern they produce with the guess
fn group_by_pattern(guess: &Word, candidates: &[Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let pattern = Pattern::calculate(guess, candidate);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from pattern distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one pattern with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &std::collections::HashMap<Pattern, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    // Summed in a fixed order so equal distributions give bit-identical results
    let mut counts: Vec<usize> = pattern_counts
        .values()
        .copied()
        .filter(|&count| count > 0)
        .collect();
    counts.sort_unstable();

    counts
        .into_iter()
        .map(|count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate entropy, expected remaining candidates and max partition size
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let pattern_counts = group_by_pattern(guess, candidates);
    let total = candidates.len() as f64;

    let expected_remaining: f64 = pattern_counts
        .values()
        .map(|&count| count as f64 * count as f64 / total)
        .sum();

    let max_partition = pattern_counts.values().copied().max().unwrap_or(0);

    GuessMetrics {
        entropy: shannon_entropy(&pattern_counts),
        expected_remaining,
        max_partition,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn shannon_entropy_uniform_distribution() {
        // 4 patterns, each appears once = log2(4) = 2 bits
        let mut counts = FxHashMap::default();
        for value in 0..4 {
            counts.insert(Pattern::new(value, 5), 1);
        }

        let entropy = shannon_entropy(&counts);
        assert!((entropy - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let mut counts = FxHashMap::default();
        counts.insert(Pattern::new(0, 5), 10);

        assert!(shannon_entropy(&counts).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_skewed_below_uniform() {
        let mut uniform = FxHashMap::default();
        let mut skewed = FxHashMap::default();
        for value in 0..4 {
            uniform.insert(Pattern::new(value, 5), 25);
            skewed.insert(Pattern::new(value, 5), if value == 0 { 97 } else { 1 });
        }

        assert!(shannon_entropy(&uniform) > shannon_entropy(&skewed));
    }

    #[test]
    fn shannon_entropy_empty() {
        let counts: FxHashMap<Pattern, usize> = FxHashMap::default();
        assert!(shannon_entropy(&counts).abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_of_empty_candidates_is_zero() {
        let guess = Word::new("crane").unwrap();
        assert!(calculate_entropy(&guess, &[]).abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_of_single_candidate_is_zero() {
        let guess = Word::new("crane").unwrap();
        assert!(calculate_entropy(&guess, std::slice::from_ref(&guess)).abs() < f64::EPSILON);

        let other = words_from_slice(&["slate"], None);
        assert!(calculate_entropy(&guess, &other).abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_all_same_pattern() {
        let guess = Word::new("zzzzz").unwrap();
        let candidates = words_from_slice(&["aaaaa", "bbbbb", "ccccc"], None);
        assert!(calculate_entropy(&guess, &candidates).abs() < 0.001);
    }

    #[test]
    fn entropy_perfect_split() {
        let guess = Word::new("slate").unwrap();
        let candidates = words_from_slice(&["slate", "zzzzz"], None);
        assert!((calculate_entropy(&guess, &candidates) - 1.0).abs() < 0.001);
    }

    #[test]
    fn entropy_three_way_split() {
        let guess = Word::new("abcde").unwrap();
        let candidates = words_from_slice(&["abcde", "abcdf", "xyzzy"], None);
        let expected = 3f64.log2();
        assert!((calculate_entropy(&guess, &candidates) - expected).abs() < 1e-9);
    }

    #[test]
    fn metrics_agree_with_entropy() {
        let guess = Word::new("crane").unwrap();
        let candidates = words_from_slice(&["slate", "irate", "trace", "raise"], None);

        let metrics = calculate_metrics(&guess, &candidates);
        assert!((metrics.entropy - calculate_entropy(&guess, &candidates)).abs() < 1e-12);
        assert!(metrics.max_partition >= 1);
        assert!(metrics.expected_remaining >= 1.0);
        assert!(metrics.expected_remaining <= candidates.len() as f64);
    }

    #[test]
    fn metrics_empty() {
        let guess = Word::new("crane").unwrap();
        let metrics = calculate_metrics(&guess, &[]);
        assert_eq!(metrics.max_partition, 0);
        assert!(metrics.entropy.abs() < f64::EPSILON);
    }
}

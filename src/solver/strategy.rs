//! Early-game ranking strategies
//!
//! Defines the Strategy trait and concrete implementations. The selector only
//! talks to the trait, so the quadratic exact ranking can be swapped for an
//! approximation without touching the rest of the pipeline.

use crate::core::Word;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A strategy for selecting the best guess from a pool of candidates
pub trait Strategy: Sync {
    /// Select the best guess from the guess pool given the current candidates
    ///
    /// Returns the best guess, or `None` if the guess pool is empty.
    fn select_guess<'a>(&self, guess_pool: &'a [Word], candidates: &[Word]) -> Option<&'a Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Exact entropy maximisation
    Entropy(EntropyStrategy),
    /// Entropy scored against a bounded sample of candidates
    Sampled(SampledEntropyStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, guess_pool: &'a [Word], candidates: &[Word]) -> Option<&'a Word> {
        match self {
            Self::Entropy(s) => s.select_guess(guess_pool, candidates),
            Self::Sampled(s) => s.select_guess(guess_pool, candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "entropy", "sampled". Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "entropy" | "exact" => Some(Self::Entropy(EntropyStrategy)),
            "sampled" => Some(Self::Sampled(SampledEntropyStrategy::default())),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Entropy(_) => "entropy",
            Self::Sampled(_) => "sampled",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Entropy(EntropyStrategy)
    }
}

/// Pure entropy maximization strategy
///
/// Always selects the guess with the highest Shannon entropy; ties go to the
/// earliest guess in the pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn select_guess<'a>(&self, guess_pool: &'a [Word], candidates: &[Word]) -> Option<&'a Word> {
        super::entropy::select_best_guess(guess_pool, candidates).map(|(best, _)| best)
    }
}

/// Entropy maximisation against a sample of the candidates
///
/// When more than `sample_size` candidates remain, every guess is scored against
/// the same seeded random subset instead of the full set, which bounds the cost
/// at `|guess_pool| × sample_size`. The sample keeps the candidates' original
/// order and the seed is fixed, so results are reproducible.
#[derive(Debug, Clone)]
pub struct SampledEntropyStrategy {
    pub sample_size: usize,
    pub seed: u64,
}

impl SampledEntropyStrategy {
    #[must_use]
    pub const fn new(sample_size: usize, seed: u64) -> Self {
        Self { sample_size, seed }
    }

    fn sample(&self, candidates: &[Word]) -> Vec<Word> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut picked =
            rand::seq::index::sample(&mut rng, candidates.len(), self.sample_size).into_vec();
        picked.sort_unstable();
        picked.into_iter().map(|i| candidates[i].clone()).collect()
    }
}

impl Default for SampledEntropyStrategy {
    fn default() -> Self {
        Self::new(500, 0x5eed)
    }
}

impl Strategy for SampledEntropyStrategy {
    fn select_guess<'a>(&self, guess_pool: &'a [Word], candidates: &[Word]) -> Option<&'a Word> {
        if candidates.len() <= self.sample_size {
            return EntropyStrategy.select_guess(guess_pool, candidates);
        }

        let sample = self.sample(candidates);
        EntropyStrategy.select_guess(guess_pool, &sample)
    }
}

//! Benchmark command
//!
//! Plays one simulated game per answer, in parallel, and collects statistics.

use crate::core::Word;
use crate::game::{Game, GameOutcome};
use crate::solver::Strategy;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total: usize,
    pub wins: usize,
    pub win_rate: f64,
    /// Mean guesses over won games
    pub average_attempts: f64,
    /// Mean guesses over every game, losses included
    pub average_attempts_all: f64,
    /// Guesses needed → number of won games
    pub distribution: BTreeMap<usize, usize>,
    pub lost_words: Vec<Word>,
    pub duration: Duration,
}

/// Seeded random sample of up to `count` answers from the dictionary
///
/// The sample is drawn without replacement and comes out in draw order, so the
/// same seed always yields the same answers.
#[must_use]
pub fn sample_answers(words: &[Word], count: usize, seed: u64) -> Vec<Word> {
    let mut rng = StdRng::seed_from_u64(seed);
    rand::seq::index::sample(&mut rng, words.len(), count.min(words.len()))
        .into_iter()
        .map(|i| words[i].clone())
        .collect()
}

/// Play a game for every answer
///
/// Games run on the rayon pool; each owns its constraint state, and they share
/// the game's trie read-only. Results are aggregated in answer order.
pub fn run_benchmark<S: Strategy>(game: &Game<'_, S>, answers: &[Word]) -> BenchmarkResult {
    let start = Instant::now();

    let pb = ProgressBar::new(answers.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let outcomes: Vec<GameOutcome> = answers
        .par_iter()
        .map(|answer| {
            let outcome = game.solve(answer);
            pb.inc(1);
            outcome
        })
        .collect();
    pb.finish_and_clear();

    let result = summarize(answers, &outcomes, start.elapsed());
    info!(
        "benchmark: {}/{} won, {:.3} average guesses ({:.3} over all games) in {:.2?}",
        result.wins,
        result.total,
        result.average_attempts,
        result.average_attempts_all,
        result.duration
    );
    result
}

fn summarize(answers: &[Word], outcomes: &[GameOutcome], duration: Duration) -> BenchmarkResult {
    let mut distribution = BTreeMap::new();
    let mut lost_words = Vec::new();
    let mut won_attempts = 0;
    let mut all_attempts = 0;

    for (answer, outcome) in answers.iter().zip(outcomes) {
        all_attempts += outcome.attempts_used;
        if outcome.won {
            *distribution.entry(outcome.attempts_used).or_insert(0) += 1;
            won_attempts += outcome.attempts_used;
        } else {
            lost_words.push(answer.clone());
        }
    }

    let total = answers.len();
    let wins = total - lost_words.len();

    BenchmarkResult {
        total,
        wins,
        win_rate: if total == 0 {
            0.0
        } else {
            wins as f64 / total as f64
        },
        average_attempts: if wins == 0 {
            0.0
        } else {
            won_attempts as f64 / wins as f64
        },
        average_attempts_all: if total == 0 {
            0.0
        } else {
            all_attempts as f64 / total as f64
        },
        distribution,
        lost_words,
        duration,
    }
}

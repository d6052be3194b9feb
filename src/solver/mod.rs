//! Guess selection
//!
//! Entropy ranking for the early game, conflict-aware coverage scoring for the
//! late game, and the selector that switches between them.

pub mod entropy;
pub mod heuristic;
mod selector;
pub mod strategy;

pub use heuristic::{LateGameScore, LateGameScorer, TieBreak};
pub use selector::{GuessSelector, Regime, SelectorConfig};
pub use strategy::{EntropyStrategy, SampledEntropyStrategy, Strategy, StrategyType};

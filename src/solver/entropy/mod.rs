//! Entropy-based ranking
//!
//! Implements Shannon entropy calculation for feedback pattern distributions.
//! This is the early-game ranking of the solver.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, calculate_entropy, calculate_metrics, shannon_entropy};
pub use selector::{max_entropy_guess, select_best_guess};

//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod opening;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_answers};
pub use opening::{OpeningResult, find_opening};
pub use simple::{PromptFeedback, run_simple};
pub use solve::{GuessStep, SolveResult, solve_word};

//! Word-guessing game solver
//!
//! Suggests the next guess for Wordle-style games of any word length. Feedback is
//! folded into per-position letter domains, a dictionary trie enumerates exactly
//! the words that still fit, and the next guess is chosen by expected information
//! (early game) or by how many unresolved letters it covers (late game).
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_csp::core::Word;
//! use wordle_csp::game::{Game, best_opening};
//! use wordle_csp::solver::{EntropyStrategy, GuessSelector, SelectorConfig};
//! use wordle_csp::trie::Trie;
//! use wordle_csp::wordlists::loader::words_from_slice;
//!
//! let words = words_from_slice(&["crane", "crate", "grate", "irate", "slate"], Some(5));
//! let trie = Trie::build(&words);
//!
//! let opening = best_opening(&trie, 5, &EntropyStrategy).unwrap();
//! let game = Game::new(GuessSelector::new(
//!     &trie,
//!     EntropyStrategy,
//!     SelectorConfig::default(),
//!     opening,
//! ));
//!
//! let outcome = game.solve(&Word::new("irate").unwrap());
//! assert!(outcome.won);
//! ```

// Core domain types
pub mod core;

// Dictionary trie and constrained search
pub mod trie;

// Per-position letter domains
pub mod constraints;

// Guess ranking and selection
pub mod solver;

// Game loop
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

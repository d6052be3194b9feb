//! Word lists
//!
//! The solver works on any newline-separated dictionary; nothing is embedded in
//! the binary.

pub mod loader;

/// Dictionary used when no `--wordlist` is given
pub const DEFAULT_WORDLIST: &str = "/usr/share/dict/words";

//! Dictionary word representation
//!
//! A Word is a validated lowercase ASCII word of any supported length.

use super::letters::{ALPHABET_SIZE, LetterSet};
use std::fmt;
use thiserror::Error;

/// Longest supported word. Patterns are base-3 encoded into a `u32`, and
/// 3^20 is the largest power of three that fits.
pub const MAX_WORD_LEN: usize = 20;

/// A lowercase word made of the letters `a..=z`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be between 1 and {MAX_WORD_LEN} letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is 0 or greater than [`MAX_WORD_LEN`]
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_csp::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.is_empty() || text.len() > MAX_WORD_LEN {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Build a word from bytes already known to be valid lowercase letters
    pub(crate) fn from_letters(letters: &[u8]) -> Self {
        debug_assert!(letters.iter().all(u8::is_ascii_lowercase));
        debug_assert!(!letters.is_empty() && letters.len() <= MAX_WORD_LEN);
        Self {
            text: letters.iter().map(|&b| b as char).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.chars()[position]
    }

    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars().contains(&letter)
    }

    /// Distinct letters of the word
    #[must_use]
    pub fn letter_set(&self) -> LetterSet {
        self.chars().iter().copied().collect()
    }

    /// Per-letter occurrence counts, indexed by `letter - b'a'`
    ///
    /// Used for pattern calculation with duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &ch in self.chars() {
            counts[usize::from(ch - b'a')] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

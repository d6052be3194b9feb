//! Feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not in word, or no unmatched copy left)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! Position `i` contributes digit × 3^i to the stored value, so a pattern is a
//! single `u32` plus its length and hashes cheaply during entropy calculation.

use super::{SolverError, Word, word::MAX_WORD_LEN};
use std::fmt;

/// Feedback for a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Absent = 0,
    Present = 1,
    Correct = 2,
}

impl Feedback {
    const fn from_digit(digit: u32) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Map a live game's tile state to feedback
    ///
    /// `"absent"`, `"present"` and `"correct"` are recognised; anything else
    /// (an unrevealed tile, for example) yields `None`.
    #[must_use]
    pub fn from_tile_state(state: &str) -> Option<Self> {
        match state.trim().to_ascii_lowercase().as_str() {
            "absent" => Some(Self::Absent),
            "present" => Some(Self::Present),
            "correct" => Some(Self::Correct),
            _ => None,
        }
    }

    const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback pattern for a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    value: u32,
    len: u8,
}

impl Pattern {
    /// Create a pattern from a raw base-3 value
    ///
    /// # Panics
    /// Panics in debug mode if `len` exceeds [`MAX_WORD_LEN`] or the value does not fit
    #[must_use]
    pub const fn new(value: u32, len: usize) -> Self {
        debug_assert!(len <= MAX_WORD_LEN, "pattern too long");
        debug_assert!(value < 3u32.pow(len as u32), "pattern value out of range");
        Self {
            value,
            len: len as u8,
        }
    }

    /// The all-correct pattern for a word of `len` letters
    #[must_use]
    pub const fn perfect(len: usize) -> Self {
        Self::new(3u32.pow(len as u32) - 1, len)
    }

    /// Build a pattern from per-position feedback
    #[must_use]
    pub fn from_feedback(tiles: &[Feedback]) -> Self {
        let mut value = 0u32;
        let mut multiplier = 1u32;
        for &tile in tiles {
            value += tile as u32 * multiplier;
            multiplier *= 3;
        }
        Self::new(value, tiles.len())
    }

    /// Get the raw pattern value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.value
    }

    /// Number of tiles in the pattern
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Check if this is a perfect match (all correct)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.value == 3u32.pow(self.len as u32) - 1
    }

    /// Feedback at a position
    ///
    /// # Panics
    /// Panics in debug mode if `position >= len()`
    #[must_use]
    pub const fn feedback_at(self, position: usize) -> Feedback {
        debug_assert!(position < self.len as usize);
        Feedback::from_digit(self.value / 3u32.pow(position as u32) % 3)
    }

    /// Feedback for every position, in order
    pub fn iter(self) -> impl Iterator<Item = Feedback> {
        let mut remaining = self.value;
        (0..self.len()).map(move |_| {
            let digit = remaining % 3;
            remaining /= 3;
            Feedback::from_digit(digit)
        })
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// Both words must have the same length; use [`evaluate`] for a checked variant.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the available pool
    /// 2. Second pass: mark present-but-misplaced letters from what is left of the
    ///    pool, left to right; everything else is absent
    /// 3. Encode as base-3 number
    ///
    /// # Examples
    /// ```
    /// use wordle_csp::core::{Word, Pattern};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// // C(absent) R(absent) A(correct) N(absent) E(correct)
    /// // 0 + 0×3 + 2×9 + 0×27 + 2×81 = 180
    /// assert_eq!(pattern.value(), 180);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        debug_assert_eq!(guess.len(), answer.len());
        let guess_chars = guess.chars();
        let answer_chars = answer.chars();

        let mut result = [Feedback::Absent; MAX_WORD_LEN];
        let mut available = answer.char_counts();

        for (i, (&g, &a)) in guess_chars.iter().zip(answer_chars).enumerate() {
            if g == a {
                result[i] = Feedback::Correct;
                available[usize::from(g - b'a')] -= 1;
            }
        }

        for (i, &g) in guess_chars.iter().enumerate() {
            if result[i] == Feedback::Correct {
                continue;
            }
            let count = &mut available[usize::from(g - b'a')];
            if *count > 0 {
                result[i] = Feedback::Present;
                *count -= 1;
            }
        }

        Self::from_feedback(&result[..guess_chars.len()])
    }

    #[must_use]
    pub fn count_greens(self) -> usize {
        self.iter().filter(|&f| f == Feedback::Correct).count()
    }

    #[must_use]
    pub fn count_yellows(self) -> usize {
        self.iter().filter(|&f| f == Feedback::Present).count()
    }

    /// Parse a pattern from a string like "GY-GY", "21021" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/'2'/🟩 for correct
    /// - 'Y'/'y'/'1'/🟨 for present
    /// - '-'/'_'/'0'/'X'/'x'/⬜/⬛ for absent
    ///
    /// # Examples
    /// ```
    /// use wordle_csp::core::Pattern;
    ///
    /// let p1 = Pattern::from_str("GY-GY").unwrap();
    /// let p2 = Pattern::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// let p3 = Pattern::from_str("21021").unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p1, p3);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let tiles = s
            .trim()
            .chars()
            .map(|ch| match ch {
                'G' | 'g' | '2' | '🟩' => Some(Feedback::Correct),
                'Y' | 'y' | '1' | '🟨' => Some(Feedback::Present),
                '-' | '_' | '0' | 'X' | 'x' | '⬜' | '⬛' => Some(Feedback::Absent),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()?;

        if tiles.is_empty() || tiles.len() > MAX_WORD_LEN {
            return None;
        }

        Some(Self::from_feedback(&tiles))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_csp::core::Pattern;
    ///
    /// let p = Pattern::from_str("GY-GY").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.iter().map(Feedback::emoji).collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in self.iter() {
            let ch = match tile {
                Feedback::Correct => 'G',
                Feedback::Present => 'Y',
                Feedback::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

/// Score `guess` against `answer`, checking that the lengths agree
///
/// # Errors
/// Returns [`SolverError::LengthMismatch`] if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_csp::core::{Word, evaluate};
///
/// let guess = Word::new("speed").unwrap();
/// let answer = Word::new("erase").unwrap();
/// assert_eq!(evaluate(&guess, &answer).unwrap().to_string(), "Y-YY-");
///
/// let short = Word::new("spee").unwrap();
/// assert!(evaluate(&short, &answer).is_err());
/// ```
pub fn evaluate(guess: &Word, answer: &Word) -> Result<Pattern, SolverError> {
    if guess.len() != answer.len() {
        return Err(SolverError::LengthMismatch {
            expected: guess.len(),
            actual: answer.len(),
        });
    }
    Ok(Pattern::calculate(guess, answer))
}

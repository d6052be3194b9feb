//! Formatting utilities for terminal output

use crate::core::{Feedback, Pattern, Word};
use colored::Colorize;

/// Upper-case letters of the guess on tile-coloured backgrounds
#[must_use]
pub fn colored_guess(word: &Word, pattern: Pattern) -> String {
    word.chars()
        .iter()
        .zip(pattern.iter())
        .map(|(&letter, tile)| {
            let cell = format!(" {} ", letter.to_ascii_uppercase() as char);
            match tile {
                Feedback::Correct => cell.black().on_green().to_string(),
                Feedback::Present => cell.black().on_yellow().to_string(),
                Feedback::Absent => cell.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy bar scaled to the most a dictionary of `dictionary_size` words allows
#[must_use]
pub fn entropy_bar(entropy: f64, dictionary_size: usize, width: usize) -> String {
    let max_entropy = (dictionary_size.max(1) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

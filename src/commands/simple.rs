//! Simple interactive CLI mode
//!
//! The solver suggests each guess and the user types the pattern the live game
//! showed for it.

use crate::core::{Pattern, Word};
use crate::game::{FeedbackSource, Game, GameOutcome};
use crate::solver::Strategy;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Why a prompt produced no pattern
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed")]
    Closed,
    #[error("game abandoned")]
    Quit,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Feedback typed by the user, one line per guess
pub struct PromptFeedback<R, W> {
    input: R,
    output: W,
    turn: usize,
}

impl<R: BufRead, W: Write> PromptFeedback<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            turn: 0,
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim().to_lowercase())
    }
}

impl<R: BufRead, W: Write> FeedbackSource for PromptFeedback<R, W> {
    type Error = PromptError;

    fn feedback(&mut self, guess: &Word) -> Result<Pattern, PromptError> {
        self.turn += 1;
        writeln!(
            self.output,
            "\nTurn {}: try {}",
            self.turn,
            guess.text().to_uppercase()
        )?;

        loop {
            let input = self.read_line("Feedback (G/Y/-, 2/1/0, 'win' or 'quit')")?;

            match input.as_str() {
                "quit" | "q" | "exit" => return Err(PromptError::Quit),
                "win" | "correct" | "solved" => return Ok(Pattern::perfect(guess.len())),
                _ => match Pattern::from_str(&input) {
                    Some(pattern) if pattern.len() == guess.len() => return Ok(pattern),
                    Some(pattern) => writeln!(
                        self.output,
                        "Expected {} tiles, got {}",
                        guess.len(),
                        pattern.len()
                    )?,
                    None => writeln!(self.output, "Invalid pattern: {input}")?,
                },
            }
        }
    }
}

/// Run one interactive game on stdin/stdout
pub fn run_simple<S: Strategy>(game: &Game<'_, S>) -> GameOutcome {
    println!("\nWord guessing solver, interactive mode");
    println!("After each guess, enter the feedback pattern:");
    println!("  G / 2 / 🟩  correct position");
    println!("  Y / 1 / 🟨  present elsewhere");
    println!("  - / 0 / ⬜  absent");

    let stdin = io::stdin();
    let mut source = PromptFeedback::new(stdin.lock(), io::stdout());
    game.play(&mut source)
}

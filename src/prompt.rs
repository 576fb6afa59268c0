//! Interactive console prompts.
//!
//! The prompts are written against generic `BufRead`/`Write` handles so
//! the retry loops can be driven from a `Cursor` in tests. Every loop keeps
//! asking until the answer is valid; running out of input is an error
//! instead of an endless loop.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use thiserror::Error;

use crate::sequence::{check_length, check_sequence, SequenceSource};

/// Errors that can occur while prompting.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Console I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("Input ended before a valid answer was given")]
    EndOfInput,
}

/// Result type for prompt operations.
pub type PromptResult<T> = Result<T, PromptError>;

/// A question/answer channel to the user.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console and returns the output handle.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `question` and returns the trimmed answer line.
    pub fn ask(&mut self, question: &str) -> PromptResult<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    /// Prints a line of feedback to the user.
    pub fn tell(&mut self, message: &str) -> PromptResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Asks for a non-empty report file name (without extension).
    pub fn ask_report_name(&mut self) -> PromptResult<String> {
        loop {
            let name = self.ask(
                "Enter a filename for your report.\n\
                 No file extension needed. If a file with this name already exists, \
                 it will be overwritten: ",
            )?;
            if !name.is_empty() {
                return Ok(name);
            }
        }
    }

    /// Asks whether to use a custom or a random sequence, then for its details.
    pub fn ask_source(&mut self) -> PromptResult<SequenceSource> {
        loop {
            let choice = self.ask("Enter 'CUSTOM' for a custom sequence or 'RANDOM' for a random sequence: ")?;
            match choice.to_uppercase().as_str() {
                "CUSTOM" => return self.ask_custom_sequence().map(SequenceSource::Custom),
                "RANDOM" => return self.ask_random_length().map(SequenceSource::Random),
                _ => self.tell("Invalid choice. Please enter 'CUSTOM' or 'RANDOM'.")?,
            }
        }
    }

    /// Asks for a DNA sequence until a valid one is entered. Returned uppercased.
    pub fn ask_custom_sequence(&mut self) -> PromptResult<String> {
        loop {
            let sequence = self
                .ask("Enter your custom DNA sequence (A, C, G, T). Length must be 9-30 and divisible by 3: ")?
                .to_uppercase();
            match check_sequence(&sequence) {
                Ok(()) => return Ok(sequence),
                Err(e) => self.tell(&format!("Invalid input: {}. Please follow the criteria.", e))?,
            }
        }
    }

    /// Asks for a random sequence length until a valid one is entered.
    pub fn ask_random_length(&mut self) -> PromptResult<usize> {
        loop {
            let answer = self.ask("Enter a length (9-30, divisible by 3) for the random sequence: ")?;
            match answer.parse::<usize>() {
                Ok(length) => match check_length(length) {
                    Ok(()) => return Ok(length),
                    Err(e) => self.tell(&format!("{}.", e))?,
                },
                Err(_) => self.tell("Invalid input. Please enter a valid number.")?,
            }
        }
    }
}

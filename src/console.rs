use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Prompt/response over a line-oriented input and an output sink.
///
/// Prompts are written without a trailing newline, the way an interactive
/// shell shows them, so the user types on the same line.
pub struct Console<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    /// Shows `text` and reads the answer. Only the line terminator is
    /// stripped; any other whitespace is part of the answer.
    pub fn prompt(&mut self, text: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        self.line.clear();
        let bytes = self.input.read_line(&mut self.line)?;
        if bytes == 0 {
            return Err(ConsoleError::Closed);
        }

        let answer = self.line.strip_suffix('\n').unwrap_or(&self.line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(answer.to_owned())
    }

    pub fn say(&mut self, line: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("input closed")]
    Closed,
    #[error("{0}")]
    Io(#[from] io::Error),
}

impl ConsoleError {
    /// A line that could not be decoded has already been consumed, so asking
    /// again makes progress. Every other failure would repeat forever.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Io(err) if err.kind() == io::ErrorKind::InvalidData)
    }
}

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::calc;
use crate::console::{Console, ConsoleError};
use crate::operand::{format_number, parse_operand, InvalidNumber};

pub const FIRST_NUMBER_PROMPT: &str = "What is your first number? ";
pub const OPERATOR_PROMPT: &str = "Select: +,-,/,* ";
pub const SECOND_NUMBER_PROMPT: &str = "What is your second number? ";
pub const AGAIN_PROMPT: &str = "Calculate again? (y/n): ";

/// Repeats read-compute-print until the user declines to go again.
pub struct Session<R, W> {
    console: Console<R, W>,
    summary: Summary,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub answers: usize,
    pub errors: usize,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    InvalidNumber(#[from] InvalidNumber),
    #[error(transparent)]
    Console(#[from] ConsoleError),
}

enum Next {
    Again,
    Stop,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(console: Console<R, W>) -> Self {
        Self {
            console,
            summary: Summary::default(),
        }
    }

    /// Runs until the continue prompt gets an answer other than `y`.
    ///
    /// Bad numbers and unreadable lines restart the current round. Closed
    /// input and other I/O failures end the session with an error.
    pub fn run(&mut self) -> Result<Summary, SessionError> {
        loop {
            match self.round() {
                Ok(Next::Again) => {}
                Ok(Next::Stop) => {
                    log::info!(
                        "session finished after {} answers and {} errors",
                        self.summary.answers,
                        self.summary.errors
                    );
                    return Ok(self.summary);
                }
                Err(SessionError::InvalidNumber(err)) => {
                    log::debug!("restarting round, not a number: {:?}", err.0);
                    self.report(&format!("Error: {}", err))?;
                }
                Err(SessionError::Console(err)) if err.is_recoverable() => {
                    log::warn!("restarting round after input failure: {}", err);
                    self.report(&format!("An unexpected error occurred: {}", err))?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn round(&mut self) -> Result<Next, SessionError> {
        let lhs = parse_operand(&self.console.prompt(FIRST_NUMBER_PROMPT)?)?;
        let operator = self.console.prompt(OPERATOR_PROMPT)?;
        let rhs = parse_operand(&self.console.prompt(SECOND_NUMBER_PROMPT)?)?;

        match calc::evaluate(lhs, &operator, rhs) {
            Ok(answer) => {
                log::debug!("{} {} {} = {}", lhs, operator, rhs, answer);
                self.summary.answers += 1;
                self.console
                    .say(&format!("The answer is: {}", format_number(answer)))?;
            }
            Err(err) => self.report(&format!("Error: {}", err))?,
        }

        let again = self.console.prompt(AGAIN_PROMPT)?;
        Ok(if wants_another(&again) {
            Next::Again
        } else {
            Next::Stop
        })
    }

    fn report(&mut self, message: &str) -> Result<(), ConsoleError> {
        self.summary.errors += 1;
        self.console.say(message)
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}

pub fn wants_another(answer: &str) -> bool {
    answer.to_lowercase() == "y"
}

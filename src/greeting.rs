use std::io::{BufRead, Write};

use thiserror::Error;

use crate::console::{Console, ConsoleError};
use crate::operand::{format_number, parse_operand};

pub const NAME_PROMPT: &str = "What is your name? ";
pub const AGE_PROMPT: &str = "What is your age? ";

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GreetingError {
    #[error("Please enter a name.")]
    EmptyName,
    #[error("That's not a valid age. Please enter a number.")]
    InvalidAge,
    #[error("Age must be a positive number.")]
    NonPositiveAge,
}

/// A name is accepted as typed, as long as it is not blank.
pub fn validate_name(text: &str) -> Result<&str, GreetingError> {
    if text.trim().is_empty() {
        return Err(GreetingError::EmptyName);
    }
    Ok(text)
}

pub fn parse_age(text: &str) -> Result<f64, GreetingError> {
    let age = parse_operand(text).map_err(|_| GreetingError::InvalidAge)?;
    // NaN is not positive either.
    if age > 0.0 {
        Ok(age)
    } else {
        Err(GreetingError::NonPositiveAge)
    }
}

/// The four greeting exercises, run one after the other.
pub struct Greeter<R, W> {
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Greeter<R, W> {
    pub fn new(console: Console<R, W>) -> Self {
        Self { console }
    }

    pub fn run(&mut self) -> Result<(), ConsoleError> {
        self.hello_world()?;
        self.hello_name()?;
        self.hello_name_and_age()?;
        self.hello_validated()
    }

    pub fn hello_world(&mut self) -> Result<(), ConsoleError> {
        self.console.say("Initial Project part 1")?;
        self.console.say("Hello, World!")
    }

    pub fn hello_name(&mut self) -> Result<(), ConsoleError> {
        self.console.say("Initial Project part 2")?;
        let name = self.console.prompt(NAME_PROMPT)?;
        self.console.say(&format!("Hello, {}!", name))
    }

    pub fn hello_name_and_age(&mut self) -> Result<(), ConsoleError> {
        self.console.say("Initial Project Extras")?;
        let name = self.console.prompt(NAME_PROMPT)?;
        let age = self.console.prompt(AGE_PROMPT)?;
        self.console
            .say(&format!("Hello, {}! You are {} years old.", name, age))
    }

    /// Keeps asking until both answers are valid. Running out of input here
    /// is a normal way to quit.
    pub fn hello_validated(&mut self) -> Result<(), ConsoleError> {
        self.console
            .say("Initial Project Extras (Error Correction)")?;
        match self.ask_validated() {
            Err(ConsoleError::Closed) => {
                log::debug!("input closed during validated greeting");
                self.console.say("\nProgram interrupted by user.")
            }
            result => result,
        }
    }

    fn ask_validated(&mut self) -> Result<(), ConsoleError> {
        let name = loop {
            let text = self.console.prompt(NAME_PROMPT)?;
            match validate_name(&text) {
                Ok(name) => break name.to_owned(),
                Err(err) => self.console.say(&err.to_string())?,
            }
        };

        let age = loop {
            let text = self.console.prompt(AGE_PROMPT)?;
            match parse_age(&text) {
                Ok(age) => break age,
                Err(err) => {
                    log::debug!("rejected age {:?}: {}", text, err);
                    self.console.say(&err.to_string())?
                }
            }
        };

        self.console.say(&format!(
            "Hello, {}! You are {} years old.",
            name,
            format_number(age)
        ))
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}

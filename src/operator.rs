use std::fmt::Display;
use std::str::FromStr;

use crate::calc::CalcError;

pub const OPERATORS: [Operator; 4] = [
    Operator::Add,
    Operator::Subtract,
    Operator::Multiply,
    Operator::Divide,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    /// Symbols must match exactly; `" +"` is not `+`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OPERATORS
            .into_iter()
            .find(|operator| operator.symbol() == s)
            .ok_or_else(|| CalcError::InvalidOperator(s.to_owned()))
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_every_symbol() {
        assert_eq!(Ok(Operator::Add), "+".parse());
        assert_eq!(Ok(Operator::Subtract), "-".parse());
        assert_eq!(Ok(Operator::Multiply), "*".parse());
        assert_eq!(Ok(Operator::Divide), "/".parse());
    }

    #[test]
    fn symbol_is_displayed() {
        for operator in OPERATORS {
            assert_eq!(operator.symbol(), operator.to_string());
        }
    }

    #[test]
    fn keep_the_literal_text_of_unknown_operators() {
        for text in ["%", "", " +", "+ ", "x", "add", "**"] {
            assert_eq!(
                Err(CalcError::InvalidOperator(text.to_owned())),
                text.parse::<Operator>()
            );
        }
    }
}

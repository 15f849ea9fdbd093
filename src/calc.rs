use thiserror::Error;

use crate::operator::Operator;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CalcError {
    #[error("Cannot divide by zero")]
    DivideByZero,
    #[error("Invalid operator '{0}'")]
    InvalidOperator(String),
}

impl Operator {
    pub fn apply(&self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            // Also catches -0.0.
            Self::Divide if rhs == 0.0 => Err(CalcError::DivideByZero),
            Self::Divide => Ok(lhs / rhs),
        }
    }
}

/// Computes `lhs <operator> rhs`, where the operator is still raw user text.
pub fn evaluate(lhs: f64, operator: &str, rhs: f64) -> Result<f64, CalcError> {
    operator.parse::<Operator>()?.apply(lhs, rhs)
}

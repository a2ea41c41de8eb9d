use thiserror::Error;

use crate::number::Number;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Invalid operand '{0}': both arguments must be numbers")]
    NonNumeric(String),

    #[error("Cannot divide {0} by zero - division by zero is undefined")]
    DivisionByZero(Number),

    #[error("Cannot compute square root of negative number ({0})")]
    NegativeSqrt(Number),

    #[error("Result too large to represent")]
    Overflow,
}

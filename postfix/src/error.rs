use thiserror::Error;

/// Everything that can abort an evaluation. None of these are retried, the
/// first one raised ends the computation.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalErr {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
    #[error("Unsupported function: {0}")]
    UnsupportedFunction(String),
    // stack underflow, or operands left over at the end
    #[error("Invalid expression")]
    InvalidExpression,
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Invalid number of intervals: {0}")]
    InvalidIntervals(usize),
}

use thiserror::Error;

/// Errors from BigInt construction and division.
///
/// Word overflow inside the arithmetic kernels is never reported here: it is
/// turned into carry propagation before a result leaves an operator.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BigIntError {
    #[error("BigInt division by zero")]
    DivisionByZero,
    #[error("empty decimal literal")]
    Empty,
    #[error("invalid digit {found:?} at index {index} in decimal literal")]
    InvalidDigit { found: char, index: usize },
    #[error("invalid kernel configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BigIntError>;

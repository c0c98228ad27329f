use thiserror::Error;

pub type Result<T> = std::result::Result<T, MathError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("Cannot parse an integer from an empty string")]
    Empty,

    #[error("Invalid digit {ch:?} at position {position}")]
    InvalidDigit { ch: char, position: usize },
}

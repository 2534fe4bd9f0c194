//! Error types for A1 notation parsing.

use thiserror::Error;

/// Errors produced while decoding column names or A1 references.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("A1 notation is empty")]
    EmptyInput,

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("column number out of range: {value}, limit is {limit}")]
    OutOfRange { value: i64, limit: u32 },

    #[error("incorrect A1 notation: {0}")]
    InvalidNotation(String),
}

pub type Result<T> = std::result::Result<T, NotationError>;

//! Wire-value parse error types.

use thiserror::Error;

/// Result type for wire-value parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error in a wall-clock value received from the backend or the UI.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid wall-clock time: {0:?}")]
    InvalidTime(String),

    #[error("invalid calendar date: {0:?}")]
    InvalidDate(String),

    #[error("invalid local datetime: {0:?}")]
    InvalidDateTime(String),

    #[error("weekday out of range: {0}")]
    WeekdayOutOfRange(i64),
}

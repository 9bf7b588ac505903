//! Error types for gcal-link.

use thiserror::Error;

use crate::token::TokenField;

/// Errors that can occur while building links or loading configuration.
#[derive(Error, Debug)]
pub enum GcalError {
    #[error("`start` is required when `end` is provided")]
    MissingStart,

    #[error("`end` is required when `start` is provided")]
    MissingEnd,

    #[error("`{field}` is malformed")]
    Malformed { field: TokenField },

    #[error("`start` and `end` must be in the same format")]
    FormatMismatch,

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown {kind} '{value}'")]
    UnknownOption { kind: &'static str, value: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for gcal-link operations.
pub type GcalResult<T> = Result<T, GcalError>;

//! Error types for fallible construction.
//!
//! The validation state machine itself never fails. These errors only come
//! from building rules, parsing configuration and looking up form fields.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid rule pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("error count must be a non-negative integer, got '{0}'")]
    InvalidErrorCount(String),

    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("no field named '{0}'")]
    UnknownField(String),

    #[error("field '{0}' is already registered")]
    DuplicateField(String),
}

pub type Result<T> = std::result::Result<T, ValidationError>;

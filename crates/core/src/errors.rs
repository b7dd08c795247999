//! Core error types for the projection engine.
//!
//! All input-validation failures are raised synchronously at the offending
//! call. An unreachable savings plan is *not* an error: it is reported as
//! [`crate::fire::ProjectionOutcome::Unreachable`].

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the projection engine.
#[derive(Error, Debug)]
pub enum Error {
    /// A growth assumption that cannot be compounded (annual rate <= -100%).
    #[error("Invalid growth rate: {0}")]
    InvalidRate(String),

    /// A malformed FIRE target or withdrawal assumption.
    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),

    /// A financial profile that fails its invariants.
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date: {0}")]
    DateParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

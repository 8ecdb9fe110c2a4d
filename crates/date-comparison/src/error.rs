//! Error types for date-comparison operations.

use thiserror::Error;

/// Why two values could not be compared.
///
/// This is the only failure the comparator reports. Boundary predicates
/// collapse it to `false` instead of surfacing it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComparisonError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid comparison target: {0}")]
    InvalidTarget(String),
}

/// Errors from parsing configuration values (units, tokens, zones).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown comparison unit: '{0}'")]
    UnknownUnit(String),

    #[error("Unknown relative token: '{0}'")]
    UnknownToken(String),

    #[error("Invalid timezone: '{0}'")]
    InvalidTimezone(String),
}

pub type Result<T> = std::result::Result<T, ComparisonError>;

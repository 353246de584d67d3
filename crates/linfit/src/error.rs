//! Regression error types
//!
//! Defines the standardized error type for loading and model operations.

use thiserror::Error;

/// Result type alias for regression operations
pub type Result<T> = std::result::Result<T, RegressionError>;

/// Errors that can occur while loading data or querying a model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegressionError {
    /// The data file could not be opened or read
    #[error("Failed to read '{path}': {reason}")]
    Io { path: String, reason: String },

    /// A data row was malformed (too few fields, or non-numeric x/y)
    #[error("Malformed row at line {line}: {reason}")]
    Format { line: usize, reason: String },

    /// Too few observations to fit a line
    #[error("Insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// All independent values are identical, the slope is undefined
    #[error("Degenerate data: {0}")]
    DegenerateData(String),

    /// Model has not been fitted yet
    #[error("Model must be fitted before prediction")]
    NotFitted,
}

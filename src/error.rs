//! Custom error types for Tally
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Tally operations
#[derive(Error, Debug)]
pub enum TallyError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Errors while loading accounts or journal entries from CSV files
    #[error("Load error: {0}")]
    Load(String),

    /// Errors while writing a rendered report
    #[error("Render error: {0}")]
    Render(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),
}

impl TallyError {
    /// Create a load error with file and row context
    pub fn load_row(file: &str, row: usize, detail: impl Into<String>) -> Self {
        Self::Load(format!("{}: row {}: {}", file, row, detail.into()))
    }

    /// Check if this is a load error
    pub fn is_load(&self) -> bool {
        matches!(self, Self::Load(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for TallyError {
    fn from(err: csv::Error) -> Self {
        Self::Load(err.to_string())
    }
}

/// Result type alias for Tally operations
pub type TallyResult<T> = Result<T, TallyError>;

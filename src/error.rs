//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the library using thiserror.
//! The binary wraps these in anyhow at the top level.

use std::path::Path;

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors (settings, audit log)
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV encoding errors while writing a dataset
    #[error("CSV error: {0}")]
    Csv(String),

    /// User input that could not be parsed (amounts, dates, empty fields)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A dataset file exists but does not match its schema
    #[error("Corrupt data file {file}: {reason}")]
    Corrupt { file: String, reason: String },

    /// Nothing to report on
    #[error("{0}")]
    NoData(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// The audit log could not be opened or written
    #[error("Audit log error: {0}")]
    Audit(String),

    /// Terminal drawing errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl TrackerError {
    /// Create a corruption error for the given dataset file
    pub fn corrupt(file: &Path, reason: impl Into<String>) -> Self {
        Self::Corrupt {
            file: file.display().to_string(),
            reason: reason.into(),
        }
    }

    /// Check if this is a "no data" signal
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if a dataset file failed to parse
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

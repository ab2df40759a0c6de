//! Core error types for mindtwin-core.
//!
//! This module defines the error hierarchy using thiserror. There is no
//! network or database I/O anywhere in the crate, so the taxonomy is small:
//! flag-file problems, input validation, and wizard navigation.

use std::path::PathBuf;
use thiserror::Error;

use crate::wizard::WizardError;

/// Core error type for mindtwin-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Local flag file errors
    #[error("Flag store error: {0}")]
    Flags(#[from] FlagsError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Wizard navigation errors
    #[error("Wizard error: {0}")]
    Wizard(#[from] WizardError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from the local flag store.
#[derive(Error, Debug)]
pub enum FlagsError {
    /// Failed to read the flag file
    #[error("Failed to load flags from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to write the flag file
    #[error("Failed to save flags to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse the flag file
    #[error("Failed to parse flags: {0}")]
    ParseFailed(String),

    /// No writable location for the flag file
    #[error("Could not determine a config directory for the flag file")]
    NoConfigDir,
}

/// Validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Content was empty after trimming
    #[error("Content is empty: {0}")]
    EmptyContent(String),

    /// Content exceeds the allowed length
    #[error("Content too long: {len} characters (maximum {max})")]
    TooLong { len: usize, max: usize },

    /// Referenced lesson does not exist
    #[error("Lesson not found: {0}")]
    UnknownLesson(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

//! Error types for the Attendance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the conditions that stop a report from being produced. Problems that
//! only affect a single line or a single day never become errors; they are
//! reported as diagnostics or sentinel values inside the report instead.

use thiserror::Error;

/// The main error type for the Attendance Engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/roster.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/roster.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No line of the punch log contained a parseable date, so the
    /// reporting month could not be established.
    #[error("No parseable date found in the punch log; cannot determine the reporting month")]
    EmptyInput,

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The employee roster is empty or contains duplicates.
    #[error("Invalid roster: {message}")]
    InvalidRoster {
        /// A description of what made the roster invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

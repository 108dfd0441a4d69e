//! Error handling module for the pstok CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use libps_scan::ScanError;
use thiserror::Error;

/// Main error type for the pstok CLI application.
#[derive(Error, Debug)]
pub enum PstokError {
    /// Error when the configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input could not be scanned.
    #[error("{path}: {source}")]
    Scan {
        /// Display name of the input (a path or `<stdin>`).
        path: String,
        /// The scanner's error.
        source: ScanError,
    },

    /// Error when a command finishes with failures.
    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using PstokError.
pub type Result<T> = std::result::Result<T, PstokError>;

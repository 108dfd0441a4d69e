//! Error types for libps-scan.
//!
//! End of input is not an error: [`Scanner::read_token`](crate::Scanner::read_token)
//! reports it as `Ok(None)`. Only an unterminated `( ... )` literal and a
//! failing reader are errors, and either one ends the scan session.

use thiserror::Error;

use crate::cursor::Location;

/// Error raised while scanning.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Input ended inside a `( ... )` string literal.
    #[error("unterminated string literal starting at {start}")]
    UnterminatedString {
        /// Where the opening `(` was.
        start: Location,
    },

    /// The underlying reader failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

impl ScanError {
    /// Returns where the offending token began, if the error has a location.
    pub fn location(&self) -> Option<Location> {
        match self {
            ScanError::UnterminatedString { start } => Some(*start),
            ScanError::Io(_) => None,
        }
    }
}

/// Result type alias for scanning operations.
pub type ScanResult<T> = std::result::Result<T, ScanError>;

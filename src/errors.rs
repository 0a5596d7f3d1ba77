//! Custom error types for selector box computation

use std::fmt;
use std::io;

/// Selector-specific error types
#[derive(Debug)]
pub enum SelectorError {
    /// I/O error
    IoError(io::Error),
    /// A position or scroll value was NaN or infinite
    NonFiniteInput {
        /// Name of the offending input, e.g. `cursor_new.x`
        field: &'static str,
    },
    /// Zoom factor was not a finite, positive number
    InvalidZoom(f64),
    /// A command line or file value could not be parsed
    ParseError(String),
    /// Configuration file is malformed
    ConfigError(String),
    /// Drag trace file is malformed
    TraceError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectorError::IoError(e) => write!(f, "I/O error: {}", e),
            SelectorError::NonFiniteInput { field } => write!(f, "Non-finite input: {}", field),
            SelectorError::InvalidZoom(z) => write!(f, "Invalid zoom factor: {}", z),
            SelectorError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            SelectorError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            SelectorError::TraceError(msg) => write!(f, "Trace error: {}", msg),
            SelectorError::GenericError(msg) => write!(f, "Selector error: {}", msg),
        }
    }
}

impl std::error::Error for SelectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SelectorError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SelectorError {
    fn from(error: io::Error) -> Self {
        SelectorError::IoError(error)
    }
}

/// Result type for selector operations
pub type SelectorResult<T> = Result<T, SelectorError>;

impl From<String> for SelectorError {
    fn from(msg: String) -> Self {
        SelectorError::GenericError(msg)
    }
}

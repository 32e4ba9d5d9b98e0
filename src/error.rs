//! Centralized error handling for minifetch

use std::fmt;
use std::io;

/// Custom error type for minifetch operations
#[derive(Debug)]
pub enum FetchError {
    /// I/O errors (art files, /proc reads, command execution)
    Io(io::Error),
    /// Parsing errors (invalid data format)
    Parse(String),
    /// Configuration errors (bad config file, unknown color)
    Config(String),
    /// System detection errors (missing stat, failed command)
    Detection(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Io(err) => write!(f, "I/O error: {}", err),
            FetchError::Parse(msg) => write!(f, "Parse error: {}", msg),
            FetchError::Config(msg) => write!(f, "Config error: {}", msg),
            FetchError::Detection(msg) => write!(f, "Detection error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for FetchError {
    fn from(error: io::Error) -> Self {
        FetchError::Io(error)
    }
}

/// Type alias for Results in minifetch
pub type Result<T> = std::result::Result<T, FetchError>;

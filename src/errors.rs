//! Error types for the visualizer
//!
//! The sorting engine itself cannot fail: datasets are generated internally
//! and every range it touches is bounded by construction. Errors only come
//! from the edges of the program, namely startup configuration, the log file,
//! and terminal I/O.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors surfaced by startup and the UI loop
#[derive(Debug)]
pub enum VisualizerError {
    /// A configuration value is out of range
    InvalidConfig {
        field: &'static str,
        reason: String,
    },

    /// The log file could not be opened or the subscriber installed
    Logging { path: PathBuf, message: String },

    /// Terminal I/O failure
    Io(io::Error),
}

impl VisualizerError {
    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        VisualizerError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for VisualizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisualizerError::InvalidConfig { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            VisualizerError::Logging { path, message } => {
                write!(
                    f,
                    "Failed to set up logging to {}: {}",
                    path.display(),
                    message
                )
            }
            VisualizerError::Io(err) => write!(f, "Terminal I/O error: {}", err),
        }
    }
}

impl std::error::Error for VisualizerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VisualizerError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for VisualizerError {
    fn from(err: io::Error) -> Self {
        VisualizerError::Io(err)
    }
}

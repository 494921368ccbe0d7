//! Error types for papertally.
//!
//! Library crates use [`PaperTallyError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all papertally operations.
#[derive(Debug, thiserror::Error)]
pub enum PaperTallyError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// The PDF reader could not open or read a document.
    #[error("pdf error: {0}")]
    Pdf(String),

    /// Vocabulary file missing, unreadable, or empty.
    #[error("vocabulary error: {message}")]
    Vocabulary { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Data validation error (bad match log, invalid argument, etc.).
    #[error("validation error: {message}")]
    Validation { message: String },

    /// JSON/TOML (de)serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Report rendering or export error.
    #[error("report error: {0}")]
    Report(String),
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PaperTallyError>;

impl PaperTallyError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a vocabulary error from any displayable message.
    pub fn vocabulary(msg: impl Into<String>) -> Self {
        Self::Vocabulary {
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for PaperTallyError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

//! Error types for fixgen.
//!
//! Library crates use [`FixgenError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all fixgen operations.
#[derive(Debug, thiserror::Error)]
pub enum FixgenError {
    /// Configuration loading or validation error (including a version
    /// identifier with no engine mapping).
    #[error("config error: {message}")]
    Config { message: String },

    /// Network/HTTP error while fetching the source document.
    #[error("network error: {0}")]
    Network(String),

    /// The source document does not match the assumed section hierarchy.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Data validation error.
    #[error("validation error: {message}")]
    Validation { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, FixgenError>;

impl FixgenError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = FixgenError::config("no engine mapped for version '4d0'");
        assert_eq!(
            err.to_string(),
            "config error: no engine mapped for version '4d0'"
        );

        let err = FixgenError::parse("top-level section has no id attribute");
        assert!(err.to_string().contains("no id attribute"));
    }
}

//! Error types for langver operations.
//!
//! This module defines [`LangverError`], the error type used for operational
//! failures (configuration, cache storage, CLI), and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - Version resolution failures are never raised: they are captured into the
//!   segment's `error` field (see [`crate::segment::ResolveError`])
//! - Use `LangverError` for failures that should abort a CLI command
//! - Use `anyhow::Error` (via `LangverError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for langver operations.
#[derive(Debug, Error)]
pub enum LangverError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A segment referenced by name is neither configured nor a preset.
    #[error("Unknown segment: {name}")]
    UnknownSegment { name: String },

    /// A version regex failed to compile.
    #[error("Invalid version pattern for '{executable}': {message}")]
    InvalidPattern { executable: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for langver operations.
pub type Result<T> = std::result::Result<T, LangverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = LangverError::ConfigNotFound {
            path: PathBuf::from("/foo/.langver.yml"),
        };
        assert!(err.to_string().contains("/foo/.langver.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = LangverError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn unknown_segment_displays_name() {
        let err = LangverError::UnknownSegment {
            name: "cobol".into(),
        };
        assert!(err.to_string().contains("cobol"));
    }

    #[test]
    fn invalid_pattern_displays_executable() {
        let err = LangverError::InvalidPattern {
            executable: "node".into(),
            message: "unclosed group".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("node"));
        assert!(msg.contains("unclosed group"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: LangverError = io_err.into();
        assert!(matches!(err, LangverError::Io(_)));
    }
}

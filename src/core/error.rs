//! Error types for globular_atlas
//!
//! This module provides structured error handling using thiserror.
//! Lines that fail the catalog grammar are not errors; only trouble
//! reaching the input (or a bad configuration) surfaces here.

use thiserror::Error;
use std::path::PathBuf;

/// Result type alias for atlas operations
pub type Result<T> = std::result::Result<T, AtlasError>;

/// Errors that can occur while loading a catalog or building output
#[derive(Error, Debug)]
pub enum AtlasError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog or config file not found
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON parsing or generation error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV generation error
    #[error("CSV error: {message}")]
    Csv { message: String },

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<AtlasError>,
    },
}

impl AtlasError {
    /// Wrap an error with additional context
    pub fn with_context(self, context: impl Into<String>) -> Self {
        AtlasError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        AtlasError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a CSV error
    pub fn csv_error(message: impl Into<String>) -> Self {
        AtlasError::Csv {
            message: message.into(),
        }
    }

    /// Map an IO error on `path` to `FileNotFound` when that is what happened.
    pub fn from_io(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            AtlasError::FileNotFound { path: path.into() }
        } else {
            AtlasError::Io(err)
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AtlasError::FileNotFound {
            path: PathBuf::from("/tmp/harris.txt"),
        };
        assert!(err.to_string().contains("/tmp/harris.txt"));
    }

    #[test]
    fn test_error_with_context() {
        let err = AtlasError::invalid_config("bad sigma");
        let wrapped = err.with_context("loading config");
        assert!(wrapped.to_string().contains("loading config"));
        assert!(wrapped.to_string().contains("bad sigma"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AtlasError = io_err.into();
        assert!(matches!(err, AtlasError::Io(_)));
    }

    #[test]
    fn test_from_io_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = AtlasError::from_io(io_err, "missing.txt");
        assert!(matches!(err, AtlasError::FileNotFound { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_from_io_other_kind() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AtlasError::from_io(io_err, "locked.txt");
        assert!(matches!(err, AtlasError::Io(_)));
    }

    #[test]
    fn test_csv_error_helper() {
        let err = AtlasError::csv_error("bad field");
        assert!(err.to_string().contains("bad field"));
        assert!(matches!(err, AtlasError::Csv { .. }));
    }

    #[test]
    fn test_result_ext_context() {
        let result: Result<()> = Err(AtlasError::invalid_config("negative points"));
        let err = result.context("reading .atlas_config.json").unwrap_err();
        assert!(matches!(err, AtlasError::WithContext { .. }));
        assert!(err.to_string().starts_with("reading .atlas_config.json"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: AtlasError = json_err.into();
        assert!(matches!(err, AtlasError::Json(_)));
    }
}

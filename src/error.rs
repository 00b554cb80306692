//! Error types for targetscope.
//!
//! Uses `thiserror` for ergonomic error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Raised when an input cannot be classified as a scan target.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidTargetError {
    #[error("target must be a non-empty string")]
    Empty,

    #[error("target not recognized: '{0}' is not an IP address, repository, directory, or domain")]
    Unrecognized(String),

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("invalid path {}: {reason}", .path.display())]
    UnresolvablePath { path: PathBuf, reason: String },
}

/// Errors loading or saving settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine configuration directory")]
    DirectoryNotFound,

    #[error("failed to read {}: {reason}", .path.display())]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to write {}: {reason}", .path.display())]
    WriteFailed { path: PathBuf, reason: String },

    #[error("invalid settings format: {0}")]
    InvalidFormat(String),

    #[error("invalid setting: {0}")]
    InvalidValue(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidFormat(e.to_string())
    }
}

/// Top-level error for CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Target(#[from] InvalidTargetError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for classification.
pub type TargetResult<T> = Result<T, InvalidTargetError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_directory_message() {
        let err = InvalidTargetError::NotADirectory(PathBuf::from("/tmp/file.txt"));
        assert_eq!(
            err.to_string(),
            "path exists but is not a directory: /tmp/file.txt"
        );
    }

    #[test]
    fn test_cli_error_wraps_target_error() {
        let err: CliError = InvalidTargetError::Empty.into();
        assert_eq!(err.to_string(), "target must be a non-empty string");
    }
}

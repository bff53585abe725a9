//! Error types for tree hashing, configuration, and the CLI layer.

use thiserror::Error;

/// Errors raised while reading the hashed input.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read {path}: {source}")]
    PathIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

/// Top-level error returned by library and CLI operations.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    ReadError(#[from] ReadError),

    #[error("Cannot reduce an empty digest list")]
    EmptyTree,

    #[error("Invalid digest: {0}")]
    InvalidDigest(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Tree hash mismatch for {path}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        path: String,
        expected: String,
        actual: String,
    },
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

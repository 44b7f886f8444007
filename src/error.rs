//! Error types for the concord library.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for concord operations.
#[derive(Error, Debug)]
pub enum ConcordError {
    /// I/O error while reading a line source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for concord operations.
pub type Result<T> = std::result::Result<T, ConcordError>;

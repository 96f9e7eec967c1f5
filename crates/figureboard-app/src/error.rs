//! Shell errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the console shell.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input closed")]
    InputClosed,
    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Result type for shell operations.
pub type ShellResult<T> = Result<T, ShellError>;

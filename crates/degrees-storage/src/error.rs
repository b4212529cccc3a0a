//! Storage error types

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Storage-specific error types
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Missing data file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("{file}:{line}: {message}")]
    Parse {
        file: String,
        line: u64,
        message: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),
}

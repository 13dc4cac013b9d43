//! Error types for catalog-table loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading persisted catalog tables.
#[derive(Debug, Error)]
pub enum DataError {
    /// A required table file does not exist.
    #[error("catalog table not found: {0}")]
    NotFound(PathBuf),

    /// IO error during read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A table file exists but does not parse.
    #[error("invalid catalog table {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

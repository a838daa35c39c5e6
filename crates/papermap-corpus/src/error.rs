//! Error types for corpus loading.
//!
//! Any of these is fatal for the whole view: the explorer never starts on a
//! partial corpus, and there is no I/O after the initial load to retry.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading and joining the corpus documents.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// A corpus document is missing.
    #[error("corpus document not found: {path}")]
    NotFound { path: PathBuf },

    /// A corpus document exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A corpus document is not valid JSON for its expected shape.
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A list-form paper record carries no identifier.
    #[error("paper record at index {index} has no identifier")]
    MissingId { index: usize },

    /// Two records share the same identifier.
    #[error("duplicate paper identifier: {id}")]
    DuplicateId { id: String },
}

/// Result type alias for corpus operations.
pub type CorpusResult<T> = Result<T, CorpusError>;

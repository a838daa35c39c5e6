//! Error types for the explorer engine.

use papermap_corpus::CorpusError;
use thiserror::Error;

/// Main error type for explorer operations.
///
/// Almost everything past the initial load is total: lookup misses fall
/// back, malformed filter tokens are skipped. What remains is the fatal
/// load path and direct record lookups by id.
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// Corpus loading failed; the view cannot start.
    #[error("failed to load corpus: {0}")]
    Corpus(#[from] CorpusError),

    /// A record id that is not part of the corpus.
    #[error("unknown paper: {id}")]
    UnknownPaper { id: String },
}

/// Result type alias for explorer operations.
pub type ExplorerResult<T> = Result<T, ExplorerError>;

//! papermap-corpus - Loading and storage for the paper corpus
//!
//! The explorer consumes three pre-computed JSON documents:
//!
//! - `papers.json`: paper records with embedding coordinates and metadata
//! - `assignments.json`: clustering schemes mapping paper ids to group labels
//! - `colors.json`: per-scheme palettes mapping group labels to color strings
//!
//! [`load_dir`] reads all three concurrently and joins them into a
//! [`Corpus`]. A `Corpus` can only be constructed from three fully parsed
//! documents, so downstream logic never observes a partial load; any load
//! failure is fatal for the whole view.

pub mod error;
pub mod loader;
pub mod store;

pub use error::{CorpusError, CorpusResult};
pub use loader::{load_dir, ASSIGNMENTS_FILE, COLORS_FILE, PAPERS_FILE};
pub use store::{Corpus, PapersDocument};

//! Corpus document loading.
//!
//! The three documents are read concurrently and awaited jointly, so a
//! [`Corpus`] only comes into existence once all three have parsed. There
//! are no retries and no partial results: the first failure aborts the load.

use crate::error::{CorpusError, CorpusResult};
use crate::store::{Corpus, PapersDocument};
use papermap_domain::{AssignmentModes, Palettes};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// File names of the three corpus documents.
pub const PAPERS_FILE: &str = "papers.json";
pub const ASSIGNMENTS_FILE: &str = "assignments.json";
pub const COLORS_FILE: &str = "colors.json";

/// Load and join the three corpus documents from a directory.
pub async fn load_dir(dir: impl AsRef<Path>) -> CorpusResult<Corpus> {
    let dir = dir.as_ref();
    let (papers, modes, palettes) = tokio::try_join!(
        read_document::<PapersDocument>(dir.join(PAPERS_FILE)),
        read_document::<AssignmentModes>(dir.join(ASSIGNMENTS_FILE)),
        read_document::<Palettes>(dir.join(COLORS_FILE)),
    )?;

    let corpus = Corpus::new(papers, modes, palettes)?;
    tracing::info!(
        papers = corpus.len(),
        modes = corpus.modes().len(),
        "corpus loaded"
    );
    Ok(corpus)
}

async fn read_document<T: DeserializeOwned>(path: PathBuf) -> CorpusResult<T> {
    let text = tokio::fs::read_to_string(&path).await.map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            CorpusError::NotFound { path: path.clone() }
        } else {
            CorpusError::Read {
                path: path.clone(),
                source,
            }
        }
    })?;

    serde_json::from_str(&text).map_err(|source| CorpusError::Json { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("papermap-{}-{}", tag, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn loads_all_three_documents() {
        let dir = scratch_dir("load");
        std::fs::write(
            dir.join(PAPERS_FILE),
            r#"{"p1": {"x": 1.0, "y": 2.0, "title": "One"}}"#,
        )
        .unwrap();
        std::fs::write(
            dir.join(ASSIGNMENTS_FILE),
            r#"{"m": {"name": "Mode", "map": {"p1": "g"}}}"#,
        )
        .unwrap();
        std::fs::write(dir.join(COLORS_FILE), r##"{"m": {"g": "#123456"}}"##).unwrap();

        let corpus = load_dir(&dir).await.unwrap();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.default_mode_key(), Some("m"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn missing_document_is_fatal() {
        let dir = scratch_dir("missing");
        std::fs::write(dir.join(PAPERS_FILE), "{}").unwrap();
        // assignments.json and colors.json deliberately absent

        let err = load_dir(&dir).await.unwrap_err();
        assert!(matches!(err, CorpusError::NotFound { .. }));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn invalid_document_is_fatal() {
        let dir = scratch_dir("invalid");
        std::fs::write(dir.join(PAPERS_FILE), "{}").unwrap();
        std::fs::write(dir.join(ASSIGNMENTS_FILE), "[1, 2").unwrap();
        std::fs::write(dir.join(COLORS_FILE), "{}").unwrap();

        let err = load_dir(&dir).await.unwrap_err();
        assert!(matches!(err, CorpusError::Json { .. }));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}

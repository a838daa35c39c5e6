//! Joined read-only corpus store.

use crate::error::{CorpusError, CorpusResult};
use indexmap::IndexMap;
use papermap_domain::{AssignmentMode, AssignmentModes, LabelCategory, Palette, Palettes, PaperRecord};
use serde::Deserialize;
use std::collections::HashMap;

/// The wire shape of `papers.json`: a map from paper id to record, or a
/// plain list of records that carry their own ids.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum PapersDocument {
    ById(IndexMap<String, PaperRecord>),
    Listed(Vec<PaperRecord>),
}

/// The three corpus documents joined into one read-only store.
///
/// Structurally immutable after construction; every derived view the UI
/// controls need (option lists, year hint) is computed on demand from the
/// records.
#[derive(Clone, Debug)]
pub struct Corpus {
    records: Vec<PaperRecord>,
    index: HashMap<String, usize>,
    modes: AssignmentModes,
    palettes: Palettes,
}

impl Corpus {
    /// Join the three parsed documents.
    ///
    /// In the map form of `papers.json` the map key is authoritative for the
    /// record id; in the list form every record must carry its own id.
    /// Duplicate ids are rejected, since the id is the join key into the
    /// assignment maps.
    pub fn new(
        papers: PapersDocument,
        modes: AssignmentModes,
        palettes: Palettes,
    ) -> CorpusResult<Self> {
        let records: Vec<PaperRecord> = match papers {
            PapersDocument::ById(map) => map
                .into_iter()
                .map(|(id, mut record)| {
                    record.paper_id = id;
                    record
                })
                .collect(),
            PapersDocument::Listed(list) => {
                for (index, record) in list.iter().enumerate() {
                    if record.paper_id.trim().is_empty() {
                        return Err(CorpusError::MissingId { index });
                    }
                }
                list
            }
        };

        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.paper_id.clone(), position).is_some() {
                return Err(CorpusError::DuplicateId {
                    id: record.paper_id.clone(),
                });
            }
        }

        Ok(Self {
            records,
            index,
            modes,
            palettes,
        })
    }

    /// Parse and join the three documents from JSON text.
    pub fn from_json(papers: &str, assignments: &str, colors: &str) -> CorpusResult<Self> {
        let papers: PapersDocument = parse_document(papers, crate::loader::PAPERS_FILE)?;
        let modes: AssignmentModes = parse_document(assignments, crate::loader::ASSIGNMENTS_FILE)?;
        let palettes: Palettes = parse_document(colors, crate::loader::COLORS_FILE)?;
        Self::new(papers, modes, palettes)
    }

    pub fn records(&self) -> &[PaperRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record by id.
    pub fn get(&self, paper_id: &str) -> Option<&PaperRecord> {
        self.position(paper_id).map(|i| &self.records[i])
    }

    /// Position of a record in the plot order.
    pub fn position(&self, paper_id: &str) -> Option<usize> {
        self.index.get(paper_id).copied()
    }

    pub fn modes(&self) -> &AssignmentModes {
        &self.modes
    }

    pub fn mode(&self, key: &str) -> Option<&AssignmentMode> {
        self.modes.get(key)
    }

    pub fn palette(&self, key: &str) -> Option<&Palette> {
        self.palettes.get(key)
    }

    /// The first mode in document order, the default active mode.
    pub fn default_mode_key(&self) -> Option<&str> {
        self.modes.keys().next().map(String::as_str)
    }

    /// Sorted unique non-empty countries, for the country selector.
    pub fn countries(&self) -> Vec<&str> {
        sorted_unique(self.records.iter().filter_map(|r| r.country.as_deref()))
    }

    /// Sorted unique non-empty institutions, for the institution selector.
    pub fn institutions(&self) -> Vec<&str> {
        sorted_unique(self.records.iter().filter_map(|r| r.institution.as_deref()))
    }

    /// Sorted unique tag values for one label category, for the label-value
    /// selector repopulated whenever the category changes.
    pub fn label_values(&self, category: LabelCategory) -> Vec<&str> {
        sorted_unique(
            self.records
                .iter()
                .filter_map(|r| r.tags(category))
                .flatten()
                .map(String::as_str),
        )
    }

    /// Minimum and maximum year present in the corpus.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let mut years = self.records.iter().filter_map(|r| r.year);
        let first = years.next()?;
        Some(years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }

    /// Placeholder hint for the year filter input, derived from the corpus
    /// year range (for example "e.g. 2018-2021, 2024").
    pub fn year_hint(&self) -> Option<String> {
        let (min, max) = self.year_range()?;
        Some(format!("e.g. {}-{}, {}", min, min + 3, max))
    }
}

fn parse_document<'de, T: Deserialize<'de>>(text: &'de str, name: &str) -> CorpusResult<T> {
    serde_json::from_str(text).map_err(|source| CorpusError::Json {
        path: name.into(),
        source,
    })
}

fn sorted_unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut out: Vec<&str> = values.filter(|v| !v.trim().is_empty()).collect();
    out.sort_unstable();
    out.dedup();
    out
}

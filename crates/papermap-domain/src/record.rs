//! Paper record domain model.

use crate::label::LabelCategory;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Authors as stored in the corpus: either a list of names or one free-text
/// string. Both shapes occur in real paper files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Authors {
    List(Vec<String>),
    Single(String),
}

impl Authors {
    /// Joined display form ("A. Author, B. Author").
    pub fn display(&self) -> String {
        match self {
            Authors::List(names) => names.join(", "),
            Authors::Single(text) => text.clone(),
        }
    }

    /// Whether there is no author text at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Authors::List(names) => names.iter().all(|n| n.trim().is_empty()),
            Authors::Single(text) => text.trim().is_empty(),
        }
    }
}

/// One paper: a 2-D embedding coordinate plus metadata.
///
/// The identifier is the join key into assignment maps and must be stable;
/// the coordinate must be present or the record cannot be plotted, so `x`
/// and `y` are required at deserialization. Everything else is optional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// Stable unique identifier.
    #[serde(alias = "id", default)]
    pub paper_id: String,

    /// Embedding coordinate.
    pub x: f64,
    pub y: f64,

    pub title: Option<String>,
    pub year: Option<i32>,
    pub country: Option<String>,
    pub institution: Option<String>,
    pub authors: Option<Authors>,

    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,

    /// External link to the paper source.
    pub link: Option<String>,

    /// Label map: lowercase category key to tag list. Kept as raw strings on
    /// the wire so unknown keys in a data file stay harmless; use
    /// [`PaperRecord::tags`] for typed access.
    #[serde(default)]
    pub labels: HashMap<String, Vec<String>>,
}

impl PaperRecord {
    /// Tag list for one label category, if the record carries it.
    pub fn tags(&self, category: LabelCategory) -> Option<&[String]> {
        self.labels.get(category.key()).map(Vec::as_slice)
    }

    /// Whether the record carries the given tag under the given category.
    pub fn has_tag(&self, category: LabelCategory, value: &str) -> bool {
        self.tags(category)
            .map_or(false, |tags| tags.iter().any(|t| t == value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> PaperRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn parses_full_record() {
        let r = record(
            r#"{
                "paper_id": "p1",
                "x": 0.5, "y": -1.25,
                "title": "Atlas Registration",
                "year": 2021,
                "country": "France",
                "institution": "Inria",
                "authors": ["A. One", "B. Two"],
                "abstract": "We register atlases.",
                "link": "https://example.org/p1",
                "labels": {"task": ["Registration"], "organ": ["Brain"]}
            }"#,
        );
        assert_eq!(r.paper_id, "p1");
        assert_eq!(r.year, Some(2021));
        assert_eq!(r.abstract_text.as_deref(), Some("We register atlases."));
        assert_eq!(r.tags(LabelCategory::Task).unwrap(), ["Registration"]);
        assert!(r.has_tag(LabelCategory::Organ, "Brain"));
        assert!(!r.has_tag(LabelCategory::Method, "CNN"));
    }

    #[test]
    fn authors_accept_list_or_scalar() {
        let listed = record(r#"{"paper_id": "a", "x": 0, "y": 0, "authors": ["X", "Y"]}"#);
        assert_eq!(listed.authors.unwrap().display(), "X, Y");

        let scalar = record(r#"{"paper_id": "b", "x": 0, "y": 0, "authors": "X et al."}"#);
        assert_eq!(scalar.authors.unwrap().display(), "X et al.");
    }

    #[test]
    fn missing_coordinates_are_rejected() {
        let result = serde_json::from_str::<PaperRecord>(r#"{"paper_id": "p", "x": 1.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn optional_fields_default_to_none() {
        let r = record(r#"{"paper_id": "p", "x": 1.0, "y": 2.0}"#);
        assert!(r.title.is_none());
        assert!(r.year.is_none());
        assert!(r.labels.is_empty());
        assert!(r.tags(LabelCategory::Category).is_none());
    }

    #[test]
    fn unknown_label_keys_are_preserved_but_ignored() {
        let r = record(
            r#"{"paper_id": "p", "x": 0, "y": 0, "labels": {"topic": ["Misc"], "task": ["Seg"]}}"#,
        );
        assert!(r.has_tag(LabelCategory::Task, "Seg"));
        assert_eq!(LabelCategory::from_key("topic"), None);
    }
}

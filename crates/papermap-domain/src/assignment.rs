//! Assignment modes: named clustering schemes mapping papers to groups.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named clustering/grouping scheme.
///
/// The map goes from paper id to group label. Papers absent from the map
/// are a normal case and simply fall back to the neutral color.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentMode {
    /// Human-readable display name; may be empty in the data file.
    #[serde(default)]
    pub name: String,

    /// Paper id to group label.
    #[serde(default)]
    pub map: HashMap<String, String>,
}

impl AssignmentMode {
    /// Group label for a paper under this mode.
    pub fn group_of(&self, paper_id: &str) -> Option<&str> {
        self.map.get(paper_id).map(String::as_str)
    }

    /// Display name, falling back to the mode key when the file gives none.
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        if self.name.trim().is_empty() {
            key
        } else {
            &self.name
        }
    }
}

/// All assignment modes keyed by mode key.
///
/// Insertion order is the document order of `assignments.json`, which is
/// also the order the mode selector presents them in; the first entry is
/// the default active mode.
pub type AssignmentModes = IndexMap<String, AssignmentMode>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_lookup() {
        let mode: AssignmentMode = serde_json::from_str(
            r#"{"name": "By Topic", "map": {"p1": "Segmentation", "p2": "Registration"}}"#,
        )
        .unwrap();
        assert_eq!(mode.group_of("p1"), Some("Segmentation"));
        assert_eq!(mode.group_of("p9"), None);
    }

    #[test]
    fn display_name_falls_back_to_key() {
        let named: AssignmentMode =
            serde_json::from_str(r#"{"name": "By Topic", "map": {}}"#).unwrap();
        assert_eq!(named.display_name("group_by_topic"), "By Topic");

        let unnamed: AssignmentMode = serde_json::from_str(r#"{"map": {}}"#).unwrap();
        assert_eq!(unnamed.display_name("group_by_topic"), "group_by_topic");
    }

    #[test]
    fn modes_keep_document_order() {
        let modes: AssignmentModes = serde_json::from_str(
            r#"{
                "group_by_topic": {"name": "By Topic", "map": {}},
                "group_by_year": {"name": "By Year", "map": {}},
                "group_by_method": {"name": "By Method", "map": {}}
            }"#,
        )
        .unwrap();
        let keys: Vec<&str> = modes.keys().map(String::as_str).collect();
        assert_eq!(keys, ["group_by_topic", "group_by_year", "group_by_method"]);
    }
}

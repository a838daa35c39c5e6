//! Label categories attached to paper records.

use serde::{Deserialize, Serialize};

/// The label categories a paper can carry.
///
/// The wire format uses the lowercase keys ("category", "task", ...), and
/// [`LabelCategory::ALL`] fixes the order the detail panel and the
/// label-filter selector list them in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelCategory {
    Category,
    Task,
    Method,
    Modality,
    Organ,
}

impl LabelCategory {
    /// All categories in display order.
    pub const ALL: [LabelCategory; 5] = [
        LabelCategory::Category,
        LabelCategory::Task,
        LabelCategory::Method,
        LabelCategory::Modality,
        LabelCategory::Organ,
    ];

    /// The lowercase key used in record label maps.
    pub fn key(&self) -> &'static str {
        match self {
            LabelCategory::Category => "category",
            LabelCategory::Task => "task",
            LabelCategory::Method => "method",
            LabelCategory::Modality => "modality",
            LabelCategory::Organ => "organ",
        }
    }

    /// Capitalized display title ("task" becomes "Task").
    pub fn title(&self) -> &'static str {
        match self {
            LabelCategory::Category => "Category",
            LabelCategory::Task => "Task",
            LabelCategory::Method => "Method",
            LabelCategory::Modality => "Modality",
            LabelCategory::Organ => "Organ",
        }
    }

    /// Parse a lowercase key back into a category.
    pub fn from_key(key: &str) -> Option<Self> {
        LabelCategory::ALL.into_iter().find(|c| c.key() == key)
    }
}

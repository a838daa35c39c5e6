//! Filter criteria and visibility evaluation.
//!
//! [`evaluate`] is a pure function of records and criteria: for every
//! record it derives whether the record is visible and which opacity and
//! marker size it gets. Colors are never touched here, so the
//! color-by-assignment-mode view stays legible while filtered.

use crate::yearspec::YearSpec;
use papermap_domain::{LabelCategory, PaperRecord};
use serde::{Deserialize, Serialize};

/// Marker size when no filter dimension is active.
pub const BASE_SIZE: f64 = 8.0;
/// Marker size for visible records while any filter dimension is active.
pub const FOCUS_SIZE: f64 = 10.0;
/// Marker size for records hidden by the filter.
pub const HIDDEN_SIZE: f64 = 5.0;

/// Opacity of visible records.
pub const VISIBLE_OPACITY: f64 = 1.0;
/// Opacity of records hidden by the filter.
pub const HIDDEN_OPACITY: f64 = 0.1;

/// One exact-match filter dimension: unconstrained, or pinned to a value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice<T> {
    #[default]
    Any,
    Only(T),
}

impl<T: PartialEq> Choice<T> {
    /// Whether a record value passes this dimension. A record without a
    /// value fails any pinned choice.
    pub fn admits(&self, value: Option<&T>) -> bool {
        match self {
            Choice::Any => true,
            Choice::Only(want) => value == Some(want),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Choice::Any)
    }
}

/// The label dimension: only active when BOTH a category and a value are
/// chosen; otherwise it admits everything.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelFilter {
    pub category: Option<LabelCategory>,
    pub value: Option<String>,
}

impl LabelFilter {
    /// The concrete (category, value) pair, when both are chosen.
    pub fn active(&self) -> Option<(LabelCategory, &str)> {
        Some((self.category?, self.value.as_deref()?))
    }

    /// Whether a record passes. A record lacking the selected category
    /// entirely fails the match.
    pub fn matches(&self, record: &PaperRecord) -> bool {
        match self.active() {
            None => true,
            Some((category, value)) => record.has_tag(category, value),
        }
    }
}

/// The combined multi-dimensional filter. Dimensions AND together.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub years: YearSpec,
    pub country: Choice<String>,
    pub institution: Choice<String>,
    pub label: LabelFilter,
}

impl FilterCriteria {
    /// Whether any dimension constrains the view.
    pub fn is_active(&self) -> bool {
        !self.years.is_all()
            || !self.country.is_any()
            || !self.institution.is_any()
            || self.label.active().is_some()
    }

    /// Reset every dimension to "match everything".
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether a record passes all dimensions.
    pub fn matches(&self, record: &PaperRecord) -> bool {
        self.years.matches(record.year)
            && self.country.admits(record.country.as_ref())
            && self.institution.admits(record.institution.as_ref())
            && self.label.matches(record)
    }
}

/// Derived visual state of one record under the current criteria.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointVisual {
    pub visible: bool,
    pub opacity: f64,
    pub size: f64,
}

/// Evaluate the criteria against every record.
///
/// Pure and idempotent: identical inputs yield identical output arrays,
/// and there is no state beyond the arguments.
pub fn evaluate(records: &[PaperRecord], criteria: &FilterCriteria) -> Vec<PointVisual> {
    let filtering = criteria.is_active();

    records
        .iter()
        .map(|record| {
            if criteria.matches(record) {
                PointVisual {
                    visible: true,
                    opacity: VISIBLE_OPACITY,
                    size: if filtering { FOCUS_SIZE } else { BASE_SIZE },
                }
            } else {
                PointVisual {
                    visible: false,
                    opacity: HIDDEN_OPACITY,
                    size: HIDDEN_SIZE,
                }
            }
        })
        .collect()
}

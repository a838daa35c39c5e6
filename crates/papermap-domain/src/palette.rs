//! Group color palettes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Neutral fallback for unassigned or unmapped records.
pub const FALLBACK_COLOR: &str = "#cccccc";

/// Color palette for one assignment mode: group label to color string.
///
/// Color values are opaque to papermap; palette files mix hex (`#rrggbb`)
/// and `hsl(...)` notation and both are passed through to the plotting
/// surface untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    pub colors: HashMap<String, String>,
}

impl Palette {
    /// Color for a group label, if the palette defines one.
    pub fn color_of(&self, group: &str) -> Option<&str> {
        self.colors.get(group).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Palettes for all modes keyed by mode key.
pub type Palettes = HashMap<String, Palette>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparent_wire_format() {
        let palette: Palette = serde_json::from_str(
            r##"{"Segmentation": "hsl(120, 70%, 50%)", "Registration": "#1f77b4"}"##,
        )
        .unwrap();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.color_of("Registration"), Some("#1f77b4"));
        assert_eq!(palette.color_of("Synthesis"), None);
    }

    #[test]
    fn palettes_keyed_by_mode() {
        let palettes: Palettes = serde_json::from_str(
            r##"{"group_by_topic": {"Segmentation": "#ff0000"}, "group_by_year": {}}"##,
        )
        .unwrap();
        assert_eq!(palettes["group_by_topic"].color_of("Segmentation"), Some("#ff0000"));
        assert!(palettes["group_by_year"].is_empty());
    }
}

//! Color assignment.

use papermap_domain::{AssignmentMode, Palette, PaperRecord, FALLBACK_COLOR};

/// Display color for one record under an assignment mode.
///
/// Two lookups, either of which may miss: record id to group label, group
/// label to palette color. A miss at either step yields [`FALLBACK_COLOR`];
/// absence of a mapping is a normal case, never an error.
pub fn color_for<'a>(
    record: &PaperRecord,
    mode: Option<&'a AssignmentMode>,
    palette: Option<&'a Palette>,
) -> &'a str {
    mode.and_then(|m| m.group_of(&record.paper_id))
        .and_then(|group| palette?.color_of(group))
        .unwrap_or(FALLBACK_COLOR)
}

/// Compute the display color for every record. Total and deterministic.
pub fn assign_colors(
    records: &[PaperRecord],
    mode: Option<&AssignmentMode>,
    palette: Option<&Palette>,
) -> Vec<String> {
    records
        .iter()
        .map(|record| color_for(record, mode, palette).to_string())
        .collect()
}

//! Detail panel rendering.
//!
//! A pure function from a record plus the active assignment mode to an HTML
//! fragment for the sidebar. Optional fields degrade to placeholders or are
//! omitted; nothing here can fail. All text content is escaped, and the
//! external link is only emitted when it parses as an absolute URL.

use html_escape::{encode_double_quoted_attribute, encode_text};
use papermap_domain::{LabelCategory, PaperRecord};
use url::Url;

/// Placeholder when a record has no abstract.
pub const NO_ABSTRACT: &str = "(No abstract available)";
/// Placeholder for missing scalar fields.
pub const NOT_AVAILABLE: &str = "N/A";
/// Placeholder title.
pub const UNTITLED: &str = "(Untitled)";

/// Render the detail panel for one record.
///
/// `mode_name` is the display name of the active assignment mode and
/// `group_label` the record's group under that mode, if any.
pub fn render_details(record: &PaperRecord, mode_name: &str, group_label: Option<&str>) -> String {
    let mut html = String::new();

    let title = record.title.as_deref().unwrap_or(UNTITLED);
    html.push_str(&format!(
        "<div class=\"details-title\">{}</div>\n",
        encode_text(title)
    ));

    let authors = match &record.authors {
        Some(authors) if !authors.is_empty() => authors.display(),
        _ => NOT_AVAILABLE.to_string(),
    };
    html.push_str("<div class=\"details-meta\">\n");
    html.push_str(&format!("<b>Authors:</b> {}<br>\n", encode_text(&authors)));
    html.push_str(&format!(
        "<div class=\"details-origin\">{} | {} | {}</div>\n",
        year_text(record),
        encode_text(record.country.as_deref().unwrap_or(NOT_AVAILABLE)),
        encode_text(record.institution.as_deref().unwrap_or(NOT_AVAILABLE)),
    ));
    html.push_str("</div>\n");

    html.push_str(&label_section(record));

    html.push_str("<div class=\"details-abstract\">\n");
    html.push_str(&format!(
        "<div class=\"details-cluster\"><b>{}:</b> {}</div>\n",
        encode_text(mode_name),
        encode_text(group_label.unwrap_or(NOT_AVAILABLE)),
    ));
    html.push_str(&format!(
        "{}\n",
        encode_text(record.abstract_text.as_deref().unwrap_or(NO_ABSTRACT))
    ));
    if let Some(link) = valid_link(record) {
        html.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\">View Paper Source</a>\n",
            encode_double_quoted_attribute(link)
        ));
    }
    html.push_str("</div>\n");

    html
}

fn year_text(record: &PaperRecord) -> String {
    record
        .year
        .map(|y| y.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Tag rows in fixed category order, skipping empty categories. Empty when
/// the record carries no labels at all.
fn label_section(record: &PaperRecord) -> String {
    let mut rows = String::new();
    for category in LabelCategory::ALL {
        let Some(tags) = record.tags(category) else {
            continue;
        };
        if tags.is_empty() {
            continue;
        }
        let spans: String = tags
            .iter()
            .map(|tag| format!("<span class=\"label-tag\">{}</span>", encode_text(tag)))
            .collect();
        rows.push_str(&format!(
            "<div class=\"label-row\"><span class=\"label-key\">{}:</span>{}</div>\n",
            category.title(),
            spans
        ));
    }

    if rows.is_empty() {
        String::new()
    } else {
        format!("<div class=\"label-section\">\n{rows}</div>\n")
    }
}

fn valid_link(record: &PaperRecord) -> Option<&str> {
    let link = record.link.as_deref()?;
    Url::parse(link).ok()?;
    Some(link)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> PaperRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn full_record_renders_every_section() {
        let r = record(
            r#"{
                "paper_id": "p1", "x": 0, "y": 0,
                "title": "Atlas Registration",
                "year": 2021, "country": "France", "institution": "Inria",
                "authors": ["A. One", "B. Two"],
                "abstract": "We register atlases.",
                "link": "https://example.org/p1",
                "labels": {"task": ["Registration"], "organ": ["Brain"]}
            }"#,
        );
        let html = render_details(&r, "By Topic", Some("Reg"));
        assert!(html.contains("Atlas Registration"));
        assert!(html.contains("A. One, B. Two"));
        assert!(html.contains("2021 | France | Inria"));
        assert!(html.contains("<b>By Topic:</b> Reg"));
        assert!(html.contains("Task:"));
        assert!(html.contains("Organ:"));
        assert!(html.contains("href=\"https://example.org/p1\""));
    }

    #[test]
    fn label_rows_follow_fixed_category_order() {
        let r = record(
            r#"{"paper_id": "p", "x": 0, "y": 0,
                "labels": {"organ": ["Brain"], "category": ["Imaging"]}}"#,
        );
        let html = render_details(&r, "Cluster", None);
        let category_pos = html.find("Category:").unwrap();
        let organ_pos = html.find("Organ:").unwrap();
        assert!(category_pos < organ_pos);
    }

    #[test]
    fn missing_fields_become_placeholders() {
        let r = record(r#"{"paper_id": "p", "x": 0, "y": 0}"#);
        let html = render_details(&r, "Cluster", None);
        assert!(html.contains(UNTITLED));
        assert!(html.contains(NO_ABSTRACT));
        assert!(html.contains("<b>Cluster:</b> N/A"));
        assert!(html.contains("N/A | N/A | N/A"));
        assert!(!html.contains("label-section"));
        assert!(!html.contains("<a href"));
    }

    #[test]
    fn text_content_is_escaped() {
        let r = record(
            r#"{"paper_id": "p", "x": 0, "y": 0,
                "title": "Bigger <b>& bolder</b>", "authors": "X <script>"}"#,
        );
        let html = render_details(&r, "Cluster", None);
        assert!(html.contains("Bigger &lt;b&gt;&amp; bolder&lt;/b&gt;"));
        assert!(html.contains("X &lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn relative_link_is_omitted() {
        let r = record(r#"{"paper_id": "p", "x": 0, "y": 0, "link": "papers/p1.pdf"}"#);
        let html = render_details(&r, "Cluster", None);
        assert!(!html.contains("<a href"));
    }

    #[test]
    fn rendering_is_pure() {
        let r = record(r#"{"paper_id": "p", "x": 0, "y": 0, "title": "T"}"#);
        assert_eq!(
            render_details(&r, "Cluster", Some("g")),
            render_details(&r, "Cluster", Some("g"))
        );
    }
}

//! Chart surface façade.
//!
//! The plotting widget is an external collaborator; the engine only needs
//! the narrow contract below: draw the data trace, restyle it wholesale,
//! and position a separate always-present highlight marker. Pointer events
//! come back already hit-tested, so a click either carries the point under
//! the cursor or it does not.

use serde::{Deserialize, Serialize};

/// Visual style of one data point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointStyle {
    pub color: String,
    pub opacity: f64,
    pub size: f64,
}

/// Style of the highlight ring marking the focused point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HighlightStyle {
    pub size: f64,
    pub outline_color: String,
    pub outline_width: f64,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            size: 15.0,
            outline_color: "#FF0000".to_string(),
            outline_width: 3.0,
        }
    }
}

/// A pointer event delivered by the plotting surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The pointer entered a point.
    Hover { paper_id: String },
    /// The pointer left the point it was over.
    Unhover,
    /// A click, with the synchronous hit-test result: the point under the
    /// cursor, or `None` for empty background.
    Click { hit: Option<String> },
}

/// Contract the plotting surface must satisfy.
pub trait ChartSurface {
    /// Draw the full data trace plus the (initially empty) highlight trace.
    fn draw(&mut self, points: &[(f64, f64)], styles: &[PointStyle], highlight: &HighlightStyle);

    /// Restyle the existing data trace wholesale.
    fn restyle(&mut self, styles: &[PointStyle]);

    /// Move the highlight marker to a data coordinate.
    fn set_highlight(&mut self, x: f64, y: f64);

    /// Hide the highlight marker.
    fn clear_highlight(&mut self);
}

/// In-memory surface for tests and headless runs: records what the engine
/// pushed instead of drawing anything.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub points: Vec<(f64, f64)>,
    pub styles: Vec<PointStyle>,
    pub highlight_style: Option<HighlightStyle>,
    pub highlight: Option<(f64, f64)>,
    pub restyle_calls: usize,
}

impl ChartSurface for RecordingSurface {
    fn draw(&mut self, points: &[(f64, f64)], styles: &[PointStyle], highlight: &HighlightStyle) {
        self.points = points.to_vec();
        self.styles = styles.to_vec();
        self.highlight_style = Some(highlight.clone());
    }

    fn restyle(&mut self, styles: &[PointStyle]) {
        self.styles = styles.to_vec();
        self.restyle_calls += 1;
    }

    fn set_highlight(&mut self, x: f64, y: f64) {
        self.highlight = Some((x, y));
    }

    fn clear_highlight(&mut self) {
        self.highlight = None;
    }
}

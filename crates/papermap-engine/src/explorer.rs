//! Explorer controller.
//!
//! Owns everything the view needs: the corpus, the active assignment mode,
//! the filter criteria, the selection state, and the per-point style
//! arrays. Styles are recomputed wholesale on every mode or filter change,
//! never incrementally, so there is exactly one derivation path from state
//! to pixels.

use crate::color::assign_colors;
use crate::details::render_details;
use crate::error::{ExplorerError, ExplorerResult};
use crate::filter::{evaluate, FilterCriteria, PointVisual};
use crate::selection::{Selection, SelectionEffect};
use crate::surface::{ChartSurface, HighlightStyle, PointStyle, SurfaceEvent};
use crate::yearspec::YearSpec;
use papermap_corpus::{load_dir, Corpus};
use papermap_domain::PaperRecord;
use std::path::Path;

pub struct Explorer {
    corpus: Corpus,
    mode_key: Option<String>,
    criteria: FilterCriteria,
    selection: Selection,
    highlight_style: HighlightStyle,
    colors: Vec<String>,
    visuals: Vec<PointVisual>,
}

impl Explorer {
    /// Build an explorer over a loaded corpus. The first assignment mode in
    /// document order starts active; colors and visuals are derived
    /// immediately so the first draw is complete.
    pub fn new(corpus: Corpus) -> Self {
        let mode_key = corpus.default_mode_key().map(str::to_string);
        let mut explorer = Self {
            corpus,
            mode_key,
            criteria: FilterCriteria::default(),
            selection: Selection::new(),
            highlight_style: HighlightStyle::default(),
            colors: Vec::new(),
            visuals: Vec::new(),
        };
        explorer.recompute_colors();
        explorer.recompute_visuals();
        explorer
    }

    /// Load the corpus documents from a directory and build an explorer.
    pub async fn load(dir: impl AsRef<Path>) -> ExplorerResult<Self> {
        Ok(Self::new(load_dir(dir).await?))
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The active assignment mode key, if the corpus defines any mode.
    pub fn mode_key(&self) -> Option<&str> {
        self.mode_key.as_deref()
    }

    pub fn visuals(&self) -> &[PointVisual] {
        &self.visuals
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Combined per-point styles, parallel to `corpus().records()`.
    pub fn point_styles(&self) -> Vec<PointStyle> {
        self.colors
            .iter()
            .zip(&self.visuals)
            .map(|(color, visual)| PointStyle {
                color: color.clone(),
                opacity: visual.opacity,
                size: visual.size,
            })
            .collect()
    }

    /// Whether a record is currently hidden by the filter. Unknown ids are
    /// treated as hidden, so stray events cannot focus anything.
    pub fn is_hidden(&self, paper_id: &str) -> bool {
        self.corpus
            .position(paper_id)
            .map_or(true, |i| !self.visuals[i].visible)
    }

    /// Initial draw once the corpus is loaded.
    pub fn draw(&self, surface: &mut dyn ChartSurface) {
        let points: Vec<(f64, f64)> = self
            .corpus
            .records()
            .iter()
            .map(|record| (record.x, record.y))
            .collect();
        surface.draw(&points, &self.point_styles(), &self.highlight_style);
    }

    /// Switch the active assignment mode and recolor every point.
    ///
    /// A key the corpus does not know is accepted; every record then falls
    /// back to the neutral color, same as any other lookup miss.
    pub fn set_mode(&mut self, key: impl Into<String>, surface: &mut dyn ChartSurface) {
        let key = key.into();
        if self.corpus.mode(&key).is_none() {
            tracing::warn!(mode = %key, "unknown assignment mode, coloring falls back");
        }
        self.mode_key = Some(key);
        self.recompute_colors();
        surface.restyle(&self.point_styles());
    }

    /// Replace the filter criteria and restyle every point.
    pub fn set_criteria(&mut self, criteria: FilterCriteria, surface: &mut dyn ChartSurface) {
        self.criteria = criteria;
        self.recompute_visuals();
        surface.restyle(&self.point_styles());
    }

    /// Re-parse the year filter text, keeping the other dimensions.
    pub fn set_year_text(&mut self, text: &str, surface: &mut dyn ChartSurface) {
        let mut criteria = self.criteria.clone();
        criteria.years = YearSpec::parse(text);
        self.set_criteria(criteria, surface);
    }

    /// Reset every filter dimension to "match everything". The selection is
    /// deliberately left untouched (see DESIGN.md).
    pub fn reset_filters(&mut self, surface: &mut dyn ChartSurface) {
        self.criteria.reset();
        self.recompute_visuals();
        surface.restyle(&self.point_styles());
    }

    /// Route a pointer event from the surface. Returns the detail-panel
    /// markup when the panel should change.
    pub fn handle_event(
        &mut self,
        event: SurfaceEvent,
        surface: &mut dyn ChartSurface,
    ) -> Option<String> {
        let effect = match event {
            SurfaceEvent::Hover { paper_id } => {
                let hidden = self.is_hidden(&paper_id);
                self.selection.on_hover(&paper_id, hidden)
            }
            SurfaceEvent::Unhover => self.selection.on_unhover(),
            SurfaceEvent::Click { hit: Some(paper_id) } => {
                let hidden = self.is_hidden(&paper_id);
                self.selection.on_click(&paper_id, hidden)
            }
            SurfaceEvent::Click { hit: None } => self.selection.on_background_click(),
        };

        match effect {
            SelectionEffect::None => None,
            SelectionEffect::ClearHighlight => {
                surface.clear_highlight();
                None
            }
            SelectionEffect::Focus { paper_id } => {
                let record = self.corpus.get(&paper_id)?;
                surface.set_highlight(record.x, record.y);
                Some(self.render_for(record))
            }
        }
    }

    /// Detail-panel markup for a record id.
    pub fn details(&self, paper_id: &str) -> ExplorerResult<String> {
        let record = self
            .corpus
            .get(paper_id)
            .ok_or_else(|| ExplorerError::UnknownPaper {
                id: paper_id.to_string(),
            })?;
        Ok(self.render_for(record))
    }

    fn render_for(&self, record: &PaperRecord) -> String {
        let key = self.mode_key.as_deref();
        let mode = key.and_then(|k| self.corpus.mode(k));
        let mode_name = match (key, mode) {
            (Some(key), Some(mode)) => mode.display_name(key),
            _ => "Cluster",
        };
        let group = mode.and_then(|m| m.group_of(&record.paper_id));
        render_details(record, mode_name, group)
    }

    fn recompute_colors(&mut self) {
        let key = self.mode_key.as_deref();
        let mode = key.and_then(|k| self.corpus.mode(k));
        let palette = key.and_then(|k| self.corpus.palette(k));
        self.colors = assign_colors(self.corpus.records(), mode, palette);
    }

    fn recompute_visuals(&mut self) {
        self.visuals = evaluate(self.corpus.records(), &self.criteria);
        tracing::debug!(
            visible = self.visuals.iter().filter(|v| v.visible).count(),
            total = self.visuals.len(),
            "visibility recomputed"
        );
    }
}

//! papermap-engine - Filter, color, and selection logic for the corpus explorer
//!
//! The engine keeps three things consistent with each other and with the
//! plotting surface: the active color assignment, the multi-dimensional
//! filter, and the lock/hover selection state.
//!
//! # Key Components
//!
//! - **YearSpec**: free-text year filter parser ("2005-2007, 2009")
//! - **FilterCriteria / evaluate**: pure visibility and style derivation
//! - **assign_colors**: per-record display color under an assignment mode
//! - **Selection**: the lock/hover state machine
//! - **ChartSurface**: trait façade over the plotting widget
//! - **render_details**: pure detail-panel markup renderer
//! - **Explorer**: controller owning corpus, criteria, and selection
//!
//! The plotting surface delivers a single synchronous click event carrying
//! the hit-tested point id, so point clicks and background clicks can never
//! race each other.

pub mod color;
pub mod details;
pub mod error;
pub mod explorer;
pub mod filter;
pub mod selection;
pub mod surface;
pub mod yearspec;

pub use color::assign_colors;
pub use details::render_details;
pub use error::{ExplorerError, ExplorerResult};
pub use explorer::Explorer;
pub use filter::{
    evaluate, Choice, FilterCriteria, LabelFilter, PointVisual, BASE_SIZE, FOCUS_SIZE,
    HIDDEN_OPACITY, HIDDEN_SIZE, VISIBLE_OPACITY,
};
pub use selection::{Selection, SelectionEffect, SelectionState};
pub use surface::{ChartSurface, HighlightStyle, PointStyle, RecordingSurface, SurfaceEvent};
pub use yearspec::YearSpec;

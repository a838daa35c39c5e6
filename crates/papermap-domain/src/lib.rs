//! papermap-domain - Data model for the papermap corpus explorer
//!
//! This crate defines the entities shared by the loader and the engine:
//!
//! - **PaperRecord**: one paper with its 2-D embedding coordinate and metadata
//! - **LabelCategory**: the fixed set of label categories a paper can carry
//! - **AssignmentMode**: a named clustering scheme mapping papers to groups
//! - **Palette**: group label to color string, per assignment mode
//!
//! Everything here is a plain serde-backed value type; derived visual state
//! (display color, hidden flag) lives with the engine, not on the records.

pub mod assignment;
pub mod label;
pub mod palette;
pub mod record;

pub use assignment::{AssignmentMode, AssignmentModes};
pub use label::LabelCategory;
pub use palette::{Palette, Palettes, FALLBACK_COLOR};
pub use record::{Authors, PaperRecord};

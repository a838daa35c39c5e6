//! Optional user configuration.
//!
//! `<config dir>/papermap/config.toml` can supply defaults for the data
//! directory and the assignment mode, so the flags can be omitted:
//!
//! ```toml
//! data_dir = "/data/papers/assets"
//! mode = "group_by_topic"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AppConfig {
    pub data_dir: Option<PathBuf>,
    pub mode: Option<String>,
}

impl AppConfig {
    /// Load the user config, if one exists. A missing file is the normal
    /// case; a malformed one is logged and ignored.
    pub fn load() -> Self {
        let Some(config_dir) = dirs::config_dir() else {
            return Self::default();
        };
        Self::load_from(&config_dir.join("papermap").join("config.toml"))
    }

    fn load_from(path: &Path) -> Self {
        let Ok(text) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match toml::from_str(&text) {
            Ok(config) => config,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "ignoring malformed config");
                Self::default()
            }
        }
    }
}

//! Configuration loading and parsing.
//!
//! Reads `oxlite.toml` (or an override path provided by the binary). All keys
//! are optional and unknown keys are ignored so older files keep loading. A
//! file that fails to parse is reported with a `warn` event and the defaults
//! are used instead; a missing file is not an error.
//!
//! ```toml
//! [editor]
//! undo_capacity = 500
//! tab_width = 1
//! default_file = "out.txt"
//!
//! [view]
//! gutter_width = 5
//! page_divisor = 4
//! min_columns = 78
//! ```

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    #[serde(default = "EditorConfig::default_undo_capacity")]
    pub undo_capacity: usize,
    #[serde(default = "EditorConfig::default_tab_width")]
    pub tab_width: usize,
    #[serde(default = "EditorConfig::default_file")]
    pub default_file: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            undo_capacity: Self::default_undo_capacity(),
            tab_width: Self::default_tab_width(),
            default_file: Self::default_file(),
        }
    }
}

impl EditorConfig {
    const fn default_undo_capacity() -> usize {
        500
    }
    const fn default_tab_width() -> usize {
        1
    }
    fn default_file() -> String {
        "out.txt".to_string()
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    #[serde(default = "ViewConfig::default_gutter_width")]
    pub gutter_width: u16,
    #[serde(default = "ViewConfig::default_page_divisor")]
    pub page_divisor: usize,
    #[serde(default = "ViewConfig::default_min_columns")]
    pub min_columns: u16,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            gutter_width: Self::default_gutter_width(),
            page_divisor: Self::default_page_divisor(),
            min_columns: Self::default_min_columns(),
        }
    }
}

impl ViewConfig {
    const fn default_gutter_width() -> u16 {
        5
    }
    const fn default_page_divisor() -> usize {
        4
    }
    const fn default_min_columns() -> u16 {
        78
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents, or defaults.
    pub file: ConfigFile,
}

impl Config {
    /// Undo history size; 0 is coerced to 1.
    pub fn undo_capacity(&self) -> usize {
        self.file.editor.undo_capacity.max(1)
    }

    /// Spaces inserted per Tab; never 0.
    pub fn tab_width(&self) -> usize {
        self.file.editor.tab_width.max(1)
    }

    pub fn page_divisor(&self) -> usize {
        self.file.view.page_divisor.max(1)
    }

    pub fn gutter_width(&self) -> u16 {
        self.file.view.gutter_width
    }

    /// Terminal width used for layout: never below `min_columns`.
    pub fn layout_columns(&self, terminal_columns: u16) -> u16 {
        terminal_columns.max(self.file.view.min_columns)
    }

    pub fn default_file(&self) -> PathBuf {
        PathBuf::from(&self.file.editor.default_file)
    }
}

/// Best-effort config path following platform conventions (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    // Prefer a local `oxlite.toml` before the platform config dir.
    let local = PathBuf::from("oxlite.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("oxlite").join("oxlite.toml");
    }
    PathBuf::from("oxlite.toml")
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config { file })
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed_using_defaults");
            Ok(Config::default())
        }
    }
}

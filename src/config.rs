use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::plot::projector::Canvas;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "DATA_CATALOG_CONFIG";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "data-catalog.json";

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Viewer settings. Every field may be omitted from the file.
///
/// ```json
/// {
///   "initial_source": "Student Depression Dataset.csv",
///   "canvas": { "width": 600, "height": 400, "margin": 40 },
///   "max_table_rows": 100
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset loaded at startup.
    pub initial_source: Option<PathBuf>,
    pub canvas: CanvasConfig,
    /// Data rows shown in the table view.
    pub max_table_rows: usize,
    /// Radius of the point markers; `0` draws the line only.
    pub marker_radius: f32,
    pub window: WindowConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_source: None,
            canvas: CanvasConfig::default(),
            max_table_rows: 100,
            marker_radius: 2.5,
            window: WindowConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            margin: 40.0,
        }
    }
}

impl CanvasConfig {
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width as f64,
            height: self.height as f64,
            margin: self.margin as f64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

impl Config {
    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Locate and parse the config: `$DATA_CATALOG_CONFIG` if set, else
    /// `data-catalog.json` in the working directory if it exists, else
    /// defaults.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => {
                let local = Path::new(DEFAULT_CONFIG_FILE);
                if local.exists() {
                    Self::from_file(local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// [`Config::load`], falling back to defaults when the file is broken.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            log::warn!("Using default configuration: {e:#}");
            Self::default()
        })
    }
}

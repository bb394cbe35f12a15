use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_COORDS_FILE, DEFAULT_FONT_COLOUR, DEFAULT_FONT_PATH, DEFAULT_FONT_SIZE,
    DEFAULT_MAX_WINDOW, DEFAULT_OUTPUT_DIR, DEFAULT_SCROLL_UNIT_PX, DEFAULT_ZOOM_STEP,
};
use crate::error::{Result, SignerError};
use crate::label::OutputFormat;

/// Top-level settings file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SignerConfig {
    #[serde(default)]
    pub viewer: ViewerConfig,
    #[serde(default)]
    pub label: LabelConfig,
}

impl SignerConfig {
    /// Load a TOML config. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| SignerError::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SignerError::Config(e.to_string()))
    }
}

/// Settings for the calibration viewer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Where clicked coordinates are written.
    pub coords_path: PathBuf,
    pub show_grid: bool,
    /// Zoom factor of one wheel notch.
    pub zoom_step: f64,
    /// Canvas pixels per scroll unit.
    pub scroll_unit_px: f64,
    /// Upper bound of the initial window size.
    pub max_window: [u32; 2],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            coords_path: PathBuf::from(DEFAULT_COORDS_FILE),
            show_grid: false,
            zoom_step: DEFAULT_ZOOM_STEP,
            scroll_unit_px: DEFAULT_SCROLL_UNIT_PX,
            max_window: DEFAULT_MAX_WINDOW,
        }
    }
}

impl ViewerConfig {
    /// Initial window size for an image: the image size, capped by `max_window`.
    pub fn initial_window(&self, width: u32, height: u32) -> [u32; 2] {
        [width.min(self.max_window[0]), height.min(self.max_window[1])]
    }
}

/// Settings for the certificate labeling batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Text file with one name per line.
    pub names: PathBuf,
    pub template: PathBuf,
    pub font_path: PathBuf,
    pub font_size: f32,
    /// Hex colour, `#rrggbb`.
    pub font_colour: String,
    pub output_dir: PathBuf,
    pub output_format: OutputFormat,
    /// Coordinate file written by the viewer.
    pub coords_path: PathBuf,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            names: PathBuf::from("names.csv"),
            template: PathBuf::from("template.png"),
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            font_size: DEFAULT_FONT_SIZE,
            font_colour: DEFAULT_FONT_COLOUR.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            output_format: OutputFormat::default(),
            coords_path: PathBuf::from(DEFAULT_COORDS_FILE),
        }
    }
}

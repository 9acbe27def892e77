//! TOML configuration file support for the `plot` command.
//!
//! Every setting can also come from a flag; flags win over the file, and the
//! file wins over the built-in defaults:
//!
//! ```toml
//! # trajplot.toml
//! [input]
//! folder = "examples/keppler"
//! compare = true
//!
//! [figure]
//! title = "Kepler orbit"
//! x_label = "x"
//! y_label = "y"
//! grid = false
//! width_in = 8.0
//! height_in = 6.0
//!
//! [output]
//! mode = "image"
//! path = "keppler.png"
//! dpi = 300
//! ```
//!
//! Explicit sources replace the folder layout, including `compare`, unless a
//! `--folder` or `--compare` flag is given:
//!
//! ```toml
//! [[input.sources]]
//! path = "runs/rk4.parquet"
//! label = "RK4"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use trajplot::figure::FigureStyle;

/// Root configuration structure for trajplot.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Which files to plot.
    #[serde(default)]
    pub input: InputConfig,

    /// Figure cosmetics.
    #[serde(default)]
    pub figure: FigureConfig,

    /// Where the figure goes.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Input selection.
#[derive(Debug, Default, Deserialize)]
pub struct InputConfig {
    /// Folder holding the standard file layout.
    pub folder: Option<PathBuf>,

    /// Plot the three-integrator comparison instead of a single file.
    pub compare: Option<bool>,

    /// Explicit list of files, drawn in order.
    #[serde(default)]
    pub sources: Vec<SourceConfig>,
}

/// One explicitly listed file.
#[derive(Debug, Deserialize)]
pub struct SourceConfig {
    /// Path of the file.
    pub path: PathBuf,

    /// Legend label.
    pub label: Option<String>,
}

/// Figure settings; unset fields keep the defaults.
#[derive(Debug, Default, Deserialize)]
pub struct FigureConfig {
    /// Axes title.
    pub title: Option<String>,

    /// Horizontal axis label.
    pub x_label: Option<String>,

    /// Vertical axis label.
    pub y_label: Option<String>,

    /// Draw a legend.
    pub legend: Option<bool>,

    /// Draw grid lines.
    pub grid: Option<bool>,

    /// Figure width in inches.
    pub width_in: Option<f64>,

    /// Figure height in inches.
    pub height_in: Option<f64>,

    /// On-screen resolution.
    pub dpi: Option<u32>,
}

/// Output kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// Interactive window.
    Display,
    /// PNG file.
    Image,
}

/// Output settings.
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Display or image.
    pub mode: Option<OutputKind>,

    /// Image path, required for image mode.
    pub path: Option<PathBuf>,

    /// Image resolution.
    pub dpi: Option<u32>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}

impl FigureConfig {
    /// Overwrite the fields of `style` that are set here.
    pub fn apply(&self, style: &mut FigureStyle) {
        if let Some(title) = &self.title {
            style.title = title.clone();
        }
        if let Some(x_label) = &self.x_label {
            style.x_label = x_label.clone();
        }
        if let Some(y_label) = &self.y_label {
            style.y_label = y_label.clone();
        }
        if let Some(legend) = self.legend {
            style.show_legend = legend;
        }
        if let Some(grid) = self.grid {
            style.show_grid = grid;
        }
        if let Some(width) = self.width_in {
            style.width_in = width;
        }
        if let Some(height) = self.height_in {
            style.height_in = height;
        }
        if let Some(dpi) = self.dpi {
            style.dpi = dpi;
        }
    }
}

//! # Trajectory Plotter
//!
//! The load → extract → render pipeline. Every source is loaded and extracted
//! before a [`Figure`] is built, so a missing file or column aborts the run
//! without producing a partial plot.
//!
//! ```rust,no_run
//! use trajplot::figure::{FigureStyle, OutputMode};
//! use trajplot::plotter::TrajectoryPlotter;
//!
//! TrajectoryPlotter::new(FigureStyle::with_suptitle("Runge-Kutta 4"))
//!     .with_source("examples/keppler/keppler.parquet", None)
//!     .run(&OutputMode::image("keppler.png"))?;
//! # Ok::<(), trajplot::plotter::PlotError>(())
//! ```

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::figure::{self, Figure, FigureStyle, OutputMode, RenderError};
use crate::series::{extract_series, Series};
use crate::table::{ColumnError, LoadError, TrajectoryTable};

/// File read in single mode
pub const SINGLE_FILE: &str = "keppler.parquet";

/// Files and legend labels read in compare mode, in drawing order
pub const COMPARE_FILES: [(&str, &str); 3] = [
    ("keppler_implicit.parquet", "Implicit"),
    ("keppler_explicit.parquet", "Explicit"),
    ("keppler_symplectic.parquet", "Symplectic"),
];

/// Folder searched when none is given
pub const DEFAULT_FOLDER: &str = "examples/keppler";

/// Errors that can occur while producing a plot
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    /// A source could not be loaded
    #[error("Failed to load {}: {source}", .path.display())]
    Load {
        /// Source that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: LoadError,
    },

    /// A required column is missing or unusable
    #[error("Column error: {0}")]
    Column(#[from] ColumnError),

    /// The figure could not be drawn or shown
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// A data file and the legend label of its trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesSource {
    /// Path of the table
    pub path: PathBuf,
    /// Legend label, `None` for an unlabelled trace
    pub label: Option<String>,
}

impl SeriesSource {
    /// Create a source
    pub fn new(path: impl Into<PathBuf>, label: Option<&str>) -> Self {
        Self {
            path: path.into(),
            label: label.map(str::to_string),
        }
    }
}

/// Sources for the default single-file layout of a folder
pub fn single_sources(folder: &Path) -> Vec<SeriesSource> {
    vec![SeriesSource::new(folder.join(SINGLE_FILE), None)]
}

/// Sources for the three-method comparison layout of a folder
pub fn compare_sources(folder: &Path) -> Vec<SeriesSource> {
    COMPARE_FILES
        .iter()
        .map(|(file, label)| SeriesSource::new(folder.join(file), Some(label)))
        .collect()
}

/// Plots one or more trajectory tables on a single equal-aspect axes
#[derive(Debug, Clone)]
pub struct TrajectoryPlotter {
    style: FigureStyle,
    sources: Vec<SeriesSource>,
}

impl TrajectoryPlotter {
    /// Create a plotter without sources
    pub fn new(style: FigureStyle) -> Self {
        Self {
            style,
            sources: Vec::new(),
        }
    }

    /// Append a source; traces are drawn in the order sources are added
    pub fn with_source(mut self, path: impl Into<PathBuf>, label: Option<&str>) -> Self {
        self.sources.push(SeriesSource::new(path, label));
        self
    }

    /// Append several sources
    pub fn with_sources<I>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = SeriesSource>,
    {
        self.sources.extend(sources);
        self
    }

    /// Configured sources
    pub fn sources(&self) -> &[SeriesSource] {
        &self.sources
    }

    /// Figure style
    pub fn style(&self) -> &FigureStyle {
        &self.style
    }

    /// Load and extract every source
    pub fn load_series(&self) -> Result<Vec<Series>, PlotError> {
        self.sources.iter().map(load_source).collect()
    }

    /// Load every source and build the figure
    pub fn build_figure(&self) -> Result<Figure, PlotError> {
        let series = self.load_series()?;
        let points: usize = series.iter().map(Series::len).sum();
        info!(
            "Building figure with {} trace(s), {} points",
            series.len(),
            points
        );
        Ok(Figure::from_series(self.style.clone(), series))
    }

    /// Build the figure and send it to `output`
    pub fn run(&self, output: &OutputMode) -> Result<(), PlotError> {
        let figure = self.build_figure()?;
        figure::emit(&figure, output)?;
        Ok(())
    }
}

fn load_source(source: &SeriesSource) -> Result<Series, PlotError> {
    debug!("Loading {}", source.path.display());
    let table = TrajectoryTable::open(&source.path).map_err(|e| PlotError::Load {
        path: source.path.clone(),
        source: e,
    })?;
    info!(
        "Loaded {} rows from {} ({})",
        table.num_rows(),
        source.path.display(),
        table.format()
    );
    Ok(extract_series(&table, source.label.as_deref())?)
}

//! # Figure Module
//!
//! A [`Figure`] is a plain value describing one 2D axes: the traces to draw and
//! the cosmetics around them. Nothing is drawn until the figure is handed to an
//! output ([`emit`], [`render_rgb`], [`save_png`]), and no global figure state
//! exists; every rendering call takes the figure explicitly.
//!
//! Axes always use equal scaling on both dimensions, so a circular orbit stays
//! circular regardless of the figure's shape (see [`aspect`]).
//!
//! ```rust,no_run
//! use trajplot::figure::{Figure, FigureStyle, OutputMode};
//! use trajplot::series::Series;
//!
//! let series = Series::new(vec![1.0, 0.0, -1.0], vec![0.0, 1.0, 0.0], None)?;
//! let figure = Figure::new(FigureStyle::with_suptitle("Symplectic Euler")).with_series(series);
//!
//! trajplot::figure::emit(&figure, &OutputMode::image("orbit.png"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod aspect;
#[cfg(feature = "display")]
mod display;
mod error;
pub mod layout;
mod render;


pub use aspect::{AxisLimits, DataBounds};
pub use error::RenderError;
pub use layout::PlotLayout;
pub use render::{emit, render_rgb, render_rgb_at, save_png};

#[cfg(feature = "display")]
pub use display::show;

use std::path::PathBuf;

use crate::series::Series;

/// Default resolution for saved images
pub const DEFAULT_IMAGE_DPI: u32 = 300;

/// Line colours, cycled in trace order
pub const PALETTE: [[u8; 3]; 10] = [
    [31, 119, 180],
    [255, 127, 14],
    [44, 160, 44],
    [214, 39, 40],
    [148, 103, 189],
    [140, 86, 75],
    [227, 119, 194],
    [127, 127, 127],
    [188, 189, 34],
    [23, 190, 207],
];

/// Cosmetic configuration of a figure
#[derive(Debug, Clone, PartialEq)]
pub struct FigureStyle {
    /// Figure-level title above the axes, typically the method or run name
    pub suptitle: Option<String>,
    /// Axes title
    pub title: String,
    /// Horizontal axis label
    pub x_label: String,
    /// Vertical axis label
    pub y_label: String,
    /// Draw a legend (only when there is something to distinguish)
    pub show_legend: bool,
    /// Draw grid lines at the major ticks
    pub show_grid: bool,
    /// Figure width in inches
    pub width_in: f64,
    /// Figure height in inches
    pub height_in: f64,
    /// Resolution used for on-screen rendering
    pub dpi: u32,
    /// Trace line width in points
    pub line_width_pt: f64,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            suptitle: None,
            title: "Trajectory".to_string(),
            x_label: "X".to_string(),
            y_label: "Y".to_string(),
            show_legend: true,
            show_grid: true,
            width_in: 6.4,
            height_in: 4.8,
            dpi: 100,
            line_width_pt: 1.5,
        }
    }
}

impl FigureStyle {
    /// Default style with a figure-level title
    pub fn with_suptitle(suptitle: impl Into<String>) -> Self {
        Self {
            suptitle: Some(suptitle.into()),
            ..Self::default()
        }
    }

    /// Pixel size of the figure at the given resolution
    pub fn pixel_size(&self, dpi: u32) -> (u32, u32) {
        let width = (self.width_in * dpi as f64).round().max(0.0) as u32;
        let height = (self.height_in * dpi as f64).round().max(0.0) as u32;
        (width, height)
    }
}

/// One line on the axes
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    label: Option<String>,
    points: Vec<(f64, f64)>,
    color: [u8; 3],
}

impl Trace {
    /// Legend label, if the series had one
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Points in row order
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Number of points
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// RGB line colour
    pub fn color(&self) -> [u8; 3] {
        self.color
    }
}

/// Where a figure goes once built
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Open an interactive window and block until it is closed
    #[default]
    Display,
    /// Write a PNG image
    Image {
        /// Output file
        path: PathBuf,
        /// Resolution in dots per inch
        dpi: u32,
    },
}

impl OutputMode {
    /// PNG output at [`DEFAULT_IMAGE_DPI`]
    pub fn image(path: impl Into<PathBuf>) -> Self {
        Self::Image {
            path: path.into(),
            dpi: DEFAULT_IMAGE_DPI,
        }
    }
}

/// A single 2D axes with equal aspect and one trace per series
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    style: FigureStyle,
    traces: Vec<Trace>,
}

impl Figure {
    /// Create an empty figure
    pub fn new(style: FigureStyle) -> Self {
        Self {
            style,
            traces: Vec::new(),
        }
    }

    /// Create a figure with one trace per series, in order
    pub fn from_series<I>(style: FigureStyle, series: I) -> Self
    where
        I: IntoIterator<Item = Series>,
    {
        series
            .into_iter()
            .fold(Self::new(style), |figure, s| figure.with_series(s))
    }

    /// Add a series as the next trace
    pub fn with_series(mut self, series: Series) -> Self {
        let color = PALETTE[self.traces.len() % PALETTE.len()];
        self.traces.push(Trace {
            label: series.label().map(str::to_string),
            points: series.points().collect(),
            color,
        });
        self
    }

    /// Cosmetic configuration
    pub fn style(&self) -> &FigureStyle {
        &self.style
    }

    /// Traces in drawing order
    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    /// Whether a legend is drawn
    ///
    /// A legend appears when it is enabled and there is more than one trace or
    /// any trace is labelled.
    pub fn shows_legend(&self) -> bool {
        self.style.show_legend
            && (self.traces.len() > 1 || self.traces.iter().any(|t| t.label.is_some()))
    }

    /// Legend entries in trace order; empty when no legend is drawn
    ///
    /// Unlabelled traces are named by position.
    pub fn legend_entries(&self) -> Vec<String> {
        if !self.shows_legend() {
            return Vec::new();
        }
        self.traces
            .iter()
            .enumerate()
            .map(|(i, trace)| {
                trace
                    .label
                    .clone()
                    .unwrap_or_else(|| format!("Trajectory {}", i + 1))
            })
            .collect()
    }

    /// Bounds of all finite points
    pub fn data_bounds(&self) -> Option<DataBounds> {
        DataBounds::from_points(self.traces.iter().flat_map(|t| t.points.iter().copied()))
    }

    /// Pixel size at the on-screen resolution
    pub fn pixel_size(&self) -> (u32, u32) {
        self.style.pixel_size(self.style.dpi)
    }

    /// Layout of the figure at a resolution
    pub fn layout(&self, dpi: u32) -> PlotLayout {
        PlotLayout::new(&self.style, dpi)
    }

    /// Equal-aspect axis limits for the figure drawn at a resolution
    pub fn axis_limits(&self, dpi: u32) -> AxisLimits {
        let layout = self.layout(dpi);
        AxisLimits::equal_aspect(self.data_bounds(), layout.plot_area_size())
    }

    /// Title for an interactive window
    pub fn window_title(&self) -> String {
        self.style
            .suptitle
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| self.style.title.clone())
    }
}

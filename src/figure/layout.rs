//! Pixel geometry of a figure.
//!
//! Sizes are specified in typographic points and converted with the target
//! resolution, so a figure saved at 300 dpi looks like the on-screen one at
//! 100 dpi, only sharper. Knowing the exact plot-area size up front is what
//! lets the axis limits be chosen for equal aspect before anything is drawn.

use super::FigureStyle;

/// Points per inch
const POINTS_PER_INCH: f64 = 72.0;

/// Figure title font size in points
pub const SUPTITLE_FONT_PT: f64 = 16.0;
/// Axes title font size in points
pub const TITLE_FONT_PT: f64 = 12.0;
/// Axis label and tick font size in points
pub const LABEL_FONT_PT: f64 = 10.0;

const BAND_FACTOR: f64 = 1.8;
const MARGIN_PT: f64 = 8.0;
const X_LABEL_AREA_PT: f64 = 36.0;
const Y_LABEL_AREA_PT: f64 = 52.0;

/// Pixel layout of a figure at one resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotLayout {
    /// Total width
    pub width: u32,
    /// Total height
    pub height: u32,
    /// Height of the band holding the figure title (0 when absent)
    pub suptitle_height: u32,
    /// Height of the band holding the axes title (0 when absent)
    pub title_height: u32,
    /// Margin around the chart on all four sides
    pub margin: u32,
    /// Height of the area below the axes (tick labels and x label)
    pub x_label_area: u32,
    /// Width of the area left of the axes (tick labels and y label)
    pub y_label_area: u32,
    /// Figure title font size
    pub suptitle_font_px: f64,
    /// Axes title font size
    pub title_font_px: f64,
    /// Tick, axis label and legend font size
    pub label_font_px: f64,
    /// Trace line width
    pub line_width_px: u32,
}

impl PlotLayout {
    /// Compute the layout of a styled figure at a resolution
    pub fn new(style: &FigureStyle, dpi: u32) -> Self {
        let (width, height) = style.pixel_size(dpi);
        let px_per_pt = dpi as f64 / POINTS_PER_INCH;
        let px = |pt: f64| (pt * px_per_pt).round() as u32;

        let has_suptitle = style
            .suptitle
            .as_deref()
            .map(|s| !s.trim().is_empty())
            .unwrap_or(false);
        let has_title = !style.title.trim().is_empty();

        Self {
            width,
            height,
            suptitle_height: if has_suptitle {
                px(SUPTITLE_FONT_PT * BAND_FACTOR)
            } else {
                0
            },
            title_height: if has_title {
                px(TITLE_FONT_PT * BAND_FACTOR)
            } else {
                0
            },
            margin: px(MARGIN_PT),
            x_label_area: px(X_LABEL_AREA_PT),
            y_label_area: px(Y_LABEL_AREA_PT),
            suptitle_font_px: SUPTITLE_FONT_PT * px_per_pt,
            title_font_px: TITLE_FONT_PT * px_per_pt,
            label_font_px: LABEL_FONT_PT * px_per_pt,
            line_width_px: px(style.line_width_pt).max(1),
        }
    }

    /// Height left for the chart once the title bands are taken
    pub fn chart_height(&self) -> u32 {
        self.height
            .saturating_sub(self.suptitle_height)
            .saturating_sub(self.title_height)
    }

    /// Pixel size of the region inside the axes
    pub fn plot_area_size(&self) -> (u32, u32) {
        let width = self
            .width
            .saturating_sub(2 * self.margin + self.y_label_area);
        let height = self
            .chart_height()
            .saturating_sub(2 * self.margin + self.x_label_area);
        (width, height)
    }

    /// Whether there is any room left to draw data
    pub fn is_drawable(&self) -> bool {
        let (w, h) = self.plot_area_size();
        w > 0 && h > 0
    }
}

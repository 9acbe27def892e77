use std::error::Error;
use std::path::Path;

use log::{debug, info};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{AxisLimits, Figure, OutputMode, PlotLayout, RenderError};

pub(super) const FONT_FAMILY: &str = "serif";

/// Send a figure to its output
///
/// `OutputMode::Display` blocks until the window is closed.
pub fn emit(figure: &Figure, output: &OutputMode) -> Result<(), RenderError> {
    match output {
        OutputMode::Image { path, dpi } => save_png(figure, path, *dpi),
        OutputMode::Display => display(figure),
    }
}

#[cfg(feature = "display")]
fn display(figure: &Figure) -> Result<(), RenderError> {
    super::show(figure)
}

#[cfg(not(feature = "display"))]
fn display(figure: &Figure) -> Result<(), RenderError> {
    let path = std::env::temp_dir().join("trajplot.png");
    log::warn!(
        "Built without the display feature, writing {} instead",
        path.display()
    );
    save_png(figure, &path, figure.style().dpi)
}

/// Render a figure at its on-screen resolution into an RGB8 buffer
pub fn render_rgb(figure: &Figure) -> Result<Vec<u8>, RenderError> {
    render_rgb_at(figure, figure.style().dpi)
}

/// Render a figure into an RGB8 buffer, row-major, `width * height * 3` bytes
pub fn render_rgb_at(figure: &Figure, dpi: u32) -> Result<Vec<u8>, RenderError> {
    let layout = checked_layout(figure, dpi)?;
    let mut buffer = vec![0u8; layout.width as usize * layout.height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (layout.width, layout.height))
            .into_drawing_area();
        draw_on_area(&root, figure, &layout).map_err(|e| RenderError::Drawing(e.to_string()))?;
    }
    Ok(buffer)
}

/// Write a figure as a PNG image at the given resolution
pub fn save_png(figure: &Figure, path: &Path, dpi: u32) -> Result<(), RenderError> {
    let is_png = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("png"))
        .unwrap_or(false);
    if !is_png {
        return Err(RenderError::UnsupportedImageFormat(path.to_path_buf()));
    }

    let layout = checked_layout(figure, dpi)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    {
        let root = BitMapBackend::new(path, (layout.width, layout.height)).into_drawing_area();
        draw_on_area(&root, figure, &layout).map_err(|e| RenderError::Drawing(e.to_string()))?;
    }

    info!(
        "Saved figure to {} ({}x{} px at {} dpi)",
        path.display(),
        layout.width,
        layout.height,
        dpi
    );
    Ok(())
}

fn checked_layout(figure: &Figure, dpi: u32) -> Result<PlotLayout, RenderError> {
    let layout = figure.layout(dpi);
    if !layout.is_drawable() {
        return Err(RenderError::InvalidSize {
            width: layout.width,
            height: layout.height,
        });
    }
    Ok(layout)
}

/// Split a trace at non-finite points so that NaN rows show up as gaps
///
/// Always yields at least one (possibly empty) segment, so every trace still
/// gets a legend entry.
pub(super) fn finite_segments(points: &[(f64, f64)]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = vec![Vec::new()];
    for &(x, y) in points {
        if x.is_finite() && y.is_finite() {
            if let Some(current) = segments.last_mut() {
                current.push((x, y));
            }
        } else if segments.last().map(|s| !s.is_empty()).unwrap_or(false) {
            segments.push(Vec::new());
        }
    }
    if segments.len() > 1 && segments.last().map(Vec::is_empty).unwrap_or(false) {
        segments.pop();
    }
    segments
}

fn draw_centered<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    text: &str,
    size_px: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let (width, height) = area.dim_in_pixel();
    let style = TextStyle::from((FONT_FAMILY, size_px).into_font())
        .pos(Pos::new(HPos::Center, VPos::Center));
    area.draw_text(text, &style, ((width / 2) as i32, (height / 2) as i32))?;
    Ok(())
}

fn draw_on_area<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure,
    layout: &PlotLayout,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let style = figure.style();
    root.fill(&WHITE)?;

    let (suptitle_area, rest) = root.split_vertically(layout.suptitle_height);
    let (title_area, chart_area) = rest.split_vertically(layout.title_height);

    if layout.suptitle_height > 0 {
        if let Some(suptitle) = style.suptitle.as_deref() {
            draw_centered(&suptitle_area, suptitle, layout.suptitle_font_px)?;
        }
    }
    if layout.title_height > 0 {
        draw_centered(&title_area, &style.title, layout.title_font_px)?;
    }

    let limits = AxisLimits::equal_aspect(figure.data_bounds(), layout.plot_area_size());
    debug!(
        "Axis limits x: {:?}, y: {:?} on {:?} px",
        limits.x,
        limits.y,
        layout.plot_area_size()
    );

    let mut chart = ChartBuilder::on(&chart_area)
        .margin(layout.margin)
        .x_label_area_size(layout.x_label_area)
        .y_label_area_size(layout.y_label_area)
        .build_cartesian_2d(limits.x.0..limits.x.1, limits.y.0..limits.y.1)?;

    let label_font = (FONT_FAMILY, layout.label_font_px).into_font();
    {
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(style.x_label.as_str())
            .y_desc(style.y_label.as_str())
            .label_style(label_font.clone())
            .axis_desc_style(label_font.clone())
            .light_line_style(TRANSPARENT)
            .bold_line_style(BLACK.mix(0.15));
        if !style.show_grid {
            mesh.disable_mesh();
        }
        mesh.draw()?;
    }

    let legend = figure.legend_entries();
    let width = layout.line_width_px;
    let sample_len = (layout.label_font_px * 2.0).round() as i32;

    for (i, trace) in figure.traces().iter().enumerate() {
        let [r, g, b] = trace.color();
        let color = RGBColor(r, g, b);

        for (j, segment) in finite_segments(trace.points()).into_iter().enumerate() {
            let anno = chart.draw_series(LineSeries::new(segment, color.stroke_width(width)))?;
            if j == 0 {
                if let Some(label) = legend.get(i) {
                    anno.label(label.as_str()).legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + sample_len, y)], color.stroke_width(width))
                    });
                }
            }
        }
    }

    if figure.shows_legend() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font(label_font)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK.mix(0.3))
            .draw()?;
    }

    root.present()?;
    Ok(())
}

//! Equal-aspect axis limits.
//!
//! The data limits are padded and then the axis with fewer data units per pixel
//! is widened about its centre until both axes show the same number of data
//! units per pixel. Data is never clipped.

/// Fraction of the data span added on each side
pub const DATA_MARGIN: f64 = 0.05;

/// Half-width used when all values along an axis are equal
const DEGENERATE_HALF_SPAN: f64 = 0.5;

/// Bounding box of the finite data points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataBounds {
    /// Smallest x
    pub x_min: f64,
    /// Largest x
    pub x_max: f64,
    /// Smallest y
    pub y_min: f64,
    /// Largest y
    pub y_max: f64,
}

impl DataBounds {
    /// Bounds of the points whose coordinates are both finite
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        points
            .into_iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .fold(None, |acc: Option<Self>, (x, y)| {
                Some(match acc {
                    None => Self {
                        x_min: x,
                        x_max: x,
                        y_min: y,
                        y_max: y,
                    },
                    Some(b) => Self {
                        x_min: b.x_min.min(x),
                        x_max: b.x_max.max(x),
                        y_min: b.y_min.min(y),
                        y_max: b.y_max.max(y),
                    },
                })
            })
    }
}

/// Axis ranges of a drawn figure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLimits {
    /// Horizontal range (low, high)
    pub x: (f64, f64),
    /// Vertical range (low, high)
    pub y: (f64, f64),
}

impl AxisLimits {
    /// Limits that show `bounds` with equal data units per pixel on both axes
    ///
    /// `plot_area` is the pixel size of the region inside the axes. Without any
    /// finite data the unit square `[-1, 1] x [-1, 1]` is used as the base range.
    pub fn equal_aspect(bounds: Option<DataBounds>, plot_area: (u32, u32)) -> Self {
        let (x, y) = match bounds {
            Some(b) => (pad(b.x_min, b.x_max), pad(b.y_min, b.y_max)),
            None => ((-1.0, 1.0), (-1.0, 1.0)),
        };

        let width_px = plot_area.0.max(1) as f64;
        let height_px = plot_area.1.max(1) as f64;

        let units_per_px = ((x.1 - x.0) / width_px).max((y.1 - y.0) / height_px);

        Self {
            x: widen(x, units_per_px * width_px),
            y: widen(y, units_per_px * height_px),
        }
    }

    /// Data units per horizontal pixel
    pub fn x_scale(&self, plot_width_px: u32) -> f64 {
        (self.x.1 - self.x.0) / plot_width_px.max(1) as f64
    }

    /// Data units per vertical pixel
    pub fn y_scale(&self, plot_height_px: u32) -> f64 {
        (self.y.1 - self.y.0) / plot_height_px.max(1) as f64
    }
}

fn pad(lo: f64, hi: f64) -> (f64, f64) {
    let span = hi - lo;
    if span > 0.0 {
        (lo - span * DATA_MARGIN, hi + span * DATA_MARGIN)
    } else {
        (lo - DEGENERATE_HALF_SPAN, hi + DEGENERATE_HALF_SPAN)
    }
}

fn widen(range: (f64, f64), span: f64) -> (f64, f64) {
    let center = (range.0 + range.1) / 2.0;
    (center - span / 2.0, center + span / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_bounds_skip_non_finite() {
        let bounds = DataBounds::from_points(vec![
            (1.0, 2.0),
            (f64::NAN, 100.0),
            (-3.0, f64::INFINITY),
            (4.0, -1.0),
        ])
        .unwrap();
        assert_eq!(bounds.x_min, 1.0);
        assert_eq!(bounds.x_max, 4.0);
        assert_eq!(bounds.y_min, -1.0);
        assert_eq!(bounds.y_max, 2.0);
    }

    #[test]
    fn test_no_finite_points() {
        assert!(DataBounds::from_points(vec![(f64::NAN, 0.0)]).is_none());
        let limits = AxisLimits::equal_aspect(None, (200, 100));
        assert!(close(limits.y.0, -1.0));
        assert!(close(limits.y.1, 1.0));
        assert!(close(limits.x.0, -2.0));
        assert!(close(limits.x.1, 2.0));
    }

    #[test]
    fn test_wide_area_widens_x() {
        // Unit circle on a 2:1 plot area
        let bounds = DataBounds {
            x_min: -1.0,
            x_max: 1.0,
            y_min: -1.0,
            y_max: 1.0,
        };
        let limits = AxisLimits::equal_aspect(Some(bounds), (400, 200));
        assert!(close(limits.y.0, -1.1));
        assert!(close(limits.y.1, 1.1));
        assert!(close(limits.x.0, -2.2));
        assert!(close(limits.x.1, 2.2));
        assert!(close(limits.x_scale(400), limits.y_scale(200)));
    }

    #[test]
    fn test_tall_data_widens_x_further() {
        let bounds = DataBounds {
            x_min: 0.0,
            x_max: 1.0,
            y_min: 0.0,
            y_max: 10.0,
        };
        let limits = AxisLimits::equal_aspect(Some(bounds), (300, 300));
        assert!(close(limits.y.0, -0.5));
        assert!(close(limits.y.1, 10.5));
        assert!(close(limits.x.1 - limits.x.0, 11.0));
        assert!(close((limits.x.0 + limits.x.1) / 2.0, 0.5));
    }

    #[test]
    fn test_single_point() {
        let bounds = DataBounds::from_points(vec![(3.0, -2.0)]).unwrap();
        let limits = AxisLimits::equal_aspect(Some(bounds), (100, 100));
        assert!(close(limits.x.0, 2.5));
        assert!(close(limits.x.1, 3.5));
        assert!(close(limits.y.0, -2.5));
        assert!(close(limits.y.1, -1.5));
    }

    #[test]
    fn test_data_is_never_clipped() {
        let bounds = DataBounds {
            x_min: -7.0,
            x_max: 2.0,
            y_min: 0.25,
            y_max: 0.75,
        };
        for area in [(10, 1000), (1000, 10), (640, 480), (1, 1)] {
            let limits = AxisLimits::equal_aspect(Some(bounds), area);
            assert!(limits.x.0 <= bounds.x_min && limits.x.1 >= bounds.x_max);
            assert!(limits.y.0 <= bounds.y_min && limits.y.1 >= bounds.y_max);
            assert!(close(limits.x_scale(area.0), limits.y_scale(area.1)));
        }
    }
}

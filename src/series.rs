//! # Series Extraction
//!
//! Pulls plottable `(x, y)` sequences out of a loaded [`TrajectoryTable`].
//! Extraction never reorders, filters or rescales values.

use log::debug;

use crate::schema::columns;
use crate::table::{ColumnError, TrajectoryTable};

/// One `(x, y)` coordinate sequence with an optional legend label
///
/// `x` and `y` always have the same length; the constructor rejects anything else.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    label: Option<String>,
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Series {
    /// Pair two equal-length sequences
    pub fn new(x: Vec<f64>, y: Vec<f64>, label: Option<String>) -> Result<Self, ColumnError> {
        if x.len() != y.len() {
            return Err(ColumnError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(Self { label, x, y })
    }

    /// Legend label
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Horizontal values
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Vertical values
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the series has no points
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over `(x, y)` points in row order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// Extract the `x`/`y` position columns as a series
pub fn extract_series(table: &TrajectoryTable, label: Option<&str>) -> Result<Series, ColumnError> {
    extract_series_from(table, columns::X, columns::Y, label)
}

/// Extract any two numeric columns as a series, e.g. `px` against `py`
pub fn extract_series_from(
    table: &TrajectoryTable,
    x_column: &str,
    y_column: &str,
    label: Option<&str>,
) -> Result<Series, ColumnError> {
    let x = table.column_values(x_column)?;
    let y = table.column_values(y_column)?;
    debug!(
        "Extracted {} points from columns {}/{}",
        x.len(),
        x_column,
        y_column
    );
    Series::new(x, y, label.map(str::to_string))
}

/// Extract a fixed set of columns, in the order given
pub fn extract_columns(
    table: &TrajectoryTable,
    names: &[&str],
) -> Result<Vec<Vec<f64>>, ColumnError> {
    names.iter().map(|name| table.column_values(name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::Trajectory;
    use proptest::prelude::*;

    fn table_from(x: Vec<f64>, y: Vec<f64>) -> TrajectoryTable {
        let n = x.len();
        let t = (0..n).map(|i| i as f64).collect();
        let trajectory = Trajectory::new(t, x, y, vec![0.0; n], vec![0.0; n]).unwrap();
        TrajectoryTable::from_batch(trajectory.to_record_batch().unwrap())
    }

    #[test]
    fn test_series_length_mismatch() {
        let result = Series::new(vec![1.0, 2.0], vec![1.0], None);
        assert!(matches!(
            result,
            Err(ColumnError::LengthMismatch { x_len: 2, y_len: 1 })
        ));
    }

    #[test]
    fn test_extract_series_keeps_label() {
        let table = table_from(vec![1.0, 0.0], vec![0.0, 1.0]);
        let series = extract_series(&table, Some("Implicit")).unwrap();
        assert_eq!(series.label(), Some("Implicit"));
        assert_eq!(series.points().collect::<Vec<_>>(), vec![(1.0, 0.0), (0.0, 1.0)]);
    }

    #[test]
    fn test_extract_momentum_columns() {
        let table = table_from(vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]);
        let values = extract_columns(&table, &[columns::T, columns::PX, columns::PY]).unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(values[0], vec![0.0, 1.0, 2.0]);
        assert_eq!(values[1], vec![0.0; 3]);

        let phase = extract_series_from(&table, columns::PX, columns::PY, None).unwrap();
        assert_eq!(phase.len(), 3);
    }

    #[test]
    fn test_extract_unknown_column() {
        let table = table_from(vec![1.0], vec![2.0]);
        let err = extract_columns(&table, &[columns::X, "vx"]).unwrap_err();
        assert!(matches!(err, ColumnError::NotFound(name) if name == "vx"));
    }

    proptest! {
        #[test]
        fn prop_extraction_preserves_values_and_order(
            points in prop::collection::vec((-1e6f64..1e6, -1e6f64..1e6), 0..200)
        ) {
            let (x, y): (Vec<f64>, Vec<f64>) = points.iter().copied().unzip();
            let table = table_from(x.clone(), y.clone());
            let series = extract_series(&table, None).unwrap();

            prop_assert_eq!(series.len(), table.num_rows());
            prop_assert_eq!(series.x(), x.as_slice());
            prop_assert_eq!(series.y(), y.as_slice());
        }
    }
}

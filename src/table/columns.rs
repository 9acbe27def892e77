use arrow::array::{Array, Float64Array};
use arrow::compute::cast;
use arrow::datatypes::DataType;

use super::{ColumnError, TrajectoryTable};

impl TrajectoryTable {
    /// Read one column as `f64` values in row order
    ///
    /// Integer, `Float32` and decimal columns are widened to `f64`. Null entries
    /// become `NaN`, which plots as a gap.
    pub fn column_values(&self, name: &str) -> Result<Vec<f64>, ColumnError> {
        let column = self
            .batch
            .column_by_name(name)
            .ok_or_else(|| ColumnError::NotFound(name.to_string()))?;

        if !column.data_type().is_numeric() {
            return Err(ColumnError::InvalidType {
                name: name.to_string(),
                data_type: column.data_type().clone(),
            });
        }

        let widened = cast(column.as_ref(), &DataType::Float64)?;
        let values = widened
            .as_any()
            .downcast_ref::<Float64Array>()
            .ok_or_else(|| ColumnError::InvalidType {
                name: name.to_string(),
                data_type: widened.data_type().clone(),
            })?;

        Ok(values.iter().map(|v| v.unwrap_or(f64::NAN)).collect())
    }

    /// Finite (min, max) of a numeric column, if it exists and has finite values
    pub fn column_range(&self, name: &str) -> Option<(f64, f64)> {
        let values = self.column_values(name).ok()?;
        finite_range(&values)
    }
}

/// Finite (min, max) of a slice, skipping NaN and infinities
fn finite_range(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

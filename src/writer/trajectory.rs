use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array};
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;

use crate::schema::{columns, create_trajectory_schema_arc};

use super::WriterError;

/// A sampled trajectory: time plus position and momentum in the plane
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    /// Sample times
    pub t: Vec<f64>,
    /// Horizontal position
    pub x: Vec<f64>,
    /// Vertical position
    pub y: Vec<f64>,
    /// Horizontal momentum
    pub px: Vec<f64>,
    /// Vertical momentum
    pub py: Vec<f64>,
}

impl Trajectory {
    /// Create a trajectory, checking that all columns have the same length
    pub fn new(
        t: Vec<f64>,
        x: Vec<f64>,
        y: Vec<f64>,
        px: Vec<f64>,
        py: Vec<f64>,
    ) -> Result<Self, WriterError> {
        let expected = t.len();
        for (column, len) in [
            (columns::X, x.len()),
            (columns::Y, y.len()),
            (columns::PX, px.len()),
            (columns::PY, py.len()),
        ] {
            if len != expected {
                return Err(WriterError::ArrayLengthMismatch {
                    column,
                    len,
                    expected,
                });
            }
        }

        Ok(Self { t, x, y, px, py })
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.t.len()
    }

    /// Whether the trajectory has no samples
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Build an Arrow record batch with the trajectory schema
    pub fn to_record_batch(&self) -> Result<RecordBatch, WriterError> {
        self.to_record_batch_with_schema(create_trajectory_schema_arc())
    }

    pub(super) fn to_record_batch_with_schema(
        &self,
        schema: SchemaRef,
    ) -> Result<RecordBatch, WriterError> {
        let arrays: Vec<ArrayRef> = vec![
            Arc::new(Float64Array::from(self.t.clone())),
            Arc::new(Float64Array::from(self.x.clone())),
            Arc::new(Float64Array::from(self.y.clone())),
            Arc::new(Float64Array::from(self.px.clone())),
            Arc::new(Float64Array::from(self.py.clone())),
        ];
        Ok(RecordBatch::try_new(schema, arrays)?)
    }
}

use std::fmt;

use serde::Serialize;

use crate::schema::columns;

use super::TrajectoryTable;

/// Name and stored type of one column
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    /// Column name
    pub name: String,
    /// Arrow data type, as displayed by Arrow
    pub data_type: String,
}

/// Summary statistics about a trajectory table
#[derive(Debug, Clone, Serialize)]
pub struct TableSummary {
    /// Source file, if the table was read from disk
    pub source: Option<String>,
    /// Storage format
    pub format: String,
    /// Number of samples
    pub num_rows: usize,
    /// Columns in storage order
    pub columns: Vec<ColumnSummary>,
    /// Time range (min, max)
    pub t_range: Option<(f64, f64)>,
    /// Horizontal position range (min, max)
    pub x_range: Option<(f64, f64)>,
    /// Vertical position range (min, max)
    pub y_range: Option<(f64, f64)>,
    /// Footer metadata entries, sorted by key
    pub metadata: Vec<(String, String)>,
}

impl TrajectoryTable {
    /// Get summary statistics about the table
    pub fn summary(&self) -> TableSummary {
        let schema = self.schema();
        let columns = schema
            .fields()
            .iter()
            .map(|field| ColumnSummary {
                name: field.name().clone(),
                data_type: field.data_type().to_string(),
            })
            .collect();

        let mut metadata: Vec<(String, String)> = self
            .key_value_metadata()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        metadata.sort();

        TableSummary {
            source: self.source_path().map(|p| p.display().to_string()),
            format: self.format().to_string(),
            num_rows: self.num_rows(),
            columns,
            t_range: self.column_range(columns::T),
            x_range: self.column_range(columns::X),
            y_range: self.column_range(columns::Y),
            metadata,
        }
    }
}

impl fmt::Display for TableSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trajectory Table Summary")?;
        writeln!(f, "========================")?;
        if let Some(source) = &self.source {
            writeln!(f, "File: {}", source)?;
        }
        writeln!(f, "Format: {}", self.format)?;
        writeln!(f, "Samples: {}", self.num_rows)?;
        if let Some((lo, hi)) = self.t_range {
            writeln!(f, "t range: {:.6} - {:.6}", lo, hi)?;
        }
        if let Some((lo, hi)) = self.x_range {
            writeln!(f, "x range: {:.6} - {:.6}", lo, hi)?;
        }
        if let Some((lo, hi)) = self.y_range {
            writeln!(f, "y range: {:.6} - {:.6}", lo, hi)?;
        }
        writeln!(f, "Columns:")?;
        for (i, column) in self.columns.iter().enumerate() {
            writeln!(f, "  {:3}. {} ({})", i + 1, column.name, column.data_type)?;
        }
        if !self.metadata.is_empty() {
            writeln!(f, "Metadata:")?;
            for (key, value) in &self.metadata {
                writeln!(f, "  {}: {}", key, value)?;
            }
        }
        Ok(())
    }
}

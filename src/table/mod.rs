//! # Trajectory Table Module
//!
//! Loads columnar trajectory files into memory and gives named access to their
//! columns.
//!
//! ## Features
//!
//! - **Format Detection**: Parquet, Arrow IPC (`.arrow`, `.feather`, `.ipc`) and CSV
//!   files are recognised by extension; anything else is read as Parquet
//! - **Lazy Column Checks**: Loading never validates the schema, a missing column is
//!   reported when it is extracted
//! - **Footer Metadata**: Parquet key-value metadata is kept for inspection
//!
//! ## Example
//!
//! ```rust,no_run
//! use trajplot::table::TrajectoryTable;
//!
//! let table = TrajectoryTable::open("examples/keppler/keppler.parquet")?;
//! println!("{} samples", table.num_rows());
//!
//! let x = table.column_values("x")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod columns;
mod error;
mod open;
mod summary;


pub use error::{ColumnError, LoadError};
pub use open::StorageFormat;
pub use summary::{ColumnSummary, TableSummary};

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;

/// A trajectory table held in memory
///
/// All record batches of the source are concatenated into one batch, so every
/// column is a single contiguous array in row (time) order.
#[derive(Debug, Clone)]
pub struct TrajectoryTable {
    batch: RecordBatch,
    format: StorageFormat,
    source_path: Option<PathBuf>,
    key_value_metadata: HashMap<String, String>,
}

impl TrajectoryTable {
    /// Wrap an in-memory record batch
    pub fn from_batch(batch: RecordBatch) -> Self {
        let key_value_metadata = batch.schema().metadata().clone();
        Self {
            batch,
            format: StorageFormat::Memory,
            source_path: None,
            key_value_metadata,
        }
    }

    /// Number of rows (samples)
    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    /// Whether the table holds no samples
    pub fn is_empty(&self) -> bool {
        self.batch.num_rows() == 0
    }

    /// Column names in storage order
    pub fn column_names(&self) -> Vec<String> {
        self.batch
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect()
    }

    /// Whether a column with this name exists
    pub fn has_column(&self, name: &str) -> bool {
        self.batch.column_by_name(name).is_some()
    }

    /// Arrow schema of the table
    pub fn schema(&self) -> SchemaRef {
        self.batch.schema()
    }

    /// The underlying record batch
    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    /// Storage format the table was read from
    pub fn format(&self) -> StorageFormat {
        self.format
    }

    /// Path the table was read from, if it came from a file
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Look up a footer (Parquet) or schema (IPC) metadata value
    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.key_value_metadata.get(key).map(String::as_str)
    }

    /// All key-value metadata carried by the file
    pub fn key_value_metadata(&self) -> &HashMap<String, String> {
        &self.key_value_metadata
    }
}

use std::path::PathBuf;

use arrow::datatypes::DataType;

/// Errors that can occur while loading a trajectory table
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The path does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The path exists but is not a regular file
    #[error("Not a file: {}", .0.display())]
    NotAFile(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Arrow error (IPC and CSV decoding, batch concatenation)
    #[error("Arrow error: {0}")]
    ArrowError(#[from] arrow::error::ArrowError),

    /// Parquet error
    #[error("Parquet error: {0}")]
    ParquetError(#[from] parquet::errors::ParquetError),
}

/// Errors that can occur while extracting columns from a loaded table
#[derive(Debug, thiserror::Error)]
pub enum ColumnError {
    /// Column not found
    #[error("Column not found: {0}")]
    NotFound(String),

    /// The column exists but does not hold numbers
    #[error("Column {name} is not numeric (found {data_type})")]
    InvalidType {
        /// Column name
        name: String,
        /// Stored Arrow type
        data_type: DataType,
    },

    /// Paired columns do not have the same number of values
    #[error("Column length mismatch: x has {x_len} values, y has {y_len} values")]
    LengthMismatch {
        /// Length of the x values
        x_len: usize,
        /// Length of the y values
        y_len: usize,
    },

    /// Arrow error while casting a column to Float64
    #[error("Arrow error: {0}")]
    ArrowError(#[from] arrow::error::ArrowError),
}

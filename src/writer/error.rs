/// Errors that can occur during writing
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from the Arrow library during array operations
    #[error("Arrow error: {0}")]
    ArrowError(#[from] arrow::error::ArrowError),

    /// Error from the Parquet library during file writing
    #[error("Parquet error: {0}")]
    ParquetError(#[from] parquet::errors::ParquetError),

    /// Trajectory columns of different lengths
    #[error("Array length mismatch: {column} has {len} values, t has {expected}")]
    ArrayLengthMismatch {
        /// Offending column
        column: &'static str,
        /// Its length
        len: usize,
        /// Length of the time column
        expected: usize,
    },
}

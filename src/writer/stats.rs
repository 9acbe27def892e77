use std::fmt;

/// Statistics from a completed write operation
#[derive(Debug, Clone)]
pub struct WriterStats {
    /// Number of trajectories written to the file
    pub trajectories_written: usize,
    /// Total number of samples (rows) written
    pub samples_written: usize,
    /// Number of Parquet row groups written
    pub row_groups_written: usize,
    /// Total uncompressed size of the row groups in bytes
    pub file_size_bytes: u64,
}

impl fmt::Display for WriterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} trajectories ({} samples) in {} row groups",
            self.trajectories_written, self.samples_written, self.row_groups_written
        )
    }
}

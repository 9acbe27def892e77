use std::fs::File;
use std::io::Write;
use std::path::Path;

use arrow::datatypes::SchemaRef;
use log::debug;
use parquet::arrow::ArrowWriter;

use crate::schema::create_trajectory_schema_arc;

use super::{Trajectory, TrajectoryMetadata, WriterConfig, WriterError, WriterStats};

/// Streaming writer for trajectory Parquet files
pub struct TrajectoryWriter<W: Write + Send> {
    writer: ArrowWriter<W>,
    schema: SchemaRef,
    trajectories_written: usize,
    samples_written: usize,
}

impl TrajectoryWriter<File> {
    /// Create a new writer to a file path
    pub fn new_file<P: AsRef<Path>>(
        path: P,
        metadata: &TrajectoryMetadata,
        config: WriterConfig,
    ) -> Result<Self, WriterError> {
        debug!("Creating trajectory file {}", path.as_ref().display());
        let file = File::create(path)?;
        Self::new(file, metadata, config)
    }
}

impl<W: Write + Send> TrajectoryWriter<W> {
    /// Create a new writer to any Write implementation
    pub fn new(
        writer: W,
        metadata: &TrajectoryMetadata,
        config: WriterConfig,
    ) -> Result<Self, WriterError> {
        let schema = create_trajectory_schema_arc();
        let props = config.to_writer_properties(&metadata.to_parquet_metadata());
        let arrow_writer = ArrowWriter::try_new(writer, schema.clone(), Some(props))?;

        Ok(Self {
            writer: arrow_writer,
            schema,
            trajectories_written: 0,
            samples_written: 0,
        })
    }

    /// Append a trajectory's samples to the file
    ///
    /// Several trajectories written to one file are stored back to back.
    pub fn write_trajectory(&mut self, trajectory: &Trajectory) -> Result<(), WriterError> {
        let batch = trajectory.to_record_batch_with_schema(self.schema.clone())?;
        self.writer.write(&batch)?;

        self.trajectories_written += 1;
        self.samples_written += trajectory.len();
        Ok(())
    }

    /// Flush any buffered data and finalize the file
    pub fn finish(self) -> Result<WriterStats, WriterError> {
        let file_metadata = self.writer.close()?;

        Ok(WriterStats {
            trajectories_written: self.trajectories_written,
            samples_written: self.samples_written,
            row_groups_written: file_metadata.row_groups.len(),
            file_size_bytes: file_metadata
                .row_groups
                .iter()
                .map(|rg| rg.total_byte_size as u64)
                .sum(),
        })
    }

    /// Finalize and return the inner writer (for buffer extraction)
    pub fn finish_into_inner(self) -> Result<W, WriterError> {
        Ok(self.writer.into_inner()?)
    }

    /// Get current statistics
    pub fn stats(&self) -> WriterStats {
        WriterStats {
            trajectories_written: self.trajectories_written,
            samples_written: self.samples_written,
            row_groups_written: 0, // Unknown until finish
            file_size_bytes: 0,    // Unknown until finish
        }
    }
}

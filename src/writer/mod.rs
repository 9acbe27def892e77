//! # Trajectory Writer Module
//!
//! Stores simulated trajectories as Parquet files that the table loader (and any
//! other Parquet tool) can read back.
//!
//! Each file holds the five `Float64` columns `t, x, y, px, py`, one row per
//! sample, with ZSTD compression by default. The footer carries the format
//! version, a creation timestamp and optionally the method that produced the
//! data.
//!
//! ```rust,no_run
//! use trajplot::writer::{Trajectory, TrajectoryMetadata, TrajectoryWriter, WriterConfig};
//!
//! let trajectory = Trajectory::new(
//!     vec![0.0, 0.5],
//!     vec![1.0, 0.9],
//!     vec![0.0, 0.4],
//!     vec![0.0, -0.4],
//!     vec![1.0, 0.9],
//! )?;
//!
//! let metadata = TrajectoryMetadata::with_method("Symplectic");
//! let mut writer = TrajectoryWriter::new_file("orbit.parquet", &metadata, WriterConfig::default())?;
//! writer.write_trajectory(&trajectory)?;
//! let stats = writer.finish()?;
//! println!("{}", stats);
//! # Ok::<(), trajplot::writer::WriterError>(())
//! ```

mod config;
mod error;
mod metadata;
mod stats;
mod trajectory;
mod writer_impl;


pub use config::{CompressionType, WriterConfig};
pub use error::WriterError;
pub use metadata::TrajectoryMetadata;
pub use stats::WriterStats;
pub use trajectory::Trajectory;
pub use writer_impl::TrajectoryWriter;

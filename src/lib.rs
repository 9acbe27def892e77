//! # trajplot - Trajectory Plots from Columnar Simulation Output
//!
//! `trajplot` reads the output of a numerical integrator (time `t`, position
//! `x`/`y`, momentum `px`/`py`) from columnar files and draws the orbit on a
//! single 2D axes with equal aspect ratio.
//!
//! ## Key Features
//!
//! - **Columnar input**: Apache Parquet (the native format), Arrow IPC and CSV,
//!   all loaded into one Arrow `RecordBatch`.
//! - **Lazy validation**: a table loads whatever columns it has; a missing
//!   column is reported when it is extracted, naming the column.
//! - **Equal aspect**: both axes always use the same data units per pixel, so
//!   circular orbits stay circular and drift between methods is visible.
//! - **Explicit figures**: a [`figure::Figure`] is a plain value; it is shown in
//!   a window or saved as PNG only when handed to an output.
//! - **Writer**: [`writer::TrajectoryWriter`] stores trajectories with the
//!   column layout the plotter expects.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use trajplot::prelude::*;
//!
//! // Three integrators, one axes
//! let plotter = TrajectoryPlotter::new(FigureStyle::with_suptitle("Kepler problem"))
//!     .with_source("runs/keppler_implicit.parquet", Some("Implicit"))
//!     .with_source("runs/keppler_explicit.parquet", Some("Explicit"))
//!     .with_source("runs/keppler_symplectic.parquet", Some("Symplectic"));
//!
//! let figure = plotter.build_figure()?;
//! save_png(&figure, std::path::Path::new("compare.png"), 300)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Writing Trajectories
//!
//! ```rust,no_run
//! use trajplot::writer::{Trajectory, TrajectoryMetadata, TrajectoryWriter, WriterConfig};
//!
//! let trajectory = Trajectory::new(
//!     vec![0.0, 0.1],
//!     vec![1.0, 0.995],
//!     vec![0.0, 0.0998],
//!     vec![0.0, -0.0998],
//!     vec![1.0, 0.995],
//! )?;
//!
//! let mut writer = TrajectoryWriter::new_file(
//!     "keppler.parquet",
//!     &TrajectoryMetadata::with_method("Symplectic Euler"),
//!     WriterConfig::default(),
//! )?;
//! writer.write_trajectory(&trajectory)?;
//! let stats = writer.finish()?;
//! println!("{}", stats);
//! # Ok::<(), trajplot::writer::WriterError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`schema`]: column names, the Arrow schema and footer metadata keys
//! - [`table`]: loading files into a [`table::TrajectoryTable`]
//! - [`series`]: extracting `(x, y)` sequences from a table
//! - [`figure`]: figure model, equal-aspect layout and rendering
//! - [`plotter`]: the load → extract → render pipeline
//! - [`writer`]: storing trajectories as Parquet
//!
//! ### File Layout
//!
//! | Column | Type | Description |
//! |--------|------|-------------|
//! | t | Float64 | Time |
//! | x | Float64 | Horizontal position |
//! | y | Float64 | Vertical position |
//! | px | Float64 | Horizontal momentum |
//! | py | Float64 | Vertical momentum |
//!
//! Files written by this crate carry `trajplot:format_version`,
//! `trajplot:created` and optionally `trajplot:method` in the Parquet footer.
//! Files from other tools load as long as the needed columns are numeric.

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod figure;
pub mod plotter;
pub mod schema;
pub mod series;
pub mod table;
pub mod writer;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::figure::{
        emit, render_rgb, save_png, Figure, FigureStyle, OutputMode, RenderError, Trace,
    };
    pub use crate::plotter::{PlotError, SeriesSource, TrajectoryPlotter};
    pub use crate::schema::{create_trajectory_schema, TRAJPLOT_FORMAT_VERSION};
    pub use crate::series::{extract_columns, extract_series, Series};
    pub use crate::table::{ColumnError, LoadError, StorageFormat, TableSummary, TrajectoryTable};
    pub use crate::writer::{
        Trajectory, TrajectoryMetadata, TrajectoryWriter, WriterConfig, WriterError, WriterStats,
    };
}

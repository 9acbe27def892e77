//! Integration tests for the load → extract → figure pipeline
//!
//! Files are written with the crate's own writer into temporary folders laid
//! out the way the CLI expects them.

use std::path::Path;

use arrow::array::{ArrayRef, Float64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use std::sync::Arc;
use tempfile::tempdir;
use trajplot::figure::FigureStyle;
use trajplot::plotter::{compare_sources, single_sources, PlotError, TrajectoryPlotter};
use trajplot::table::{ColumnError, LoadError, TrajectoryTable};
use trajplot::writer::{Trajectory, TrajectoryMetadata, TrajectoryWriter, WriterConfig};

/// Circle of the given radius, sampled `n` times
fn orbit(n: usize, radius: f64) -> Trajectory {
    let t: Vec<f64> = (0..n).map(|i| i as f64 * 0.01).collect();
    let x = t.iter().map(|t| radius * t.cos()).collect();
    let y = t.iter().map(|t| radius * t.sin()).collect();
    let px = t.iter().map(|t| -radius * t.sin()).collect();
    let py = t.iter().map(|t| radius * t.cos()).collect();
    Trajectory::new(t, x, y, px, py).unwrap()
}

fn write(path: &Path, trajectory: &Trajectory, method: &str) {
    let mut writer = TrajectoryWriter::new_file(
        path,
        &TrajectoryMetadata::with_method(method),
        WriterConfig::default(),
    )
    .unwrap();
    writer.write_trajectory(trajectory).unwrap();
    writer.finish().unwrap();
}

#[test]
fn test_single_file_trace_matches_rows() {
    let dir = tempdir().unwrap();
    let trajectory = orbit(628, 1.0);
    write(&dir.path().join("keppler.parquet"), &trajectory, "Symplectic");

    let figure = TrajectoryPlotter::new(FigureStyle::with_suptitle("Symplectic Euler"))
        .with_sources(single_sources(dir.path()))
        .build_figure()
        .unwrap();

    assert_eq!(figure.traces().len(), 1);
    let trace = &figure.traces()[0];
    assert_eq!(trace.point_count(), 628);
    assert_eq!(trace.points()[10], (trajectory.x[10], trajectory.y[10]));
    assert_eq!(figure.style().suptitle.as_deref(), Some("Symplectic Euler"));
}

#[test]
fn test_compare_mode_three_labelled_traces() {
    let dir = tempdir().unwrap();
    write(&dir.path().join("keppler_implicit.parquet"), &orbit(100, 0.9), "Implicit");
    write(&dir.path().join("keppler_explicit.parquet"), &orbit(120, 1.1), "Explicit");
    write(&dir.path().join("keppler_symplectic.parquet"), &orbit(140, 1.0), "Symplectic");

    let figure = TrajectoryPlotter::new(FigureStyle::with_suptitle("compare"))
        .with_sources(compare_sources(dir.path()))
        .build_figure()
        .unwrap();

    let counts: Vec<_> = figure.traces().iter().map(|t| t.point_count()).collect();
    assert_eq!(counts, vec![100, 120, 140]);
    assert!(figure.shows_legend());
    assert_eq!(figure.legend_entries(), vec!["Implicit", "Explicit", "Symplectic"]);
}

#[test]
fn test_missing_compare_file_produces_no_figure() {
    let dir = tempdir().unwrap();
    write(&dir.path().join("keppler_implicit.parquet"), &orbit(10, 1.0), "Implicit");
    write(&dir.path().join("keppler_symplectic.parquet"), &orbit(10, 1.0), "Symplectic");

    let err = TrajectoryPlotter::new(FigureStyle::default())
        .with_sources(compare_sources(dir.path()))
        .build_figure()
        .unwrap_err();

    match err {
        PlotError::Load { path, source } => {
            assert!(path.ends_with("keppler_explicit.parquet"));
            assert!(matches!(source, LoadError::NotFound(_)));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_x_column_is_reported_at_extraction() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("keppler.parquet");

    let schema = Arc::new(Schema::new(vec![
        Field::new("t", DataType::Float64, false),
        Field::new("y", DataType::Float64, false),
    ]));
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Float64Array::from(vec![0.0, 1.0, 2.0])) as ArrayRef,
            Arc::new(Float64Array::from(vec![0.0, 0.5, 1.0])) as ArrayRef,
        ],
    )
    .unwrap();
    let mut writer =
        parquet::arrow::ArrowWriter::try_new(std::fs::File::create(&path).unwrap(), schema, None)
            .unwrap();
    writer.write(&batch).unwrap();
    writer.close().unwrap();

    // The table itself loads fine
    assert_eq!(TrajectoryTable::open(&path).unwrap().num_rows(), 3);

    let err = TrajectoryPlotter::new(FigureStyle::default())
        .with_source(&path, None)
        .build_figure()
        .unwrap_err();
    assert!(matches!(err, PlotError::Column(ColumnError::NotFound(name)) if name == "x"));
}

#[test]
fn test_pipeline_is_idempotent() {
    let dir = tempdir().unwrap();
    write(&dir.path().join("keppler.parquet"), &orbit(300, 2.0), "Explicit");

    let plotter = TrajectoryPlotter::new(FigureStyle::default()).with_sources(single_sources(dir.path()));
    let first = plotter.build_figure().unwrap();
    let second = plotter.build_figure().unwrap();

    assert_eq!(first, second);
    assert_eq!(first.axis_limits(100), second.axis_limits(100));
}

#[test]
fn test_csv_and_parquet_give_same_series() {
    let dir = tempdir().unwrap();
    let trajectory = Trajectory::new(
        vec![0.0, 1.0, 2.0, 3.0],
        vec![1.0, 0.0, -1.0, 0.0],
        vec![0.0, 1.0, 0.0, -1.0],
        vec![0.0; 4],
        vec![0.0; 4],
    )
    .unwrap();
    let parquet_path = dir.path().join("orbit.parquet");
    write(&parquet_path, &trajectory, "Explicit");

    let csv_path = dir.path().join("orbit.csv");
    std::fs::write(
        &csv_path,
        "t,x,y,px,py\n0,1,0,0,0\n1,0,1,0,0\n2,-1,0,0,0\n3,0,-1,0,0\n",
    )
    .unwrap();

    let from_parquet = TrajectoryPlotter::new(FigureStyle::default())
        .with_source(&parquet_path, Some("orbit"))
        .load_series()
        .unwrap();
    let from_csv = TrajectoryPlotter::new(FigureStyle::default())
        .with_source(&csv_path, Some("orbit"))
        .load_series()
        .unwrap();

    assert_eq!(from_parquet, from_csv);
}

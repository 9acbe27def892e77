use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tempfile::TempDir;
use trajplot::figure::{Figure, FigureStyle};
use trajplot::series::extract_series;
use trajplot::table::TrajectoryTable;
use trajplot::writer::{Trajectory, TrajectoryMetadata, TrajectoryWriter, WriterConfig};

/// Write a spiral trajectory with `samples` rows
fn create_test_file(path: &std::path::Path, samples: usize) {
    let t: Vec<f64> = (0..samples).map(|i| i as f64 * 5e-4).collect();
    let x = t.iter().map(|t| (1.0 + 0.01 * t) * t.cos()).collect();
    let y = t.iter().map(|t| (1.0 + 0.01 * t) * t.sin()).collect();
    let px = t.iter().map(|t| -t.sin()).collect();
    let py = t.iter().map(|t| t.cos()).collect();
    let trajectory = Trajectory::new(t, x, y, px, py).unwrap();

    let mut writer =
        TrajectoryWriter::new_file(path, &TrajectoryMetadata::new(), WriterConfig::default()).unwrap();
    writer.write_trajectory(&trajectory).unwrap();
    writer.finish().unwrap();
}

/// Benchmark opening a file and extracting x/y
fn bench_load_and_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_and_extract");

    for samples in [10_000, 100_000, 400_000] {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("keppler.parquet");
        create_test_file(&file_path, samples);

        group.throughput(Throughput::Elements(samples as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}samples", samples)),
            &file_path,
            |b, path| {
                b.iter(|| {
                    let table = TrajectoryTable::open(black_box(path)).unwrap();
                    let series = extract_series(&table, None).unwrap();
                    black_box(series);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark figure construction and equal-aspect limits
fn bench_build_figure(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("keppler.parquet");
    create_test_file(&file_path, 400_000);
    let table = TrajectoryTable::open(&file_path).unwrap();
    let series = extract_series(&table, Some("Symplectic")).unwrap();

    c.bench_function("build_figure_400k", |b| {
        b.iter(|| {
            let figure = Figure::new(FigureStyle::default()).with_series(black_box(series.clone()));
            black_box(figure.axis_limits(300));
        });
    });
}

criterion_group!(benches, bench_load_and_extract, bench_build_figure);
criterion_main!(benches);

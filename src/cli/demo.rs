use anyhow::{ensure, Context, Result};
use log::info;
use std::f64::consts::TAU;
use std::path::PathBuf;

use trajplot::writer::{CompressionType, Trajectory, TrajectoryMetadata, TrajectoryWriter, WriterConfig};

/// Gravitational parameter of the demo orbit
const MU: f64 = 1.0;
/// Semi-major axis of the demo orbit
const SEMI_MAJOR_AXIS: f64 = 1.0;

/// Options of the `demo` command
pub struct DemoOptions {
    pub output: PathBuf,
    pub eccentricity: f64,
    pub samples: usize,
    pub orbits: u32,
    pub method: String,
    pub compression_level: i32,
}

/// Write an analytic Kepler orbit
pub fn run(options: DemoOptions) -> Result<()> {
    ensure!(
        (0.0..1.0).contains(&options.eccentricity),
        "Eccentricity must be in [0, 1), got {}",
        options.eccentricity
    );
    ensure!(options.samples >= 2, "At least two samples are needed");
    ensure!(
        (1..=22).contains(&options.compression_level),
        "Compression level must be in 1-22, got {}",
        options.compression_level
    );

    let trajectory = kepler_orbit(options.eccentricity, options.samples, options.orbits.max(1))?;

    let mut metadata = TrajectoryMetadata::with_method(options.method.as_str());
    metadata.insert("trajplot:eccentricity", options.eccentricity.to_string());
    let config = WriterConfig {
        compression: CompressionType::Zstd(options.compression_level),
        ..Default::default()
    };

    if let Some(parent) = options.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    info!("Creating trajectory file: {}", options.output.display());
    let mut writer = TrajectoryWriter::new_file(&options.output, &metadata, config)
        .context("Failed to create trajectory writer")?;
    writer
        .write_trajectory(&trajectory)
        .context("Failed to write trajectory")?;
    let stats = writer.finish().context("Failed to finalize trajectory file")?;

    info!("  Samples written: {}", stats.samples_written);
    info!("  Row groups: {}", stats.row_groups_written);
    println!("{} to {}", stats, options.output.display());

    Ok(())
}

/// Sample a Kepler orbit around a focus at the origin, starting at periapsis
///
/// The eccentric anomaly is sampled uniformly; time follows from Kepler's
/// equation, so samples are denser in time near apoapsis.
fn kepler_orbit(eccentricity: f64, samples: usize, orbits: u32) -> Result<Trajectory> {
    let a = SEMI_MAJOR_AXIS;
    let e = eccentricity;
    let b = a * (1.0 - e * e).sqrt();
    let mean_motion = (MU / (a * a * a)).sqrt();
    let total = TAU * orbits as f64;

    let mut t = Vec::with_capacity(samples);
    let mut x = Vec::with_capacity(samples);
    let mut y = Vec::with_capacity(samples);
    let mut px = Vec::with_capacity(samples);
    let mut py = Vec::with_capacity(samples);

    for i in 0..samples {
        let anomaly = total * i as f64 / (samples - 1) as f64;
        let (sin_e, cos_e) = anomaly.sin_cos();
        let rate = mean_motion / (1.0 - e * cos_e);

        t.push((anomaly - e * sin_e) / mean_motion);
        x.push(a * (cos_e - e));
        y.push(b * sin_e);
        px.push(-a * sin_e * rate);
        py.push(b * cos_e * rate);
    }

    Ok(Trajectory::new(t, x, y, px, py)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(output: PathBuf, compression_level: i32) -> DemoOptions {
        DemoOptions {
            output,
            eccentricity: 0.2,
            samples: 64,
            orbits: 1,
            method: "Analytic".to_string(),
            compression_level,
        }
    }

    #[test]
    fn test_out_of_range_compression_level_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keppler.parquet");

        let err = run(options(path.clone(), 99)).unwrap_err();
        assert!(err.to_string().contains("99"));
        assert!(!path.exists());

        run(options(path.clone(), 22)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_circular_orbit_matches_initial_state() {
        let orbit = kepler_orbit(0.0, 101, 1).unwrap();
        assert_eq!(orbit.len(), 101);
        assert!((orbit.x[0] - 1.0).abs() < 1e-12);
        assert!(orbit.y[0].abs() < 1e-12);
        assert!(orbit.px[0].abs() < 1e-12);
        assert!((orbit.py[0] - 1.0).abs() < 1e-12);
        assert!((orbit.t[100] - TAU).abs() < 1e-9);

        for i in 0..orbit.len() {
            let r = orbit.x[i].hypot(orbit.y[i]);
            assert!((r - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_eccentric_orbit_conserves_energy() {
        let orbit = kepler_orbit(0.5, 257, 2).unwrap();
        let energy = |i: usize| {
            let r = orbit.x[i].hypot(orbit.y[i]);
            0.5 * (orbit.px[i].powi(2) + orbit.py[i].powi(2)) - MU / r
        };
        let expected = -MU / (2.0 * SEMI_MAJOR_AXIS);
        for i in 0..orbit.len() {
            assert!((energy(i) - expected).abs() < 1e-9);
        }
        // Periapsis at a(1 - e)
        assert!((orbit.x[0] - 0.5).abs() < 1e-12);
        assert!(orbit.t.windows(2).all(|w| w[1] > w[0]));
    }
}

use anyhow::{bail, Context, Result};
use clap::Args;
use log::{info, warn};
use std::path::PathBuf;

use trajplot::figure::{FigureStyle, OutputMode, DEFAULT_IMAGE_DPI};
use trajplot::plotter::{compare_sources, single_sources, SeriesSource, TrajectoryPlotter, DEFAULT_FOLDER};

use super::config::{Config, OutputKind};

/// Options of the `plot` command
#[derive(Args, Debug, Default)]
pub struct PlotArgs {
    /// Method or run name shown above the axes
    #[arg(value_name = "METHOD")]
    pub method: String,

    /// Compare the implicit, explicit and symplectic runs on one axes
    #[arg(long)]
    pub compare: bool,

    /// Folder holding the trajectory files [default: examples/keppler]
    #[arg(short = 'f', long, value_name = "DIR")]
    pub folder: Option<PathBuf>,

    /// Load settings from a TOML config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Save the figure as PNG instead of opening a window
    #[arg(short = 's', long, value_name = "PNG")]
    pub save: Option<PathBuf>,

    /// Resolution of the saved image [default: 300]
    #[arg(long)]
    pub dpi: Option<u32>,
}

/// Plot one trajectory or the method comparison
pub fn run(args: PlotArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let (plotter, output) = resolve(&args, &config)?;
    for source in plotter.sources() {
        info!("Source: {}", source.path.display());
    }

    plotter
        .run(&output)
        .with_context(|| format!("Failed to plot '{}'", args.method))?;

    if let OutputMode::Image { path, .. } = &output {
        println!("Saved {}", path.display());
    }
    Ok(())
}

/// Merge flags, config file and defaults into a plotter and an output
fn resolve(args: &PlotArgs, config: &Config) -> Result<(TrajectoryPlotter, OutputMode)> {
    let mut style = FigureStyle::with_suptitle(args.method.as_str());
    config.figure.apply(&mut style);

    let use_listed = !config.input.sources.is_empty() && args.folder.is_none() && !args.compare;
    if use_listed && config.input.compare == Some(true) {
        warn!("[[input.sources]] is set, ignoring [input] compare = true");
    }
    let sources: Vec<SeriesSource> = if use_listed {
        config
            .input
            .sources
            .iter()
            .map(|s| SeriesSource::new(&s.path, s.label.as_deref()))
            .collect()
    } else {
        let folder = args
            .folder
            .clone()
            .or_else(|| config.input.folder.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FOLDER));
        if args.compare || config.input.compare.unwrap_or(false) {
            compare_sources(&folder)
        } else {
            single_sources(&folder)
        }
    };

    let dpi = args
        .dpi
        .or(config.output.dpi)
        .unwrap_or(DEFAULT_IMAGE_DPI);
    let output = match (&args.save, config.output.mode) {
        (Some(path), _) => OutputMode::Image {
            path: path.clone(),
            dpi,
        },
        (None, Some(OutputKind::Image)) => match &config.output.path {
            Some(path) => OutputMode::Image {
                path: path.clone(),
                dpi,
            },
            None => bail!("[output] mode = \"image\" requires a path"),
        },
        (None, _) => {
            if args.dpi.is_some() {
                warn!("--dpi only applies to saved images, ignoring it");
            }
            OutputMode::Display
        }
    };

    Ok((TrajectoryPlotter::new(style).with_sources(sources), output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn args(method: &str) -> PlotArgs {
        PlotArgs {
            method: method.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let (plotter, output) = resolve(&args("Symplectic Euler"), &Config::default()).unwrap();
        assert_eq!(output, OutputMode::Display);
        assert_eq!(plotter.style().suptitle.as_deref(), Some("Symplectic Euler"));
        assert_eq!(plotter.sources().len(), 1);
        assert_eq!(
            plotter.sources()[0].path,
            Path::new("examples/keppler/keppler.parquet")
        );
    }

    #[test]
    fn test_compare_flag() {
        let mut a = args("all");
        a.compare = true;
        a.folder = Some(PathBuf::from("runs"));
        let (plotter, _) = resolve(&a, &Config::default()).unwrap();

        let labels: Vec<_> = plotter
            .sources()
            .iter()
            .map(|s| s.label.as_deref())
            .collect();
        assert_eq!(labels, vec![Some("Implicit"), Some("Explicit"), Some("Symplectic")]);
        assert_eq!(plotter.sources()[0].path, Path::new("runs/keppler_implicit.parquet"));
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config::from_str(
            "[input]\nfolder = \"from_file\"\n[output]\nmode = \"image\"\npath = \"file.png\"\ndpi = 72\n",
        )
        .unwrap();
        let mut a = args("m");
        a.folder = Some(PathBuf::from("from_flag"));
        a.save = Some(PathBuf::from("flag.png"));

        let (plotter, output) = resolve(&a, &config).unwrap();
        assert_eq!(plotter.sources()[0].path, Path::new("from_flag/keppler.parquet"));
        assert_eq!(
            output,
            OutputMode::Image {
                path: PathBuf::from("flag.png"),
                dpi: 72
            }
        );
    }

    #[test]
    fn test_config_image_mode() {
        let config = Config::from_str("[output]\nmode = \"image\"\npath = \"out.png\"\n").unwrap();
        let (_, output) = resolve(&args("m"), &config).unwrap();
        assert_eq!(output, OutputMode::image("out.png"));

        let config = Config::from_str("[output]\nmode = \"image\"\n").unwrap();
        assert!(resolve(&args("m"), &config).is_err());
    }

    #[test]
    fn test_listed_sources() {
        let config = Config::from_str(
            "[[input.sources]]\npath = \"a.parquet\"\nlabel = \"A\"\n[[input.sources]]\npath = \"b.csv\"\n",
        )
        .unwrap();
        let (plotter, _) = resolve(&args("m"), &config).unwrap();
        assert_eq!(plotter.sources().len(), 2);
        assert_eq!(plotter.sources()[0].label.as_deref(), Some("A"));
        assert_eq!(plotter.sources()[1].path, Path::new("b.csv"));

        // Listed sources win over compare in the same file
        let config = Config::from_str(
            "[input]\ncompare = true\n[[input.sources]]\npath = \"a.parquet\"\n",
        )
        .unwrap();
        let (plotter, _) = resolve(&args("m"), &config).unwrap();
        assert_eq!(plotter.sources().len(), 1);
        assert_eq!(plotter.sources()[0].path, Path::new("a.parquet"));

        // A folder flag switches back to the folder layout
        let mut a = args("m");
        a.folder = Some(PathBuf::from("runs"));
        let (plotter, _) = resolve(&a, &config).unwrap();
        assert_eq!(plotter.sources().len(), 1);
    }
}

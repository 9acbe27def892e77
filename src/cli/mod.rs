use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod demo;
mod info;
mod plot;

pub use plot::PlotArgs;

/// trajplot - Plot simulated trajectories from columnar files
#[derive(Parser)]
#[command(name = "trajplot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plot x against y for one trajectory, or compare three integrators
    Plot(PlotArgs),

    /// Generate an analytic Kepler orbit for trying the plotter
    Demo {
        /// Output Parquet file path
        #[arg(value_name = "OUTPUT", default_value = "examples/keppler/keppler.parquet")]
        output: PathBuf,

        /// Orbital eccentricity (0 is the circular orbit)
        #[arg(short = 'e', long, default_value = "0.0")]
        eccentricity: f64,

        /// Number of samples
        #[arg(short = 'n', long, default_value = "2000")]
        samples: usize,

        /// Number of full revolutions
        #[arg(long, default_value = "1")]
        orbits: u32,

        /// Method name stored in the file footer
        #[arg(long, default_value = "Analytic")]
        method: String,

        /// Compression level for ZSTD (1-22, default: 3)
        #[arg(short = 'c', long, default_value = "3")]
        compression_level: i32,
    },

    /// Display information about a trajectory file
    Info {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Plot(args) => plot::run(args),
        Commands::Demo {
            output,
            eccentricity,
            samples,
            orbits,
            method,
            compression_level,
        } => demo::run(demo::DemoOptions {
            output,
            eccentricity,
            samples,
            orbits,
            method,
            compression_level,
        }),
        Commands::Info { file, json } => info::run(file, json),
    }
}

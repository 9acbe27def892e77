//! # trajplot
//!
//! Command-line front end for plotting simulated trajectories.
//!
//! ## Usage
//!
//! ```bash
//! # Write an analytic orbit, then plot it in a window
//! trajplot demo examples/keppler/keppler.parquet
//! trajplot plot "Symplectic Euler"
//!
//! # Compare the three integrators and save a 300 dpi PNG
//! trajplot plot "Euler methods" --compare --save compare.png
//!
//! # Inspect a file
//! trajplot info examples/keppler/keppler.parquet --json
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}

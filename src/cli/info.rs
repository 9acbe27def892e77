use anyhow::{Context, Result};
use std::path::PathBuf;

use trajplot::table::TrajectoryTable;

/// Display information about a trajectory file
pub fn run(file: PathBuf, json: bool) -> Result<()> {
    let table = TrajectoryTable::open(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let summary = table.summary();

    if json {
        let text = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        println!("{}", text);
    } else {
        print!("{}", summary);
    }

    Ok(())
}

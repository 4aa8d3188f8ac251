//! `sidiskit inspect` — summarize a correction file.

use anyhow::{Context, Result};
use std::path::Path;

use sk_acceptance::read_correction_file;
use sk_core::Axis;

pub fn cmd_inspect(input: &Path, output: Option<&Path>) -> Result<()> {
    let table = read_correction_file(input)
        .with_context(|| format!("failed to read correction file {}", input.display()))?;
    let grid = table.grid();

    let axes: Vec<serde_json::Value> = Axis::ALL
        .iter()
        .map(|&axis| {
            serde_json::json!({
                "axis": axis.name(),
                "n_bins": grid.n_bins(axis),
                "low": grid.edges(axis)[0],
                "high": *grid.edges(axis).last().expect("axis has edges"),
            })
        })
        .collect();

    let pids: Vec<serde_json::Value> = table
        .pids()
        .iter()
        .map(|&pid| {
            let thrown: u64 = table.thrown(pid).expect("pid from table").iter().sum();
            let simulated: u64 = table.simulated(pid).expect("pid from table").iter().sum();
            serde_json::json!({
                "pid": pid,
                "thrown": thrown,
                "simulated": simulated,
            })
        })
        .collect();

    let summary = serde_json::json!({
        "axes": axes,
        "total_bins": grid.total_bins(),
        "pids": pids,
    });

    let text = serde_json::to_string_pretty(&summary)?;
    match output {
        Some(path) => {
            std::fs::write(path, text + "\n")
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => println!("{text}"),
    }

    Ok(())
}

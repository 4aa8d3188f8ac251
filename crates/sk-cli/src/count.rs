//! `sidiskit count` — accumulate thrown/simulated samples into a
//! correction file.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use sk_acceptance::{write_correction_file, Accumulator, BinGrid, EventRecord, PassStats};

pub fn cmd_count(
    edges: [Vec<f64>; 5],
    thrown: &Path,
    simulated: &Path,
    output: &Path,
    no_dis_cuts: bool,
) -> Result<()> {
    let [q2, nu, zh, pt2, phi] = edges;
    let grid = BinGrid::new(q2, nu, zh, pt2, phi).context("invalid binning")?;
    tracing::info!("{} bins over 5 axes", grid.total_bins());

    // Fail on a taken output path before reading any events.
    if output.exists() {
        anyhow::bail!("output file already exists: {}", output.display());
    }

    let mut acc = Accumulator::new(grid);
    if no_dis_cuts {
        acc = acc.without_dis_cuts();
    }

    tracing::info!("reading thrown events from {}", thrown.display());
    let thrown_events = read_events(thrown)?;
    let thrown_stats = acc.count_thrown(thrown_events);
    log_pass("thrown", &thrown_stats);

    tracing::info!("reading simulated events from {}", simulated.display());
    let simulated_events = read_events(simulated)?;
    let simulated_stats = acc.count_simulated(simulated_events);
    log_pass("simulated", &simulated_stats);
    if simulated_stats.skipped_unknown_pid > 0 {
        tracing::warn!(
            "{} simulated events carried PIDs absent from the thrown sample",
            simulated_stats.skipped_unknown_pid
        );
    }

    let n_pids = acc.pids().len();
    let table = acc.finish();
    write_correction_file(output, &table)
        .with_context(|| format!("failed to write {}", output.display()))?;

    eprintln!(
        "Counted {} thrown + {} simulated events for {} PIDs -> {}",
        thrown_stats.binned,
        simulated_stats.binned,
        n_pids,
        output.display(),
    );

    Ok(())
}

/// Read one JSON event record per line, skipping blank lines.
fn read_events(path: &Path) -> Result<Vec<EventRecord>> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut events = Vec::new();
    for (lineno, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event: EventRecord = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: bad event record", path.display(), lineno + 1))?;
        events.push(event);
    }
    Ok(events)
}

fn log_pass(name: &str, stats: &PassStats) {
    tracing::info!(
        "{name} pass: {} events, {} binned, {} not computed, {} cut, {} out of range",
        stats.processed,
        stats.binned,
        stats.skipped_not_computed,
        stats.skipped_cuts,
        stats.skipped_out_of_range,
    );
}

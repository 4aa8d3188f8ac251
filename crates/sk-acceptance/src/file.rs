//! Deterministic text serialization of correction tables.
//!
//! Layout, in parsing order: one line of five edge counts; five lines of
//! edge values (phi_PQ in radians, 9 fractional digits); the PID count; the
//! PID list; then per PID one line of thrown counts and one line of
//! simulated counts, each `total_bins` integers.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use sk_core::{Axis, Error, Result};

use crate::correction::CorrectionTable;
use crate::grid::BinGrid;

/// Write `table` to a new file at `path`.
///
/// Refuses to overwrite: an existing file at `path` is an error, reported
/// before any output is produced.
pub fn write_correction_file(path: &Path, table: &CorrectionTable) -> Result<()> {
    if path.exists() {
        return Err(Error::OutputExists(path.to_path_buf()));
    }

    let grid = table.grid();
    let mut out = String::new();

    let counts: Vec<String> =
        Axis::ALL.iter().map(|a| grid.edges(*a).len().to_string()).collect();
    let _ = writeln!(out, "{}", counts.join(" "));

    for axis in Axis::ALL {
        let edges: Vec<String> =
            grid.edges(axis).iter().map(|e| format!("{e:.9}")).collect();
        let _ = writeln!(out, "{}", edges.join(" "));
    }

    let _ = writeln!(out, "{}", table.pids().len());
    let pids: Vec<String> = table.pids().iter().map(|p| p.to_string()).collect();
    let _ = writeln!(out, "{}", pids.join(" "));

    for &pid in table.pids() {
        for counts in [table.thrown(pid)?, table.simulated(pid)?] {
            let row: Vec<String> = counts.iter().map(|c| c.to_string()).collect();
            let _ = writeln!(out, "{}", row.join(" "));
        }
    }

    fs::write(path, out)?;
    Ok(())
}

/// Load a correction table from `path`.
///
/// A missing file is reported as such before any parsing; malformed content
/// names the token that failed.
pub fn read_correction_file(path: &Path) -> Result<CorrectionTable> {
    if !path.exists() {
        return Err(Error::MissingFile(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    let mut tokens = Tokens { inner: text.split_whitespace(), what: "" };

    tokens.what = "edge count";
    let mut n_edges = [0usize; 5];
    for n in n_edges.iter_mut() {
        *n = tokens.next_parsed()?;
    }

    tokens.what = "bin edge";
    let mut edges: [Vec<f64>; 5] = Default::default();
    for (axis, n) in edges.iter_mut().zip(n_edges) {
        *axis = (0..n).map(|_| tokens.next_parsed()).collect::<Result<_>>()?;
    }
    let grid = BinGrid::from_edges_radians(edges)?;
    let total_bins = grid.total_bins();

    tokens.what = "PID count";
    let n_pids: usize = tokens.next_parsed()?;
    tokens.what = "PID";
    let pids: Vec<i32> = (0..n_pids).map(|_| tokens.next_parsed()).collect::<Result<_>>()?;

    let mut thrown = Vec::with_capacity(n_pids);
    let mut simulated = Vec::with_capacity(n_pids);
    for _ in 0..n_pids {
        tokens.what = "thrown count";
        thrown.push((0..total_bins).map(|_| tokens.next_parsed()).collect::<Result<Vec<u64>>>()?);
        tokens.what = "simulated count";
        simulated
            .push((0..total_bins).map(|_| tokens.next_parsed()).collect::<Result<Vec<u64>>>()?);
    }

    Ok(CorrectionTable::from_parts(grid, pids, thrown, simulated))
}

/// Whitespace tokenizer that reports what it was trying to read.
struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
    what: &'static str,
}

impl Tokens<'_> {
    fn next_parsed<T: std::str::FromStr>(&mut self) -> Result<T> {
        let token = self
            .inner
            .next()
            .ok_or_else(|| Error::Malformed(format!("expected {}, found end of file", self.what)))?;
        token
            .parse()
            .map_err(|_| Error::Malformed(format!("expected {}, got '{token}'", self.what)))
    }
}

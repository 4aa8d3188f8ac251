//! Read-only correction table: per-PID thrown/simulated counts with
//! per-bin factor and acceptance lookup.

use sk_core::{Error, Result};

use crate::grid::BinGrid;

/// Frozen thrown/simulated count tables for a set of PIDs on one grid.
///
/// Produced by [`Accumulator::finish`](crate::Accumulator::finish) or loaded
/// from a correction file; immutable either way.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectionTable {
    grid: BinGrid,
    pids: Vec<i32>,
    thrown: Vec<Vec<u64>>,
    simulated: Vec<Vec<u64>>,
}

impl CorrectionTable {
    pub(crate) fn from_parts(
        grid: BinGrid,
        pids: Vec<i32>,
        thrown: Vec<Vec<u64>>,
        simulated: Vec<Vec<u64>>,
    ) -> Self {
        debug_assert_eq!(pids.len(), thrown.len());
        debug_assert_eq!(pids.len(), simulated.len());
        Self { grid, pids, thrown, simulated }
    }

    /// The binning the counts were accumulated on.
    pub fn grid(&self) -> &BinGrid {
        &self.grid
    }

    /// PIDs in storage order.
    pub fn pids(&self) -> &[i32] {
        &self.pids
    }

    /// Thrown counts for one PID.
    pub fn thrown(&self, pid: i32) -> Result<&[u64]> {
        Ok(&self.thrown[self.pid_index(pid)?])
    }

    /// Simulated counts for one PID.
    pub fn simulated(&self, pid: i32) -> Result<&[u64]> {
        Ok(&self.simulated[self.pid_index(pid)?])
    }

    /// Correction factor thrown/simulated for one bin.
    ///
    /// Returns 0.0 when the simulated count is zero; downstream consumers
    /// multiply yields by the factor, so an unmeasurable bin contributes
    /// nothing rather than propagating a NaN.
    pub fn factor(&self, pid: i32, bin: usize) -> Result<f64> {
        let i = self.pid_index(pid)?;
        self.check_bin(bin)?;
        let simulated = self.simulated[i][bin];
        if simulated == 0 {
            return Ok(0.0);
        }
        Ok(self.thrown[i][bin] as f64 / simulated as f64)
    }

    /// Detector acceptance simulated/thrown for one bin, clamped to 0 when
    /// the ratio is not finite or exceeds 1.
    pub fn acceptance(&self, pid: i32, bin: usize) -> Result<f64> {
        let i = self.pid_index(pid)?;
        self.check_bin(bin)?;
        let ratio = self.simulated[i][bin] as f64 / self.thrown[i][bin] as f64;
        if !ratio.is_finite() || ratio > 1.0 {
            return Ok(0.0);
        }
        Ok(ratio)
    }

    fn pid_index(&self, pid: i32) -> Result<usize> {
        self.pids.iter().position(|&known| known == pid).ok_or(Error::PidNotInTable(pid))
    }

    fn check_bin(&self, bin: usize) -> Result<()> {
        if bin >= self.grid.total_bins() {
            return Err(Error::Binning(format!(
                "bin index {bin} out of range ({} bins)",
                self.grid.total_bins()
            )));
        }
        Ok(())
    }
}

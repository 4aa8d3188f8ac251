//! Event counting over the 5D grid for thrown and simulated samples.

use serde::{Deserialize, Serialize};

use sk_core::constants::{Q2_CUT, W2_CUT, W_CUT};

use crate::correction::CorrectionTable;
use crate::grid::BinGrid;

/// One thrown or reconstructed event, as supplied by the upstream ntuple
/// reader.
///
/// The five binning variables use the 0.0 sentinel for "not computed"
/// (see `sk-kinematics`); `w` is filled for thrown samples, `w2` for
/// reconstructed ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// PID of the particle (LUND convention).
    pub pid: i32,
    /// Q2 (GeV^2).
    pub q2: f64,
    /// nu (GeV).
    pub nu: f64,
    /// z_h.
    pub zh: f64,
    /// P_T^2 (GeV^2).
    pub pt2: f64,
    /// phi_PQ (rad).
    pub phi_pq: f64,
    /// W (GeV); thrown samples only.
    #[serde(default)]
    pub w: f64,
    /// W2 (GeV^2); reconstructed samples only.
    #[serde(default)]
    pub w2: f64,
}

/// Which sample a counting pass is running over. The two kinds expose
/// different pre-computed invariants, so they cut on W and W2 respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    /// Generator-level events, before detector simulation.
    Thrown,
    /// Events after detector simulation and reconstruction.
    Reconstructed,
}

/// Outcome tally of one counting pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PassStats {
    /// Events read from the stream.
    pub processed: u64,
    /// Events that incremented a bin.
    pub binned: u64,
    /// Events whose five binning values were all exactly zero.
    pub skipped_not_computed: u64,
    /// Events failing the Q2 or invariant-mass cuts.
    pub skipped_cuts: u64,
    /// Events falling outside the grid on at least one axis.
    pub skipped_out_of_range: u64,
    /// Simulated events whose PID the thrown pass never discovered.
    pub skipped_unknown_pid: u64,
}

/// Accumulates thrown and simulated counts into aligned flat tables, one
/// pair per PID discovered in the thrown sample.
///
/// Single-threaded by design: each pass is one sequential loop, and every
/// increment is independent, so event order never changes the result.
#[derive(Debug, Clone)]
pub struct Accumulator {
    grid: BinGrid,
    apply_dis_cuts: bool,
    pids: Vec<i32>,
    thrown: Vec<Vec<u64>>,
    simulated: Vec<Vec<u64>>,
}

impl Accumulator {
    /// New accumulator over `grid` with the standard DIS cuts applied.
    pub fn new(grid: BinGrid) -> Self {
        Self { grid, apply_dis_cuts: true, pids: Vec::new(), thrown: Vec::new(), simulated: Vec::new() }
    }

    /// Disable the Q2 and invariant-mass cuts, counting every in-range
    /// event. Intended for raw binning studies.
    pub fn without_dis_cuts(mut self) -> Self {
        self.apply_dis_cuts = false;
        self
    }

    /// The grid events are being counted on.
    pub fn grid(&self) -> &BinGrid {
        &self.grid
    }

    /// PIDs discovered so far, in order of first appearance.
    pub fn pids(&self) -> &[i32] {
        &self.pids
    }

    /// Count a thrown sample. New PIDs are added to the list in order of
    /// first appearance.
    pub fn count_thrown<I>(&mut self, events: I) -> PassStats
    where
        I: IntoIterator<Item = EventRecord>,
    {
        self.count(events, SampleKind::Thrown)
    }

    /// Count a simulated/reconstructed sample. Events with a PID the
    /// thrown pass never saw are skipped and tallied.
    pub fn count_simulated<I>(&mut self, events: I) -> PassStats
    where
        I: IntoIterator<Item = EventRecord>,
    {
        self.count(events, SampleKind::Reconstructed)
    }

    /// Freeze the accumulated counts into a read-only correction table.
    pub fn finish(self) -> CorrectionTable {
        CorrectionTable::from_parts(self.grid, self.pids, self.thrown, self.simulated)
    }

    fn count<I>(&mut self, events: I, kind: SampleKind) -> PassStats
    where
        I: IntoIterator<Item = EventRecord>,
    {
        let mut stats = PassStats::default();

        for event in events {
            stats.processed += 1;

            let values = [event.q2, event.nu, event.zh, event.pt2, event.phi_pq];
            if values.iter().all(|&v| v == 0.0) {
                stats.skipped_not_computed += 1;
                continue;
            }

            if self.apply_dis_cuts && !Self::passes_dis_cuts(&event, kind) {
                stats.skipped_cuts += 1;
                continue;
            }

            let Some(bin) = self.grid.find_bin(&values) else {
                stats.skipped_out_of_range += 1;
                continue;
            };

            let pid_idx = match kind {
                SampleKind::Thrown => self.pid_index_or_insert(event.pid),
                SampleKind::Reconstructed => {
                    match self.pids.iter().position(|&pid| pid == event.pid) {
                        Some(i) => i,
                        None => {
                            stats.skipped_unknown_pid += 1;
                            continue;
                        }
                    }
                }
            };

            match kind {
                SampleKind::Thrown => self.thrown[pid_idx][bin] += 1,
                SampleKind::Reconstructed => self.simulated[pid_idx][bin] += 1,
            }
            stats.binned += 1;
        }

        stats
    }

    fn passes_dis_cuts(event: &EventRecord, kind: SampleKind) -> bool {
        if event.q2 < Q2_CUT {
            return false;
        }
        match kind {
            SampleKind::Thrown => event.w >= W_CUT,
            SampleKind::Reconstructed => event.w2 >= W2_CUT,
        }
    }

    fn pid_index_or_insert(&mut self, pid: i32) -> usize {
        match self.pids.iter().position(|&known| known == pid) {
            Some(i) => i,
            None => {
                self.pids.push(pid);
                self.thrown.push(vec![0; self.grid.total_bins()]);
                self.simulated.push(vec![0; self.grid.total_bins()]);
                self.pids.len() - 1
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Five axes with edges [0, 1, 2]: 2 bins each, 32 bins total.
    fn unit_grid() -> BinGrid {
        let edges = vec![0.0, 1.0, 2.0];
        BinGrid::new(edges.clone(), edges.clone(), edges.clone(), edges.clone(), edges).unwrap()
    }

    fn event(pid: i32, values: [f64; 5]) -> EventRecord {
        EventRecord {
            pid,
            q2: values[0],
            nu: values[1],
            zh: values[2],
            pt2: values[3],
            phi_pq: values[4],
            w: 0.0,
            w2: 0.0,
        }
    }

    #[test]
    fn single_thrown_event_lands_in_bin_zero() {
        let mut acc = Accumulator::new(unit_grid()).without_dis_cuts();
        let stats = acc.count_thrown([event(11, [0.5; 5])]);
        assert_eq!(stats.binned, 1);

        let table = acc.finish();
        let thrown = table.thrown(11).unwrap();
        assert_eq!(thrown[0], 1);
        assert!(thrown[1..].iter().all(|&c| c == 0));
    }

    #[test]
    fn all_zero_event_is_skipped_as_not_computed() {
        let mut acc = Accumulator::new(unit_grid()).without_dis_cuts();
        let stats = acc.count_thrown([event(11, [0.0; 5])]);
        assert_eq!(stats.binned, 0);
        assert_eq!(stats.skipped_not_computed, 1);
        assert!(acc.pids().is_empty());
    }

    #[test]
    fn dis_cuts_reject_low_q2_and_low_w() {
        let mut acc = Accumulator::new(unit_grid());

        // Q2 below the DIS threshold.
        let mut low_q2 = event(11, [0.5, 0.5, 0.5, 0.5, 0.5]);
        low_q2.w = 3.0;
        // Q2 fine, W below the thrown-sample cut.
        let mut low_w = event(11, [1.5, 0.5, 0.5, 0.5, 0.5]);
        low_w.w = 1.0;
        // Passes both.
        let mut good = event(11, [1.5, 0.5, 0.5, 0.5, 0.5]);
        good.w = 3.0;

        let stats = acc.count_thrown([low_q2, low_w, good]);
        assert_eq!(stats.skipped_cuts, 2);
        assert_eq!(stats.binned, 1);
    }

    #[test]
    fn reconstructed_pass_cuts_on_w2() {
        let grid = unit_grid();
        let mut acc = Accumulator::new(grid);
        let mut thrown = event(211, [1.5, 0.5, 0.5, 0.5, 0.5]);
        thrown.w = 3.0;
        acc.count_thrown([thrown]);

        let mut low = event(211, [1.5, 0.5, 0.5, 0.5, 0.5]);
        low.w2 = 3.9;
        let mut good = event(211, [1.5, 0.5, 0.5, 0.5, 0.5]);
        good.w2 = 9.0;
        let stats = acc.count_simulated([low, good]);
        assert_eq!(stats.skipped_cuts, 1);
        assert_eq!(stats.binned, 1);
    }

    #[test]
    fn out_of_range_event_is_skipped() {
        let mut acc = Accumulator::new(unit_grid()).without_dis_cuts();
        let stats = acc.count_thrown([event(11, [0.5, 0.5, 0.5, 0.5, 5.0])]);
        assert_eq!(stats.binned, 0);
        assert_eq!(stats.skipped_out_of_range, 1);
    }

    #[test]
    fn unknown_pid_in_simulated_pass_is_skipped() {
        let mut acc = Accumulator::new(unit_grid()).without_dis_cuts();
        acc.count_thrown([event(11, [0.5; 5])]);
        let stats = acc.count_simulated([event(321, [0.5; 5])]);
        assert_eq!(stats.binned, 0);
        assert_eq!(stats.skipped_unknown_pid, 1);
    }

    #[test]
    fn counting_is_order_independent() {
        let events: Vec<EventRecord> = vec![
            event(11, [0.5, 0.5, 0.5, 0.5, 0.5]),
            event(211, [1.5, 0.5, 0.5, 0.5, 0.5]),
            event(11, [0.5, 1.5, 0.5, 1.5, 0.5]),
            event(211, [1.5, 1.5, 1.5, 0.5, 1.5]),
            event(11, [0.5, 0.5, 0.5, 0.5, 0.5]),
        ];

        let mut forward = Accumulator::new(unit_grid()).without_dis_cuts();
        forward.count_thrown(events.iter().copied());
        let forward = forward.finish();

        let mut reversed = Accumulator::new(unit_grid()).without_dis_cuts();
        reversed.count_thrown(events.iter().rev().copied());
        let reversed = reversed.finish();

        // PID discovery order differs, but per-PID tables are identical.
        for &pid in forward.pids() {
            assert_eq!(forward.thrown(pid).unwrap(), reversed.thrown(pid).unwrap());
        }
    }

    #[test]
    fn pid_discovery_keeps_first_appearance_order() {
        let mut acc = Accumulator::new(unit_grid()).without_dis_cuts();
        acc.count_thrown([
            event(211, [0.5; 5]),
            event(11, [0.5; 5]),
            event(211, [1.5, 0.5, 0.5, 0.5, 0.5]),
            event(-211, [0.5; 5]),
        ]);
        assert_eq!(acc.pids(), &[211, 11, -211]);
    }
}

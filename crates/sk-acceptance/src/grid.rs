//! The 5D bin grid: irregular per-axis edges, value-to-bin lookup, and the
//! mixed-radix mapping between 5D bin indices and flat storage indices.

use sk_core::{Axis, Error, Result};
use sk_kinematics::math::to_radians;

/// Five independent, irregular binnings, one per kinematic axis.
///
/// Edges are strictly increasing with at least two values per axis. phi_PQ
/// edges are supplied in degrees and held in radians internally.
#[derive(Debug, Clone, PartialEq)]
pub struct BinGrid {
    edges: [Vec<f64>; 5],
}

impl BinGrid {
    /// Build a grid from per-axis edge lists. `phi_pq_deg` is in degrees;
    /// values outside [-180, 180] are rejected.
    pub fn new(
        q2: Vec<f64>,
        nu: Vec<f64>,
        zh: Vec<f64>,
        pt2: Vec<f64>,
        phi_pq_deg: Vec<f64>,
    ) -> Result<Self> {
        let phi_rad = phi_pq_deg.into_iter().map(to_radians).collect::<Result<Vec<f64>>>()?;
        Self::from_edges_radians([q2, nu, zh, pt2, phi_rad])
    }

    /// Build a grid from edge arrays whose phi_PQ axis is already in
    /// radians, as stored in a correction file.
    pub fn from_edges_radians(edges: [Vec<f64>; 5]) -> Result<Self> {
        for (axis, e) in Axis::ALL.iter().zip(edges.iter()) {
            if e.len() < 2 {
                return Err(Error::Binning(format!(
                    "axis {} needs at least 2 edges, got {}",
                    axis.name(),
                    e.len()
                )));
            }
            if e.windows(2).any(|w| w[0] >= w[1]) {
                return Err(Error::Binning(format!(
                    "axis {} edges must be strictly increasing",
                    axis.name()
                )));
            }
        }
        Ok(Self { edges })
    }

    /// Edge values of one axis.
    pub fn edges(&self, axis: Axis) -> &[f64] {
        &self.edges[axis.index()]
    }

    /// Number of bins on one axis.
    pub fn n_bins(&self, axis: Axis) -> usize {
        self.edges[axis.index()].len() - 1
    }

    /// Bin counts of all five axes, in storage order.
    pub fn bins_per_axis(&self) -> [usize; 5] {
        [
            self.edges[0].len() - 1,
            self.edges[1].len() - 1,
            self.edges[2].len() - 1,
            self.edges[3].len() - 1,
            self.edges[4].len() - 1,
        ]
    }

    /// Total number of 5D bins.
    pub fn total_bins(&self) -> usize {
        self.bins_per_axis().iter().product()
    }

    /// Bin of `value` on one axis, or `None` when the value falls outside
    /// every interval.
    ///
    /// Intervals are open on both sides: `edge < value < next_edge`. A
    /// value exactly on an edge belongs to no bin.
    pub fn find_axis_bin(&self, axis: Axis, value: f64) -> Option<usize> {
        let edges = &self.edges[axis.index()];
        (0..edges.len() - 1).find(|&i| edges[i] < value && value < edges[i + 1])
    }

    /// Flat bin index of a kinematic tuple, or `None` when any axis value
    /// is out of range. Values are in storage order (Q2, nu, zh, Pt2,
    /// phi_PQ with phi in radians).
    pub fn find_bin(&self, values: &[f64; 5]) -> Option<usize> {
        let mut idx = [0usize; 5];
        for (i, axis) in Axis::ALL.iter().enumerate() {
            idx[i] = self.find_axis_bin(*axis, values[i])?;
        }
        Some(self.flatten(idx))
    }

    /// Row-major mixed-radix encoding of per-axis bin indices.
    pub fn flatten(&self, idx: [usize; 5]) -> usize {
        let n = self.bins_per_axis();
        idx[0] * (n[1] * n[2] * n[3] * n[4])
            + idx[1] * (n[2] * n[3] * n[4])
            + idx[2] * (n[3] * n[4])
            + idx[3] * n[4]
            + idx[4]
    }

    /// Inverse of [`flatten`](Self::flatten).
    pub fn unflatten(&self, flat: usize) -> [usize; 5] {
        let n = self.bins_per_axis();
        let mut rest = flat;
        let mut idx = [0usize; 5];
        for axis in (0..5).rev() {
            idx[axis] = rest % n[axis];
            rest /= n[axis];
        }
        idx
    }

    /// Lower and upper edge of one bin on one axis.
    pub fn bin_bounds(&self, axis: Axis, bin: usize) -> Result<(f64, f64)> {
        let edges = &self.edges[axis.index()];
        if bin + 1 >= edges.len() {
            return Err(Error::Binning(format!(
                "bin {bin} out of range on axis {} ({} bins)",
                axis.name(),
                edges.len() - 1
            )));
        }
        Ok((edges[bin], edges[bin + 1]))
    }

    /// Human-readable description of one flat bin, for plot labels.
    pub fn label(&self, flat: usize) -> Result<String> {
        if flat >= self.total_bins() {
            return Err(Error::Binning(format!(
                "flat index {flat} out of range ({} bins)",
                self.total_bins()
            )));
        }
        let idx = self.unflatten(flat);
        let mut parts = Vec::with_capacity(5);
        for (i, axis) in Axis::ALL.iter().enumerate() {
            let (lo, hi) = self.bin_bounds(*axis, idx[i])?;
            parts.push(format!("{} in ({lo:.3}, {hi:.3})", axis.name()));
        }
        Ok(parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn grid() -> BinGrid {
        // Unequal bin counts: 3, 2, 1, 12, 4.
        BinGrid::new(
            vec![1.0, 1.5, 2.5, 4.0],
            vec![2.0, 4.0, 6.5],
            vec![0.0, 1.0],
            (0..=12).map(|i| i as f64 * 0.25).collect(),
            vec![-180.0, -90.0, 0.0, 90.0, 180.0],
        )
        .unwrap()
    }

    #[test]
    fn construction_validates_edges() {
        assert!(matches!(
            BinGrid::new(vec![1.0], vec![0.0, 1.0], vec![0.0, 1.0], vec![0.0, 1.0], vec![0.0, 1.0]),
            Err(Error::Binning(_))
        ));
        assert!(matches!(
            BinGrid::new(
                vec![1.0, 1.0],
                vec![0.0, 1.0],
                vec![0.0, 1.0],
                vec![0.0, 1.0],
                vec![0.0, 1.0]
            ),
            Err(Error::Binning(_))
        ));
    }

    #[test]
    fn phi_edges_are_converted_and_validated() {
        let g = grid();
        let phi = g.edges(Axis::PhiPq);
        assert_relative_eq!(phi[0], -std::f64::consts::PI, epsilon = 1e-12);
        assert_relative_eq!(phi[4], std::f64::consts::PI, epsilon = 1e-12);

        assert!(matches!(
            BinGrid::new(
                vec![0.0, 1.0],
                vec![0.0, 1.0],
                vec![0.0, 1.0],
                vec![0.0, 1.0],
                vec![-190.0, 0.0]
            ),
            Err(Error::AngleOutOfRange(_))
        ));
    }

    #[test]
    fn totals_with_unequal_axes() {
        let g = grid();
        assert_eq!(g.bins_per_axis(), [3, 2, 1, 12, 4]);
        assert_eq!(g.total_bins(), 3 * 2 * 12 * 4);
    }

    #[test]
    fn flatten_unflatten_bijection() {
        let g = grid();
        for flat in 0..g.total_bins() {
            let idx = g.unflatten(flat);
            assert_eq!(g.flatten(idx), flat);
        }
    }

    #[test]
    fn interval_rule_is_open_on_both_sides() {
        let g = grid();
        assert_eq!(g.find_axis_bin(Axis::Q2, 1.2), Some(0));
        assert_eq!(g.find_axis_bin(Axis::Q2, 1.5), None);
        assert_eq!(g.find_axis_bin(Axis::Q2, 1.0), None);
        assert_eq!(g.find_axis_bin(Axis::Q2, 4.0), None);
        assert_eq!(g.find_axis_bin(Axis::Q2, 3.0), Some(2));
    }

    #[test]
    fn one_out_of_range_axis_rejects_the_tuple() {
        let g = grid();
        let inside = [1.2, 3.0, 0.5, 1.1, 0.5];
        assert!(g.find_bin(&inside).is_some());
        for axis in 0..5 {
            let mut values = inside;
            values[axis] = 1e6;
            assert_eq!(g.find_bin(&values), None, "axis {axis} should reject");
        }
    }

    #[test]
    fn single_bin_axis_flows_through_the_general_formula() {
        let g = grid();
        let flat = g.find_bin(&[1.2, 3.0, 0.5, 1.1, 0.5]).unwrap();
        let idx = g.unflatten(flat);
        assert_eq!(idx[2], 0);
        assert_eq!(g.flatten(idx), flat);
    }

    #[test]
    fn labels_name_all_axes() {
        let g = grid();
        let label = g.label(0).unwrap();
        for axis in Axis::ALL {
            assert!(label.contains(axis.name()), "label missing {}: {label}", axis.name());
        }
        assert!(g.label(g.total_bins()).is_err());
    }
}

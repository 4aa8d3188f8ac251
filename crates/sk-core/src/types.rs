//! Common data types for sidiskit

use serde::{Deserialize, Serialize};

/// The five kinematic axes of the acceptance grid, in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Four-momentum transfer squared, Q2 (GeV^2).
    Q2,
    /// Energy transfer, nu (GeV).
    Nu,
    /// Fractional hadron energy, z_h.
    Zh,
    /// Transverse momentum squared in the virtual-photon frame, P_T^2 (GeV^2).
    Pt2,
    /// Azimuthal angle in the virtual-photon frame, phi_PQ (rad).
    PhiPq,
}

impl Axis {
    /// All five axes in storage order.
    pub const ALL: [Axis; 5] = [Axis::Q2, Axis::Nu, Axis::Zh, Axis::Pt2, Axis::PhiPq];

    /// Position of this axis in the storage order.
    pub fn index(self) -> usize {
        match self {
            Axis::Q2 => 0,
            Axis::Nu => 1,
            Axis::Zh => 2,
            Axis::Pt2 => 3,
            Axis::PhiPq => 4,
        }
    }

    /// Short name used in bin labels and CLI output.
    pub fn name(self) -> &'static str {
        match self {
            Axis::Q2 => "Q2",
            Axis::Nu => "nu",
            Axis::Zh => "zh",
            Axis::Pt2 => "Pt2",
            Axis::PhiPq => "phiPQ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_order_is_stable() {
        for (i, axis) in Axis::ALL.iter().enumerate() {
            assert_eq!(axis.index(), i);
        }
    }
}

//! The resolved-particle record consumed by the kinematic calculator.

use serde::{Deserialize, Serialize};

/// A reconstructed track with its resolved identity.
///
/// Created per track per event. `pid` and `mass` are zero / unset until
/// [`resolve_pid`](crate::resolve_pid) runs; the flags record what the
/// resolver concluded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    /// Whether the track passed reconstruction-level validity checks.
    pub is_valid: bool,
    /// Whether this particle is the trigger electron of its event.
    pub is_trigger_electron: bool,
    /// Whether the resolved PID is a hadron (|pid| >= 100).
    pub is_hadron: bool,

    /// Resolved PID (LUND convention), 0 if unidentified.
    pub pid: i32,
    /// Charge in units of e.
    pub charge: i32,
    /// Detector sector of the track.
    pub sector: usize,
    /// Velocity as a fraction of c, from time of flight.
    pub beta: f64,
    /// Mass in GeV, set from the PID table after resolution.
    pub mass: f64,

    /// Vertex x (cm).
    pub vx: f64,
    /// Vertex y (cm).
    pub vy: f64,
    /// Vertex z (cm).
    pub vz: f64,
    /// Momentum x component (GeV).
    pub px: f64,
    /// Momentum y component (GeV).
    pub py: f64,
    /// Momentum z component (GeV).
    pub pz: f64,
}

impl Particle {
    /// An invalid particle, used when a track fails reconstruction cuts.
    pub fn invalid() -> Self {
        Self {
            is_valid: false,
            is_trigger_electron: false,
            is_hadron: false,
            pid: 0,
            charge: 0,
            sector: 0,
            beta: 0.0,
            mass: 0.0,
            vx: 0.0,
            vy: 0.0,
            vz: 0.0,
            px: 0.0,
            py: 0.0,
            pz: 0.0,
        }
    }

    /// A valid, not-yet-identified particle from raw track data.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        charge: i32,
        beta: f64,
        sector: usize,
        vx: f64,
        vy: f64,
        vz: f64,
        px: f64,
        py: f64,
        pz: f64,
    ) -> Self {
        Self {
            is_valid: true,
            is_trigger_electron: false,
            is_hadron: false,
            pid: 0,
            charge,
            sector,
            beta,
            mass: 0.0,
            vx,
            vy,
            vz,
            px,
            py,
            pz,
        }
    }

    /// Momentum magnitude (GeV).
    pub fn momentum(&self) -> f64 {
        (self.px * self.px + self.py * self.py + self.pz * self.pz).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn invalid_particle_has_no_flags() {
        let p = Particle::invalid();
        assert!(!p.is_valid);
        assert!(!p.is_trigger_electron);
        assert!(!p.is_hadron);
    }

    #[test]
    fn momentum_magnitude() {
        let p = Particle::new(-1, 0.99, 1, 0.0, 0.0, 0.0, 3.0, 4.0, 12.0);
        assert_relative_eq!(p.momentum(), 13.0, epsilon = 1e-12);
    }
}

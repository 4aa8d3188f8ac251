//! Lab-frame angles and inclusive DIS variables.
//!
//! DIS variables are computed from the trigger electron and the beam energy;
//! they return the 0.0 sentinel when the particle is not flagged as the
//! trigger electron.

use sk_pid::{Particle, PROTON_MASS};

/// Lab-frame polar angle of the track.
pub fn theta_lab(p: &Particle) -> f64 {
    if p.momentum() < 1e-9 {
        return 0.0;
    }
    (p.px * p.px + p.py * p.py).sqrt().atan2(p.pz)
}

/// Lab-frame azimuthal angle of the track.
pub fn phi_lab(p: &Particle) -> f64 {
    p.py.atan2(p.px)
}

/// Momentum magnitude of the track (GeV).
pub fn momentum(p: &Particle) -> f64 {
    p.momentum()
}

/// Four-momentum transfer squared, Q2 (GeV^2).
pub fn q2(e: &Particle, beam_energy: f64) -> f64 {
    if !e.is_trigger_electron {
        return 0.0;
    }
    4.0 * beam_energy * e.momentum() * (theta_lab(e) / 2.0).sin().powi(2)
}

/// Energy transferred to the hadronic system, nu (GeV).
pub fn nu(e: &Particle, beam_energy: f64) -> f64 {
    if !e.is_trigger_electron {
        return 0.0;
    }
    beam_energy - e.momentum()
}

/// Bjorken x.
pub fn xb(e: &Particle, beam_energy: f64) -> f64 {
    if !e.is_trigger_electron {
        return 0.0;
    }
    q2(e, beam_energy) / (2.0 * PROTON_MASS * nu(e, beam_energy))
}

/// Invariant mass of the hadronic system, W (GeV).
pub fn w(e: &Particle, beam_energy: f64) -> f64 {
    if !e.is_trigger_electron {
        return 0.0;
    }
    w2(e, beam_energy).abs().sqrt()
}

/// Invariant mass squared of the hadronic system, W2 (GeV^2).
pub fn w2(e: &Particle, beam_energy: f64) -> f64 {
    if !e.is_trigger_electron {
        return 0.0;
    }
    PROTON_MASS * PROTON_MASS + 2.0 * PROTON_MASS * nu(e, beam_energy) - q2(e, beam_energy)
}

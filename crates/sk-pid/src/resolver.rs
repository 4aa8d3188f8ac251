//! PID resolution state machine.
//!
//! Given raw detector evidence for a track, assigns the best-fit PID from
//! the hypothesis list matching the track's charge sign. Neutrals are
//! assigned terminally from beta and calorimeter energy; charged hypotheses
//! are tried in table order and the first acceptance wins.

use sk_core::{Error, Result};

use crate::particle::Particle;
use crate::sampling_fraction::{sf_mean, sf_sigma, SectorSfParams};
use crate::table::PidTable;

/// Max beta allowed to assign a neutron.
pub const NEUTRON_MAX_BETA: f64 = 0.9;
/// Min calorimeter energy to assign a photon.
pub const PHOTON_MIN_ENERGY: f64 = 1e-9;
/// Number of HTCC photoelectrons required to consider the HTCC signal real.
pub const HTCC_NPHE_CUT: i32 = 2;
/// Min energy deposited in PCAL to accept an electron hypothesis (GeV).
pub const MIN_PCAL_ENERGY: f64 = 0.060;
/// Max distance from the sampling-fraction mean, in sigmas, for electrons.
pub const E_SF_NSIGMA: f64 = 5.0;
/// Momentum above which a track crossing the HTCC is treated as a pion (GeV).
pub const HTCC_PION_THRESHOLD: f64 = 4.9;

/// Raw per-track detector evidence fed to the resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct PidEvidence {
    /// PID hint from the event-builder reconstruction.
    pub recon_pid: i32,
    /// Reconstruction status word; negative for trigger-bank members.
    pub status: i32,
    /// Total calorimeter energy (PCAL + ECIN + ECOU), GeV.
    pub total_energy: f64,
    /// Energy deposited in PCAL, GeV.
    pub pcal_energy: f64,
    /// HTCC photoelectron count.
    pub htcc_nphe: i32,
    /// LTCC photoelectron count.
    pub ltcc_nphe: i32,
}

/// Neutral assignment: slow tracks are neutrons, energy deposits are
/// photons, everything else stays unidentified.
fn assign_neutral_pid(energy: f64, beta: f64) -> i32 {
    if beta < NEUTRON_MAX_BETA {
        2112
    } else if energy > PHOTON_MIN_ENERGY {
        22
    } else {
        0
    }
}

/// Electron-evidence test: calorimeter and Cherenkov signals consistent
/// with an electron, and E/p within `E_SF_NSIGMA` of the sector model.
fn is_electron(
    total_energy: f64,
    pcal_energy: f64,
    htcc_nphe: i32,
    p: f64,
    pars: &SectorSfParams,
) -> bool {
    if total_energy < 1e-9 {
        return false;
    }
    if p < 1e-9 {
        return false;
    }
    if htcc_nphe < HTCC_NPHE_CUT {
        return false;
    }
    if pcal_energy < MIN_PCAL_ENERGY {
        return false;
    }

    let mean = sf_mean(pars, total_energy);
    let sigma = sf_sigma(pars, total_energy);
    ((total_energy / p - mean) / sigma).abs() <= E_SF_NSIGMA
}

/// Test one hypothesis against the evidence. Returns `Some(hypothesis)` on
/// acceptance, `None` on rejection.
fn match_pid(
    hypothesis: i32,
    recon_match: bool,
    electron_check: bool,
    htcc_signal_check: bool,
    htcc_pion_threshold: bool,
) -> Result<Option<i32>> {
    let accepted = match hypothesis.abs() {
        11 => recon_match || electron_check,
        211 => recon_match || (!electron_check && htcc_signal_check && htcc_pion_threshold),
        13 | 321 | 2212 | 45 | 2112 | 22 => recon_match,
        _ => return Err(Error::UnsupportedHypothesis(hypothesis)),
    };
    Ok(if accepted { Some(hypothesis) } else { None })
}

/// Resolve the PID of `particle` from detector evidence and the sector's
/// sampling-fraction parameters, then set its mass and flags.
///
/// Deterministic: no state outside the arguments is read. A resolved PID
/// missing from the table is a reportable error that aborts the record.
pub fn resolve_pid(
    table: &PidTable,
    particle: &mut Particle,
    evidence: &PidEvidence,
    sf_pars: &SectorSfParams,
) -> Result<()> {
    if particle.charge == 0 {
        // Terminal for neutrals; no hypothesis matching.
        particle.pid = assign_neutral_pid(evidence.total_energy, particle.beta);
    } else {
        let p = particle.momentum();
        let electron_check = is_electron(
            evidence.total_energy,
            evidence.pcal_energy,
            evidence.htcc_nphe,
            p,
            sf_pars,
        );
        let htcc_signal_check = evidence.htcc_nphe > HTCC_NPHE_CUT;
        let htcc_pion_threshold = p > HTCC_PION_THRESHOLD;

        for &hypothesis in table.hypotheses(particle.charge) {
            if particle.pid != 0 {
                break;
            }
            if let Some(pid) = match_pid(
                hypothesis,
                hypothesis == evidence.recon_pid,
                electron_check,
                htcc_signal_check,
                htcc_pion_threshold,
            )? {
                particle.pid = pid;
            }
        }
    }

    particle.is_trigger_electron = particle.pid == 11 && evidence.status < 0;
    particle.mass = table.mass(particle.pid)?;
    particle.is_hadron = particle.pid.abs() >= 100;

    Ok(())
}

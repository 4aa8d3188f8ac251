//! SIDIS variables of a produced hadron in the virtual-photon frame.
//!
//! The virtual photon carries the beam momentum minus the trigger-electron
//! momentum. Frame angles come from rotating the hadron momentum so the
//! photon lies along z. Every function returns the 0.0 sentinel unless the
//! produced particle is flagged as a hadron and the reference particle as
//! the trigger electron.

use sk_pid::Particle;

use crate::dis::{momentum, nu, q2};
use crate::math::{angle, rotate_y, rotate_z};

/// Polar angle between the hadron and the virtual photon.
pub fn theta_pq(p: &Particle, e: &Particle, beam_energy: f64) -> f64 {
    if !(p.is_hadron && e.is_trigger_electron) {
        return 0.0;
    }
    angle(-e.px, -e.py, beam_energy - e.pz, p.px, p.py, p.pz)
}

/// Azimuthal angle of the hadron around the virtual-photon direction.
///
/// Two sequential rotations: about z so the photon azimuth vanishes, then
/// about y so the photon lies along z.
pub fn phi_pq(p: &Particle, e: &Particle, beam_energy: f64) -> f64 {
    if !(p.is_hadron && e.is_trigger_electron) {
        return 0.0;
    }

    let (mut gpx, mut gpy, mut gpz) = (-e.px, -e.py, beam_energy - e.pz);
    let (mut ppx, mut ppy, mut ppz) = (p.px, p.py, p.pz);

    let phi_z = std::f64::consts::PI - gpy.atan2(gpx);
    rotate_z(&mut gpx, &mut gpy, phi_z);
    rotate_z(&mut ppx, &mut ppy, phi_z);

    let phi_y = angle(gpx, gpy, gpz, 0.0, 0.0, 1.0);
    rotate_y(&mut ppx, &mut ppz, phi_y);

    ppy.atan2(ppx)
}

/// Cosine of the angle between the hadron and the virtual photon.
pub fn cos_theta_pq(p: &Particle, e: &Particle, beam_energy: f64) -> f64 {
    if !(p.is_hadron && e.is_trigger_electron) {
        return 0.0;
    }
    let nu_e = nu(e, beam_energy);
    (p.pz * (beam_energy - e.pz) - p.px * e.px - p.py * e.py)
        / ((nu_e * nu_e + q2(e, beam_energy)).sqrt() * momentum(p))
}

/// Squared transverse momentum of the hadron w.r.t. the virtual photon
/// (GeV^2).
pub fn pt2(p: &Particle, e: &Particle, beam_energy: f64) -> f64 {
    if !(p.is_hadron && e.is_trigger_electron) {
        return 0.0;
    }
    momentum(p).powi(2) * (1.0 - cos_theta_pq(p, e, beam_energy).powi(2))
}

/// Squared longitudinal momentum of the hadron w.r.t. the virtual photon
/// (GeV^2).
pub fn pl2(p: &Particle, e: &Particle, beam_energy: f64) -> f64 {
    if !(p.is_hadron && e.is_trigger_electron) {
        return 0.0;
    }
    momentum(p).powi(2) * cos_theta_pq(p, e, beam_energy).powi(2)
}

/// Fraction of the energy transfer carried by the hadron.
pub fn zh(p: &Particle, e: &Particle, beam_energy: f64) -> f64 {
    if !(p.is_hadron && e.is_trigger_electron) {
        return 0.0;
    }
    (p.mass * p.mass + momentum(p).powi(2)).sqrt() / nu(e, beam_energy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const BEAM: f64 = 10.6;

    fn trigger_electron() -> Particle {
        let theta: f64 = 0.3;
        let mut e = Particle::new(
            -1,
            0.999,
            1,
            0.0,
            0.0,
            0.0,
            5.0 * theta.sin(),
            0.0,
            5.0 * theta.cos(),
        );
        e.pid = 11;
        e.is_trigger_electron = true;
        e
    }

    fn pion_along(px: f64, py: f64, pz: f64) -> Particle {
        let mut p = Particle::new(1, 0.99, 1, 0.0, 0.0, 0.0, px, py, pz);
        p.pid = 211;
        p.is_hadron = true;
        p.mass = 0.139570;
        p
    }

    /// A hadron emitted exactly along the virtual photon.
    fn collinear_pion(e: &Particle, scale: f64) -> Particle {
        pion_along(-e.px * scale, -e.py * scale, (BEAM - e.pz) * scale)
    }

    #[test]
    fn collinear_hadron_has_no_transverse_momentum() {
        let e = trigger_electron();
        let p = collinear_pion(&e, 0.3);
        assert_relative_eq!(theta_pq(&p, &e, BEAM), 0.0, epsilon = 1e-6);
        assert_relative_eq!(cos_theta_pq(&p, &e, BEAM), 1.0, epsilon = 1e-9);
        assert_relative_eq!(pt2(&p, &e, BEAM), 0.0, epsilon = 1e-9);
        assert_relative_eq!(
            pl2(&p, &e, BEAM),
            p.momentum().powi(2),
            epsilon = 1e-9
        );
    }

    #[test]
    fn pt2_and_pl2_split_total_momentum() {
        let e = trigger_electron();
        let p = pion_along(0.4, 0.3, 1.5);
        let total = pt2(&p, &e, BEAM) + pl2(&p, &e, BEAM);
        assert_relative_eq!(total, p.momentum().powi(2), epsilon = 1e-9);
    }

    #[test]
    fn theta_pq_matches_cosine() {
        let e = trigger_electron();
        let p = pion_along(0.4, 0.3, 1.5);
        assert_relative_eq!(
            theta_pq(&p, &e, BEAM).cos(),
            cos_theta_pq(&p, &e, BEAM),
            epsilon = 1e-9
        );
    }

    #[test]
    fn phi_pq_stays_in_range() {
        let e = trigger_electron();
        for &(px, py, pz) in
            &[(0.4, 0.3, 1.5), (-0.2, 0.7, 2.0), (0.1, -0.6, 1.1), (-0.5, -0.4, 0.9)]
        {
            let p = pion_along(px, py, pz);
            let phi = phi_pq(&p, &e, BEAM);
            assert!((-std::f64::consts::PI..=std::f64::consts::PI).contains(&phi));
        }
    }

    #[test]
    fn zh_of_collinear_pion() {
        let e = trigger_electron();
        let p = collinear_pion(&e, 0.3);
        let expected =
            (p.mass * p.mass + p.momentum().powi(2)).sqrt() / (BEAM - e.momentum());
        assert_relative_eq!(zh(&p, &e, BEAM), expected, epsilon = 1e-12);
    }

    #[test]
    fn unset_flags_yield_sentinel_zeros() {
        let e = trigger_electron();
        let mut p = pion_along(0.4, 0.3, 1.5);
        p.is_hadron = false;
        assert_eq!(zh(&p, &e, BEAM), 0.0);
        assert_eq!(pt2(&p, &e, BEAM), 0.0);
        assert_eq!(phi_pq(&p, &e, BEAM), 0.0);

        let p = pion_along(0.4, 0.3, 1.5);
        let mut e2 = e;
        e2.is_trigger_electron = false;
        assert_eq!(theta_pq(&p, &e2, BEAM), 0.0);
        assert_eq!(pl2(&p, &e2, BEAM), 0.0);
    }
}

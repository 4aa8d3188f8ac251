//! Small vector helpers shared by the kinematics functions.

use sk_core::{Error, Result};

/// Convert an angle in degrees to radians.
///
/// Fails if the input is outside the [-180, 180] convention used for all
/// azimuthal angles in the analysis.
pub fn to_radians(deg: f64) -> Result<f64> {
    if !(-180.0..=180.0).contains(&deg) {
        return Err(Error::AngleOutOfRange(deg));
    }
    Ok(deg * (std::f64::consts::PI / 180.0))
}

/// Magnitude of a 3-vector.
pub fn magnitude(x: f64, y: f64, z: f64) -> f64 {
    (x * x + y * y + z * z).sqrt()
}

/// Angle between two 3-vectors.
pub fn angle(x1: f64, y1: f64, z1: f64, x2: f64, y2: f64, z2: f64) -> f64 {
    ((x1 * x2 + y1 * y2 + z1 * z2) / (magnitude(x1, y1, z1) * magnitude(x2, y2, z2)))
        .clamp(-1.0, 1.0)
        .acos()
}

/// Rotate the (x, z) components of a vector about the y axis by `th`.
pub fn rotate_y(x: &mut f64, z: &mut f64, th: f64) {
    let (x0, z0) = (*x, *z);
    *x = x0 * th.cos() + z0 * th.sin();
    *z = -x0 * th.sin() + z0 * th.cos();
}

/// Rotate the (x, y) components of a vector about the z axis by `th`.
pub fn rotate_z(x: &mut f64, y: &mut f64, th: f64) {
    let (x0, y0) = (*x, *y);
    *x = x0 * th.cos() - y0 * th.sin();
    *y = x0 * th.sin() + y0 * th.cos();
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn degrees_to_radians() {
        assert_relative_eq!(to_radians(180.0).unwrap(), PI);
        assert_relative_eq!(to_radians(-90.0).unwrap(), -FRAC_PI_2);
        assert_relative_eq!(to_radians(0.0).unwrap(), 0.0);
    }

    #[test]
    fn out_of_convention_angles_fail() {
        assert!(to_radians(180.001).is_err());
        assert!(to_radians(-181.0).is_err());
        assert!(to_radians(360.0).is_err());
    }

    #[test]
    fn angle_between_orthogonal_vectors() {
        assert_relative_eq!(angle(1.0, 0.0, 0.0, 0.0, 1.0, 0.0), FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(angle(0.0, 0.0, 2.0, 0.0, 0.0, 5.0), 0.0, epsilon = 1e-7);
    }

    #[test]
    fn rotations_preserve_magnitude() {
        let (mut x, mut y, mut z) = (1.0, 2.0, 3.0);
        rotate_z(&mut x, &mut y, 0.7);
        rotate_y(&mut x, &mut z, -1.2);
        assert_relative_eq!(magnitude(x, y, z), magnitude(1.0, 2.0, 3.0), epsilon = 1e-12);
    }

    #[test]
    fn rotate_z_quarter_turn() {
        let (mut x, mut y) = (1.0, 0.0);
        rotate_z(&mut x, &mut y, FRAC_PI_2);
        assert_relative_eq!(x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(y, 1.0, epsilon = 1e-12);
    }
}

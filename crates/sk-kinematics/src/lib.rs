//! # sk-kinematics
//!
//! Pure kinematics for sidiskit: lab-frame angles, DIS variables computed
//! from the trigger electron, and SIDIS variables computed from a produced
//! hadron in the virtual-photon frame.
//!
//! All SIDIS quantities are exactly `0.0` when the hadron / trigger-electron
//! flags they require are not set. Downstream accumulation relies on that
//! sentinel to recognize not-applicable values.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dis;
pub mod math;
pub mod sidis;

pub use dis::{momentum, nu, phi_lab, q2, theta_lab, w, w2, xb};
pub use sidis::{cos_theta_pq, phi_pq, pl2, pt2, theta_pq, zh};

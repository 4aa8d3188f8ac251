//! # sk-core
//!
//! Shared foundations for sidiskit: the error type used across all library
//! crates, the analysis cut constants, and the five kinematic axes of the
//! acceptance grid.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod constants;
pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::Axis;

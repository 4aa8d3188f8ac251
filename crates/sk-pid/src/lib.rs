//! # sk-pid
//!
//! Particle identification for sidiskit.
//!
//! Provides the PID constants table (LUND convention), the resolved
//! [`Particle`] record, the per-sector sampling-fraction model used as an
//! electron discriminant, and the resolution state machine that assigns a
//! best-fit PID to each reconstructed track.
//!
//! ## Example
//!
//! ```
//! use sk_pid::{Particle, PidEvidence, PidTable, resolve_pid};
//!
//! let table = PidTable::new();
//! let mut p = Particle::new(0, 0.5, 1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.1);
//! let evidence = PidEvidence { recon_pid: 0, status: 0, ..Default::default() };
//! let sf = [[0.0; 2]; 4];
//! resolve_pid(&table, &mut p, &evidence, &sf).unwrap();
//! assert_eq!(p.pid, 2112); // slow neutral: neutron
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod particle;
pub mod resolver;
pub mod sampling_fraction;
pub mod table;

pub use particle::Particle;
pub use resolver::{resolve_pid, PidEvidence};
pub use sampling_fraction::SamplingFraction;
pub use table::{PidInfo, PidTable, PROTON_MASS};

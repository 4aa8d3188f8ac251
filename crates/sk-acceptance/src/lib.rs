//! # sk-acceptance
//!
//! The 5-dimensional acceptance-correction engine of sidiskit.
//!
//! Counts thrown and simulated Monte Carlo events on a 5D kinematic grid
//! (Q2, nu, z_h, P_T^2, phi_PQ), serializes the counts to a deterministic
//! text format, and serves per-bin correction factors to downstream
//! histogram consumers.
//!
//! ## Example
//!
//! ```
//! use sk_acceptance::{Accumulator, BinGrid, EventRecord};
//!
//! let grid = BinGrid::new(
//!     vec![1.0, 2.0, 4.0],
//!     vec![2.0, 4.0, 6.5],
//!     vec![0.0, 0.5, 1.0],
//!     vec![0.0, 1.0],
//!     vec![-180.0, 0.0, 180.0],
//! )
//! .unwrap();
//!
//! let mut acc = Accumulator::new(grid);
//! acc.count_thrown([EventRecord {
//!     pid: 211,
//!     q2: 1.5,
//!     nu: 3.0,
//!     zh: 0.25,
//!     pt2: 0.5,
//!     phi_pq: 1.0,
//!     w: 2.5,
//!     w2: 0.0,
//! }]);
//! let table = acc.finish();
//! assert_eq!(table.pids(), &[211]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod accumulator;
pub mod correction;
pub mod file;
pub mod grid;

pub use accumulator::{Accumulator, EventRecord, PassStats, SampleKind};
pub use correction::CorrectionTable;
pub use file::{read_correction_file, write_correction_file};
pub use grid::BinGrid;

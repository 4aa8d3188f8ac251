//! Error types for sidiskit

use std::path::PathBuf;

use thiserror::Error;

/// sidiskit error type
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid binning specification (too few edges, non-increasing edges, ...)
    #[error("invalid binning: {0}")]
    Binning(String),

    /// Angle outside the [-180, 180] degree convention
    #[error("angle {0} deg outside [-180, 180]")]
    AngleOutOfRange(f64),

    /// PID missing from the particle-constants table
    #[error("PID {0} not found in particle table")]
    PidNotFound(i32),

    /// Hypothesis code the matcher does not know how to test
    #[error("unsupported PID hypothesis {0}")]
    UnsupportedHypothesis(i32),

    /// PID missing from a loaded correction table
    #[error("PID {0} not present in correction table")]
    PidNotInTable(i32),

    /// Refusing to overwrite an existing output file
    #[error("output file already exists: {0}")]
    OutputExists(PathBuf),

    /// Input file does not exist or is not readable
    #[error("input file not found: {0}")]
    MissingFile(PathBuf),

    /// Structurally invalid correction or parameter file
    #[error("malformed file: {0}")]
    Malformed(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

//! Analysis cuts and detector dimensions.

/// Number of CLAS12 forward-detector sectors.
pub const NSECTORS: usize = 6;

/// Number of parameters in the sampling-fraction mean/sigma models.
pub const SF_NPARAMS: usize = 4;

/// Q2 of an event must be at or above this value (GeV^2).
pub const Q2_CUT: f64 = 1.0;

/// W of a thrown event must be at or above this value (GeV).
pub const W_CUT: f64 = 2.0;

/// W2 of a reconstructed event must be at or above this value (GeV^2).
pub const W2_CUT: f64 = 4.0;

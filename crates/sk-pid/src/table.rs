//! PID constants table (LUND convention) with cached charge partitions.

use std::collections::BTreeMap;

use sk_core::{Error, Result};

/// Proton mass in GeV, as carried by the PID table entry for 2212.
pub const PROTON_MASS: f64 = 0.938272;

/// Constants associated with one PID.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PidInfo {
    /// Charge in units of e.
    pub charge: i32,
    /// Mass in GeV. Unidentified codes carry `f64::MAX`.
    pub mass: f64,
    /// Human-readable particle name.
    pub name: &'static str,
}

/// Ordered mapping PID -> {charge, mass, name}, plus hypothesis lists
/// partitioned by charge sign, built once at construction.
///
/// Iteration order (ascending PID) is the tie-break when several hypotheses
/// would accept the same track.
#[derive(Debug, Clone)]
pub struct PidTable {
    map: BTreeMap<i32, PidInfo>,
    negative: Vec<i32>,
    neutral: Vec<i32>,
    positive: Vec<i32>,
}

impl PidTable {
    /// Build the table of known PIDs.
    pub fn new() -> Self {
        let mut map = BTreeMap::new();
        map.insert(-2212, PidInfo { charge: -1, mass: 0.938272, name: "antiproton" });
        map.insert(-321, PidInfo { charge: -1, mass: 0.493677, name: "negative kaon" });
        map.insert(-211, PidInfo { charge: -1, mass: 0.139570, name: "negative pion" });
        map.insert(-13, PidInfo { charge: 1, mass: 0.105658, name: "positive muon" });
        map.insert(-11, PidInfo { charge: 1, mass: 0.000051, name: "positron" });
        map.insert(0, PidInfo { charge: 0, mass: f64::MAX, name: "unidentified particle" });
        map.insert(11, PidInfo { charge: -1, mass: 0.000051, name: "electron" });
        map.insert(13, PidInfo { charge: -1, mass: 0.105658, name: "negative muon" });
        map.insert(22, PidInfo { charge: 0, mass: 0.0, name: "photon" });
        map.insert(45, PidInfo { charge: 0, mass: f64::MAX, name: "unidentified particle" });
        map.insert(211, PidInfo { charge: 1, mass: 0.139570, name: "positive pion" });
        map.insert(321, PidInfo { charge: 1, mass: 0.493677, name: "positive kaon" });
        map.insert(2112, PidInfo { charge: 0, mass: 0.939565, name: "neutron" });
        map.insert(2212, PidInfo { charge: 1, mass: PROTON_MASS, name: "proton" });

        let partition = |sign: i32| -> Vec<i32> {
            map.iter()
                .filter(|(_, info)| {
                    (sign == 0 && info.charge == 0) || sign * info.charge > 0
                })
                .map(|(pid, _)| *pid)
                .collect()
        };

        let negative = partition(-1);
        let neutral = partition(0);
        let positive = partition(1);

        Self { map, negative, neutral, positive }
    }

    /// Look up the full entry for a PID.
    pub fn get(&self, pid: i32) -> Result<&PidInfo> {
        self.map.get(&pid).ok_or(Error::PidNotFound(pid))
    }

    /// Charge of the particle associated with `pid`, in units of e.
    pub fn charge(&self, pid: i32) -> Result<i32> {
        Ok(self.get(pid)?.charge)
    }

    /// Mass of the particle associated with `pid`, in GeV.
    pub fn mass(&self, pid: i32) -> Result<f64> {
        Ok(self.get(pid)?.mass)
    }

    /// Name of the particle associated with `pid`.
    pub fn name(&self, pid: i32) -> Result<&'static str> {
        Ok(self.get(pid)?.name)
    }

    /// Hypothesis list for a charge sign, in ascending PID order.
    pub fn hypotheses(&self, charge: i32) -> &[i32] {
        match charge.signum() {
            -1 => &self.negative,
            0 => &self.neutral,
            _ => &self.positive,
        }
    }

    /// Iterate all known PIDs with their entries, in ascending PID order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &PidInfo)> {
        self.map.iter().map(|(pid, info)| (*pid, info))
    }
}

impl Default for PidTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_pids() {
        let t = PidTable::new();
        assert_eq!(t.charge(11).unwrap(), -1);
        assert_eq!(t.charge(-11).unwrap(), 1);
        assert!((t.mass(2212).unwrap() - 0.938272).abs() < 1e-9);
        assert_eq!(t.name(211).unwrap(), "positive pion");
    }

    #[test]
    fn lookup_unknown_pid_is_an_error() {
        let t = PidTable::new();
        assert!(matches!(t.mass(12345), Err(Error::PidNotFound(12345))));
    }

    #[test]
    fn charge_partitions_are_ordered_and_disjoint() {
        let t = PidTable::new();
        assert_eq!(t.hypotheses(-1), &[-2212, -321, -211, 11, 13]);
        assert_eq!(t.hypotheses(1), &[-13, -11, 211, 321, 2212]);
        assert_eq!(t.hypotheses(0), &[0, 22, 45, 2112]);
    }
}

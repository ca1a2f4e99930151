use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::PhysicsObject;
use crate::types::FourVector;

/// CSVv2 b-tagging working points.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BTagWorkingPoint {
    Loose,
    Medium,
    Tight,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown b-tagging working point '{0}' (expected one of L, M, T)")]
pub struct UnknownWorkingPoint(pub String);

impl BTagWorkingPoint {
    pub const ALL: [BTagWorkingPoint; 3] = [Self::Loose, Self::Medium, Self::Tight];

    /// Minimum CSVv2 discriminant for a jet to be tagged.
    pub fn threshold(self) -> f64 {
        match self {
            BTagWorkingPoint::Loose => 0.5426,
            BTagWorkingPoint::Medium => 0.8484,
            BTagWorkingPoint::Tight => 0.9535,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BTagWorkingPoint::Loose => "L",
            BTagWorkingPoint::Medium => "M",
            BTagWorkingPoint::Tight => "T",
        }
    }
}

impl FromStr for BTagWorkingPoint {
    type Err = UnknownWorkingPoint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L" => Ok(BTagWorkingPoint::Loose),
            "M" => Ok(BTagWorkingPoint::Medium),
            "T" => Ok(BTagWorkingPoint::Tight),
            other => Err(UnknownWorkingPoint(other.to_string())),
        }
    }
}

impl fmt::Display for BTagWorkingPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Per-working-point b-tag decisions of one jet.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BTagFlags {
    pub loose: bool,
    pub medium: bool,
    pub tight: bool,
}

impl BTagFlags {
    pub fn from_discriminant(bdisc: f64) -> Self {
        Self {
            loose: bdisc > BTagWorkingPoint::Loose.threshold(),
            medium: bdisc > BTagWorkingPoint::Medium.threshold(),
            tight: bdisc > BTagWorkingPoint::Tight.threshold(),
        }
    }

    pub fn passes(&self, wp: BTagWorkingPoint) -> bool {
        match wp {
            BTagWorkingPoint::Loose => self.loose,
            BTagWorkingPoint::Medium => self.medium,
            BTagWorkingPoint::Tight => self.tight,
        }
    }
}

/// Auxiliary values needed to redo jet energy corrections and resolution smearing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JetCorrections {
    pub area: f64,
    pub uncorr_pt: f64,
    pub uncorr_e: f64,
    pub jer_sf: f64,
    pub jer_sf_up: f64,
    pub jer_sf_down: f64,
}

/// A small-R jet. Large-R jets embed one of these for their shared fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Jet {
    pub p4: FourVector,
    pub is_good: bool,
    /// CSVv2 discriminant
    pub bdisc: f64,
    pub deep_csv: f64,
    pub btag: BTagFlags,
    pub charge: f64,
    /// Position in the jet collection
    pub index: usize,
    /// Jet radius, used for ΔR truth matching
    pub radius: f64,
    pub corrections: JetCorrections,
    /// Matched to a hadronically decaying truth top
    pub is_had_top: bool,
    /// Degree of containment of the matched partons
    pub containment: i32,
}

impl Jet {
    pub fn new(p4: FourVector, bdisc: f64) -> Self {
        Self {
            p4,
            is_good: true,
            bdisc,
            deep_csv: 0.0,
            btag: BTagFlags::from_discriminant(bdisc),
            charge: 0.0,
            index: 0,
            radius: 0.4,
            corrections: JetCorrections::default(),
            is_had_top: false,
            containment: 0,
        }
    }

    pub fn is_btagged(&self, wp: BTagWorkingPoint) -> bool {
        self.btag.passes(wp)
    }
}

impl PhysicsObject for Jet {
    fn p4(&self) -> &FourVector {
        &self.p4
    }

    fn is_good(&self) -> bool {
        self.is_good
    }
}

use serde::{Deserialize, Serialize};

use super::PhysicsObject;
use crate::types::FourVector;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Flavor {
    Electron,
    Muon,
}

/// Identification working points, with and without the isolation requirement.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeptonId {
    pub loose: bool,
    pub medium: bool,
    pub tight: bool,
    pub loose_no_iso: bool,
    pub medium_no_iso: bool,
    pub tight_no_iso: bool,
}

/// A reconstructed electron or muon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lepton {
    pub p4: FourVector,
    pub is_good: bool,
    /// Electric charge in units of e (±1)
    pub charge: i32,
    pub flavor: Flavor,
    pub id: LeptonId,
    pub iso: f64,
    /// Distance to the closest small-R jet
    pub drmin: f64,
    /// Relative pT to the closest small-R jet
    pub ptrel: f64,
    /// Position in the combined lepton collection
    pub index: usize,
}

impl Lepton {
    pub fn new(flavor: Flavor, p4: FourVector, charge: i32) -> Self {
        Self {
            p4,
            is_good: true,
            charge,
            flavor,
            id: LeptonId::default(),
            iso: 0.0,
            drmin: 0.0,
            ptrel: 0.0,
            index: 0,
        }
    }

    pub fn electron(p4: FourVector, charge: i32) -> Self {
        Self::new(Flavor::Electron, p4, charge)
    }

    pub fn muon(p4: FourVector, charge: i32) -> Self {
        Self::new(Flavor::Muon, p4, charge)
    }

    pub fn is_electron(&self) -> bool {
        self.flavor == Flavor::Electron
    }

    pub fn is_muon(&self) -> bool {
        self.flavor == Flavor::Muon
    }
}

impl PhysicsObject for Lepton {
    fn p4(&self) -> &FourVector {
        &self.p4
    }

    fn is_good(&self) -> bool {
        self.is_good
    }
}

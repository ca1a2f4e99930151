use serde::{Deserialize, Serialize};

use super::PhysicsObject;
use crate::types::FourVector;

/// Reconstructed or inferred neutrino momentum.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Neutrino {
    pub p4: FourVector,
    pub is_good: bool,
}

impl Neutrino {
    pub fn new(p4: FourVector) -> Self {
        Self { p4, is_good: true }
    }
}

impl PhysicsObject for Neutrino {
    fn p4(&self) -> &FourVector {
        &self.p4
    }

    fn is_good(&self) -> bool {
        self.is_good
    }
}

/// Missing transverse momentum.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Met {
    pub p4: FourVector,
    pub is_good: bool,
    /// Transverse mass of the leptonic W
    pub mtw: f64,
}

impl Met {
    pub fn new(pt: f64, phi: f64) -> Self {
        Self {
            p4: FourVector::from_pt_eta_phi_e(pt, 0.0, phi, pt),
            is_good: true,
            mtw: 0.0,
        }
    }
}

impl PhysicsObject for Met {
    fn p4(&self) -> &FourVector {
        &self.p4
    }

    fn is_good(&self) -> bool {
        self.is_good
    }
}

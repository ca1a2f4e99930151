use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Jet, PhysicsObject};
use crate::types::FourVector;

/// Multi-class jet-origin scores from the BEST classifier.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BestScores {
    pub t: f64,
    pub w: f64,
    pub z: f64,
    pub h: f64,
    pub j: f64,
    /// Index of the winning class
    pub class: f64,
}

/// One of the two leading soft-drop subjets of a large-R jet.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Subjet {
    pub charge: f64,
    pub bdisc: f64,
    pub mass: f64,
    pub pt: f64,
    pub tau1: f64,
    pub tau2: f64,
    pub tau3: f64,
}

/// A large-radius jet with substructure information.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LargeRJet {
    pub jet: Jet,
    pub tau1: f64,
    pub tau2: f64,
    pub tau3: f64,
    pub tau21: f64,
    pub tau32: f64,
    pub soft_drop_mass: f64,
    pub best: BestScores,
    pub subjets: [Subjet; 2],
    /// Values staged for export, keyed by feature name
    pub features: BTreeMap<String, f64>,
}

impl LargeRJet {
    pub fn new(p4: FourVector, best: BestScores) -> Self {
        let mut jet = Jet::new(p4, 0.0);
        jet.radius = 0.8;
        Self {
            jet,
            tau1: 0.0,
            tau2: 0.0,
            tau3: 0.0,
            tau21: 0.0,
            tau32: 0.0,
            soft_drop_mass: 0.0,
            best,
            subjets: [Subjet::default(); 2],
            features: BTreeMap::new(),
        }
    }

    /// Set the N-subjettiness values and the derived ratios.
    pub fn with_nsubjettiness(mut self, tau1: f64, tau2: f64, tau3: f64) -> Self {
        self.tau1 = tau1;
        self.tau2 = tau2;
        self.tau3 = tau3;
        self.tau21 = if tau1 > 0.0 { tau2 / tau1 } else { 0.0 };
        self.tau32 = if tau2 > 0.0 { tau3 / tau2 } else { 0.0 };
        self
    }

    pub fn index(&self) -> usize {
        self.jet.index
    }
}

impl PhysicsObject for LargeRJet {
    fn p4(&self) -> &FourVector {
        &self.jet.p4
    }

    fn is_good(&self) -> bool {
        self.jet.is_good
    }
}

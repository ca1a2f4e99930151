use super::{Jet, LargeRJet, Lepton, Neutrino};
use crate::types::FourVector;

/// Single-lepton ttbar candidate.
///
/// Each leg is `None` when no candidate was found for it. The composite
/// has no validity of its own; check the leg before using its kinematics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ttbar1L {
    /// Hadronic top candidate
    pub ljet: Option<LargeRJet>,
    pub lepton: Option<Lepton>,
    pub neutrino: Neutrino,
    /// b-jet candidate of the leptonic top
    pub jet: Option<Jet>,
    /// jet + lepton + neutrino, missing legs counted as zero
    pub leptop: FourVector,
    /// Rapidity asymmetry `q_l * (|y(leptop)| - |y(hadtop)|)`
    pub dy: f64,
}

impl Ttbar1L {
    pub fn has_leptonic_jet(&self) -> bool {
        self.jet.is_some()
    }

    pub fn has_hadronic_top(&self) -> bool {
        self.ljet.is_some()
    }
}

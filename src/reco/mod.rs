//! Single-lepton ttbar reconstruction.
//!
//! Assigns one lepton, one small-R jet and the first neutrino to the
//! leptonic top and one large-R jet to the hadronic top:
//! - lepton: first in the collection
//! - leptonic-top jet: highest-pT jet with ΔR(jet, lepton) < π/2 that passes
//!   the 2D isolation cut (ΔR ≥ 0.4, or pT-rel > 25 GeV when closer)
//! - hadronic top: highest BEST_t large-R jet with ΔR(ljet, lepton) > π/2

use std::f64::consts::FRAC_PI_2;

use thiserror::Error;

use crate::objects::{Jet, LargeRJet, Lepton, Neutrino, PhysicsObject, Ttbar1L};
use crate::types::FourVector;

/// Inside this distance a jet must also pass the pT-rel requirement.
pub const TWO_D_CUT_DR: f64 = 0.4;
pub const TWO_D_CUT_PTREL: f64 = 25.0;
/// Floor for the BEST_t search; real scores lie in [0, 1].
const BEST_T_FLOOR: f64 = -999.0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecoError {
    #[error("Invalid input: neutrino collection is empty")]
    MissingNeutrino,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TtbarReconstructor;

impl TtbarReconstructor {
    pub fn new() -> Self {
        Self
    }

    /// Build the ttbar candidate for one event. Pure function of its inputs.
    pub fn execute(
        &self,
        leptons: &[Lepton],
        neutrinos: &[Neutrino],
        jets: &[Jet],
        ljets: &[LargeRJet],
    ) -> Result<Ttbar1L, RecoError> {
        log::debug!("TTBARRECO : building ttbar with {} leptons", leptons.len());

        let neutrino = neutrinos.first().ok_or(RecoError::MissingNeutrino)?.clone();
        let lepton = leptons.first().cloned();

        // Jet matching is only meaningful relative to a lepton.
        let (jet, ljet) = match &lepton {
            Some(lep) => {
                log::debug!(
                    "TTBARRECO : {} ak4 candidates, {} ak8 candidates",
                    jets.len(),
                    ljets.len()
                );
                (
                    leptonic_jet_candidate(lep, jets).cloned(),
                    hadronic_top_candidate(lep, ljets).cloned(),
                )
            }
            None => (None, None),
        };

        let lep_p4 = lepton.as_ref().map_or(FourVector::ZERO, |l| l.p4);
        let jet_p4 = jet.as_ref().map_or(FourVector::ZERO, |j| j.p4);
        let leptop = neutrino.p4 + lep_p4 + jet_p4;

        let charge = lepton.as_ref().map_or(0, |l| l.charge);
        let hadtop_y = ljet.as_ref().map_or(0.0, |l| l.p4().rapidity());
        let dy = f64::from(charge) * (leptop.rapidity().abs() - hadtop_y.abs());

        log::debug!(
            "TTBARRECO : built ttbar (leptonic jet: {}, hadronic top: {})",
            jet.is_some(),
            ljet.is_some()
        );

        Ok(Ttbar1L {
            ljet,
            lepton,
            neutrino,
            jet,
            leptop,
            dy,
        })
    }
}

/// Highest-pT jet close to the lepton that passes the 2D isolation cut.
/// Equal pT keeps the earlier jet.
pub fn leptonic_jet_candidate<'a>(lepton: &Lepton, jets: &'a [Jet]) -> Option<&'a Jet> {
    let mut best: Option<&Jet> = None;
    let mut best_pt = 0.0;

    for jet in jets {
        let dr = jet.delta_r(lepton);
        if dr >= FRAC_PI_2 {
            continue;
        }

        let pt = jet.pt();
        let passes_2d = if dr < TWO_D_CUT_DR {
            lepton.p4.pt_rel(&jet.p4) > TWO_D_CUT_PTREL
        } else {
            true
        };

        if passes_2d && pt > best_pt {
            best_pt = pt;
            best = Some(jet);
        }
    }

    best
}

/// Most top-like large-R jet in the hemisphere opposite the lepton.
/// Equal scores keep the earlier jet.
pub fn hadronic_top_candidate<'a>(lepton: &Lepton, ljets: &'a [LargeRJet]) -> Option<&'a LargeRJet> {
    let mut best: Option<&LargeRJet> = None;
    let mut best_t = BEST_T_FLOOR;

    for ljet in ljets {
        if ljet.delta_r(lepton) > FRAC_PI_2 && ljet.best.t > best_t {
            best_t = ljet.best.t;
            best = Some(ljet);
        }
    }

    best
}

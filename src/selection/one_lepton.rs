//! Single-lepton (e+jets / mu+jets) selection, following the boosted
//! lepton+jets event topology: one lepton, a small-R jet near it and a
//! large-R jet in the opposite hemisphere.

use super::cutflow::CutflowCursor;
use super::kind::TriggerMenu;
use super::EventObjects;
use crate::objects::PhysicsObject;

pub const EJETS_MIN_MET: f64 = 50.0;
pub const MUJETS_MIN_MET: f64 = 35.0;
const TRIANGLE_CENTER: f64 = 1.5;
const TRIANGLE_HEIGHT: f64 = 1.5;
const TRIANGLE_MET_SCALE: f64 = 110.0;

const ONE_LEPTON_STEPS: [&str; 6] = [
    "one lepton",
    "trigger",
    "ljets >= 1",
    "jets >= 2",
    "leptonic-top jet",
    "hadronic-top ljet",
];
const EJETS_STEPS: [&str; 3] = ["MET > 50", "dPhi(lepton,MET)", "dPhi(jet,MET)"];
const MUJETS_STEPS: [&str; 1] = ["MET > 35"];

/// Which lepton flavor the event must contain.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LeptonChannel {
    Electron,
    Muon,
    /// Exactly one lepton of either flavor; triggers follow its flavor,
    /// the MET tail is always the muon one
    Any,
}

/// Cut names for a channel.
pub fn steps(channel: LeptonChannel) -> Vec<&'static str> {
    let tail: &[&str] = match channel {
        LeptonChannel::Electron => &EJETS_STEPS,
        LeptonChannel::Muon | LeptonChannel::Any => &MUJETS_STEPS,
    };
    ONE_LEPTON_STEPS.iter().chain(tail).copied().collect()
}

/// Shared one-lepton chain plus the flavor-specific MET tail.
pub fn lepton_plus_jets(
    objects: &EventObjects,
    channel: LeptonChannel,
    triggers: &TriggerMenu,
    cutflow: &mut CutflowCursor<'_>,
) -> bool {
    if !one_lepton_selection(objects, channel, triggers, cutflow) {
        return false;
    }

    // only the electron channel carries the MET-triangle tail
    match channel {
        LeptonChannel::Electron => ejets_tail(objects, cutflow),
        LeptonChannel::Muon | LeptonChannel::Any => mujets_tail(objects, cutflow),
    }
}

/// Each failed step ends the chain; each passed step fills one bin.
pub fn one_lepton_selection(
    objects: &EventObjects,
    channel: LeptonChannel,
    triggers: &TriggerMenu,
    cutflow: &mut CutflowCursor<'_>,
) -> bool {
    let event = &objects.event;

    let one_lepton = match channel {
        LeptonChannel::Electron => objects.n_electrons == 1 && objects.n_muons == 0,
        LeptonChannel::Muon => objects.n_muons == 1 && objects.n_electrons == 0,
        LeptonChannel::Any => event.leptons.len() == 1,
    };
    if !one_lepton {
        return false;
    }
    cutflow.fill();

    let menu = if event.leptons[0].is_electron() {
        &triggers.ejets
    } else {
        &triggers.mujets
    };
    if !menu.iter().any(|name| event.trigger_fired(name)) {
        return false;
    }
    cutflow.fill();

    // boosted final state
    if event.ljets.is_empty() {
        return false;
    }
    cutflow.fill();

    // one AK4 near the lepton and one inside the AK8
    if event.jets.len() < 2 {
        return false;
    }
    cutflow.fill();

    if !objects.ttbar.has_leptonic_jet() {
        return false;
    }
    cutflow.fill();

    if !objects.ttbar.has_hadronic_top() {
        return false;
    }
    cutflow.fill();

    true
}

fn ejets_tail(objects: &EventObjects, cutflow: &mut CutflowCursor<'_>) -> bool {
    let event = &objects.event;
    let met_pt = event.met.pt();

    if met_pt <= EJETS_MIN_MET {
        return false;
    }
    cutflow.fill();

    let bound = met_triangle(met_pt);
    let lepton = &event.leptons[0];
    if (lepton.delta_phi(&event.met) - TRIANGLE_CENTER).abs() > bound {
        return false;
    }
    cutflow.fill();

    let leading_jet = &event.jets[0];
    if (leading_jet.delta_phi(&event.met) - TRIANGLE_CENTER).abs() > bound {
        return false;
    }
    cutflow.fill();

    true
}

fn mujets_tail(objects: &EventObjects, cutflow: &mut CutflowCursor<'_>) -> bool {
    if objects.event.met.pt() <= MUJETS_MIN_MET {
        return false;
    }
    cutflow.fill();

    true
}

/// Allowed |ΔΦ − 1.5| for a given MET in GeV.
pub fn met_triangle(met_pt: f64) -> f64 {
    TRIANGLE_HEIGHT * met_pt / TRIANGLE_MET_SCALE
}

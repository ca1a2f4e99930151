#![allow(dead_code)]

use std::collections::BTreeMap;

use ljets_core::cuts::CutSpec;
use ljets_core::event::EventView;
use ljets_core::objects::{BTagWorkingPoint, BestScores, Jet, LargeRJet, Lepton, Met, Neutrino, Subjet};
use ljets_core::reco::TtbarReconstructor;
use ljets_core::selection::{SelectionEngine, TriggerMenu};
use ljets_core::types::FourVector;

pub const EJETS_TRIGGER: &str = "HLT_Ele115_CaloIdVT_GsfTrkIdT";
pub const MUJETS_TRIGGER: &str = "HLT_Mu50";

pub fn p4(pt: f64, eta: f64, phi: f64, m: f64) -> FourVector {
    FourVector::from_pt_eta_phi_m(pt, eta, phi, m)
}

pub fn electron(pt: f64, eta: f64, phi: f64, charge: i32) -> Lepton {
    Lepton::electron(p4(pt, eta, phi, 0.0), charge)
}

pub fn muon(pt: f64, eta: f64, phi: f64, charge: i32) -> Lepton {
    Lepton::muon(p4(pt, eta, phi, 0.0), charge)
}

pub fn jet(index: usize, pt: f64, eta: f64, phi: f64, bdisc: f64) -> Jet {
    let mut jet = Jet::new(p4(pt, eta, phi, 5.0), bdisc);
    jet.index = index;
    jet
}

pub fn ljet(index: usize, pt: f64, eta: f64, phi: f64, best_t: f64) -> LargeRJet {
    let best = BestScores {
        t: best_t,
        w: 0.2,
        z: 0.05,
        h: 0.05,
        j: 0.1,
        class: 0.0,
    };
    let mut ljet = LargeRJet::new(p4(pt, eta, phi, 175.0), best).with_nsubjettiness(0.4, 0.2, 0.1);
    ljet.jet.index = index;
    ljet.soft_drop_mass = 172.0;
    ljet.subjets = [
        Subjet {
            charge: 0.5,
            bdisc: 0.6,
            mass: 20.0,
            pt: 250.0,
            tau1: 0.3,
            tau2: 0.2,
            tau3: 0.1,
        },
        Subjet {
            charge: -0.3,
            bdisc: 0.3,
            mass: 10.0,
            pt: 150.0,
            tau1: 0.3,
            tau2: 0.2,
            tau3: 0.1,
        },
    ];
    ljet
}

pub fn neutrino(pt: f64, phi: f64) -> Neutrino {
    Neutrino::new(p4(pt, 0.0, phi, 0.0))
}

pub fn flags(entries: &[(&str, bool)]) -> BTreeMap<String, bool> {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect()
}

pub fn menu() -> TriggerMenu {
    TriggerMenu {
        ejets: vec![
            "HLT_Ele45_CaloIdVT_GsfTrkIdT_PFJet200_PFJet50".to_string(),
            EJETS_TRIGGER.to_string(),
        ],
        mujets: vec![MUJETS_TRIGGER.to_string(), "HLT_TkMu50".to_string()],
    }
}

/// e+jets event passing every cut of the cwolaejets selection:
/// - electron pt 160 at (0, 0)
/// - b-tagged jet pt 80 at ΔR 0.2 from the electron (pT-rel ≈ 31.8)
/// - jet pt 50 at ΔR 1.0
/// - large-R jet with BEST_t 0.5 at ΔR 2.0
/// - MET 60 GeV with ΔΦ(electron, MET) = 1.5
pub fn ejets_event() -> EventView {
    EventView {
        jets: vec![jet(0, 80.0, 0.0, 0.2, 0.9), jet(1, 50.0, 0.0, 1.0, 0.1)],
        ljets: vec![ljet(0, 400.0, 0.0, 2.0, 0.5)],
        leptons: vec![electron(160.0, 0.0, 0.0, 1)],
        neutrinos: vec![neutrino(60.0, -1.5)],
        met: Met::new(60.0, -1.5),
        ht: 530.0,
        st: 750.0,
        triggers: flags(&[(EJETS_TRIGGER, true), (MUJETS_TRIGGER, false)]),
        filters: flags(&[("goodVertices", true), ("eeBadScFilter", true)]),
        weight: 1.0,
        valid: true,
    }
}

/// mu+jets counterpart of [`ejets_event`] with MET 40 GeV.
pub fn mujets_event() -> EventView {
    let mut event = ejets_event();
    event.leptons = vec![muon(160.0, 0.0, 0.0, -1)];
    event.met = Met::new(40.0, -1.5);
    event.neutrinos = vec![neutrino(40.0, -1.5)];
    event.triggers = flags(&[(EJETS_TRIGGER, false), (MUJETS_TRIGGER, true)]);
    event
}

pub fn engine(selection: &str, cuts: &str) -> SelectionEngine {
    let cuts = CutSpec::parse(cuts).unwrap();
    SelectionEngine::new(selection, cuts, menu(), BTagWorkingPoint::Medium).unwrap()
}

/// Reconstruct, hand the event to the engine and apply its selection.
pub fn apply(engine: &mut SelectionEngine, event: EventView) -> bool {
    let ttbar = TtbarReconstructor::new()
        .execute(&event.leptons, &event.neutrinos, &event.jets, &event.ljets)
        .unwrap();
    engine.set_objects(event, ttbar);
    engine.apply_selection()
}

mod common;

use common::{
    apply, ejets_event, engine, flags, jet, menu, mujets_event, muon, EJETS_TRIGGER,
    MUJETS_TRIGGER,
};
use ljets_core::cuts::CutSpec;
use ljets_core::objects::{BTagWorkingPoint, Met};
use ljets_core::selection::one_lepton::{self, met_triangle};
use ljets_core::selection::{LeptonChannel, Selection, SelectionEngine};

const EJETS_CUTS: &str = include_str!("../config/cuts_cwolaejets.txt");
const MUJETS_CUTS: &str = include_str!("../config/cuts_cwolamujets.txt");

/// Unweighted counts of a single event: 1.0 for the first `passed` bins.
fn filled(passed: usize, n_bins: usize) -> Vec<f64> {
    (0..n_bins)
        .map(|i| if i < passed { 1.0 } else { 0.0 })
        .collect()
}

#[test]
fn ejets_event_passes_every_cut() {
    let mut engine = engine("cwolaejets", EJETS_CUTS);

    assert!(apply(&mut engine, ejets_event()));
    assert_eq!(engine.cutflow().unweighted().bin_content, vec![1.0; 13]);
    assert_eq!(engine.cutflow().weighted().bin_content, vec![1.0; 13]);
    assert_eq!(engine.cutflow().unweighted().overflow, 0.0);
}

#[test]
fn wrong_flavor_stops_after_filter_bin() {
    let mut engine = engine("cwolaejets", EJETS_CUTS);

    assert!(!apply(&mut engine, mujets_event()));
    assert_eq!(engine.cutflow().unweighted().bin_content, filled(2, 13));
}

#[test]
fn extra_lepton_fails_one_lepton_requirement() {
    let mut engine = engine("cwola", EJETS_CUTS);
    let mut event = ejets_event();
    event.leptons.push(muon(40.0, 1.0, -2.0, -1));

    assert!(!apply(&mut engine, event));
    assert_eq!(engine.cutflow().unweighted().bin_content, filled(2, 13));
}

#[test]
fn trigger_absent_from_event_counts_as_not_fired() {
    let mut engine = engine("cwolaejets", EJETS_CUTS);

    let mut not_fired = ejets_event();
    not_fired.triggers = flags(&[(EJETS_TRIGGER, false)]);
    assert!(!apply(&mut engine, not_fired));

    let mut absent = ejets_event();
    absent.triggers = flags(&[(MUJETS_TRIGGER, true)]);
    assert!(!apply(&mut engine, absent));

    let unweighted = engine.cutflow().unweighted();
    assert_eq!(unweighted.get("nElectrons"), Some(2.0));
    assert_eq!(unweighted.get("trigger"), Some(0.0));
}

#[test]
fn missing_leptonic_jet_fails_leptop_cut() {
    let mut engine = engine("cwolaejets", EJETS_CUTS);
    let mut event = ejets_event();
    // both jets outside ΔR π/2 of the electron
    event.jets = vec![jet(0, 80.0, 0.0, 2.0, 0.9), jet(1, 50.0, 0.0, -2.0, 0.1)];

    assert!(!apply(&mut engine, event));
    assert_eq!(engine.cutflow().unweighted().get("nJets"), Some(1.0));
    assert_eq!(engine.cutflow().unweighted().get("leptopAK4"), Some(0.0));
}

#[test]
fn met_threshold_is_strict() {
    let mut engine = engine("cwolaejets", EJETS_CUTS);
    let mut event = ejets_event();
    event.met = Met::new(50.0, -1.5);

    assert!(!apply(&mut engine, event));
    assert_eq!(engine.cutflow().unweighted().get("hadtopAK8"), Some(1.0));
    assert_eq!(engine.cutflow().unweighted().get("MET"), Some(0.0));
}

#[test]
fn met_triangle_boundary_is_inclusive() {
    assert_eq!(met_triangle(110.0), 1.5);

    // ΔΦ(electron, MET) = 0, so |ΔΦ - 1.5| sits exactly on the bound
    let mut engine = engine("cwolaejets", EJETS_CUTS);
    let mut event = ejets_event();
    event.met = Met::new(110.0, 0.0);

    assert!(apply(&mut engine, event));
}

#[test]
fn lepton_outside_met_triangle_is_rejected() {
    let mut engine = engine("cwolaejets", EJETS_CUTS);
    let mut event = ejets_event();
    event.met = Met::new(100.0, 0.0);

    assert!(!apply(&mut engine, event));
    assert_eq!(engine.cutflow().unweighted().bin_content, filled(9, 13));
}

#[test]
fn leading_jet_outside_met_triangle_is_rejected() {
    let mut engine = engine("cwolaejets", EJETS_CUTS);
    let mut event = ejets_event();
    // leading jet sits far from the electron, the b-jet remains the leptonic-top jet
    event.jets = vec![jet(0, 120.0, 0.0, -2.0, 0.1), jet(1, 80.0, 0.0, 0.2, 0.9)];

    assert!(!apply(&mut engine, event));
    assert_eq!(engine.cutflow().unweighted().get("dPhiLepMET"), Some(1.0));
    assert_eq!(engine.cutflow().unweighted().get("dPhiJetMET"), Some(0.0));
}

#[test]
fn untagged_event_fails_btag_cut() {
    let mut engine = engine("cwolaejets", EJETS_CUTS);
    let mut event = ejets_event();
    // above loose, below medium
    event.jets[0] = jet(0, 80.0, 0.0, 0.2, 0.6);

    assert!(!apply(&mut engine, event));
    assert_eq!(engine.cutflow().unweighted().bin_content, filled(11, 13));
}

#[test]
fn btag_cut_uses_configured_working_point() {
    let cuts = CutSpec::parse(EJETS_CUTS).unwrap();
    let mut tight = SelectionEngine::new("cwolaejets", cuts, menu(), BTagWorkingPoint::Tight).unwrap();

    // the b-jet discriminant 0.9 passes medium but not tight
    assert!(!apply(&mut tight, ejets_event()));
    assert_eq!(tight.cutflow().unweighted().bin_content, filled(11, 13));

    let mut medium = engine("cwolaejets", EJETS_CUTS);
    assert!(apply(&mut medium, ejets_event()));
}

#[test]
fn best_t_threshold_is_strict() {
    let mut engine = engine("cwolaejets", EJETS_CUTS);
    let mut event = ejets_event();
    event.ljets[0].best.t = 0.1;

    assert!(!apply(&mut engine, event));
    assert_eq!(engine.cutflow().unweighted().bin_content, filled(12, 13));
}

#[test]
fn mujets_event_passes_every_cut() {
    let mut engine = engine("cwolamujets", MUJETS_CUTS);

    assert!(apply(&mut engine, mujets_event()));
    assert_eq!(engine.cutflow().unweighted().bin_content, vec![1.0; 11]);
}

#[test]
fn mujets_met_threshold_is_strict() {
    let mut engine = engine("cwolamujets", MUJETS_CUTS);
    let mut event = mujets_event();
    event.met = Met::new(35.0, -1.5);

    assert!(!apply(&mut engine, event));
    assert_eq!(engine.cutflow().unweighted().bin_content, filled(8, 11));
}

#[test]
fn flavor_agnostic_selection_uses_muon_met_tail() {
    let mut engine = engine("cwola", MUJETS_CUTS);
    assert_eq!(engine.kind().steps(), one_lepton::steps(LeptonChannel::Muon));

    let mut event = mujets_event();
    event.met = Met::new(40.0, 0.0);
    assert!(apply(&mut engine, event));

    // an electron below the ejets MET cut still passes through MET > 35
    let mut electron_event = ejets_event();
    electron_event.met = Met::new(40.0, -1.5);
    assert!(apply(&mut engine, electron_event));

    assert_eq!(engine.cutflow().unweighted().bin_content, vec![2.0; 11]);
}

#[test]
fn flavor_agnostic_selection_keeps_flavor_trigger_menu() {
    let mut engine = engine("cwola", MUJETS_CUTS);

    // an electron event with only the muon trigger fired
    let mut event = ejets_event();
    event.triggers = flags(&[(EJETS_TRIGGER, false), (MUJETS_TRIGGER, true)]);

    assert!(!apply(&mut engine, event));
    assert_eq!(engine.cutflow().unweighted().bin_content, filled(3, 11));
}

#[test]
fn flavor_agnostic_selection_rejects_low_met() {
    let mut engine = engine("cwola", MUJETS_CUTS);
    let mut event = ejets_event();
    event.met = Met::new(35.0, -1.5);

    assert!(!apply(&mut engine, event));
    assert_eq!(engine.cutflow().unweighted().bin_content, filled(8, 11));
}

#[test]
fn cutflow_never_increases_along_the_chain() {
    let mut engine = engine("cwolaejets", EJETS_CUTS);

    let mut events = vec![ejets_event(), mujets_event()];
    for (i, met) in [20.0, 55.0, 80.0, 110.0, 200.0].into_iter().enumerate() {
        let mut event = ejets_event();
        event.met = Met::new(met, -1.5 + 0.3 * i as f64);
        event.weight = 0.5 + i as f64;
        events.push(event);
    }
    let mut no_ljets = ejets_event();
    no_ljets.ljets.clear();
    events.push(no_ljets);
    let mut invalid = ejets_event();
    invalid.valid = false;
    events.push(invalid);

    let valid = events.iter().filter(|e| e.valid).count();
    for event in events {
        apply(&mut engine, event);
    }

    let cutflow = engine.cutflow();
    assert!(cutflow.weighted().is_non_increasing());
    assert!(cutflow.unweighted().is_non_increasing());
    assert_eq!(cutflow.unweighted().get("INITIAL"), Some(valid as f64));
}

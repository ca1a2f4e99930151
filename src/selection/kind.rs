use std::fmt;

use super::cutflow::CutflowCursor;
use super::one_lepton::{self, LeptonChannel};
use super::{EventObjects, SelectionError};
use crate::objects::BTagWorkingPoint;

pub const MIN_BTAGS: usize = 1;
pub const MIN_BEST_T: f64 = 0.1;
pub const MCDNN_MIN_LJETS: usize = 2;

/// Capability shared by every selection: run the cuts for one event,
/// filling one cutflow bin per cut passed.
pub trait Selection {
    /// Names of the cuts in the order they are checked.
    fn steps(&self) -> Vec<&'static str>;

    fn apply(&self, objects: &EventObjects, cutflow: &mut CutflowCursor<'_>) -> bool;
}

/// Trigger lists per lepton flavor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerMenu {
    pub ejets: Vec<String>,
    pub mujets: Vec<String>,
}

/// No cuts beyond validity and filters.
#[derive(Debug, Clone, Copy, Default)]
pub struct InclusiveSelection;

impl Selection for InclusiveSelection {
    fn steps(&self) -> Vec<&'static str> {
        Vec::new()
    }

    fn apply(&self, _objects: &EventObjects, _cutflow: &mut CutflowCursor<'_>) -> bool {
        true
    }
}

/// Structural pre-filter for the all-hadronic DNN training samples.
#[derive(Debug, Clone, Copy, Default)]
pub struct McDnnSelection;

impl Selection for McDnnSelection {
    fn steps(&self) -> Vec<&'static str> {
        vec!["ljets >= 2"]
    }

    fn apply(&self, objects: &EventObjects, cutflow: &mut CutflowCursor<'_>) -> bool {
        if objects.event.ljets.len() < MCDNN_MIN_LJETS {
            return false;
        }
        cutflow.fill();
        true
    }
}

/// CWoLa data selection: lepton+jets followed by b-tag and top-tag cuts.
#[derive(Debug, Clone)]
pub struct CwolaSelection {
    pub channel: LeptonChannel,
    pub triggers: TriggerMenu,
    pub btag_wp: BTagWorkingPoint,
}

impl Selection for CwolaSelection {
    fn steps(&self) -> Vec<&'static str> {
        let mut steps = one_lepton::steps(self.channel);
        steps.extend(["btags >= 1", "BEST_t > 0.1"]);
        steps
    }

    fn apply(&self, objects: &EventObjects, cutflow: &mut CutflowCursor<'_>) -> bool {
        if !one_lepton::lepton_plus_jets(objects, self.channel, &self.triggers, cutflow) {
            return false;
        }

        if objects.event.count_btags(self.btag_wp) < MIN_BTAGS {
            return false;
        }
        cutflow.fill();

        // the one-lepton chain guarantees a hadronic top leg here
        let best_t = objects.ttbar.ljet.as_ref().map_or(f64::MIN, |l| l.best.t);
        if best_t <= MIN_BEST_T {
            return false;
        }
        cutflow.fill();

        true
    }
}

/// The selection chosen at start-up, one variant per supported name.
#[derive(Debug, Clone)]
pub enum SelectionKind {
    /// `none`
    Inclusive(InclusiveSelection),
    /// `mcDNN`
    McDnn(McDnnSelection),
    /// `cwola`, `cwolaejets`, `cwolamujets`
    Cwola(CwolaSelection),
}

impl SelectionKind {
    pub fn from_name(
        name: &str,
        triggers: TriggerMenu,
        btag_wp: BTagWorkingPoint,
    ) -> Result<Self, SelectionError> {
        let cwola = |channel| {
            SelectionKind::Cwola(CwolaSelection {
                channel,
                triggers: triggers.clone(),
                btag_wp,
            })
        };

        match name {
            "none" => Ok(SelectionKind::Inclusive(InclusiveSelection)),
            "mcDNN" => Ok(SelectionKind::McDnn(McDnnSelection)),
            "cwola" => Ok(cwola(LeptonChannel::Any)),
            "cwolaejets" => Ok(cwola(LeptonChannel::Electron)),
            "cwolamujets" => Ok(cwola(LeptonChannel::Muon)),
            other => Err(SelectionError::UnknownSelection(other.to_string())),
        }
    }

    fn inner(&self) -> &dyn Selection {
        match self {
            SelectionKind::Inclusive(s) => s,
            SelectionKind::McDnn(s) => s,
            SelectionKind::Cwola(s) => s,
        }
    }
}

impl Selection for SelectionKind {
    fn steps(&self) -> Vec<&'static str> {
        self.inner().steps()
    }

    fn apply(&self, objects: &EventObjects, cutflow: &mut CutflowCursor<'_>) -> bool {
        self.inner().apply(objects, cutflow)
    }
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionKind::Inclusive(_) => f.write_str("none"),
            SelectionKind::McDnn(_) => f.write_str("mcDNN"),
            SelectionKind::Cwola(s) => match s.channel {
                LeptonChannel::Any => f.write_str("cwola"),
                LeptonChannel::Electron => f.write_str("cwolaejets"),
                LeptonChannel::Muon => f.write_str("cwolamujets"),
            },
        }
    }
}

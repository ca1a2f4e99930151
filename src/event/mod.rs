use std::collections::BTreeMap;

use crate::objects::{BTagWorkingPoint, Flavor, Jet, LargeRJet, Lepton, Met, Neutrino};

/// Fully populated physics content of one event, as handed over by the reader.
#[derive(Clone, Debug, PartialEq)]
pub struct EventView {
    pub jets: Vec<Jet>,
    pub ljets: Vec<LargeRJet>,
    /// Electrons and muons combined
    pub leptons: Vec<Lepton>,
    pub neutrinos: Vec<Neutrino>,
    pub met: Met,
    pub ht: f64,
    pub st: f64,
    /// Trigger name -> fired
    pub triggers: BTreeMap<String, bool>,
    /// Filter name -> passed
    pub filters: BTreeMap<String, bool>,
    pub weight: f64,
    /// False when the reader found no reconstructed entry for this event
    pub valid: bool,
}

impl Default for EventView {
    fn default() -> Self {
        Self {
            jets: Vec::new(),
            ljets: Vec::new(),
            leptons: Vec::new(),
            neutrinos: Vec::new(),
            met: Met::default(),
            ht: 0.0,
            st: 0.0,
            triggers: BTreeMap::new(),
            filters: BTreeMap::new(),
            weight: 1.0,
            valid: true,
        }
    }
}

impl EventView {
    /// Electrons first, then muons; order within each flavor is kept and
    /// `index` is rewritten to the position in the combined collection.
    pub fn combine_leptons(electrons: Vec<Lepton>, muons: Vec<Lepton>) -> Vec<Lepton> {
        electrons
            .into_iter()
            .chain(muons)
            .enumerate()
            .map(|(index, mut lepton)| {
                lepton.index = index;
                lepton
            })
            .collect()
    }

    pub fn count_flavor(&self, flavor: Flavor) -> usize {
        self.leptons.iter().filter(|l| l.flavor == flavor).count()
    }

    pub fn count_btags(&self, wp: BTagWorkingPoint) -> usize {
        self.jets.iter().filter(|j| j.is_btagged(wp)).count()
    }

    pub fn trigger_fired(&self, name: &str) -> bool {
        match self.triggers.get(name) {
            Some(fired) => *fired,
            None => {
                log::debug!("EVENT : trigger {name} not present in event, treating as not fired");
                false
            }
        }
    }

    pub fn all_filters_pass(&self) -> bool {
        self.filters.values().all(|passed| *passed)
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::objects::{LargeRJet, Ttbar1L};

/// Subjet charges at or above this magnitude are treated as unphysical.
pub const MAX_SUBJET_CHARGE: f64 = 20.0;

/// Sample-level normalization values written with every record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleMetadata {
    pub xsection: f64,
    pub kfactor: f64,
    pub sum_of_weights: f64,
    pub nominal_weight: f64,
}

impl SampleMetadata {
    /// Unit values, used until sample metadata is available.
    pub fn placeholder() -> Self {
        Self {
            xsection: 1.0,
            kfactor: 1.0,
            sum_of_weights: 1.0,
            nominal_weight: 1.0,
        }
    }
}

impl Default for SampleMetadata {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// Flat feature name -> value mapping for one accepted event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureRecord {
    inner: BTreeMap<String, f64>,
}

impl FeatureRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        self.inner.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.inner.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &f64)> {
        self.inner.iter()
    }
}

/// Turns the hadronic-top candidate of an accepted event into ML inputs.
#[derive(Debug, Clone, Default)]
pub struct FeatureExtractor {
    metadata: SampleMetadata,
}

impl FeatureExtractor {
    pub fn new(metadata: SampleMetadata) -> Self {
        Self { metadata }
    }

    pub fn metadata(&self) -> &SampleMetadata {
        &self.metadata
    }

    /// `None` when there is no hadronic top or it fails the subjet quality cuts.
    pub fn extract(&self, ttbar: &Ttbar1L) -> Option<FeatureRecord> {
        let ljet = ttbar.ljet.as_ref()?;
        if !passes_quality(ljet) {
            log::debug!("FEATURES : hadronic top fails subjet quality cuts");
            return None;
        }

        let mut record = FeatureRecord::new();
        record.insert("xsection", self.metadata.xsection);
        record.insert("kfactor", self.metadata.kfactor);
        record.insert("sumOfWeights", self.metadata.sum_of_weights);
        record.insert("nominal_weight", self.metadata.nominal_weight);

        for (name, value) in &ljet.features {
            record.insert(name.clone(), *value);
        }

        record.insert("ljet_BEST_t", ljet.best.t);
        record.insert("ljet_BEST_w", ljet.best.w);
        record.insert("ljet_BEST_z", ljet.best.z);
        record.insert("ljet_BEST_h", ljet.best.h);
        record.insert("ljet_BEST_j", ljet.best.j);
        record.insert("ljet_SDmass", ljet.soft_drop_mass);
        record.insert("ljet_tau1", ljet.tau1);
        record.insert("ljet_tau2", ljet.tau2);
        record.insert("ljet_tau3", ljet.tau3);
        record.insert("ljet_tau21", ljet.tau21);
        record.insert("ljet_tau32", ljet.tau32);
        record.insert("ljet_isHadTop", if ljet.jet.is_had_top { 1.0 } else { 0.0 });
        record.insert("ljet_contain", f64::from(ljet.jet.containment));

        // 0: top (positive lepton), 1: anti-top
        if !record.contains("target") {
            let charge = ttbar.lepton.as_ref().map_or(0, |l| l.charge);
            record.insert("target", if charge > 0 { 0.0 } else { 1.0 });
        }

        Some(record)
    }
}

/// Positive b-tag discriminants and bounded charges for both leading subjets.
pub fn passes_quality(ljet: &LargeRJet) -> bool {
    ljet.subjets
        .iter()
        .all(|s| s.bdisc > 0.0 && s.charge.abs() < MAX_SUBJET_CHARGE)
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CutflowError {
    #[error("Cannot merge cutflow '{found}' into '{expected}': bin layout differs")]
    IncompatibleBins { expected: String, found: String },
}

/// One labeled cutflow histogram.
///
/// Bin 0 counts every valid event, bin k the events surviving cut k.
/// Fills past the last bin are collected in `overflow`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutflowHistogram {
    pub name: String,
    pub labels: Vec<String>,
    pub bin_content: Vec<f64>,
    pub overflow: f64,
    pub entries: u64,
}

impl CutflowHistogram {
    pub fn new(name: impl Into<String>, labels: Vec<String>) -> Self {
        let n_bins = labels.len();
        Self {
            name: name.into(),
            labels,
            bin_content: vec![0.0; n_bins],
            overflow: 0.0,
            entries: 0,
        }
    }

    pub fn n_bins(&self) -> usize {
        self.bin_content.len()
    }

    pub fn fill(&mut self, bin: usize, weight: f64) {
        match self.bin_content.get_mut(bin) {
            Some(content) => *content += weight,
            None => self.overflow += weight,
        }
        self.entries += 1;
    }

    /// Content of the bin with the given label.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| self.bin_content[i])
    }

    pub fn is_non_increasing(&self) -> bool {
        self.bin_content.windows(2).all(|w| w[0] >= w[1])
    }

    pub fn is_compatible(&self, other: &CutflowHistogram) -> bool {
        self.name == other.name && self.labels == other.labels
    }

    /// Bin-wise sum with a histogram of the same name and labels.
    pub fn merge(&mut self, other: &CutflowHistogram) -> Result<(), CutflowError> {
        if !self.is_compatible(other) {
            return Err(CutflowError::IncompatibleBins {
                expected: self.name.clone(),
                found: other.name.clone(),
            });
        }
        for (a, b) in self.bin_content.iter_mut().zip(&other.bin_content) {
            *a += b;
        }
        self.overflow += other.overflow;
        self.entries += other.entries;
        Ok(())
    }

    fn clear(&mut self) {
        self.bin_content.iter_mut().for_each(|c| *c = 0.0);
        self.overflow = 0.0;
        self.entries = 0;
    }
}

/// Weighted and unweighted cutflows of one (selection, input file) pairing.
#[derive(Debug, Clone, PartialEq)]
pub struct Cutflow {
    weighted: CutflowHistogram,
    unweighted: CutflowHistogram,
}

impl Cutflow {
    pub fn new(selection: &str, labels: Vec<String>) -> Self {
        Self {
            weighted: CutflowHistogram::new(format!("{selection}_cutflow"), labels.clone()),
            unweighted: CutflowHistogram::new(format!("{selection}_cutflow_unweighted"), labels),
        }
    }

    pub fn weighted(&self) -> &CutflowHistogram {
        &self.weighted
    }

    pub fn unweighted(&self) -> &CutflowHistogram {
        &self.unweighted
    }

    pub fn fill(&mut self, bin: usize, weight: f64) {
        self.weighted.fill(bin, weight);
        self.unweighted.fill(bin, 1.0);
    }

    /// Start filling for a new event at the `INITIAL` bin.
    pub fn cursor(&mut self, weight: f64) -> CutflowCursor<'_> {
        CutflowCursor {
            cutflow: self,
            bin: 0,
            weight,
        }
    }

    /// Bin-wise sum; both cutflows must share names and labels.
    pub fn merge(&mut self, other: &Cutflow) -> Result<(), CutflowError> {
        // check both before touching either
        if !self.unweighted.is_compatible(&other.unweighted) {
            return Err(CutflowError::IncompatibleBins {
                expected: self.unweighted.name.clone(),
                found: other.unweighted.name.clone(),
            });
        }
        self.weighted.merge(&other.weighted)?;
        self.unweighted.merge(&other.unweighted)
    }

    pub fn reset(&mut self) {
        self.weighted.clear();
        self.unweighted.clear();
    }
}

/// Per-event fill position. Each `fill` records the current bin and moves on.
pub struct CutflowCursor<'a> {
    cutflow: &'a mut Cutflow,
    bin: usize,
    weight: f64,
}

impl CutflowCursor<'_> {
    pub fn fill(&mut self) {
        self.cutflow.fill(self.bin, self.weight);
        self.bin += 1;
    }

    /// Number of bins filled so far for this event.
    pub fn filled(&self) -> usize {
        self.bin
    }
}

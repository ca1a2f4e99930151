use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::StoreError;
use crate::cuts::CutSpec;
use crate::selection::{Cutflow, CutflowHistogram};
use crate::types::{CutsVersion, FileStem};

// Key point:
// one report per (selection, input file)
// mergeable only across identical cut lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutflowReport {
    pub selection: String,
    pub source_file: FileStem,
    pub cuts_version: CutsVersion,
    pub created_at: DateTime<Utc>, // informational only
    pub weighted: CutflowHistogram,
    pub unweighted: CutflowHistogram,
}

impl CutflowReport {
    pub fn new(selection: &str, source_file: FileStem, cuts: &CutSpec, cutflow: &Cutflow) -> Self {
        Self {
            selection: selection.to_string(),
            source_file,
            cuts_version: cuts.version(),
            created_at: Utc::now(),
            weighted: cutflow.weighted().clone(),
            unweighted: cutflow.unweighted().clone(),
        }
    }

    /// Add another file's counts for the same selection and cut list.
    pub fn merge(&mut self, other: &CutflowReport) -> Result<(), StoreError> {
        if self.selection != other.selection || self.cuts_version != other.cuts_version {
            return Err(StoreError::VersionMismatch {
                expected: format!("{}@{}", self.selection, self.cuts_version.as_str()),
                found: format!("{}@{}", other.selection, other.cuts_version.as_str()),
            });
        }
        if !self.unweighted.is_compatible(&other.unweighted) {
            return Err(StoreError::VersionMismatch {
                expected: self.unweighted.name.clone(),
                found: other.unweighted.name.clone(),
            });
        }
        self.weighted.merge(&other.weighted)?;
        self.unweighted.merge(&other.unweighted)?;
        Ok(())
    }
}

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;
use thiserror::Error;

/// Name of an input file with directories and extension removed,
/// e.g. `/data/ttbar_SL_361082.root` -> `ttbar_SL_361082`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileStem(String);

#[derive(Debug, Error)]
pub enum FileStemError {
    #[error("Path has no file name: {0}")]
    NoFileName(String),
    #[error("Path involves invalid UTF-8")]
    InvalidUtf8,
}

impl FileStem {
    pub fn from_path(path: &Path) -> Result<Self, FileStemError> {
        let s = path.to_str().ok_or(FileStemError::InvalidUtf8)?;
        Self::from_name(s)
    }

    /// Strip everything up to the last `/` and from the last `.` on.
    pub fn from_name(name: &str) -> Result<Self, FileStemError> {
        let normalized = name.replace('\\', "/");
        let base = match normalized.rfind('/') {
            Some(pos) => &normalized[pos + 1..],
            None => normalized.as_str(),
        };
        let stem = match base.rfind('.') {
            Some(pos) if pos > 0 => &base[..pos],
            _ => base,
        };

        if stem.is_empty() {
            return Err(FileStemError::NoFileName(name.to_string()));
        }

        Ok(FileStem(stem.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Content hash of a normalized cut list.
///
/// Two cutflows may only be merged when they were booked from cut lists
/// with the same version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CutsVersion(String);

impl CutsVersion {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        CutsVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub mod report;
pub mod store;

use std::path::PathBuf;

use thiserror::Error;

use crate::selection::CutflowError;
use crate::types::FileStemError;

pub use report::CutflowReport;
pub use store::{output_directory, CutflowStore};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    FileStem(#[from] FileStemError),
    #[error(transparent)]
    Cutflow(#[from] CutflowError),
    #[error("Cannot merge cutflow report {found} into {expected}")]
    VersionMismatch { expected: String, found: String },
    #[error("Report at {0} belongs to a different file or selection")]
    ReportMismatch(PathBuf),
}

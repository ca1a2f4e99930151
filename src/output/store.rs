use std::fs;
use std::path::{Path, PathBuf};

use super::report::CutflowReport;
use super::StoreError;
use crate::config::Configuration;
use crate::types::FileStem;

/// Writes one JSON cutflow report per (input file, selection) below `root`:
/// `<root>/<file stem>/<selection>_cutflow.json`.
///
/// Single writer; a report is written once per input file.
#[derive(Debug, Clone)]
pub struct CutflowStore {
    root: PathBuf,
}

impl CutflowStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, source_file: &FileStem, selection: &str) -> PathBuf {
        self.root
            .join(source_file.as_str())
            .join(format!("{selection}_cutflow.json"))
    }

    pub fn write(&self, report: &CutflowReport) -> Result<PathBuf, StoreError> {
        let path = self.path_for(&report.source_file, &report.selection);
        let dir = path.parent().unwrap_or(&self.root);
        fs::create_dir_all(dir)?;

        // Write next to the target, then rename so readers never see a partial file
        let temp_path = path.with_extension("json.tmp");
        if temp_path.exists() {
            fs::remove_file(&temp_path)?;
        }

        let f = fs::File::create(&temp_path)?;
        serde_json::to_writer_pretty(&f, report)?;
        f.sync_all()?;

        fs::rename(&temp_path, &path)?;
        log::info!("OUTPUT : cutflow for {} saved to {}", report.selection, path.display());

        Ok(path)
    }

    pub fn read(&self, source_file: &FileStem, selection: &str) -> Result<CutflowReport, StoreError> {
        let path = self.path_for(source_file, selection);
        let f = fs::File::open(&path)?;
        let report: CutflowReport = serde_json::from_reader(f)?;

        if report.source_file != *source_file || report.selection != selection {
            return Err(StoreError::ReportMismatch(path));
        }
        Ok(report)
    }
}

/// `<output_path>/<selection><customDirectory>`
pub fn output_directory(config: &Configuration, selection: &str) -> PathBuf {
    config
        .output_path()
        .join(format!("{selection}{}", config.custom_directory()))
}

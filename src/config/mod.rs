//! Run configuration.
//!
//! Read once at start-up from a line-oriented `key value` file and never
//! mutated afterwards. Missing keys fall back to documented defaults and
//! lookups of unknown keys are logged rather than fatal.

pub mod defaults;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use thiserror::Error;

use crate::objects::{BTagWorkingPoint, UnknownWorkingPoint};
use defaults::{DEFAULT_CONFIGS, MC_PRIMARY_DATASETS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Option {key} must be an integer, got '{value}'")]
    InvalidNumber { key: String, value: String },
    #[error(transparent)]
    UnknownWorkingPoint(#[from] UnknownWorkingPoint),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    options: BTreeMap<String, String>,
}

impl Configuration {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        log::debug!("CONFIG : reading {}", path.display());
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut options = BTreeMap::new();

        for raw in text.lines() {
            let line = match raw.find('#') {
                Some(pos) => &raw[..pos],
                None => raw,
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (key, value) = match line.split_once(char::is_whitespace) {
                Some((key, value)) => (key, value.trim()),
                None => (line, ""),
            };
            options.insert(key.to_string(), value.to_string());
        }

        for (key, value) in DEFAULT_CONFIGS {
            if !options.contains_key(*key) {
                log::warn!("CONFIG : Configuration {key} not defined, set to default '{value}'");
                options.insert(key.to_string(), value.to_string());
            }
        }

        let config = Self { options };
        // Fail early on an unsupported working point.
        config.btag_working_point()?;
        Ok(config)
    }

    /// Raw option value. Unknown keys are reported and yield an empty string.
    pub fn get_option(&self, key: &str) -> String {
        match self.options.get(key) {
            Some(value) => value.clone(),
            None => {
                log::error!("CONFIG : Option {key} does not exist in configuration, returning an empty string");
                String::new()
            }
        }
    }

    pub fn options(&self) -> impl Iterator<Item = (&String, &String)> {
        self.options.iter()
    }

    pub fn selections(&self) -> Vec<String> {
        split_list(&self.get_option("selection"))
    }

    pub fn cutsfiles(&self) -> Vec<PathBuf> {
        split_list(&self.get_option("cutsfile"))
            .into_iter()
            .map(PathBuf::from)
            .collect()
    }

    /// Ceiling on processed events; `None` means all.
    pub fn n_events(&self) -> Result<Option<u64>, ConfigError> {
        let n = self.integer("NEvents")?;
        Ok(u64::try_from(n).ok())
    }

    pub fn first_event(&self) -> Result<u64, ConfigError> {
        let key = "firstEvent";
        let n = self.integer(key)?;
        u64::try_from(n).map_err(|_| ConfigError::InvalidNumber {
            key: key.to_string(),
            value: n.to_string(),
        })
    }

    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(self.get_option("output_path"))
    }

    /// Suffix for the output directory, prefixed with `_` when non-empty.
    pub fn custom_directory(&self) -> String {
        let custom = self.get_option("customDirectory");
        if custom.is_empty() || custom.starts_with('_') {
            custom
        } else {
            format!("_{custom}")
        }
    }

    pub fn btag_working_point(&self) -> Result<BTagWorkingPoint, ConfigError> {
        Ok(self.get_option("jet_btag_wkpt").parse()?)
    }

    pub fn ejets_triggers(&self) -> Vec<String> {
        split_list(&self.get_option("ejetsTriggers"))
    }

    pub fn mujets_triggers(&self) -> Vec<String> {
        split_list(&self.get_option("mujetsTriggers"))
    }

    /// Logging threshold; unsupported levels fall back to `INFO`.
    pub fn verbose_level(&self) -> LevelFilter {
        let level = self.get_option("verboseLevel");
        match level.as_str() {
            "DEBUG" => LevelFilter::Debug,
            "INFO" => LevelFilter::Info,
            "WARNING" => LevelFilter::Warn,
            "ERROR" => LevelFilter::Error,
            other => {
                log::warn!(
                    "CONFIG : Verbose level {other} is not supported, please select one of {}; continuing with INFO",
                    defaults::VERBOSE_LEVELS.join(", ")
                );
                LevelFilter::Info
            }
        }
    }

    pub fn is_mc_dataset(primary_dataset: &str) -> bool {
        MC_PRIMARY_DATASETS.contains(&primary_dataset)
    }

    pub fn log_summary(&self) {
        log::info!("CONFIG : Printing configuration");
        for (key, value) in &self.options {
            log::info!("CONFIG :   {key:<24} {value}");
        }
    }

    fn integer(&self, key: &str) -> Result<i64, ConfigError> {
        let value = self.get_option(key);
        value.parse().map_err(|_| ConfigError::InvalidNumber {
            key: key.to_string(),
            value,
        })
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

//! Per-event pipeline: reconstruct the ttbar candidate, apply the selection,
//! then export features for accepted events.

use thiserror::Error;

use crate::config::{ConfigError, Configuration};
use crate::cuts::CutSpec;
use crate::event::EventView;
use crate::features::{FeatureExtractor, FeatureRecord, SampleMetadata};
use crate::output::CutflowReport;
use crate::reco::{RecoError, TtbarReconstructor};
use crate::selection::{SelectionEngine, SelectionError};
use crate::types::{FileStem, FileStemError};

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Reco(#[from] RecoError),
    #[error(transparent)]
    FileStem(#[from] FileStemError),
    #[error("No file is open; call begin_file first")]
    NoOpenFile,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventOutcome {
    pub passed: bool,
    /// Present for accepted events whose hadronic top passes the quality cuts
    pub features: Option<FeatureRecord>,
}

/// Summary of one input file.
#[derive(Debug, Clone)]
pub struct FileSummary {
    pub events_processed: u64,
    pub events_passed: u64,
    pub records: Vec<FeatureRecord>,
}

pub struct EventProcessor {
    reco: TtbarReconstructor,
    engine: SelectionEngine,
    extractor: FeatureExtractor,
    selection: String,
    first_event: u64,
    max_events: Option<u64>,
    current_file: Option<FileStem>,
}

impl EventProcessor {
    /// Builds the first configured selection.
    pub fn new(config: &Configuration, cuts: CutSpec) -> Result<Self, ProcessError> {
        config.log_summary();
        let selection = config
            .selections()
            .into_iter()
            .next()
            .unwrap_or_else(|| "none".to_string());
        Self::with_selection(config, &selection, cuts)
    }

    pub fn with_selection(
        config: &Configuration,
        selection: &str,
        cuts: CutSpec,
    ) -> Result<Self, ProcessError> {
        let engine = SelectionEngine::from_config(config, selection, cuts)?;
        Ok(Self {
            reco: TtbarReconstructor::new(),
            engine,
            extractor: FeatureExtractor::new(SampleMetadata::placeholder()),
            selection: selection.to_string(),
            first_event: config.first_event()?,
            max_events: config.n_events()?,
            current_file: None,
        })
    }

    pub fn engine(&self) -> &SelectionEngine {
        &self.engine
    }

    pub fn begin_file(&mut self, source_file: &str, is_mc: bool) -> Result<(), ProcessError> {
        let stem = FileStem::from_name(source_file)?;
        log::info!(
            "PROCESSOR : opening {source_file} (selection {}, {})",
            self.selection,
            if is_mc { "MC" } else { "data" }
        );
        self.engine.begin_file(is_mc);
        self.current_file = Some(stem);
        Ok(())
    }

    pub fn process(&mut self, event: EventView) -> Result<EventOutcome, ProcessError> {
        if self.current_file.is_none() {
            return Err(ProcessError::NoOpenFile);
        }

        let ttbar = self
            .reco
            .execute(&event.leptons, &event.neutrinos, &event.jets, &event.ljets)?;

        self.engine.set_objects(event, ttbar.clone());
        let passed = self.engine.apply_selection();

        let features = if passed {
            log::debug!("PROCESSOR : passed selection, extracting features");
            self.extractor.extract(&ttbar)
        } else {
            None
        };

        Ok(EventOutcome { passed, features })
    }

    /// Skips `firstEvent` entries and stops after `NEvents` processed events.
    pub fn process_events<I>(&mut self, events: I) -> Result<FileSummary, ProcessError>
    where
        I: IntoIterator<Item = EventView>,
    {
        let skip = usize::try_from(self.first_event).unwrap_or(usize::MAX);
        let mut summary = FileSummary {
            events_processed: 0,
            events_passed: 0,
            records: Vec::new(),
        };

        for event in events.into_iter().skip(skip) {
            if self.max_events.is_some_and(|max| summary.events_processed >= max) {
                log::info!(
                    "PROCESSOR : processed the desired number of events: {}",
                    summary.events_processed
                );
                break;
            }

            let outcome = self.process(event)?;
            summary.events_processed += 1;
            if outcome.passed {
                summary.events_passed += 1;
            }
            if let Some(record) = outcome.features {
                summary.records.push(record);
            }
        }

        Ok(summary)
    }

    /// Close the current file and hand back its cutflow.
    pub fn end_file(&mut self) -> Result<CutflowReport, ProcessError> {
        let stem = self.current_file.take().ok_or(ProcessError::NoOpenFile)?;
        let report = CutflowReport::new(
            &self.selection,
            stem,
            self.engine.cuts(),
            self.engine.cutflow(),
        );
        log::info!("PROCESSOR : end of {}", report.source_file.as_str());
        Ok(report)
    }
}

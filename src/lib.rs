//! Deterministic lepton+jets event selection and ttbar reconstruction.
//!
//! `ljets-core` reconstructs a single-lepton ttbar candidate per event,
//! applies a named analysis selection with weighted and unweighted cutflows,
//! and turns the hadronic-top candidate of accepted events into flat feature
//! records. All operations are deterministic: identical inputs in the same
//! order always produce identical outputs.
//!
//! Reading event files, histogram booking and neural-network inference are
//! left to the caller; see [`event::EventView`] for the per-event input.

pub mod config;
pub mod cuts;
pub mod event;
pub mod features;
pub mod objects;
pub mod output;
pub mod processor;
pub mod reco;
pub mod selection;
pub mod types;

pub use cuts::{Cut, CutSpec};
pub use event::EventView;
pub use features::{FeatureExtractor, FeatureRecord};
pub use processor::EventProcessor;
pub use reco::TtbarReconstructor;
pub use selection::SelectionEngine;

pub mod cutflow;
pub mod kind;
pub mod one_lepton;

use thiserror::Error;

use crate::config::{ConfigError, Configuration};
use crate::cuts::CutSpec;
use crate::event::EventView;
use crate::objects::{BTagWorkingPoint, Flavor, Ttbar1L};
pub use cutflow::{Cutflow, CutflowCursor, CutflowError, CutflowHistogram};
pub use kind::{
	CwolaSelection, InclusiveSelection, McDnnSelection, Selection, SelectionKind, TriggerMenu,
};
pub use one_lepton::LeptonChannel;

#[derive(Debug, Error)]
pub enum SelectionError {
	#[error("Unknown selection '{0}' (expected none, mcDNN, cwola, cwolaejets or cwolamujets)")]
	UnknownSelection(String),

	#[error(transparent)]
	Config(#[from] ConfigError),
}

/// Everything the cuts look at for one event, captured by `set_objects`.
#[derive(Debug, Clone)]
pub struct EventObjects {
	pub event: EventView,
	pub ttbar: Ttbar1L,
	pub n_electrons: usize,
	pub n_muons: usize,
}

impl EventObjects {
	pub fn new(event: EventView, ttbar: Ttbar1L) -> Self {
		let n_electrons = event.count_flavor(Flavor::Electron);
		let n_muons = event.count_flavor(Flavor::Muon);
		Self {
			event,
			ttbar,
			n_electrons,
			n_muons,
		}
	}
}

/// Applies one named selection event by event and keeps its cutflow.
///
/// Bin order: `INITIAL`, the filter bin, then one bin per cut of the
/// active selection. A rejected event keeps the bins it already filled.
pub struct SelectionEngine {
	kind: SelectionKind,
	cuts: CutSpec,
	is_mc: bool,
	cutflow: Cutflow,
	objects: Option<EventObjects>,
}

impl SelectionEngine {
	pub fn new(
		selection: &str,
		cuts: CutSpec,
		triggers: TriggerMenu,
		btag_wp: BTagWorkingPoint,
	) -> Result<Self, SelectionError> {
		let kind = SelectionKind::from_name(selection, triggers, btag_wp)?;

		// filter bin + selection steps
		let expected = 1 + kind.steps().len();
		if cuts.len() < expected {
			log::warn!(
				"SELECTION : {selection} checks up to {expected} cuts but only {} are declared; later fills go to overflow",
				cuts.len()
			);
		}

		let cutflow = Cutflow::new(selection, cuts.cutflow_labels());

		Ok(Self {
			kind,
			cuts,
			is_mc: false,
			cutflow,
			objects: None,
		})
	}

	pub fn from_config(
		config: &Configuration,
		selection: &str,
		cuts: CutSpec,
	) -> Result<Self, SelectionError> {
		let triggers = TriggerMenu {
			ejets: config.ejets_triggers(),
			mujets: config.mujets_triggers(),
		};
		let btag_wp = config.btag_working_point()?;
		Self::new(selection, cuts, triggers, btag_wp)
	}

	pub fn kind(&self) -> &SelectionKind {
		&self.kind
	}

	pub fn name(&self) -> String {
		self.kind.to_string()
	}

	pub fn cuts(&self) -> &CutSpec {
		&self.cuts
	}

	pub fn number_of_cuts(&self) -> usize {
		self.cuts.len()
	}

	pub fn cut_names(&self) -> Vec<String> {
		self.cuts.names().map(str::to_string).collect()
	}

	pub fn is_mc(&self) -> bool {
		self.is_mc
	}

	/// Start a new (selection, input file) pairing with empty cutflows.
	pub fn begin_file(&mut self, is_mc: bool) {
		self.is_mc = is_mc;
		self.cutflow.reset();
		self.objects = None;
	}

	pub fn cutflow(&self) -> &Cutflow {
		&self.cutflow
	}

	pub fn set_objects(&mut self, event: EventView, ttbar: Ttbar1L) {
		self.objects = Some(EventObjects::new(event, ttbar));
	}

	/// Evaluate the active selection on the captured event.
	pub fn apply_selection(&mut self) -> bool {
		let Some(objects) = self.objects.as_ref() else {
			log::warn!("SELECTION : apply_selection called before set_objects");
			return false;
		};

		if !objects.event.valid {
			return false;
		}

		let mut cursor = self.cutflow.cursor(objects.event.weight);
		cursor.fill();

		// MET filters only apply to collision data
		if !self.is_mc && !objects.event.all_filters_pass() {
			return false;
		}
		cursor.fill();

		self.kind.apply(objects, &mut cursor)
	}
}

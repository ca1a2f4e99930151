pub mod cut;
pub mod spec;

pub use cut::{Comparator, Cut};
pub use spec::{CutSpec, CutSpecError, INITIAL_LABEL};

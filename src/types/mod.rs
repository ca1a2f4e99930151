pub mod four_vector;
pub mod identifiers;

pub use four_vector::FourVector;
pub use identifiers::{CutsVersion, FileStem, FileStemError};

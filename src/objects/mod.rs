//! Reconstructed physics objects for one event.
//!
//! Every object kind carries a four-momentum and an `is_good` flag; the
//! shared access goes through [`PhysicsObject`] rather than a common base
//! type.

pub mod jet;
pub mod large_r_jet;
pub mod lepton;
pub mod missing;
pub mod ttbar;

use crate::types::FourVector;

pub use jet::{BTagFlags, BTagWorkingPoint, Jet, JetCorrections, UnknownWorkingPoint};
pub use large_r_jet::{BestScores, LargeRJet, Subjet};
pub use lepton::{Flavor, Lepton, LeptonId};
pub use missing::{Met, Neutrino};
pub use ttbar::Ttbar1L;

pub trait PhysicsObject {
    fn p4(&self) -> &FourVector;

    /// Whether the object was well formed when it was built.
    fn is_good(&self) -> bool;

    fn pt(&self) -> f64 {
        self.p4().pt()
    }

    fn delta_r<O: PhysicsObject + ?Sized>(&self, other: &O) -> f64 {
        self.p4().delta_r(other.p4())
    }

    fn delta_phi<O: PhysicsObject + ?Sized>(&self, other: &O) -> f64 {
        self.p4().delta_phi(other.p4())
    }
}

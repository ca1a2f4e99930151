use std::f64::consts::PI;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Pseudorapidity reported for vectors along the beam axis.
const ETA_BEAM_AXIS: f64 = 1e10;

/// Lorentz four-momentum.
///
/// Stored in Cartesian components; the collider coordinates
/// (pt, eta, phi) are derived on access. Values are immutable once built,
/// composite momenta are formed by addition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FourVector {
    px: f64,
    py: f64,
    pz: f64,
    e: f64,
}

impl FourVector {
    pub const ZERO: FourVector = FourVector {
        px: 0.0,
        py: 0.0,
        pz: 0.0,
        e: 0.0,
    };

    pub fn from_px_py_pz_e(px: f64, py: f64, pz: f64, e: f64) -> Self {
        Self { px, py, pz, e }
    }

    pub fn from_pt_eta_phi_e(pt: f64, eta: f64, phi: f64, e: f64) -> Self {
        let pt = pt.abs();
        Self {
            px: pt * phi.cos(),
            py: pt * phi.sin(),
            pz: pt * eta.sinh(),
            e,
        }
    }

    pub fn from_pt_eta_phi_m(pt: f64, eta: f64, phi: f64, m: f64) -> Self {
        let pt = pt.abs();
        let pz = pt * eta.sinh();
        let p2 = pt * pt + pz * pz;
        let e = if m >= 0.0 {
            (p2 + m * m).sqrt()
        } else {
            (p2 - m * m).max(0.0).sqrt()
        };
        Self::from_pt_eta_phi_e(pt, eta, phi, e)
    }

    pub fn px(&self) -> f64 {
        self.px
    }

    pub fn py(&self) -> f64 {
        self.py
    }

    pub fn pz(&self) -> f64 {
        self.pz
    }

    pub fn e(&self) -> f64 {
        self.e
    }

    pub fn pt(&self) -> f64 {
        self.px.hypot(self.py)
    }

    /// Magnitude of the three-momentum.
    pub fn p(&self) -> f64 {
        (self.px * self.px + self.py * self.py + self.pz * self.pz).sqrt()
    }

    /// Invariant mass; negative for space-like vectors.
    pub fn mass(&self) -> f64 {
        let m2 = self.e * self.e - self.p() * self.p();
        if m2 < 0.0 {
            -(-m2).sqrt()
        } else {
            m2.sqrt()
        }
    }

    pub fn phi(&self) -> f64 {
        if self.px == 0.0 && self.py == 0.0 {
            0.0
        } else {
            self.py.atan2(self.px)
        }
    }

    pub fn eta(&self) -> f64 {
        let pt = self.pt();
        if pt == 0.0 {
            if self.pz == 0.0 {
                0.0
            } else {
                ETA_BEAM_AXIS.copysign(self.pz)
            }
        } else {
            (self.pz / pt).asinh()
        }
    }

    pub fn rapidity(&self) -> f64 {
        let denom = self.e - self.pz;
        let num = self.e + self.pz;
        if denom == 0.0 || num == 0.0 {
            0.0
        } else {
            0.5 * (num / denom).ln()
        }
    }

    /// Signed azimuthal difference `phi(self) - phi(other)`, wrapped to (−π, π].
    pub fn delta_phi(&self, other: &FourVector) -> f64 {
        wrap_phi(self.phi() - other.phi())
    }

    /// Angular separation in the (eta, phi) plane.
    pub fn delta_r(&self, other: &FourVector) -> f64 {
        let deta = self.eta() - other.eta();
        let dphi = self.delta_phi(other);
        deta.hypot(dphi)
    }

    /// Relative transverse momentum of `self` with respect to `reference`:
    /// `|p_self × p_ref| / |p_ref|`.
    pub fn pt_rel(&self, reference: &FourVector) -> f64 {
        let ref_mag = reference.p();
        if ref_mag == 0.0 {
            return 0.0;
        }
        let cx = self.py * reference.pz - self.pz * reference.py;
        let cy = self.pz * reference.px - self.px * reference.pz;
        let cz = self.px * reference.py - self.py * reference.px;
        (cx * cx + cy * cy + cz * cz).sqrt() / ref_mag
    }
}

pub(crate) fn wrap_phi(mut dphi: f64) -> f64 {
    while dphi > PI {
        dphi -= 2.0 * PI;
    }
    while dphi <= -PI {
        dphi += 2.0 * PI;
    }
    dphi
}

impl Add for FourVector {
    type Output = FourVector;

    fn add(self, rhs: FourVector) -> FourVector {
        FourVector {
            px: self.px + rhs.px,
            py: self.py + rhs.py,
            pz: self.pz + rhs.pz,
            e: self.e + rhs.e,
        }
    }
}

impl<'a> Add<&'a FourVector> for FourVector {
    type Output = FourVector;

    fn add(self, rhs: &'a FourVector) -> FourVector {
        self + *rhs
    }
}

impl Sum for FourVector {
    fn sum<I: Iterator<Item = FourVector>>(iter: I) -> Self {
        iter.fold(FourVector::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a FourVector> for FourVector {
    fn sum<I: Iterator<Item = &'a FourVector>>(iter: I) -> Self {
        iter.fold(FourVector::ZERO, |acc, v| acc + v)
    }
}

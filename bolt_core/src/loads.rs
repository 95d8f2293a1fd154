//! # Applied Load Set
//!
//! The six independent load components acting on a bolt group at its
//! centroid. There are no relationship constraints between components:
//! any real values are valid, including zero and negative.
//!
//! Sign conventions: axial force is tension-positive; shears and moments
//! follow the right-handed axes of the arrangement geometry (x horizontal,
//! y vertical).
//!
//! # Example
//!
//! ```
//! use bolt_core::loads::LoadSet;
//!
//! let loads = LoadSet::new()
//!     .with_shear(20.0, 5.0)
//!     .with_torsion(10.0)
//!     .with_moments(50.0, 10.0)
//!     .with_axial(10.0);
//!
//! assert_eq!(loads.vx_kn, 20.0);
//! assert!(!loads.is_zero());
//! ```

use serde::{Deserialize, Serialize};

/// Applied loads on the bolt group.
///
/// ## JSON Example
///
/// ```json
/// {
///   "vx_kn": 20.0,
///   "vy_kn": 5.0,
///   "torsion_knm": 10.0,
///   "moment_major_knm": 50.0,
///   "moment_minor_knm": 10.0,
///   "axial_kn": 10.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadSet {
    /// Horizontal shear Vx (kN)
    pub vx_kn: f64,

    /// Vertical shear Vy (kN)
    pub vy_kn: f64,

    /// Torsion Tb about the group centroid (kNm)
    pub torsion_knm: f64,

    /// Major-axis bending moment Mb (kNm)
    pub moment_major_knm: f64,

    /// Minor-axis bending moment Mm (kNm)
    pub moment_minor_knm: f64,

    /// Axial force Nt, tension-positive (kN)
    pub axial_kn: f64,
}

impl LoadSet {
    /// All components zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both shear components (kN).
    pub fn with_shear(mut self, vx_kn: f64, vy_kn: f64) -> Self {
        self.vx_kn = vx_kn;
        self.vy_kn = vy_kn;
        self
    }

    /// Set the torsion component (kNm).
    pub fn with_torsion(mut self, torsion_knm: f64) -> Self {
        self.torsion_knm = torsion_knm;
        self
    }

    /// Set both bending moments (kNm).
    pub fn with_moments(mut self, major_knm: f64, minor_knm: f64) -> Self {
        self.moment_major_knm = major_knm;
        self.moment_minor_knm = minor_knm;
        self
    }

    /// Set the axial component (kN, tension-positive).
    pub fn with_axial(mut self, axial_kn: f64) -> Self {
        self.axial_kn = axial_kn;
        self
    }

    /// True when every component is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.vx_kn == 0.0
            && self.vy_kn == 0.0
            && self.torsion_knm == 0.0
            && self.moment_major_knm == 0.0
            && self.moment_minor_knm == 0.0
            && self.axial_kn == 0.0
    }
}

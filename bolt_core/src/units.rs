//! # Unit Types
//!
//! Type-safe wrappers for engineering units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Bolt group analysis uses a small, fixed set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Unit Convention
//!
//! Inputs and reported results use the units structural engineers quote:
//! - Length: millimetres (mm)
//! - Force: kilonewtons (kN)
//! - Moment: kilonewton-metres (kNm)
//! - Stress: megapascals (MPa)
//!
//! The internal arithmetic runs in consistent N/mm units, so the engine
//! converts kN -> N (x1000) and kNm -> Nmm (x1e6) on the way in and back
//! on the way out. Those factors live in the `From` impls here.
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::units::{Kilonewtons, Newtons, KilonewtonMetres, NewtonMillimetres};
//!
//! let shear = Kilonewtons(12.5);
//! let shear_n: Newtons = shear.into();
//! assert_eq!(shear_n.0, 12500.0);
//!
//! let torsion = KilonewtonMetres(10.0);
//! let torsion_nmm: NewtonMillimetres = torsion.into();
//! assert_eq!(torsion_nmm.0, 10.0e6);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length and Area Units
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimetres(pub f64);

/// Area in square millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMillimetres(pub f64);

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons (1 kN = 1000 N)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

impl From<Kilonewtons> for Newtons {
    fn from(kn: Kilonewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

impl From<Newtons> for Kilonewtons {
    fn from(n: Newtons) -> Self {
        Kilonewtons(n.0 / 1000.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in newton-millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMillimetres(pub f64);

/// Moment in kilonewton-metres (1 kNm = 1e6 Nmm)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilonewtonMetres(pub f64);

impl From<KilonewtonMetres> for NewtonMillimetres {
    fn from(knm: KilonewtonMetres) -> Self {
        NewtonMillimetres(knm.0 * 1.0e6)
    }
}

impl From<NewtonMillimetres> for KilonewtonMetres {
    fn from(nmm: NewtonMillimetres) -> Self {
        KilonewtonMetres(nmm.0 / 1.0e6)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

impl Megapascals {
    /// Stress from a force over an area (N/mm² = MPa)
    pub fn from_force_over_area(force: Newtons, area: SquareMillimetres) -> Self {
        Megapascals(force.0 / area.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Millimetres);
impl_arithmetic!(SquareMillimetres);
impl_arithmetic!(Newtons);
impl_arithmetic!(Kilonewtons);
impl_arithmetic!(NewtonMillimetres);
impl_arithmetic!(KilonewtonMetres);
impl_arithmetic!(Megapascals);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kilonewtons_to_newtons() {
        let kn = Kilonewtons(2.5);
        let n: Newtons = kn.into();
        assert_eq!(n.0, 2500.0);
    }

    #[test]
    fn test_moment_conversion() {
        let knm = KilonewtonMetres(10.0);
        let nmm: NewtonMillimetres = knm.into();
        assert_eq!(nmm.0, 10_000_000.0);

        let back: KilonewtonMetres = nmm.into();
        assert_eq!(back.0, 10.0);
    }

    #[test]
    fn test_stress_from_force_over_area() {
        let stress = Megapascals::from_force_over_area(Newtons(16_860.0), SquareMillimetres(84.3));
        assert!((stress.0 - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let a = Millimetres(150.0);
        let b = Millimetres(50.0);
        assert_eq!((a + b).0, 200.0);
        assert_eq!((a - b).0, 100.0);
        assert_eq!((a * 2.0).0, 300.0);
        assert_eq!((a / 2.0).0, 75.0);
    }

    #[test]
    fn test_serialization() {
        let kn = Kilonewtons(12.5);
        let json = serde_json::to_string(&kn).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Kilonewtons = serde_json::from_str(&json).unwrap();
        assert_eq!(kn, roundtrip);
    }
}

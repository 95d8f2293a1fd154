//! # Bolt Group Force Distribution
//!
//! Distributes six load components over a fastener group by elastic
//! (rigid-body) theory and checks the governing bolt against tabulated
//! capacities.
//!
//! ## Assumptions
//!
//! - Rigid connected parts: in-plane shear distributes equally, torsion in
//!   proportion to distance from the centroid
//! - Linear-elastic tension distribution: bending contributions vary
//!   linearly with distance from the centroidal axes and are not clipped
//!   at zero, so bolts on the compression side may carry negative
//!   contributions that reduce their net tension (no neutral-axis shift)
//! - Prying is covered by a single multiplicative allowance α ≥ 1 on the
//!   total bolt tension
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::calculations::bolt_group::{calculate, BoltGroupInput};
//! use bolt_core::geometry::Arrangement;
//! use bolt_core::loads::LoadSet;
//!
//! let input = BoltGroupInput {
//!     label: "BG-1".to_string(),
//!     arrangement: Arrangement::Rectangular {
//!         num_rows: 2,
//!         num_cols: 2,
//!         row_spacing_mm: 90.0,
//!         col_spacing_mm: 90.0,
//!     },
//!     loads: LoadSet::new().with_shear(25.0, 40.0).with_axial(60.0),
//!     grade: "Grade 8.8".to_string(),
//!     size: "M20".to_string(),
//!     prying_allowance: 1.2,
//! };
//!
//! let result = calculate(&input).unwrap();
//!
//! // 1.2 · 60 kN over 4 bolts
//! assert!((result.max_tension_kn - 18.0).abs() < 1e-9);
//! assert!(result.passes());
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::errors::{BoltError, BoltResult};
use crate::geometry::Arrangement;
use crate::loads::LoadSet;
use crate::units::{Kilonewtons, KilonewtonMetres, Megapascals, Newtons, NewtonMillimetres, SquareMillimetres};

/// Input parameters for a bolt group check.
///
/// Lengths in millimetres, forces in kilonewtons, moments in
/// kilonewton-metres.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "BG-1",
///   "arrangement": {
///     "type": "Rectangular",
///     "num_rows": 4,
///     "num_cols": 4,
///     "row_spacing_mm": 150.0,
///     "col_spacing_mm": 160.0
///   },
///   "loads": {
///     "vx_kn": 20.0, "vy_kn": 5.0, "torsion_knm": 10.0,
///     "moment_major_knm": 50.0, "moment_minor_knm": 10.0, "axial_kn": 10.0
///   },
///   "grade": "Grade 8.8",
///   "size": "M24",
///   "prying_allowance": 1.1
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltGroupInput {
    /// User label for this connection (e.g., "BG-1", "Base Plate East")
    pub label: String,

    /// Bolt pattern geometry
    pub arrangement: Arrangement,

    /// Applied loads at the group centroid
    pub loads: LoadSet,

    /// Bolt grade label, must exist in the capacity catalog
    pub grade: String,

    /// Bolt size label, must exist for the selected grade
    pub size: String,

    /// Prying allowance α applied to total bolt tension (≥ 1.0)
    pub prying_allowance: f64,
}

impl BoltGroupInput {
    /// Validate input parameters.
    pub fn validate(&self) -> BoltResult<()> {
        self.arrangement.validate()?;
        if self.prying_allowance < 1.0 {
            return Err(BoltError::invalid_input(
                "prying_allowance",
                self.prying_allowance.to_string(),
                "Prying allowance must be at least 1.0",
            ));
        }
        Ok(())
    }
}

/// Forces on a single bolt, relative to the group centroid.
///
/// Ephemeral: recomputed in full on every evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoltForce {
    /// Horizontal offset from the centroid (mm)
    pub x_mm: f64,

    /// Vertical offset from the centroid (mm)
    pub y_mm: f64,

    /// Resultant shear on this bolt (kN)
    pub shear_kn: f64,

    /// Total tension including prying allowance (kN); negative means the
    /// linear model puts this bolt in net compression
    pub tension_kn: f64,
}

/// Results from a bolt group evaluation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "bolt_count": 16,
///   "grade": "Grade 8.8",
///   "size": "M24",
///   "max_shear_kn": 4.56,
///   "max_tension_kn": 82.33,
///   "polar_moment": 962000.0,
///   "shear_capacity_kn": 145.0,
///   "tension_capacity_kn": 234.0,
///   "combined_ratio": 0.125,
///   "shear_stress_mpa": 12.9,
///   "tensile_stress_mpa": 233.2,
///   "bolt_forces": []
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltGroupResult {
    /// Number of bolts in the group
    pub bolt_count: u32,

    /// Grade the capacities were taken for
    pub grade: String,

    /// Size the capacities were taken for
    pub size: String,

    // === Demand ===
    /// Governing bolt shear (kN)
    pub max_shear_kn: f64,

    /// Governing bolt tension including prying allowance (kN)
    ///
    /// The governing bolt need not be the same one as for shear.
    pub max_tension_kn: f64,

    /// Bolt group polar moment Ibp about the centroid, bolts as unit
    /// areas: Σ(xᵢ² + yᵢ²)
    pub polar_moment: f64,

    // === Capacity ===
    /// Design shear capacity φVf of the selected bolt (kN)
    pub shear_capacity_kn: f64,

    /// Design tension capacity φNtf of the selected bolt (kN)
    pub tension_capacity_kn: f64,

    // === Interaction Check ===
    /// Combined ratio (max_shear/φVf)² + (max_tension/φNtf)²
    ///
    /// Must be ≤ 1.0 to pass.
    pub combined_ratio: f64,

    // === Stresses (informational, not part of the pass/fail check) ===
    /// Governing shear over the tensile stress area (MPa)
    pub shear_stress_mpa: f64,

    /// Governing tension over the tensile stress area (MPa)
    pub tensile_stress_mpa: f64,

    /// Per-bolt positions and forces
    pub bolt_forces: Vec<BoltForce>,
}

impl BoltGroupResult {
    /// Check if the interaction ratio passes (≤ 1.0)
    pub fn passes(&self) -> bool {
        self.combined_ratio <= 1.0
    }
}

/// Evaluate a bolt group.
///
/// This is a pure function of its input: no shared state, no I/O, bounded
/// O(bolt count) work, identical inputs produce identical results.
///
/// # Arguments
///
/// * `input` - Arrangement, loads, bolt selection, and prying allowance
///
/// # Returns
///
/// * `Ok(BoltGroupResult)` - Per-bolt forces and the interaction check
/// * `Err(BoltError)` - Structured error; no partial result is produced
///
/// # Example
///
/// ```rust
/// use bolt_core::calculations::bolt_group::{calculate, BoltGroupInput};
/// use bolt_core::geometry::Arrangement;
/// use bolt_core::loads::LoadSet;
///
/// let input = BoltGroupInput {
///     label: "Ring".to_string(),
///     arrangement: Arrangement::Circular { diameter_mm: 400.0, num_bolts: 8 },
///     loads: LoadSet::new().with_axial(80.0),
///     grade: "Grade 8.8".to_string(),
///     size: "M20".to_string(),
///     prying_allowance: 1.1,
/// };
///
/// let result = calculate(&input).unwrap();
/// assert_eq!(result.max_tension_kn, 11.0);
/// ```
pub fn calculate(input: &BoltGroupInput) -> BoltResult<BoltGroupResult> {
    input.validate()?;

    let bolt_count = input.arrangement.bolt_count();
    if bolt_count < 2 {
        return Err(BoltError::insufficient_bolt_count(bolt_count));
    }

    let spec = catalog::lookup(&input.grade, &input.size)
        .ok_or_else(|| BoltError::unknown_bolt_spec(&input.grade, &input.size))?;

    let positions = input.arrangement.positions();
    let ibp = input.arrangement.polar_moment();
    let (xm, ym) = input.arrangement.half_extents();
    let n = bolt_count as f64;

    // Work in N and Nmm internally
    let vx = Newtons::from(Kilonewtons(input.loads.vx_kn)).0;
    let vy = Newtons::from(Kilonewtons(input.loads.vy_kn)).0;
    let tb = NewtonMillimetres::from(KilonewtonMetres(input.loads.torsion_knm)).0;
    let mb = NewtonMillimetres::from(KilonewtonMetres(input.loads.moment_major_knm)).0;
    let mm = NewtonMillimetres::from(KilonewtonMetres(input.loads.moment_minor_knm)).0;
    let nt = Newtons::from(Kilonewtons(input.loads.axial_kn)).0;

    let mut bolt_forces = Vec::with_capacity(positions.len());
    let mut max_shear_kn = 0.0_f64;
    let mut max_tension_kn = f64::NEG_INFINITY;

    for &(x, y) in &positions {
        // Direct shear, equal share per bolt; reaction opposes the applied
        // load, hence the sign flip. Torsion adds shear proportional to
        // distance from the centroid along the perpendicular axis.
        let shear_x = -vx / n - tb * y / ibp;
        let shear_y = -vy / n - tb * x / ibp;
        let shear_kn = Kilonewtons::from(Newtons(shear_x.hypot(shear_y))).0;

        // Tension: equal axial share plus linear bending contributions
        // about both axes, all scaled by the prying allowance. Bending
        // terms are signed: compression-side bolts see their net tension
        // reduced.
        let axial_share = nt / n;
        let major_bending = mb * y / (2.0 * ym * ym);
        let minor_bending = mm * x / (2.0 * xm * xm);
        let tension_kn = Kilonewtons::from(Newtons(
            (axial_share + major_bending + minor_bending) * input.prying_allowance,
        ))
        .0;

        max_shear_kn = max_shear_kn.max(shear_kn);
        max_tension_kn = max_tension_kn.max(tension_kn);
        bolt_forces.push(BoltForce { x_mm: x, y_mm: y, shear_kn, tension_kn });
    }

    let combined_ratio = (max_shear_kn / spec.shear_capacity_kn).powi(2)
        + (max_tension_kn / spec.tension_capacity_kn).powi(2);

    let area = SquareMillimetres(spec.tensile_area_mm2);
    let shear_stress =
        Megapascals::from_force_over_area(Newtons::from(Kilonewtons(max_shear_kn)), area);
    let tensile_stress =
        Megapascals::from_force_over_area(Newtons::from(Kilonewtons(max_tension_kn)), area);

    Ok(BoltGroupResult {
        bolt_count,
        grade: spec.grade.clone(),
        size: spec.size.clone(),
        max_shear_kn,
        max_tension_kn,
        polar_moment: ibp,
        shear_capacity_kn: spec.shear_capacity_kn,
        tension_capacity_kn: spec.tension_capacity_kn,
        combined_ratio,
        shear_stress_mpa: shear_stress.0,
        tensile_stress_mpa: tensile_stress.0,
        bolt_forces,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_input(num_rows: u32, num_cols: u32, loads: LoadSet) -> BoltGroupInput {
        BoltGroupInput {
            label: "Test Group".to_string(),
            arrangement: Arrangement::Rectangular {
                num_rows,
                num_cols,
                row_spacing_mm: 150.0,
                col_spacing_mm: 160.0,
            },
            loads,
            grade: "Grade 8.8".to_string(),
            size: "M24".to_string(),
            prying_allowance: 1.1,
        }
    }

    #[test]
    fn test_single_bolt_rejected() {
        let input = rect_input(1, 1, LoadSet::new());
        let err = calculate(&input).unwrap_err();
        assert_eq!(err, BoltError::InsufficientBoltCount { count: 1 });
    }

    #[test]
    fn test_unknown_bolt_spec() {
        let mut input = rect_input(2, 2, LoadSet::new());
        input.size = "M64".to_string();
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_BOLT_SPEC");
    }

    #[test]
    fn test_invalid_prying_allowance() {
        let mut input = rect_input(2, 2, LoadSet::new());
        input.prying_allowance = 0.9;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_pure_axial_is_uniform() {
        // Only Nt: every bolt carries α·Nt/n, no shear anywhere
        let mut input = rect_input(4, 4, LoadSet::new().with_axial(100.0));
        input.prying_allowance = 1.25;
        let result = calculate(&input).unwrap();

        let expected = 1.25 * 100.0 / 16.0;
        for force in &result.bolt_forces {
            assert!((force.tension_kn - expected).abs() < 1e-12);
            assert!(force.shear_kn.abs() < 1e-12);
        }
        assert!((result.max_tension_kn - expected).abs() < 1e-12);
    }

    #[test]
    fn test_pure_shear_is_uniform() {
        // Only Vx, Vy: every bolt carries √(Vx²+Vy²)/n, no torsion term
        let input = rect_input(4, 4, LoadSet::new().with_shear(20.0, 5.0));
        let result = calculate(&input).unwrap();

        let expected = (20.0_f64.powi(2) + 5.0_f64.powi(2)).sqrt() / 16.0;
        for force in &result.bolt_forces {
            assert!((force.shear_kn - expected).abs() < 1e-12);
        }
        assert!((result.max_shear_kn - expected).abs() < 1e-12);
    }

    #[test]
    fn test_moment_sign_convention() {
        // Major-axis moment alone: tension side mirrors the compression
        // side, nothing is clipped at zero.
        let input = BoltGroupInput {
            label: "Moment Pair".to_string(),
            arrangement: Arrangement::Rectangular {
                num_rows: 2,
                num_cols: 2,
                row_spacing_mm: 100.0,
                col_spacing_mm: 100.0,
            },
            loads: LoadSet::new().with_moments(10.0, 0.0),
            grade: "Grade 8.8".to_string(),
            size: "M20".to_string(),
            prying_allowance: 1.0,
        };
        let result = calculate(&input).unwrap();

        // ym = 100, y = ±50: Mb·1e6·y/(2·ym²) = ±25 kN
        assert!((result.max_tension_kn - 25.0).abs() < 1e-9);
        let min_tension = result
            .bolt_forces
            .iter()
            .map(|f| f.tension_kn)
            .fold(f64::INFINITY, f64::min);
        assert!((min_tension + 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_bolts_in_compression() {
        // Compressive axial load: max tension is negative, and the
        // interaction ratio still squares it.
        let input = rect_input(2, 2, LoadSet::new().with_axial(-40.0));
        let result = calculate(&input).unwrap();

        let expected = 1.1 * -40.0 / 4.0;
        assert!((result.max_tension_kn - expected).abs() < 1e-12);
        assert!(result.combined_ratio > 0.0);
    }

    #[test]
    fn test_regression_rectangular_combined() {
        // 4x4 at 150/160 spacing under all six components, Grade 8.8 M24,
        // α = 1.1. Values pinned from the elastic distribution formulas.
        let loads = LoadSet::new()
            .with_shear(20.0, 5.0)
            .with_torsion(10.0)
            .with_moments(50.0, 10.0)
            .with_axial(10.0);
        let result = calculate(&rect_input(4, 4, loads)).unwrap();

        assert_eq!(result.bolt_count, 16);
        assert!((result.polar_moment - 962_000.0).abs() < 1e-6);
        assert!((result.max_shear_kn - 4.556422703265).abs() < 1e-9);
        assert!((result.max_tension_kn - 82.328125).abs() < 1e-9);
        assert!((result.combined_ratio - 0.1247715062).abs() < 1e-9);
        assert!((result.shear_stress_mpa - 12.90771304).abs() < 1e-6);
        assert!((result.tensile_stress_mpa - 233.2241501).abs() < 1e-6);
        assert_eq!(result.shear_capacity_kn, 145.0);
        assert_eq!(result.tension_capacity_kn, 234.0);
        assert!(result.passes());
    }

    #[test]
    fn test_circular_axial_with_prying() {
        // d=400, 8 bolts, Nt=80, α=1.1: every bolt carries exactly 11.0 kN
        let input = BoltGroupInput {
            label: "Flange Ring".to_string(),
            arrangement: Arrangement::Circular { diameter_mm: 400.0, num_bolts: 8 },
            loads: LoadSet::new().with_axial(80.0),
            grade: "Grade 8.8".to_string(),
            size: "M20".to_string(),
            prying_allowance: 1.1,
        };
        let result = calculate(&input).unwrap();

        assert_eq!(result.max_tension_kn, 11.0);
        for force in &result.bolt_forces {
            assert_eq!(force.tension_kn, 11.0);
        }
        assert_eq!(result.polar_moment, 8.0 * 200.0 * 200.0);
    }

    #[test]
    fn test_governing_bolts_can_differ() {
        // Torsion governs shear at the far corner; major moment governs
        // tension at the top row. Both maxima are tracked independently.
        let loads = LoadSet::new().with_torsion(15.0).with_moments(40.0, 0.0);
        let result = calculate(&rect_input(4, 4, loads)).unwrap();

        let shear_governing = result
            .bolt_forces
            .iter()
            .max_by(|a, b| a.shear_kn.total_cmp(&b.shear_kn))
            .unwrap();
        let tension_governing = result
            .bolt_forces
            .iter()
            .max_by(|a, b| a.tension_kn.total_cmp(&b.tension_kn))
            .unwrap();

        assert!((shear_governing.shear_kn - result.max_shear_kn).abs() < 1e-12);
        assert!((tension_governing.tension_kn - result.max_tension_kn).abs() < 1e-12);
        // Tension peaks across the whole top row regardless of x
        assert_eq!(tension_governing.y_mm, 225.0);
    }

    #[test]
    fn test_idempotence() {
        let loads = LoadSet::new().with_shear(12.0, -7.0).with_torsion(3.5).with_axial(22.0);
        let input = rect_input(3, 2, loads);

        let first = calculate(&input).unwrap();
        let second = calculate(&input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_input_serialization_roundtrip() {
        let input = rect_input(4, 4, LoadSet::new().with_shear(20.0, 5.0));
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: BoltGroupInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&rect_input(2, 3, LoadSet::new().with_axial(30.0))).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();

        assert!(json.contains("max_shear_kn"));
        assert!(json.contains("combined_ratio"));
        assert!(json.contains("bolt_forces"));

        let roundtrip: BoltGroupResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}

//! Bolt Capacity Catalog (AS 4100)
//!
//! Design capacities for standard structural bolts per AS 4100, with the
//! capacity factor φ = 0.8 already applied:
//!
//! - φVf: design shear capacity, threads in the shear plane, taken on the
//!   tensile stress area (0.8 · 0.62 · fuf · As)
//! - φNtf: design tension capacity (0.8 · As · fuf)
//!
//! The catalog is a fixed, process-wide table covering the two structural
//! grades (4.6 commercial, 8.8 high-strength) in sizes M12 through M36.
//! It is initialized once and never mutated.
//!
//! Lookups are exact (grade, size) matches; a miss returns `None` rather
//! than an error, since an incompatible selection is an expected outcome
//! for the caller to handle.
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::catalog;
//!
//! let spec = catalog::lookup("Grade 8.8", "M24").unwrap();
//! assert_eq!(spec.shear_capacity_kn, 145.0);
//! assert_eq!(spec.tension_capacity_kn, 234.0);
//!
//! let grades = catalog::list_grades();
//! assert_eq!(grades, vec!["Grade 4.6", "Grade 8.8"]);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Design capacities and section properties for one (grade, size) pair.
///
/// Forces in kilonewtons, areas in mm², stresses in MPa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltSpec {
    /// Bolt grade label (e.g., "Grade 8.8")
    pub grade: String,

    /// Metric size label (e.g., "M24")
    pub size: String,

    /// Design shear capacity φVf, threads in the shear plane (kN)
    pub shear_capacity_kn: f64,

    /// Design tension capacity φNtf (kN)
    pub tension_capacity_kn: f64,

    /// Tensile stress area As (mm²)
    pub tensile_area_mm2: f64,

    /// Ultimate tensile strength fuf (MPa)
    pub ultimate_strength_mpa: f64,
}

impl std::fmt::Display for BoltSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} (φVf={:.1} kN, φNtf={:.1} kN)",
            self.grade, self.size, self.shear_capacity_kn, self.tension_capacity_kn
        )
    }
}

/// (grade, size, φVf kN, φNtf kN, As mm², fuf MPa)
///
/// Values rounded as published in AS 4100 design capacity tables.
const CATALOG_DATA: [(&str, &str, f64, f64, f64, f64); 12] = [
    ("Grade 4.6", "M12", 16.7, 27.0, 84.3, 400.0),
    ("Grade 4.6", "M16", 31.1, 50.2, 157.0, 400.0),
    ("Grade 4.6", "M20", 48.6, 78.4, 245.0, 400.0),
    ("Grade 4.6", "M24", 70.0, 113.0, 353.0, 400.0),
    ("Grade 4.6", "M30", 111.0, 180.0, 561.0, 400.0),
    ("Grade 4.6", "M36", 162.0, 261.0, 817.0, 400.0),
    ("Grade 8.8", "M12", 34.7, 56.0, 84.3, 830.0),
    ("Grade 8.8", "M16", 64.6, 104.0, 157.0, 830.0),
    ("Grade 8.8", "M20", 101.0, 163.0, 245.0, 830.0),
    ("Grade 8.8", "M24", 145.0, 234.0, 353.0, 830.0),
    ("Grade 8.8", "M30", 231.0, 373.0, 561.0, 830.0),
    ("Grade 8.8", "M36", 336.0, 542.0, 817.0, 830.0),
];

static CATALOG: Lazy<Vec<BoltSpec>> = Lazy::new(|| {
    CATALOG_DATA
        .iter()
        .map(|&(grade, size, phi_vf, phi_ntf, as_area, fuf)| BoltSpec {
            grade: grade.to_string(),
            size: size.to_string(),
            shear_capacity_kn: phi_vf,
            tension_capacity_kn: phi_ntf,
            tensile_area_mm2: as_area,
            ultimate_strength_mpa: fuf,
        })
        .collect()
});

/// Distinct grade labels in catalog insertion order.
pub fn list_grades() -> Vec<&'static str> {
    let mut grades: Vec<&'static str> = Vec::new();
    for spec in CATALOG.iter() {
        if !grades.contains(&spec.grade.as_str()) {
            grades.push(spec.grade.as_str());
        }
    }
    grades
}

/// Size labels available for a grade, in catalog order.
///
/// Returns an empty vector for an unknown grade.
pub fn list_sizes(grade: &str) -> Vec<&'static str> {
    CATALOG
        .iter()
        .filter(|spec| spec.grade == grade)
        .map(|spec| spec.size.as_str())
        .collect()
}

/// Look up the capacities for an exact (grade, size) pair.
///
/// Returns `None` when the pair is not in the catalog. Never panics.
pub fn lookup(grade: &str, size: &str) -> Option<&'static BoltSpec> {
    CATALOG.iter().find(|spec| spec.grade == grade && spec.size == size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_4_6_m12_values() {
        // Data fidelity anchor against the published table
        let spec = lookup("Grade 4.6", "M12").unwrap();
        assert_eq!(spec.shear_capacity_kn, 16.7);
        assert_eq!(spec.tension_capacity_kn, 27.0);
        assert_eq!(spec.tensile_area_mm2, 84.3);
        assert_eq!(spec.ultimate_strength_mpa, 400.0);
    }

    #[test]
    fn test_grades_in_insertion_order() {
        let grades = list_grades();
        assert_eq!(grades, vec!["Grade 4.6", "Grade 8.8"]);
    }

    #[test]
    fn test_sizes_in_catalog_order() {
        let sizes = list_sizes("Grade 8.8");
        assert_eq!(sizes, vec!["M12", "M16", "M20", "M24", "M30", "M36"]);
    }

    #[test]
    fn test_unknown_grade_yields_empty_sizes() {
        assert!(list_sizes("Grade 12.9").is_empty());
    }

    #[test]
    fn test_lookup_miss_is_none() {
        assert!(lookup("Grade 8.8", "M64").is_none());
        assert!(lookup("Grade 10.9", "M20").is_none());
    }

    #[test]
    fn test_capacity_derivation_consistency() {
        // φNtf = 0.8 · As · fuf and φVf = 0.8 · 0.62 · fuf · As,
        // within table rounding (published values keep 3 significant figures).
        for spec in [lookup("Grade 4.6", "M12").unwrap(), lookup("Grade 8.8", "M24").unwrap()] {
            let ntf = 0.8 * spec.tensile_area_mm2 * spec.ultimate_strength_mpa / 1000.0;
            let vf = 0.8 * 0.62 * spec.ultimate_strength_mpa * spec.tensile_area_mm2 / 1000.0;
            assert!((ntf - spec.tension_capacity_kn).abs() / ntf < 0.005);
            assert!((vf - spec.shear_capacity_kn).abs() / vf < 0.005);
        }
    }

    #[test]
    fn test_spec_display() {
        let spec = lookup("Grade 8.8", "M24").unwrap();
        let display = format!("{}", spec);
        assert!(display.contains("Grade 8.8 M24"));
        assert!(display.contains("145.0"));
    }

    #[test]
    fn test_spec_serialization() {
        let spec = lookup("Grade 4.6", "M16").unwrap();
        let json = serde_json::to_string(spec).unwrap();
        let roundtrip: BoltSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(*spec, roundtrip);
    }
}

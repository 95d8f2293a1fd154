//! # bolt_core - Bolt Group Analysis Engine
//!
//! `bolt_core` computes per-bolt shear and tension demand for a group of
//! fasteners under combined shear, torsion, biaxial bending, and axial load,
//! then checks the governing bolt against tabulated design capacities. All
//! inputs and outputs are JSON-serializable, making it straightforward to
//! drive from any front-end.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: evaluation is a pure function of its input
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Fixed Units**: millimetres, kilonewtons, kilonewton-metres, megapascals
//!   at the boundary; N/mm internally
//!
//! ## Quick Start
//!
//! ```rust
//! use bolt_core::{calculate, Arrangement, BoltGroupInput, LoadSet};
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
//! println!("Max shear: {:.2} kN", result.max_shear_kn);
//! println!("Interaction ratio: {:.3}", result.combined_ratio);
//! assert!(result.passes());
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The force distribution engine
//! - [`catalog`] - Static bolt capacity catalog (AS 4100)
//! - [`geometry`] - Bolt pattern arrangements and section properties
//! - [`loads`] - Applied load components
//! - [`history`] - Append-only saved-calculation snapshots
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod catalog;
pub mod errors;
pub mod geometry;
pub mod history;
pub mod loads;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, BoltForce, BoltGroupInput, BoltGroupResult};
pub use catalog::{list_grades, list_sizes, lookup, BoltSpec};
pub use errors::{BoltError, BoltResult};
pub use geometry::Arrangement;
pub use history::{History, SavedCalculation};
pub use loads::LoadSet;

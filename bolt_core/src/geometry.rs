//! # Bolt Group Geometry
//!
//! Arrangement patterns for a group of fasteners and their geometric
//! section properties. Positions are always reported relative to the
//! group's geometric centroid, which is what the elastic distribution
//! theory in [`crate::calculations`] assumes.
//!
//! ## Supported Patterns
//!
//! - **Rectangular**: a rows × cols grid with uniform spacing in each
//!   direction
//! - **Circular**: bolts evenly spaced on a circle, first bolt at angle 0,
//!   increasing counter-clockwise
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::geometry::Arrangement;
//!
//! let group = Arrangement::Circular { diameter_mm: 400.0, num_bolts: 8 };
//! assert_eq!(group.bolt_count(), 8);
//!
//! // For a circular pattern the polar moment has the closed form n·r²
//! assert_eq!(group.polar_moment(), 8.0 * 200.0 * 200.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{BoltError, BoltResult};

/// Bolt pattern geometry.
///
/// ## JSON Examples
///
/// ```json
/// { "type": "Rectangular", "num_rows": 4, "num_cols": 4,
///   "row_spacing_mm": 150.0, "col_spacing_mm": 160.0 }
/// ```
///
/// ```json
/// { "type": "Circular", "diameter_mm": 400.0, "num_bolts": 8 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Arrangement {
    /// Grid of num_rows × num_cols bolts with uniform spacing
    Rectangular {
        num_rows: u32,
        num_cols: u32,
        /// Vertical centre-to-centre spacing between rows (mm)
        row_spacing_mm: f64,
        /// Horizontal centre-to-centre spacing between columns (mm)
        col_spacing_mm: f64,
    },
    /// Bolts evenly spaced on a circle
    Circular {
        /// Pitch circle diameter (mm)
        diameter_mm: f64,
        num_bolts: u32,
    },
}

impl Arrangement {
    /// Total number of bolts in the group.
    pub fn bolt_count(&self) -> u32 {
        match *self {
            Arrangement::Rectangular { num_rows, num_cols, .. } => num_rows * num_cols,
            Arrangement::Circular { num_bolts, .. } => num_bolts,
        }
    }

    /// Validate pattern parameters.
    pub fn validate(&self) -> BoltResult<()> {
        match *self {
            Arrangement::Rectangular {
                num_rows,
                num_cols,
                row_spacing_mm,
                col_spacing_mm,
            } => {
                if num_rows < 1 {
                    return Err(BoltError::invalid_input(
                        "num_rows",
                        num_rows.to_string(),
                        "At least one row is required",
                    ));
                }
                if num_cols < 1 {
                    return Err(BoltError::invalid_input(
                        "num_cols",
                        num_cols.to_string(),
                        "At least one column is required",
                    ));
                }
                if row_spacing_mm <= 0.0 {
                    return Err(BoltError::invalid_input(
                        "row_spacing_mm",
                        row_spacing_mm.to_string(),
                        "Row spacing must be positive",
                    ));
                }
                if col_spacing_mm <= 0.0 {
                    return Err(BoltError::invalid_input(
                        "col_spacing_mm",
                        col_spacing_mm.to_string(),
                        "Column spacing must be positive",
                    ));
                }
            }
            Arrangement::Circular { diameter_mm, .. } => {
                if diameter_mm <= 0.0 {
                    return Err(BoltError::invalid_input(
                        "diameter_mm",
                        diameter_mm.to_string(),
                        "Pitch circle diameter must be positive",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Bolt positions (x, y) in millimetres relative to the group centroid.
    ///
    /// Rectangular grids are centred so the centroid falls at the origin;
    /// circular patterns start at angle 0 and step counter-clockwise by
    /// 2π/n.
    pub fn positions(&self) -> Vec<(f64, f64)> {
        match *self {
            Arrangement::Rectangular {
                num_rows,
                num_cols,
                row_spacing_mm,
                col_spacing_mm,
            } => {
                let x_offset = (num_cols - 1) as f64 * col_spacing_mm / 2.0;
                let y_offset = (num_rows - 1) as f64 * row_spacing_mm / 2.0;
                let mut positions = Vec::with_capacity((num_rows * num_cols) as usize);
                for row in 0..num_rows {
                    for col in 0..num_cols {
                        let x = col as f64 * col_spacing_mm - x_offset;
                        let y = row as f64 * row_spacing_mm - y_offset;
                        positions.push((x, y));
                    }
                }
                positions
            }
            Arrangement::Circular { diameter_mm, num_bolts } => {
                let radius = diameter_mm / 2.0;
                let step = std::f64::consts::TAU / num_bolts as f64;
                (0..num_bolts)
                    .map(|i| {
                        let angle = i as f64 * step;
                        (radius * angle.cos(), radius * angle.sin())
                    })
                    .collect()
            }
        }
    }

    /// Polar moment Ibp of the group about its centroid, each bolt taken
    /// as a unit area: Σ(xᵢ² + yᵢ²).
    ///
    /// All bolts of a circular pattern sit at the same radius, so the sum
    /// collapses to the closed form n·r².
    pub fn polar_moment(&self) -> f64 {
        match *self {
            Arrangement::Rectangular { .. } => {
                self.positions().iter().map(|&(x, y)| x * x + y * y).sum()
            }
            Arrangement::Circular { diameter_mm, num_bolts } => {
                let radius = diameter_mm / 2.0;
                num_bolts as f64 * radius * radius
            }
        }
    }

    /// Section modulus reference half-extents (xm, ym) in millimetres.
    ///
    /// xm = (num_cols · col spacing)/2 and ym = (num_rows · row spacing)/2
    /// for a grid; both equal the pitch circle radius for a circular
    /// pattern.
    pub fn half_extents(&self) -> (f64, f64) {
        match *self {
            Arrangement::Rectangular {
                num_rows,
                num_cols,
                row_spacing_mm,
                col_spacing_mm,
            } => (
                num_cols as f64 * col_spacing_mm / 2.0,
                num_rows as f64 * row_spacing_mm / 2.0,
            ),
            Arrangement::Circular { diameter_mm, .. } => (diameter_mm / 2.0, diameter_mm / 2.0),
        }
    }
}

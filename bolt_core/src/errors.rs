//! # Error Types
//!
//! Structured error types for bolt_core. Every variant carries enough
//! context for a caller to surface a descriptive, user-correctable message
//! without string matching.
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::errors::{BoltError, BoltResult};
//!
//! fn validate_spacing(spacing_mm: f64) -> BoltResult<()> {
//!     if spacing_mm <= 0.0 {
//!         return Err(BoltError::invalid_input(
//!             "row_spacing_mm",
//!             spacing_mm.to_string(),
//!             "Spacing must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bolt_core operations
pub type BoltResult<T> = Result<T, BoltError>;

/// Structured error type for bolt group evaluation.
///
/// All variants are terminal for the evaluation attempt: no partial result
/// is produced, and correction requires new input from the caller.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BoltError {
    /// An input value is invalid (out of range, non-physical, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Fewer than two bolts in the group
    #[error("Bolt group has {count} bolt(s) - at least 2 are required to distribute torsion and moment")]
    InsufficientBoltCount { count: u32 },

    /// Selected grade/size pair is absent from the capacity catalog
    #[error("No capacity data for {grade} {size} - combination not in the bolt catalog")]
    UnknownBoltSpec { grade: String, size: String },
}

impl BoltError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        BoltError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InsufficientBoltCount error
    pub fn insufficient_bolt_count(count: u32) -> Self {
        BoltError::InsufficientBoltCount { count }
    }

    /// Create an UnknownBoltSpec error
    pub fn unknown_bolt_spec(grade: impl Into<String>, size: impl Into<String>) -> Self {
        BoltError::UnknownBoltSpec {
            grade: grade.into(),
            size: size.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BoltError::InvalidInput { .. } => "INVALID_INPUT",
            BoltError::InsufficientBoltCount { .. } => "INSUFFICIENT_BOLT_COUNT",
            BoltError::UnknownBoltSpec { .. } => "UNKNOWN_BOLT_SPEC",
        }
    }
}

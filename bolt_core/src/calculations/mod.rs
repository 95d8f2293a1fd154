//! # Bolt Group Calculations
//!
//! Calculation modules follow the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, BoltError>` - Pure calculation function
//!
//! Each evaluation is stateless and idempotent: identical inputs produce
//! identical results, and nothing is shared between invocations. The host
//! may re-invoke `calculate` as often as its inputs change.
//!
//! ## Available Calculations
//!
//! - [`bolt_group`] - Elastic force distribution over a fastener group with
//!   combined shear/tension capacity check

pub mod bolt_group;

// Re-export commonly used types
pub use bolt_group::{calculate, BoltForce, BoltGroupInput, BoltGroupResult};

//! Crate-level supporting utilities.
//!
//! These modules back the [`crate::models`] implementations but are exposed
//! because they're useful on their own:
//!
//! - [`calibration`]: parametric curve models, the nonlinear-calibration
//!   capability seam, and typed per-stage fit records.
//! - [`constraint`]: type-level numeric constraints with zero runtime cost.
//! - [`units`]: extensions to [`uom`].

pub mod calibration;
pub mod constraint;
pub mod units;

//! Parametric curve calibration support.
//!
//! Site calibration fits a handful of empirical response curves to observed
//! data — fungal growth rate against temperature, percent loss of xylem
//! conductance against water potential, canopy conductance against vapor
//! pressure deficit — and every stage follows the same shape: pick a model
//! function, fit its parameters to observations, simulate over the
//! observation grid, and record how well the fit explains the data.
//!
//! This module provides that shape once:
//!
//! - [`ParametricCurve`] and its implementations ([`Gaussian`], [`Sigmoid`],
//!   [`LogarithmicResponse`]) are the model functions.
//! - [`NonlinearCalibrator`] is the capability seam for the least-squares
//!   backend. This crate defines the interface only; a concrete optimizer
//!   is supplied by the caller.
//! - [`CalibrationStage`] is the typed per-stage result record, replacing
//!   ad hoc maps of intermediate arrays.

mod curve;
mod fit;
mod stage;

pub use curve::{Gaussian, LogarithmicResponse, ParametricCurve, Sigmoid};
pub use fit::{Fit, NonlinearCalibrator};
pub use stage::{CalibrationStage, r_squared};

use thiserror::Error;

use crate::models::canopy::aerodynamic::core::{AtmosphereError, GeometryError};

/// Errors that can occur while solving a timestep.
///
/// These abort the solve for the offending timestep only; a caller
/// processing a time series decides per record whether to skip,
/// interpolate, or abort the run. Reaching the iteration cap is *not* an
/// error — see [`FluxState::converged`](super::super::FluxState).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The site geometry cannot support a logarithmic profile.
    #[error("invalid canopy geometry")]
    Geometry(#[from] GeometryError),

    /// A meteorological input is outside its physical range.
    ///
    /// Raised during input resolution, before any iteration begins.
    #[error("invalid atmospheric state")]
    Atmosphere(#[from] AtmosphereError),

    /// The fixed-point iteration produced a non-physical state.
    ///
    /// `denominator` is the corrected log-profile term that became
    /// singular or drove the friction velocity to zero or below. The solve
    /// aborts immediately; there is no retry.
    #[error("numerical instability at pass {iteration}: profile denominator {denominator}, zeta {zeta}")]
    NumericalInstability {
        iteration: usize,
        denominator: f64,
        zeta: f64,
    },

    /// The conductance denominator is near-singular.
    #[error("degenerate geometry: conductance denominator {denominator} is near zero")]
    DegenerateGeometry { denominator: f64 },
}

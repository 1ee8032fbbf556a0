//! Stability-corrected aerodynamic conductance core.
//!
//! One solve couples three pieces: input resolution (site geometry, air
//! properties, canopy–air temperature difference), the Monin–Obukhov
//! fixed-point iteration for `(u*, H, ζ)`, and the conductance calculation
//! from the converged profile corrections.

mod air;
mod atmosphere;
mod conductance;
mod config;
mod constants;
mod geometry;
mod results;
mod solve;
mod stability;

pub use air::{AtmosphereError, molar_density};
pub use atmosphere::AtmosphericState;
pub use config::SolverConfig;
pub use geometry::{CanopyGeometry, GeometryError, RoughnessParameters};
pub use results::{ConductanceResult, FluxState};
pub use solve::SolveError;
pub use stability::DiabaticCorrection;

use uom::{ConstZero, si::f64::Velocity};

use solve::Resolved;

/// Solves one meteorological timestep against fixed site geometry.
///
/// # Errors
///
/// Returns a [`SolveError`] if an input is outside its physical range or
/// the iteration becomes unstable. Reaching the iteration cap is reported
/// through the result's `converged` flag instead.
pub(super) fn solve(
    atmosphere: &AtmosphericState,
    geometry: &CanopyGeometry,
    config: &SolverConfig,
) -> Result<ConductanceResult, SolveError> {
    let resolved = Resolved::new(atmosphere, geometry)?;

    // Still air transports nothing; skip the iteration entirely.
    if resolved.wind_speed == Velocity::ZERO {
        return Ok(ConductanceResult::still_air());
    }

    let fluxes = solve::iterate(&resolved, config)?;
    let conductance = conductance::turbulent_conductance(&resolved, &fluxes)?;

    Ok(ConductanceResult {
        heat_conductance: conductance,
        vapor_conductance: conductance,
        fluxes,
    })
}

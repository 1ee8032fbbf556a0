//! Fixed-point solver for the stability-corrected flux state.

mod error;
mod resolved;

pub use error::SolveError;
pub(super) use resolved::Resolved;

use log::{debug, trace};
use uom::si::{
    f64::{HeatFluxDensity, TemperatureInterval, Velocity},
    temperature_interval::kelvin as delta_kelvin,
};
use uom::ConstZero;

use super::{config::SolverConfig, constants, results::FluxState, stability::DiabaticCorrection};

/// Denominator magnitude below which a corrected log-profile term is
/// treated as singular.
const PROFILE_EPSILON: f64 = 1e-6;

/// Iterates the Monin–Obukhov similarity relations to a self-consistent
/// `(u*, H, ζ)` by successive substitution.
///
/// Starts from the neutral profile, then alternates between updating the
/// stability parameter from the current fluxes and updating the fluxes
/// from the corrected profiles, until the friction-velocity residual meets
/// tolerance (subject to the minimum-iteration floor) or the iteration
/// budget runs out. Running out is not an error: the last estimate is
/// returned with `converged = false` for the caller to judge.
///
/// The caller must ensure `resolved.wind_speed > 0`; still air is handled
/// before iteration ever starts.
///
/// # Errors
///
/// Returns [`SolveError::NumericalInstability`] if a profile denominator
/// becomes singular or the friction velocity is driven to zero or below.
pub(super) fn iterate(resolved: &Resolved, config: &SolverConfig) -> Result<FluxState, SolveError> {
    let correction = DiabaticCorrection::neutral();
    let mut u_star = friction_velocity(resolved, &correction, 0, 0.0)?;
    let mut heat_flux = sensible_heat_flux(resolved, u_star, &correction, 0, 0.0)?;

    let mut state = FluxState {
        friction_velocity: u_star,
        heat_flux,
        zeta: 0.0,
        correction,
        iterations: 0,
        residual: Velocity::ZERO,
        converged: false,
    };

    while state.iterations < config.max_iterations {
        let pass = state.iterations;

        let zeta = stability_parameter(resolved, u_star, heat_flux);
        let correction = DiabaticCorrection::at(zeta);

        let u_new = friction_velocity(resolved, &correction, pass, zeta)?;
        let h_new = sensible_heat_flux(resolved, u_new, &correction, pass, zeta)?;

        let residual = (u_new - u_star).abs();
        u_star = u_new;
        heat_flux = h_new;

        state = FluxState {
            friction_velocity: u_star,
            heat_flux,
            zeta,
            correction,
            iterations: pass + 1,
            residual,
            converged: false,
        };

        trace!(
            "pass {}: zeta {:.6}, psi_m {:.4}, psi_h {:.4}, u* {:.6} m/s, H {:.3} W/m2",
            state.iterations,
            zeta,
            correction.momentum,
            correction.heat,
            u_star.value,
            heat_flux.value,
        );

        if residual <= config.tolerance && state.iterations >= config.min_iterations {
            state.converged = true;
            return Ok(state);
        }
    }

    debug!(
        "no convergence after {} passes: residual {} m/s above tolerance",
        state.iterations, state.residual.value,
    );

    Ok(state)
}

/// Friction velocity from the corrected logarithmic wind profile,
/// `u* = u_ref·k / (ln((z − d)/zm) + ψm)`.
fn friction_velocity(
    resolved: &Resolved,
    correction: &DiabaticCorrection,
    iteration: usize,
    zeta: f64,
) -> Result<Velocity, SolveError> {
    let denominator = resolved.ln_momentum + correction.momentum;
    check_denominator(denominator, iteration, zeta)?;

    let u_star = resolved.wind_speed * (constants::VON_KARMAN / denominator);
    if u_star <= Velocity::ZERO || !u_star.is_finite() {
        return Err(SolveError::NumericalInstability {
            iteration,
            denominator,
            zeta,
        });
    }

    Ok(u_star)
}

/// Sensible heat flux from the corrected temperature profile,
/// `H = k·ρ·cp·u*·(T_canopy − T_ref) / (ln((z − d)/zh) + ψh)`.
fn sensible_heat_flux(
    resolved: &Resolved,
    u_star: Velocity,
    correction: &DiabaticCorrection,
    iteration: usize,
    zeta: f64,
) -> Result<HeatFluxDensity, SolveError> {
    let denominator = resolved.ln_heat + correction.heat;
    check_denominator(denominator, iteration, zeta)?;

    Ok(resolved.canopy_air_delta
        * resolved.molar_density
        * constants::specific_heat_of_air()
        * u_star
        * (constants::VON_KARMAN / denominator))
}

/// Monin–Obukhov stability parameter,
/// `ζ = −k·g·z·H / (ρ·cp·T_ref·u*³)`.
fn stability_parameter(resolved: &Resolved, u_star: Velocity, heat_flux: HeatFluxDensity) -> f64 {
    debug_assert!(u_star > Velocity::ZERO);

    let buoyancy = constants::gravity() * resolved.reference_height * heat_flux;
    let shear = resolved.molar_density
        * constants::specific_heat_of_air()
        * (u_star * u_star * u_star);
    let scale: TemperatureInterval = buoyancy / shear;

    -constants::VON_KARMAN * scale.get::<delta_kelvin>() / resolved.air_temperature_kelvin
}

fn check_denominator(denominator: f64, iteration: usize, zeta: f64) -> Result<(), SolveError> {
    if denominator.is_finite() && denominator.abs() >= PROFILE_EPSILON {
        Ok(())
    } else {
        Err(SolveError::NumericalInstability {
            iteration,
            denominator,
            zeta,
        })
    }
}

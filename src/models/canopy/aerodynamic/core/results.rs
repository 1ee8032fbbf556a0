//! Result types for the aerodynamic conductance solve.

use uom::{
    ConstZero,
    si::f64::{HeatFluxDensity, Velocity},
};

use crate::support::units::MolarFlux;

use super::stability::DiabaticCorrection;

/// Converged (or best-effort) turbulent flux state for one timestep.
///
/// Created by the flux iteration and consumed by the conductance
/// calculation; each solve owns its state exclusively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluxState {
    /// Friction velocity u*.
    pub friction_velocity: Velocity,

    /// Sensible heat flux between canopy and reference height.
    /// Positive when the canopy is warmer than the air (upward flux).
    pub heat_flux: HeatFluxDensity,

    /// Monin–Obukhov stability parameter ζ at the final pass.
    pub zeta: f64,

    /// Diabatic corrections at the final pass.
    pub correction: DiabaticCorrection,

    /// Fixed-point passes performed.
    pub iterations: usize,

    /// Final friction-velocity residual `|u*_new − u*|`.
    pub residual: Velocity,

    /// Whether the residual met tolerance within the iteration budget.
    /// When `false` the state is the last estimate, reported for the
    /// caller to judge.
    pub converged: bool,
}

impl FluxState {
    /// The state of still air: no wind, no turbulent transport.
    #[must_use]
    pub(super) fn still_air() -> Self {
        Self {
            friction_velocity: Velocity::ZERO,
            heat_flux: HeatFluxDensity::ZERO,
            zeta: 0.0,
            correction: DiabaticCorrection::neutral(),
            iterations: 0,
            residual: Velocity::ZERO,
            converged: true,
        }
    }
}

/// Boundary-layer conductances and solve diagnostics for one timestep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConductanceResult {
    /// Boundary-layer conductance for heat, gHa.
    pub heat_conductance: MolarFlux,

    /// Aerodynamic conductance for vapor, gVa.
    ///
    /// This is the same turbulent term as gHa; diffusivity-specific
    /// scaling is applied by downstream consumers.
    pub vapor_conductance: MolarFlux,

    /// Final flux state, including convergence diagnostics.
    pub fluxes: FluxState,
}

impl ConductanceResult {
    /// Zero conductances for still air.
    #[must_use]
    pub(super) fn still_air() -> Self {
        Self {
            heat_conductance: MolarFlux::ZERO,
            vapor_conductance: MolarFlux::ZERO,
            fluxes: FluxState::still_air(),
        }
    }

    /// Whether the flux iteration converged.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.fluxes.converged
    }
}

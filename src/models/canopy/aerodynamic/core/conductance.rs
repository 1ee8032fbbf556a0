//! Turbulent conductance from the converged flux state.

use crate::support::units::MolarFlux;

use super::{
    constants,
    results::FluxState,
    solve::{Resolved, SolveError},
};

/// Denominator magnitude below which the conductance is considered
/// singular.
const DEGENERACY_EPSILON: f64 = 1e-6;

/// Boundary-layer conductance between the reference height and the canopy,
/// `gHa = k²·ρ·u_ref / [(ln((z − d)/zm) + ψm)·(ln((z − d)/zh) + ψh)]`.
///
/// The same turbulent term serves as the aerodynamic conductance for
/// vapor; diffusivity-specific scaling is applied by downstream consumers.
///
/// # Errors
///
/// Returns [`SolveError::DegenerateGeometry`] if the corrected profile
/// product is non-finite or within ε of zero.
pub(super) fn turbulent_conductance(
    resolved: &Resolved,
    fluxes: &FluxState,
) -> Result<MolarFlux, SolveError> {
    let denominator = (resolved.ln_momentum + fluxes.correction.momentum)
        * (resolved.ln_heat + fluxes.correction.heat);
    if !denominator.is_finite() || denominator.abs() < DEGENERACY_EPSILON {
        return Err(SolveError::DegenerateGeometry { denominator });
    }

    let k = constants::VON_KARMAN;
    Ok(resolved.molar_density * resolved.wind_speed * (k * k / denominator))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Length, MolarConcentration, TemperatureInterval, Velocity},
        length::meter,
        molar_concentration::mole_per_cubic_meter,
        velocity::meter_per_second,
    };
    use uom::ConstZero;

    use crate::models::canopy::aerodynamic::core::stability::DiabaticCorrection;
    use crate::models::canopy::aerodynamic::core::results::FluxState;

    fn resolved(ln_momentum: f64, ln_heat: f64) -> Resolved {
        Resolved {
            wind_speed: Velocity::new::<meter_per_second>(3.0),
            reference_height: Length::new::<meter>(10.0),
            molar_density: MolarConcentration::new::<mole_per_cubic_meter>(41.6),
            air_temperature_kelvin: 293.15,
            canopy_air_delta: TemperatureInterval::ZERO,
            ln_momentum,
            ln_heat,
        }
    }

    fn neutral_fluxes() -> FluxState {
        FluxState {
            friction_velocity: Velocity::new::<meter_per_second>(0.46),
            heat_flux: uom::si::f64::HeatFluxDensity::ZERO,
            zeta: 0.0,
            correction: DiabaticCorrection::neutral(),
            iterations: 10,
            residual: Velocity::ZERO,
            converged: true,
        }
    }

    #[test]
    fn neutral_conductance_matches_log_profile_form() {
        let resolved = resolved(2.6026896854443837, 4.212127597878421);
        let g = turbulent_conductance(&resolved, &neutral_fluxes()).unwrap();

        let expected = 0.4 * 0.4 * 41.6 * 3.0 / (2.6026896854443837 * 4.212127597878421);
        assert_relative_eq!(g.value, expected, epsilon = 1e-12);
    }

    #[test]
    fn near_singular_profile_product_is_degenerate() {
        let resolved = resolved(2.6, 4.2);
        let mut fluxes = neutral_fluxes();
        fluxes.correction = DiabaticCorrection {
            momentum: -2.6,
            heat: 1.0,
        };

        assert!(matches!(
            turbulent_conductance(&resolved, &fluxes),
            Err(SolveError::DegenerateGeometry { .. })
        ));
    }
}

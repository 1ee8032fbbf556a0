//! Pre-iteration resolution of the meteorological and site inputs.

use uom::{
    ConstZero,
    si::{
        f64::{Length, MolarConcentration, TemperatureInterval, Velocity},
        ratio::ratio,
        thermodynamic_temperature::kelvin,
    },
};

use crate::models::canopy::aerodynamic::core::{AtmosphericState, CanopyGeometry, air};
use crate::support::units::TemperatureDifference;

use super::SolveError;

/// Inputs resolved into the fixed per-solve quantities the iteration needs.
///
/// Everything fallible happens here, before the first pass: the molar
/// density (pressure and temperature range checks) and the log-profile
/// terms, which are always defined because geometry construction
/// guarantees `z − d > 0`.
pub struct Resolved {
    pub wind_speed: Velocity,
    pub reference_height: Length,
    pub molar_density: MolarConcentration,
    pub air_temperature_kelvin: f64,
    /// Canopy minus air temperature; zero when no canopy temperature was
    /// observed, giving a neutral sensible heat flux.
    pub canopy_air_delta: TemperatureInterval,
    /// `ln((z − d)/zm)`.
    pub ln_momentum: f64,
    /// `ln((z − d)/zh)`.
    pub ln_heat: f64,
}

impl Resolved {
    /// Resolves one timestep's inputs.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Atmosphere`] if the pressure or a temperature
    /// is outside its physical range.
    pub fn new(
        atmosphere: &AtmosphericState,
        geometry: &CanopyGeometry,
    ) -> Result<Self, SolveError> {
        let molar_density =
            air::molar_density(atmosphere.pressure(), atmosphere.air_temperature())?;

        let above_displacement = geometry.reference_height() - geometry.displacement();
        let ln_momentum = (above_displacement / geometry.roughness_momentum())
            .get::<ratio>()
            .ln();
        let ln_heat = (above_displacement / geometry.roughness_heat())
            .get::<ratio>()
            .ln();

        let canopy_air_delta = match atmosphere.canopy_temperature() {
            Some(canopy) => canopy.minus(atmosphere.air_temperature()),
            None => TemperatureInterval::ZERO,
        };

        Ok(Self {
            wind_speed: atmosphere.wind_speed(),
            reference_height: geometry.reference_height(),
            molar_density,
            air_temperature_kelvin: atmosphere.air_temperature().get::<kelvin>(),
            canopy_air_delta,
            ln_momentum,
            ln_heat,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        length::meter, pressure::kilopascal, temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::degree_celsius, velocity::meter_per_second,
    };
    use uom::si::f64::{Pressure, ThermodynamicTemperature};

    #[test]
    fn resolves_log_profile_terms_and_delta_t() {
        let geometry = CanopyGeometry::new(
            Length::new::<meter>(5.0),
            Length::new::<meter>(10.0),
        )
        .unwrap();
        let atmosphere = AtmosphericState::new(
            Velocity::new::<meter_per_second>(3.0),
            Pressure::new::<kilopascal>(101.3),
            ThermodynamicTemperature::new::<degree_celsius>(20.0),
            Some(ThermodynamicTemperature::new::<degree_celsius>(22.0)),
        )
        .unwrap();

        let resolved = Resolved::new(&atmosphere, &geometry).unwrap();

        // z − d = 6.75 over zm = 0.5 and zh = 0.1.
        assert_relative_eq!(resolved.ln_momentum, (6.75_f64 / 0.5).ln(), epsilon = 1e-12);
        assert_relative_eq!(resolved.ln_heat, (6.75_f64 / 0.1).ln(), epsilon = 1e-12);
        assert_relative_eq!(
            resolved.canopy_air_delta.get::<delta_kelvin>(),
            2.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(resolved.air_temperature_kelvin, 293.15, epsilon = 1e-12);
    }

    #[test]
    fn missing_canopy_temperature_gives_zero_delta_t() {
        let geometry =
            CanopyGeometry::new(Length::new::<meter>(5.0), Length::new::<meter>(10.0)).unwrap();
        let atmosphere = AtmosphericState::new(
            Velocity::new::<meter_per_second>(3.0),
            Pressure::new::<kilopascal>(101.3),
            ThermodynamicTemperature::new::<degree_celsius>(20.0),
            None,
        )
        .unwrap();

        let resolved = Resolved::new(&atmosphere, &geometry).unwrap();
        assert_eq!(resolved.canopy_air_delta, TemperatureInterval::ZERO);
    }
}

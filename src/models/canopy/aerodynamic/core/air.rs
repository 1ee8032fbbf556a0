//! Air properties at the reference height.

use thiserror::Error;
use uom::si::{
    f64::{MolarConcentration, Pressure, ThermodynamicTemperature, Velocity},
    molar_concentration::mole_per_cubic_meter,
    pressure::kilopascal,
    thermodynamic_temperature::kelvin,
};

/// Molar density of dry air at 101.3 kPa and 273.15 K, mol m⁻³.
const REFERENCE_MOLAR_DENSITY: f64 = 44.6;
const REFERENCE_PRESSURE_KPA: f64 = 101.3;
const REFERENCE_TEMPERATURE_K: f64 = 273.15;

/// Errors for meteorological inputs outside their physical range.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AtmosphereError {
    #[error("pressure must be positive: {pressure:?}")]
    NonPositivePressure { pressure: Pressure },

    #[error("temperature must be above absolute zero: {temperature:?}")]
    BelowAbsoluteZero { temperature: ThermodynamicTemperature },

    #[error("wind speed must not be negative: {wind_speed:?}")]
    NegativeWindSpeed { wind_speed: Velocity },
}

/// Molar density of air at the given pressure and temperature.
///
/// Ideal-gas scaling of the reference density: 44.6 mol m⁻³ at 101.3 kPa
/// and 273.15 K.
///
/// # Errors
///
/// Returns an [`AtmosphereError`] if the pressure is not positive or the
/// temperature is at or below absolute zero.
pub fn molar_density(
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
) -> Result<MolarConcentration, AtmosphereError> {
    check_pressure(pressure)?;
    check_temperature(temperature)?;

    let pressure_ratio = pressure.get::<kilopascal>() / REFERENCE_PRESSURE_KPA;
    let temperature_ratio = REFERENCE_TEMPERATURE_K / temperature.get::<kelvin>();

    Ok(MolarConcentration::new::<mole_per_cubic_meter>(
        REFERENCE_MOLAR_DENSITY * pressure_ratio * temperature_ratio,
    ))
}

pub(super) fn check_pressure(pressure: Pressure) -> Result<(), AtmosphereError> {
    if pressure.get::<kilopascal>() > 0.0 {
        Ok(())
    } else {
        Err(AtmosphereError::NonPositivePressure { pressure })
    }
}

pub(super) fn check_temperature(
    temperature: ThermodynamicTemperature,
) -> Result<(), AtmosphereError> {
    if temperature.get::<kelvin>() > 0.0 {
        Ok(())
    } else {
        Err(AtmosphereError::BelowAbsoluteZero { temperature })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    #[test]
    fn reference_conditions_recover_reference_density() {
        let rho = molar_density(
            Pressure::new::<kilopascal>(101.3),
            ThermodynamicTemperature::new::<degree_celsius>(0.0),
        )
        .unwrap();

        assert_relative_eq!(rho.get::<mole_per_cubic_meter>(), 44.6, epsilon = 1e-12);
    }

    #[test]
    fn density_falls_with_warming() {
        let rho = molar_density(
            Pressure::new::<kilopascal>(101.3),
            ThermodynamicTemperature::new::<degree_celsius>(20.0),
        )
        .unwrap();

        assert_relative_eq!(
            rho.get::<mole_per_cubic_meter>(),
            44.6 * 273.15 / 293.15,
            epsilon = 1e-12
        );
    }

    #[test]
    fn rejects_non_physical_inputs() {
        let t = ThermodynamicTemperature::new::<degree_celsius>(20.0);

        assert!(matches!(
            molar_density(Pressure::new::<kilopascal>(0.0), t),
            Err(AtmosphereError::NonPositivePressure { .. })
        ));
        assert!(matches!(
            molar_density(Pressure::new::<kilopascal>(-5.0), t),
            Err(AtmosphereError::NonPositivePressure { .. })
        ));
        assert!(matches!(
            molar_density(
                Pressure::new::<kilopascal>(101.3),
                ThermodynamicTemperature::new::<degree_celsius>(-273.15),
            ),
            Err(AtmosphereError::BelowAbsoluteZero { .. })
        ));
    }
}

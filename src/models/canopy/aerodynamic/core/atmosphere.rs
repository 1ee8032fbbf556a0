use uom::si::f64::{Pressure, ThermodynamicTemperature, Velocity};

use crate::support::constraint::NonNegative;

use super::air::{self, AtmosphereError};

/// Meteorological state at the reference height for one timestep.
///
/// Wind speed is non-negative, pressure positive, and both temperatures
/// above absolute zero. Canopy temperature is optional; without it the
/// solver treats the canopy–air temperature difference as zero (neutral
/// sensible heat flux).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphericState {
    wind_speed: Velocity,
    pressure: Pressure,
    air_temperature: ThermodynamicTemperature,
    canopy_temperature: Option<ThermodynamicTemperature>,
}

impl AtmosphericState {
    /// Constructs a validated state.
    ///
    /// # Errors
    ///
    /// Returns an [`AtmosphereError`] if the wind speed is negative, the
    /// pressure is not positive, or a temperature is at or below absolute
    /// zero.
    pub fn new(
        wind_speed: Velocity,
        pressure: Pressure,
        air_temperature: ThermodynamicTemperature,
        canopy_temperature: Option<ThermodynamicTemperature>,
    ) -> Result<Self, AtmosphereError> {
        NonNegative::new(wind_speed)
            .map_err(|_| AtmosphereError::NegativeWindSpeed { wind_speed })?;
        air::check_pressure(pressure)?;
        air::check_temperature(air_temperature)?;
        if let Some(canopy) = canopy_temperature {
            air::check_temperature(canopy)?;
        }

        Ok(Self::new_unchecked(
            wind_speed,
            pressure,
            air_temperature,
            canopy_temperature,
        ))
    }

    /// Constructs a state without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure the values are within their physical ranges.
    /// Violating this invariant will surface as errors from the solve.
    #[must_use]
    pub fn new_unchecked(
        wind_speed: Velocity,
        pressure: Pressure,
        air_temperature: ThermodynamicTemperature,
        canopy_temperature: Option<ThermodynamicTemperature>,
    ) -> Self {
        Self {
            wind_speed,
            pressure,
            air_temperature,
            canopy_temperature,
        }
    }

    /// Returns the wind speed at the reference height.
    #[must_use]
    pub fn wind_speed(&self) -> Velocity {
        self.wind_speed
    }

    /// Returns the atmospheric pressure at the reference height.
    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    /// Returns the air temperature at the reference height.
    #[must_use]
    pub fn air_temperature(&self) -> ThermodynamicTemperature {
        self.air_temperature
    }

    /// Returns the canopy surface temperature, if observed.
    #[must_use]
    pub fn canopy_temperature(&self) -> Option<ThermodynamicTemperature> {
        self.canopy_temperature
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        pressure::kilopascal, thermodynamic_temperature::degree_celsius,
        velocity::meter_per_second,
    };

    fn celsius(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(t)
    }

    #[test]
    fn accepts_calm_air() {
        let state = AtmosphericState::new(
            Velocity::new::<meter_per_second>(0.0),
            Pressure::new::<kilopascal>(101.3),
            celsius(20.0),
            None,
        )
        .unwrap();

        assert_eq!(state.wind_speed(), Velocity::new::<meter_per_second>(0.0));
        assert_eq!(state.canopy_temperature(), None);
    }

    #[test]
    fn rejects_out_of_range_inputs() {
        let wind = Velocity::new::<meter_per_second>(3.0);
        let pressure = Pressure::new::<kilopascal>(101.3);

        assert!(matches!(
            AtmosphericState::new(
                Velocity::new::<meter_per_second>(-1.0),
                pressure,
                celsius(20.0),
                None,
            ),
            Err(AtmosphereError::NegativeWindSpeed { .. })
        ));
        assert!(matches!(
            AtmosphericState::new(wind, Pressure::new::<kilopascal>(-10.0), celsius(20.0), None),
            Err(AtmosphereError::NonPositivePressure { .. })
        ));
        assert!(matches!(
            AtmosphericState::new(wind, pressure, celsius(-300.0), None),
            Err(AtmosphereError::BelowAbsoluteZero { .. })
        ));
        assert!(matches!(
            AtmosphericState::new(wind, pressure, celsius(20.0), Some(celsius(-280.0))),
            Err(AtmosphereError::BelowAbsoluteZero { .. })
        ));
    }
}

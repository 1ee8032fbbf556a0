use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// This trait provides a [`minus`](Self::minus) method that subtracts two
/// [`ThermodynamicTemperature`] values (absolute temperatures) and returns a
/// [`TemperatureInterval`] (temperature difference). The canopy–air
/// temperature difference driving sensible heat flux is exactly such an
/// interval.
///
/// For background on this distinction and why this extension is needed:
/// [#380](https://github.com/iliekturtles/uom/issues/380),
/// [#289](https://github.com/iliekturtles/uom/issues/289),
/// [#403](https://github.com/iliekturtles/uom/issues/403).
///
/// [`TemperatureInterval`]: uom::si::f64::TemperatureInterval
/// [`ThermodynamicTemperature`]: uom::si::f64::ThermodynamicTemperature
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::ThermodynamicTemperature,
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::{degree_celsius, kelvin as abs_kelvin},
    };

    #[test]
    fn subtract_temperatures() {
        let canopy = ThermodynamicTemperature::new::<degree_celsius>(22.0);
        let air = ThermodynamicTemperature::new::<degree_celsius>(20.0);

        // Warmer canopy gives a positive interval.
        assert_relative_eq!(canopy.minus(air).get::<delta_kelvin>(), 2.0, epsilon = 1e-12);

        // Colder canopy gives a negative interval.
        assert_relative_eq!(air.minus(canopy).get::<delta_kelvin>(), -2.0, epsilon = 1e-12);

        // Celsius and kelvin representations of the same state agree.
        let t_in_k = ThermodynamicTemperature::new::<abs_kelvin>(293.15);
        assert_relative_eq!(air.minus(t_in_k).get::<delta_kelvin>(), 0.0, epsilon = 1e-12);
    }
}

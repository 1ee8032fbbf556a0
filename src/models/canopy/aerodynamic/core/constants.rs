//! Physical constants shared by every solve.
//!
//! These are the only data shared between concurrent solves, and all of
//! them are read-only.

use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{Acceleration, MolarHeatCapacity},
    molar_heat_capacity::joule_per_kelvin_mole,
};

/// von Kármán constant (dimensionless).
pub(super) const VON_KARMAN: f64 = 0.4;

/// Gravitational acceleration.
pub(super) fn gravity() -> Acceleration {
    Acceleration::new::<meter_per_second_squared>(9.8)
}

/// Molar specific heat of air at constant pressure.
pub(super) fn specific_heat_of_air() -> MolarHeatCapacity {
    MolarHeatCapacity::new::<joule_per_kelvin_mole>(29.3)
}

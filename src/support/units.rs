//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., length, pressure,
//! temperature, heat flux). This module provides extensions that are useful
//! for canopy modeling but aren't included in [`uom`].
//!
//! ## Molar flux
//!
//! Turbulent conductances in canopy exchange work are expressed on a molar
//! basis (mol m⁻² s⁻¹), a quantity [`uom`] does not predefine. The
//! [`MolarFlux`] alias fills that gap.
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a
//! [`minus`](TemperatureDifference::minus) method for subtracting one
//! absolute temperature from another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use canopy_models::support::units::TemperatureDifference;
//!
//! let canopy = ThermodynamicTemperature::new::<degree_celsius>(22.0);
//! let air = ThermodynamicTemperature::new::<degree_celsius>(20.0);
//! let delta_t = canopy.minus(air);
//! // delta_t is a TemperatureInterval, not a ThermodynamicTemperature
//! ```
//!
//! This extension trait is currently needed due to limitations in [`uom`].
//! See [`TemperatureDifference`] for details.

mod quantities;
mod temperature_difference;

pub use quantities::MolarFlux;
pub use temperature_difference::TemperatureDifference;

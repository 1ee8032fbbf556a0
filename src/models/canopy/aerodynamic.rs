//! Stability-corrected aerodynamic conductance.
//!
//! Computes the turbulent boundary-layer conductances between a reference
//! height above a forest canopy and the canopy surface from one
//! meteorological timestep, correcting the logarithmic wind and
//! temperature profiles for atmospheric stability (Monin–Obukhov
//! similarity, Campbell & Norman ch. 7).
//!
//! The computational core is in the internal `core` module; the types a
//! caller needs are re-exported here.
//!
//! # Example
//!
//! ```
//! use canopy_models::models::canopy::aerodynamic::{
//!     AerodynamicConductance, AtmosphericState, CanopyGeometry,
//! };
//! use uom::si::f64::{Length, Pressure, ThermodynamicTemperature, Velocity};
//! use uom::si::{
//!     length::meter, pressure::kilopascal,
//!     thermodynamic_temperature::degree_celsius, velocity::meter_per_second,
//! };
//!
//! let geometry = CanopyGeometry::new(
//!     Length::new::<meter>(5.0),
//!     Length::new::<meter>(10.0),
//! )?;
//! let model = AerodynamicConductance::new(geometry);
//!
//! let state = AtmosphericState::new(
//!     Velocity::new::<meter_per_second>(3.0),
//!     Pressure::new::<kilopascal>(101.3),
//!     ThermodynamicTemperature::new::<degree_celsius>(20.0),
//!     Some(ThermodynamicTemperature::new::<degree_celsius>(22.0)),
//! )?;
//!
//! let result = model.solve(&state)?;
//! assert!(result.converged());
//! assert!(result.heat_conductance.value > 0.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod core;

pub use self::core::{
    AtmosphereError, AtmosphericState, CanopyGeometry, ConductanceResult, DiabaticCorrection,
    FluxState, GeometryError, RoughnessParameters, SolveError, SolverConfig, molar_density,
};

use jiff::Timestamp;
use twine_core::Model;

/// Stability-corrected aerodynamic conductance between a reference height
/// and the canopy surface.
///
/// Holds the site-fixed inputs (geometry and solver configuration) and
/// evaluates one meteorological timestep per call. A call is a pure
/// function of its inputs — no state is shared across timesteps — so a
/// time series may be fanned out across parallel workers freely.
#[derive(Debug, Clone, Copy)]
pub struct AerodynamicConductance {
    geometry: CanopyGeometry,
    config: SolverConfig,
}

impl AerodynamicConductance {
    /// Creates a model with the default solver configuration.
    #[must_use]
    pub fn new(geometry: CanopyGeometry) -> Self {
        Self::with_config(geometry, SolverConfig::default())
    }

    /// Creates a model with an explicit solver configuration.
    #[must_use]
    pub fn with_config(geometry: CanopyGeometry, config: SolverConfig) -> Self {
        Self { geometry, config }
    }

    /// Solves one meteorological timestep.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] if an input is outside its physical range
    /// or the iteration becomes unstable. Reaching the iteration cap is
    /// reported through the result's `converged` flag instead.
    pub fn solve(&self, atmosphere: &AtmosphericState) -> Result<ConductanceResult, SolveError> {
        self::core::solve(atmosphere, &self.geometry, &self.config)
    }

    /// Evaluates a meteorological time series, one independent solve per
    /// record.
    ///
    /// Each record succeeds or fails on its own; a failing record never
    /// aborts its neighbors. The caller decides per record whether to
    /// skip, interpolate, or abort the run.
    #[must_use]
    pub fn solve_series(
        &self,
        records: &[MetRecord],
    ) -> Vec<(Timestamp, Result<ConductanceResult, SolveError>)> {
        records
            .iter()
            .map(|record| (record.timestamp, self.solve(&record.atmosphere)))
            .collect()
    }
}

impl Model for AerodynamicConductance {
    type Input = AtmosphericState;
    type Output = ConductanceResult;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.solve(input)
    }
}

/// One timestamped meteorological record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetRecord {
    /// Observation time.
    pub timestamp: Timestamp,

    /// Meteorological state at the reference height.
    pub atmosphere: AtmosphericState,
}

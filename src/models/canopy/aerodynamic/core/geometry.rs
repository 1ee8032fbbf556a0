use thiserror::Error;
use uom::si::f64::Length;

use crate::support::constraint::StrictlyPositive;

/// Proportionality factors relating canopy height to the turbulence length
/// scales.
///
/// The displacement height is `d = displacement_factor·h`, the momentum
/// roughness length `zm = momentum_factor·h`, and the heat roughness length
/// `zh = heat_factor·zm`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoughnessParameters {
    displacement_factor: f64,
    momentum_factor: f64,
    heat_factor: f64,
}

impl RoughnessParameters {
    /// Campbell & Norman values for a closed canopy:
    /// `d = 0.65·h`, `zm = 0.1·h`, `zh = 0.2·zm`.
    #[must_use]
    pub fn campbell_norman() -> Self {
        Self {
            displacement_factor: 0.65,
            momentum_factor: 0.1,
            heat_factor: 0.2,
        }
    }

    /// Constructs custom factors.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if a factor is non-positive or
    /// non-finite, or if the displacement factor would put the displacement
    /// height at or above the canopy top.
    pub fn new(
        displacement_factor: f64,
        momentum_factor: f64,
        heat_factor: f64,
    ) -> Result<Self, GeometryError> {
        for factor in [displacement_factor, momentum_factor, heat_factor] {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(GeometryError::InvalidRoughnessFactor { factor });
            }
        }
        if displacement_factor >= 1.0 {
            return Err(GeometryError::DisplacementOutsideCanopy {
                factor: displacement_factor,
            });
        }

        Ok(Self {
            displacement_factor,
            momentum_factor,
            heat_factor,
        })
    }
}

impl Default for RoughnessParameters {
    fn default() -> Self {
        Self::campbell_norman()
    }
}

/// Errors constructing site geometry.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("canopy height must be positive: {canopy_height:?}")]
    NonPositiveCanopyHeight { canopy_height: Length },

    #[error(
        "reference height {reference_height:?} must be above the canopy top {canopy_height:?}"
    )]
    ReferenceWithinCanopy {
        reference_height: Length,
        canopy_height: Length,
    },

    #[error("roughness factor must be positive and finite: {factor}")]
    InvalidRoughnessFactor { factor: f64 },

    #[error("displacement factor must keep the displacement height inside the canopy: {factor}")]
    DisplacementOutsideCanopy { factor: f64 },
}

/// Site turbulence geometry, derived once per site.
///
/// Holds the fixed heights of a run: canopy height, reference
/// (instrument) height, and the derived length scales controlling the
/// logarithmic wind and temperature profiles. Construction guarantees
/// `h > 0` and `z > h`, so `z − d > 0` holds for every valid instance and
/// the profile logarithms are always defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanopyGeometry {
    canopy_height: Length,
    reference_height: Length,
    displacement: Length,
    roughness_momentum: Length,
    roughness_heat: Length,
}

impl CanopyGeometry {
    /// Derives site geometry with the Campbell & Norman factors.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if the canopy height is not positive or
    /// the reference height is not above the canopy top.
    pub fn new(canopy_height: Length, reference_height: Length) -> Result<Self, GeometryError> {
        Self::with_parameters(
            canopy_height,
            reference_height,
            RoughnessParameters::default(),
        )
    }

    /// Derives site geometry with explicit roughness factors.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if the canopy height is not positive or
    /// the reference height is not above the canopy top.
    pub fn with_parameters(
        canopy_height: Length,
        reference_height: Length,
        parameters: RoughnessParameters,
    ) -> Result<Self, GeometryError> {
        StrictlyPositive::new(canopy_height)
            .map_err(|_| GeometryError::NonPositiveCanopyHeight { canopy_height })?;
        match reference_height.partial_cmp(&canopy_height) {
            Some(std::cmp::Ordering::Greater) => {}
            _ => {
                return Err(GeometryError::ReferenceWithinCanopy {
                    reference_height,
                    canopy_height,
                });
            }
        }

        let displacement = canopy_height * parameters.displacement_factor;
        let roughness_momentum = canopy_height * parameters.momentum_factor;
        let roughness_heat = roughness_momentum * parameters.heat_factor;

        Ok(Self {
            canopy_height,
            reference_height,
            displacement,
            roughness_momentum,
            roughness_heat,
        })
    }

    /// Returns the canopy height `h`.
    #[must_use]
    pub fn canopy_height(&self) -> Length {
        self.canopy_height
    }

    /// Returns the reference (instrument) height `z`.
    #[must_use]
    pub fn reference_height(&self) -> Length {
        self.reference_height
    }

    /// Returns the zero-plane displacement height `d`.
    #[must_use]
    pub fn displacement(&self) -> Length {
        self.displacement
    }

    /// Returns the roughness length for momentum `zm`.
    #[must_use]
    pub fn roughness_momentum(&self) -> Length {
        self.roughness_momentum
    }

    /// Returns the roughness length for heat `zh`.
    #[must_use]
    pub fn roughness_heat(&self) -> Length {
        self.roughness_heat
    }
}

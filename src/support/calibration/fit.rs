use super::ParametricCurve;

/// Fitted parameter values and their covariance.
#[derive(Debug, Clone, PartialEq)]
pub struct Fit {
    /// Optimized parameter values, in the curve's parameter order.
    pub parameters: Vec<f64>,

    /// Parameter covariance matrix, row-major
    /// (`PARAMETERS` × `PARAMETERS`). Empty if the backend does not
    /// estimate one.
    pub covariance: Vec<f64>,
}

/// A nonlinear least-squares backend.
///
/// This is the capability the calibration stages are written against.
/// Concrete optimizers live with the caller; the models in this crate only
/// require that, given a curve family, observations, and an initial guess,
/// the backend produces optimized parameters.
pub trait NonlinearCalibrator {
    /// Error produced when a fit cannot be computed (singular Jacobian,
    /// iteration limits, mismatched data lengths, ...).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fits `curve`'s parameters to the observations `(x, y)`.
    ///
    /// `initial_guess` must contain `C::PARAMETERS` values.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the optimization fails.
    fn fit<C: ParametricCurve>(
        &self,
        curve: &C,
        x: &[f64],
        y: &[f64],
        initial_guess: &[f64],
    ) -> Result<Fit, Self::Error>;
}

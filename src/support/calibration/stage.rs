use super::{Fit, NonlinearCalibrator, ParametricCurve};

/// The typed outcome of one calibration stage.
///
/// Every stage — whatever its curve family — exposes the same record:
/// what was observed, what the fitted curve simulates at the same points,
/// the optimized parameters, and how much of the observed variance the
/// simulation explains.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationStage {
    /// Observed response values, one per observation point.
    pub observed: Vec<f64>,

    /// Simulated response values from the fitted curve, aligned with
    /// `observed`.
    pub simulated: Vec<f64>,

    /// Optimized curve parameters.
    pub fit_parameters: Vec<f64>,

    /// Coefficient of determination (r²) of `simulated` against `observed`.
    pub goodness_of_fit: f64,
}

impl CalibrationStage {
    /// Runs one calibration stage: fit, simulate, score.
    ///
    /// # Errors
    ///
    /// Returns the calibrator's error if the fit fails.
    ///
    /// # Panics
    ///
    /// Panics if `x` and `y` have different lengths.
    pub fn fit<C, K>(
        curve: &C,
        calibrator: &K,
        x: &[f64],
        y: &[f64],
        initial_guess: &[f64],
    ) -> Result<Self, K::Error>
    where
        C: ParametricCurve,
        K: NonlinearCalibrator,
    {
        assert_eq!(x.len(), y.len(), "observation grids must be aligned");

        let Fit { parameters, .. } = calibrator.fit(curve, x, y, initial_guess)?;
        let simulated: Vec<f64> = x
            .iter()
            .map(|&xi| curve.evaluate(xi, &parameters))
            .collect();
        let goodness_of_fit = r_squared(y, &simulated);

        Ok(Self {
            observed: y.to_vec(),
            simulated,
            fit_parameters: parameters,
            goodness_of_fit,
        })
    }
}

/// Coefficient of determination, `1 − SS_res/SS_tot`.
///
/// Returns 1.0 for a perfect fit to constant observations (both sums
/// vanish), matching the convention that a model reproducing degenerate
/// data exactly explains it fully.
///
/// # Panics
///
/// Panics if the slices have different lengths.
#[must_use]
pub fn r_squared(observed: &[f64], simulated: &[f64]) -> f64 {
    assert_eq!(observed.len(), simulated.len());

    let n = observed.len() as f64;
    let mean = observed.iter().sum::<f64>() / n;
    let ss_tot: f64 = observed.iter().map(|o| (o - mean).powi(2)).sum();
    let ss_res: f64 = observed
        .iter()
        .zip(simulated)
        .map(|(o, s)| (o - s).powi(2))
        .sum();

    if ss_tot == 0.0 {
        if ss_res == 0.0 { 1.0 } else { f64::NEG_INFINITY }
    } else {
        1.0 - ss_res / ss_tot
    }
}

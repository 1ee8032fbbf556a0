use uom::si::{f64::Velocity, velocity::meter_per_second};

/// Solver configuration for the flux fixed-point iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Iteration cap. Reaching it reports non-convergence in the result
    /// rather than failing the solve.
    pub max_iterations: usize,

    /// Minimum passes before convergence may be declared. Keeps an early
    /// small residual from masking a stability regime still drifting.
    pub min_iterations: usize,

    /// Absolute tolerance on the friction-velocity residual. The default
    /// sits below the accuracy of typical anemometer records.
    pub tolerance: Velocity,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            min_iterations: 10,
            tolerance: Velocity::new::<meter_per_second>(0.001),
        }
    }
}

/// Diabatic correction factors for momentum and heat transfer.
///
/// Maps the Monin–Obukhov stability parameter ζ to the corrections ψm and
/// ψh applied to the logarithmic wind and temperature profiles
/// (Campbell & Norman, eqs. 7.26 and 7.27). Negative ζ is the unstable
/// regime (buoyancy produces turbulence), positive ζ the stable regime
/// (buoyancy suppresses it).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiabaticCorrection {
    /// Momentum correction ψm.
    pub momentum: f64,

    /// Heat correction ψh.
    pub heat: f64,
}

impl DiabaticCorrection {
    /// Corrections for a neutral atmosphere.
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            momentum: 0.0,
            heat: 0.0,
        }
    }

    /// Corrections at the given stability parameter.
    ///
    /// Total for all finite ζ: the unstable argument `1 − 16ζ` is positive
    /// whenever ζ < 0, and `ln(1 + ζ)` is defined for all ζ ≥ 0.
    #[must_use]
    pub fn at(zeta: f64) -> Self {
        if zeta < 0.0 {
            let momentum = -1.2 * ((1.0 + (1.0 - 16.0 * zeta).sqrt()) / 2.0).ln();
            Self {
                momentum,
                heat: momentum / 0.6,
            }
        } else {
            let momentum = 6.0 * zeta.ln_1p();
            Self {
                momentum,
                heat: momentum,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn neutral_at_zero() {
        let correction = DiabaticCorrection::at(0.0);
        assert_eq!(correction, DiabaticCorrection::neutral());
    }

    #[test]
    fn unstable_branch() {
        let correction = DiabaticCorrection::at(-1.0);
        let expected = -1.2 * ((1.0 + 17.0_f64.sqrt()) / 2.0).ln();

        assert_relative_eq!(correction.momentum, expected, epsilon = 1e-12);
        assert_relative_eq!(correction.heat, expected / 0.6, epsilon = 1e-12);
        assert!(correction.momentum < 0.0);
    }

    #[test]
    fn stable_branch() {
        let correction = DiabaticCorrection::at(1.0);

        assert_relative_eq!(correction.momentum, 6.0 * 2.0_f64.ln(), epsilon = 1e-12);
        assert_relative_eq!(correction.heat, correction.momentum);
        assert!(correction.momentum > 0.0);
    }
}

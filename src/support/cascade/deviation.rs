//! Carter's deviation rule at nominal incidence.
//!
//! A cascade does not turn the flow all the way to its outlet metal angle
//! `α2'`; the flow leaves at `α2 = α2' + δ`, where the deviation `δ` grows with
//! blade camber `θ` and spacing:
//!
//! ```text
//! δ = m θ √(s/l),    m = 0.23 (2a/l)² + α2/500
//! ```
//!
//! `a/l` is the chordwise position of maximum camber. Two forms of the rule
//! are in use and are kept side by side as [`DeviationRule`] variants.

/// Coefficients of Carter's rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarterConfig {
    /// Coefficient of `(2a/l)²` in `m`.
    pub camber_position_coefficient: f64,

    /// Divisor of the outlet angle (degrees) in `m`.
    pub outlet_angle_divisor: f64,
}

impl Default for CarterConfig {
    fn default() -> Self {
        Self {
            camber_position_coefficient: 0.23,
            outlet_angle_divisor: 500.0,
        }
    }
}

impl CarterConfig {
    /// Carter's coefficient `m` for a given camber position and outlet angle.
    #[must_use]
    pub fn coefficient(&self, max_camber_position: f64, outlet_angle: f64) -> f64 {
        self.camber_position_coefficient * (2.0 * max_camber_position).powi(2)
            + outlet_angle / self.outlet_angle_divisor
    }
}

/// Form of Carter's rule used to compute deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviationRule {
    /// `m` evaluated at the outlet metal angle `α2'`:
    /// `δ = m θ √(s/l)`.
    Carter,

    /// `m` evaluated at the outlet flow angle `α2' + δ`.
    ///
    /// Solving the rule for `δ` gives `δ = m θ √(s/l) / (1 - θ √(s/l) / 500)`,
    /// with `m` taken at the metal angle.
    CarterOutletCorrected,
}

impl DeviationRule {
    /// Deviation in degrees.
    ///
    /// `m` is the coefficient at the outlet metal angle, as returned by
    /// [`CarterConfig::coefficient`].
    #[must_use]
    pub fn deviation(self, config: &CarterConfig, m: f64, camber: f64, pitch_chord: f64) -> f64 {
        let base = camber * pitch_chord.sqrt();
        match self {
            Self::Carter => m * base,
            Self::CarterOutletCorrected => m * base / (1.0 - base / config.outlet_angle_divisor),
        }
    }
}

/// Flow turning `α_in - α_out` of a cascade, in degrees.
#[must_use]
pub fn deflection(alpha_in: f64, alpha_out: f64) -> f64 {
    alpha_in - alpha_out
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::support::sweep::linspace;

    use super::*;

    const CAMBER: f64 = 48.0 - 16.0;

    #[test]
    fn coefficient_for_reference_blade() {
        let m = CarterConfig::default().coefficient(0.4, 16.0);
        assert_relative_eq!(m, 0.1792, epsilon = 1e-12);
    }

    #[test]
    fn basic_rule_at_unit_spacing() {
        let config = CarterConfig::default();
        let m = config.coefficient(0.4, 16.0);
        let delta = DeviationRule::Carter.deviation(&config, m, CAMBER, 1.0);
        assert_relative_eq!(delta, 5.7344, epsilon = 1e-10);
    }

    #[test]
    fn corrected_rule_is_self_consistent() {
        let config = CarterConfig::default();
        let m = config.coefficient(0.4, 16.0);
        for s_l in [0.5, 1.0, 2.5] {
            let delta = DeviationRule::CarterOutletCorrected.deviation(&config, m, CAMBER, s_l);
            let m_flow = config.coefficient(0.4, 16.0 + delta);
            assert_relative_eq!(delta, m_flow * CAMBER * s_l.sqrt(), max_relative = 1e-12);
        }

        let delta = DeviationRule::CarterOutletCorrected.deviation(&config, m, CAMBER, 1.0);
        assert_relative_eq!(delta, 6.126_495_726_495_728, max_relative = 1e-12);
    }

    #[test]
    fn deviation_increases_with_spacing() {
        let config = CarterConfig::default();
        let m = config.coefficient(0.4, 16.0);
        for rule in [DeviationRule::Carter, DeviationRule::CarterOutletCorrected] {
            let deviations: Vec<f64> = linspace(0.5, 2.5, 100)
                .into_iter()
                .map(|s_l| rule.deviation(&config, m, CAMBER, s_l))
                .collect();
            assert!(deviations.windows(2).all(|w| w[1] > w[0]), "{rule:?}");
        }
    }

    #[test]
    fn negative_spacing_is_nan() {
        let config = CarterConfig::default();
        assert!(DeviationRule::Carter.deviation(&config, 0.18, CAMBER, -1.0).is_nan());
    }

    #[test]
    fn deflection_is_angle_difference() {
        assert_relative_eq!(deflection(48.0, 21.7344), 26.2656, epsilon = 1e-12);
    }
}

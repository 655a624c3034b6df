//! Lieblein's profile-loss correlation.
//!
//! The correlation estimates the total-pressure loss of a compressor blade
//! section in three steps:
//!
//! 1. An equivalent diffusion ratio `D_eq` from the row geometry and flow angles.
//! 2. The trailing-edge momentum thickness per unit chord, `θ/l`, from an
//!    empirical fit in `ln(D_eq)`.
//! 3. The profile-loss coefficient `Y_p` from `θ/l`, the spacing and the
//!    outlet flow angle.
//!
//! The empirical fit is only meaningful for `1 < D_eq < e^(1/1.17) ≈ 2.35`.
//! [`profile_loss`] returns `NaN` outside that interval rather than an error,
//! so a sweep across the boundary shows exactly where the correlation breaks
//! down.

use crate::support::trig::{cosd, tand};

/// Coefficients of the Lieblein correlation.
///
/// The [`Default`] values are the published ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiebleinConfig {
    /// Constant term of the equivalent diffusion ratio.
    pub diffusion_intercept: f64,

    /// Circulation term coefficient of the equivalent diffusion ratio.
    pub diffusion_slope: f64,

    /// Momentum thickness per unit chord at `D_eq = 1`.
    pub momentum_scale: f64,

    /// Coefficient of `ln(D_eq)` in the momentum thickness fit.
    pub momentum_log_slope: f64,
}

impl Default for LiebleinConfig {
    fn default() -> Self {
        Self {
            diffusion_intercept: 1.12,
            diffusion_slope: 0.61,
            momentum_scale: 0.004,
            momentum_log_slope: 1.17,
        }
    }
}

impl LiebleinConfig {
    /// Upper bound of the valid equivalent diffusion ratio.
    ///
    /// At this value the momentum thickness fit has a pole.
    #[must_use]
    pub fn max_equivalent_diffusion(&self) -> f64 {
        self.momentum_log_slope.recip().exp()
    }

    /// Returns `true` if `eq_diff` lies in the open interval where the
    /// correlation is valid.
    #[must_use]
    pub fn is_valid(&self, eq_diff: f64) -> bool {
        eq_diff > 1.0 && eq_diff < self.max_equivalent_diffusion()
    }
}

/// Lieblein equivalent diffusion ratio `D_eq`.
#[must_use]
pub fn equivalent_diffusion(
    config: &LiebleinConfig,
    pitch_chord: f64,
    alpha_in: f64,
    alpha_out: f64,
) -> f64 {
    let circulation =
        pitch_chord * cosd(alpha_in).powi(2) * (tand(alpha_in) - tand(alpha_out));
    cosd(alpha_out) / cosd(alpha_in)
        * (config.diffusion_intercept + config.diffusion_slope * circulation)
}

/// Trailing-edge momentum thickness per unit chord, `θ/l`.
///
/// This is the raw fit; it is not restricted to the valid interval and turns
/// negative above [`LiebleinConfig::max_equivalent_diffusion`].
#[must_use]
pub fn momentum_thickness(config: &LiebleinConfig, eq_diff: f64) -> f64 {
    config.momentum_scale / (1.0 - config.momentum_log_slope * eq_diff.ln())
}

/// Profile-loss coefficient `Y_p` of a blade row.
///
/// Returns `NaN` when the equivalent diffusion ratio falls outside the range
/// accepted by [`LiebleinConfig::is_valid`].
#[must_use]
pub fn profile_loss(
    config: &LiebleinConfig,
    pitch_chord: f64,
    alpha_in: f64,
    alpha_out: f64,
) -> f64 {
    let eq_diff = equivalent_diffusion(config, pitch_chord, alpha_in, alpha_out);
    if !config.is_valid(eq_diff) {
        return f64::NAN;
    }

    let theta_l = momentum_thickness(config, eq_diff);
    let tan_diff = tand(alpha_in) - tand(alpha_out);
    2.0 * theta_l
        / (pitch_chord * cosd(alpha_out).powi(2) * (0.25 * tan_diff.powi(2) + 1.0).sqrt())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::support::sweep::linspace;

    use super::*;

    const S_L: f64 = 0.530_347_285_954_587_6;
    const BETA1: f64 = 47.998_052_779_387_7;
    const BETA2: f64 = 16.007_768_122_332_05;

    #[test]
    fn reference_rotor_loss() {
        let config = LiebleinConfig::default();

        let eq_diff = equivalent_diffusion(&config, S_L, BETA1, BETA2);
        assert_relative_eq!(eq_diff, 1.780_238_374_907_47, max_relative = 1e-10);

        let y_p = profile_loss(&config, S_L, BETA1, BETA2);
        assert_relative_eq!(y_p, 0.046_419_854_647_806_55, max_relative = 1e-10);
    }

    #[test]
    fn valid_interval_bounds() {
        let config = LiebleinConfig::default();
        assert_relative_eq!(config.max_equivalent_diffusion(), 2.350_671_083, epsilon = 1e-9);
        assert!(!config.is_valid(1.0));
        assert!(config.is_valid(1.5));
        assert!(!config.is_valid(config.max_equivalent_diffusion()));
        assert!(!config.is_valid(f64::NAN));
    }

    #[test]
    fn loss_is_positive_inside_valid_interval() {
        let config = LiebleinConfig::default();
        for s_l in linspace(0.3, 2.2, 20) {
            let y_p = profile_loss(&config, s_l, 48.0, 16.0);
            assert!(y_p.is_finite() && y_p > 0.0, "s/l = {s_l}: Y_p = {y_p}");
        }
    }

    #[test]
    fn loss_is_nan_outside_valid_interval() {
        let config = LiebleinConfig::default();
        for s_l in linspace(0.1, 4.0, 40) {
            let eq_diff = equivalent_diffusion(&config, s_l, 48.0, 16.0);
            let y_p = profile_loss(&config, s_l, 48.0, 16.0);
            if config.is_valid(eq_diff) {
                assert!(y_p > 0.0);
            } else {
                assert!(y_p.is_nan(), "s/l = {s_l}: D_eq = {eq_diff}");
            }
        }

        // Widely spaced blades overshoot the pole of the fit.
        assert!(profile_loss(&config, 3.0, 48.0, 16.0).is_nan());

        // Accelerating rows have D_eq below one.
        assert!(profile_loss(&config, 1.0, 10.0, 60.0).is_nan());
    }

    #[test]
    fn raw_fit_is_negative_beyond_pole() {
        let config = LiebleinConfig::default();
        assert!(momentum_thickness(&config, 2.5) < 0.0);
        assert_relative_eq!(momentum_thickness(&config, 1.0), 0.004);
    }

    #[test]
    fn custom_coefficients_are_honored() {
        let config = LiebleinConfig {
            momentum_scale: 0.008,
            ..LiebleinConfig::default()
        };
        let doubled = profile_loss(&config, S_L, BETA1, BETA2);
        let base = profile_loss(&LiebleinConfig::default(), S_L, BETA1, BETA2);
        assert_relative_eq!(doubled, 2.0 * base, max_relative = 1e-12);
    }
}

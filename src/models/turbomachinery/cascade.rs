//! Compressor cascade deviation model.
//!
//! [`CarterCascade`] maps a set of pitch-to-chord ratios to the deviation,
//! deflection and profile loss of a fixed blade at nominal incidence.

mod core;

pub use self::core::{CascadeBlade, CascadePoint, CascadeResults};

use std::convert::Infallible;

use tracing::{debug, warn};
use twine_core::Model;

use crate::support::cascade::{CarterConfig, DeviationRule, LiebleinConfig};

/// Deviation and loss of a cascade over a range of spacings.
///
/// The model input is the list of pitch-to-chord ratios to evaluate.
///
/// # Example
///
/// ```
/// use axial_stage::models::turbomachinery::cascade::{CarterCascade, CascadeBlade};
/// use axial_stage::support::{cascade::DeviationRule, sweep::linspace};
/// use twine_core::Model;
///
/// let cascade = CarterCascade::new(
///     CascadeBlade {
///         inlet_angle: 48.0,
///         outlet_angle: 16.0,
///         max_camber_position: 0.4,
///         incidence: 0.0,
///     },
///     DeviationRule::Carter,
/// );
///
/// let results = cascade.call(&linspace(0.5, 2.5, 100)).unwrap();
/// assert_eq!(results.points.len(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarterCascade {
    /// Blade geometry.
    pub blade: CascadeBlade,

    /// Form of Carter's rule.
    pub rule: DeviationRule,

    /// Carter's rule coefficients.
    pub carter: CarterConfig,

    /// Profile-loss correlation coefficients.
    pub lieblein: LiebleinConfig,
}

impl CarterCascade {
    /// Creates a cascade model with published correlation coefficients.
    #[must_use]
    pub fn new(blade: CascadeBlade, rule: DeviationRule) -> Self {
        Self {
            blade,
            rule,
            carter: CarterConfig::default(),
            lieblein: LiebleinConfig::default(),
        }
    }
}

impl Model for CarterCascade {
    type Input = Vec<f64>;
    type Output = CascadeResults;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let results = self::core::sweep(&self.blade, self.rule, &self.carter, &self.lieblein, input);

        debug!(points = input.len(), rule = ?self.rule, "cascade sweep evaluated");
        let breakdown = results
            .points
            .iter()
            .filter(|p| !p.profile_loss.is_finite())
            .count();
        if breakdown > 0 {
            warn!(breakdown, "profile loss undefined at some spacings");
        }

        Ok(results)
    }
}

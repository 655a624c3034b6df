//! Axial stage design models.
//!
//! - [`MeanLineStage`] designs a normal stage at its mean radius: velocity
//!   triangles, pitch-to-chord ratios from a diffusion-factor target, Lieblein
//!   profile losses and total-to-total efficiency.
//! - [`FreeVortexStage`] distributes that design from hub to tip.
//!
//! Both implement [`twine_core::Model`] with an [`Infallible`] error type: a
//! design outside the range of a correlation comes back with `NaN` entries,
//! which [`MeanLineResults::is_physical`] and [`RadialResults::is_physical`]
//! detect.
//!
//! # Example
//!
//! ```
//! use axial_stage::models::turbomachinery::stage::{MeanLineDesign, MeanLineStage};
//! use axial_stage::support::stage::InletSwirl;
//! use twine_core::Model;
//!
//! let stage = MeanLineStage::new(InletSwirl::OneMinusReaction);
//! let results = stage.call(&MeanLineDesign::reference()).unwrap();
//!
//! assert!(results.is_physical());
//! assert!(results.eta_tt > 0.9);
//! ```

mod core;

pub use self::core::{
    MeanLineDesign, MeanLineResults, RadialError, RadialGeometry, RadialResults, RadialStation,
    RowPerformance, SpanwiseRow,
};

use std::convert::Infallible;

use tracing::{debug, warn};
use twine_core::Model;

use crate::support::{cascade::LiebleinConfig, stage::InletSwirl};

/// Mean-line design of a normal stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanLineStage {
    /// Inlet swirl relation used to build the velocity triangles.
    pub inlet: InletSwirl,

    /// Profile-loss correlation coefficients.
    pub lieblein: LiebleinConfig,
}

impl MeanLineStage {
    /// Creates a mean-line model with the published Lieblein coefficients.
    #[must_use]
    pub fn new(inlet: InletSwirl) -> Self {
        Self {
            inlet,
            lieblein: LiebleinConfig::default(),
        }
    }

    /// Evaluates the design chain without going through [`Model`].
    #[must_use]
    pub fn design(&self, design: &MeanLineDesign) -> MeanLineResults {
        self::core::mean_line(design, self.inlet, &self.lieblein)
    }

    /// Total-to-total efficiency over a range of flow coefficients.
    ///
    /// Stage loading, reaction and the diffusion-factor target are held at the
    /// values in `design`. The output has one entry per flow coefficient.
    #[must_use]
    pub fn efficiency_sweep(&self, design: &MeanLineDesign, flow_coefficients: &[f64]) -> Vec<f64> {
        flow_coefficients
            .iter()
            .map(|&phi| self.design(&design.with_flow_coefficient(phi)).eta_tt)
            .collect()
    }
}

impl Model for MeanLineStage {
    type Input = MeanLineDesign;
    type Output = MeanLineResults;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let results = self.design(input);

        debug!(
            phi = input.parameters.flow_coefficient,
            psi = input.parameters.stage_loading,
            reaction = input.parameters.reaction,
            eta_tt = results.eta_tt,
            "mean-line stage evaluated"
        );
        if !results.is_physical() {
            warn!(?input, "mean-line design lies outside the correlation range");
        }

        Ok(results)
    }
}

/// Free-vortex distribution of a mean-line design across the span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeVortexStage {
    mean_line: MeanLineStage,
    geometry: RadialGeometry,
    stations: usize,
}

impl FreeVortexStage {
    /// Creates a spanwise model evaluated at `stations` evenly spaced radii,
    /// hub and tip included.
    ///
    /// # Errors
    ///
    /// Returns [`RadialError::TooFewStations`] if `stations < 2`.
    pub fn new(
        mean_line: MeanLineStage,
        geometry: RadialGeometry,
        stations: usize,
    ) -> Result<Self, RadialError> {
        if stations < 2 {
            return Err(RadialError::TooFewStations { stations });
        }

        Ok(Self {
            mean_line,
            geometry,
            stations,
        })
    }

    /// The annulus geometry.
    #[must_use]
    pub fn geometry(&self) -> &RadialGeometry {
        &self.geometry
    }
}

impl Model for FreeVortexStage {
    type Input = MeanLineDesign;
    type Output = RadialResults;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let mean = self.mean_line.call(input)?;
        let results = self::core::free_vortex(
            &self.geometry,
            &mean,
            input.parameters.flow_coefficient,
            self.stations,
        );

        debug!(stations = self.stations, "free-vortex distribution evaluated");
        if !results.is_physical() {
            warn!(?input, "spanwise distribution contains non-finite stations");
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Length, MassDensity, MassRate},
        length::meter,
        mass_density::kilogram_per_cubic_meter,
        mass_rate::kilogram_per_second,
    };

    use crate::support::sweep::linspace;

    use super::*;

    fn geometry() -> RadialGeometry {
        RadialGeometry::new(
            Length::new::<meter>(0.4),
            Length::new::<meter>(0.2),
            MassRate::new::<kilogram_per_second>(10.0),
            MassDensity::new::<kilogram_per_cubic_meter>(1.2),
            2.0,
        )
        .unwrap()
    }

    #[test]
    fn model_matches_direct_design() {
        let stage = MeanLineStage::new(InletSwirl::OneMinusReaction);
        let design = MeanLineDesign::reference();
        assert_eq!(stage.call(&design).unwrap(), stage.design(&design));
    }

    #[test]
    fn efficiency_sweep_over_flow_coefficient() {
        let stage = MeanLineStage::new(InletSwirl::OneMinusReaction);
        let design = MeanLineDesign::reference();
        let phis = linspace(0.5, 1.0, 100);

        let etas = stage.efficiency_sweep(&design, &phis);

        assert_eq!(etas.len(), phis.len());
        assert!(etas.iter().all(|eta| eta.is_finite() && *eta < 1.0));

        // At fixed loading, low φ means steep angles and heavy turning.
        assert!(etas.windows(2).all(|w| w[1] > w[0]));
        assert!(etas[0] < 0.3 && etas[99] > 0.94);

        let at_reference = stage.design(&design).eta_tt;
        assert_relative_eq!(at_reference, 0.909_930_088_768_815, max_relative = 1e-10);
    }

    #[test]
    fn free_vortex_model() {
        let stage = FreeVortexStage::new(
            MeanLineStage::new(InletSwirl::OneMinusReaction),
            geometry(),
            1000,
        )
        .unwrap();

        let results = stage.call(&MeanLineDesign::reference()).unwrap();

        assert_eq!(results.stations.len(), 1000);
        assert!(results.is_physical());
        assert_relative_eq!(results.stations[0].radius.get::<meter>(), 0.3, epsilon = 1e-12);
        assert_relative_eq!(results.stations[999].radius.get::<meter>(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(stage.geometry().chord().get::<meter>(), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn free_vortex_needs_two_stations() {
        let result = FreeVortexStage::new(MeanLineStage::new(InletSwirl::OneMinusReaction), geometry(), 1);
        assert_eq!(result, Err(RadialError::TooFewStations { stations: 1 }));
    }
}

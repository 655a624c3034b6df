//! Mean-line stage design.

use crate::support::{
    cascade::{
        LiebleinConfig,
        diffusion::{de_haller, pitch_chord},
        lieblein::profile_loss,
    },
    stage::{InletSwirl, StageParameters, VelocityTriangles, efficiency::total_to_total},
};

/// Design targets for a mean-line stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanLineDesign {
    /// Normal-stage parameters `φ`, `ψ` and `R`.
    pub parameters: StageParameters,

    /// Diffusion factor imposed on both blade rows.
    pub diffusion_factor: f64,
}

impl MeanLineDesign {
    /// Creates a design from `φ`, `ψ`, `R` and the diffusion-factor target.
    #[must_use]
    pub fn new(
        flow_coefficient: f64,
        stage_loading: f64,
        reaction: f64,
        diffusion_factor: f64,
    ) -> Self {
        Self {
            parameters: StageParameters::new(flow_coefficient, stage_loading, reaction),
            diffusion_factor,
        }
    }

    /// A 50% reaction compressor stage used throughout the tests and demo:
    /// `φ = 0.7156`, `ψ = 0.5894`, `R = 0.5`, `DF = 0.45`.
    #[must_use]
    pub fn reference() -> Self {
        Self::new(0.7156, 0.5894, 0.5, 0.45)
    }

    /// Returns a copy of this design with a different flow coefficient.
    #[must_use]
    pub fn with_flow_coefficient(mut self, flow_coefficient: f64) -> Self {
        self.parameters.flow_coefficient = flow_coefficient;
        self
    }
}

/// Spacing and loss of one blade row at the mean radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowPerformance {
    /// Pitch-to-chord ratio that meets the diffusion-factor target.
    pub pitch_chord: f64,

    /// Lieblein profile-loss coefficient, `NaN` outside the correlation's range.
    pub profile_loss: f64,

    /// De Haller number of the row.
    pub de_haller: f64,
}

impl RowPerformance {
    fn design(lieblein: &LiebleinConfig, diffusion_factor: f64, alpha_in: f64, alpha_out: f64) -> Self {
        let s_l = pitch_chord(diffusion_factor, alpha_in, alpha_out);
        Self {
            pitch_chord: s_l,
            profile_loss: profile_loss(lieblein, s_l, alpha_in, alpha_out),
            de_haller: de_haller(alpha_in, alpha_out),
        }
    }

    /// Returns `true` if every value is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.pitch_chord.is_finite() && self.profile_loss.is_finite() && self.de_haller.is_finite()
    }
}

/// Results of a mean-line stage design.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanLineResults {
    /// Flow angles at the mean radius.
    pub triangles: VelocityTriangles,

    /// Rotor row, turning the relative flow from `β1` to `β2`.
    pub rotor: RowPerformance,

    /// Stator row, turning the absolute flow from `α2` to `α3`.
    pub stator: RowPerformance,

    /// Total-to-total stage efficiency.
    pub eta_tt: f64,
}

impl MeanLineResults {
    /// Returns `true` if every output is finite.
    ///
    /// A `false` result means the design lies outside the range of at least
    /// one correlation.
    #[must_use]
    pub fn is_physical(&self) -> bool {
        self.triangles.is_finite()
            && self.rotor.is_finite()
            && self.stator.is_finite()
            && self.eta_tt.is_finite()
    }
}

/// Runs the mean-line design chain.
pub(crate) fn mean_line(
    design: &MeanLineDesign,
    inlet: InletSwirl,
    lieblein: &LiebleinConfig,
) -> MeanLineResults {
    let triangles = VelocityTriangles::normal_stage(&design.parameters, inlet);
    let df = design.diffusion_factor;

    let rotor = RowPerformance::design(lieblein, df, triangles.beta1, triangles.beta2);
    let stator = RowPerformance::design(lieblein, df, triangles.alpha2, triangles.alpha3);

    let eta_tt = total_to_total(
        &design.parameters,
        &triangles,
        rotor.profile_loss,
        stator.profile_loss,
    );

    MeanLineResults {
        triangles,
        rotor,
        stator,
        eta_tt,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn reference_design() {
        let results = mean_line(
            &MeanLineDesign::reference(),
            InletSwirl::OneMinusReaction,
            &LiebleinConfig::default(),
        );

        assert!(results.is_physical());
        assert_relative_eq!(results.rotor.pitch_chord, 0.530_347_285_954_587_6, max_relative = 1e-10);
        assert_relative_eq!(results.rotor.profile_loss, 0.046_419_854_647_806_55, max_relative = 1e-10);
        assert_relative_eq!(results.rotor.de_haller, 0.696_096, epsilon = 1e-5);

        // Symmetric stage: both rows see the same geometry.
        assert_relative_eq!(results.stator.pitch_chord, results.rotor.pitch_chord, max_relative = 1e-10);
        assert_relative_eq!(results.stator.profile_loss, results.rotor.profile_loss, max_relative = 1e-10);

        assert_relative_eq!(results.eta_tt, 0.909_930_088_768_815, max_relative = 1e-10);
        assert!(results.eta_tt > 0.89 && results.eta_tt < 0.92);
    }

    #[test]
    fn reaction_minus_one_design() {
        let results = mean_line(
            &MeanLineDesign::reference(),
            InletSwirl::ReactionMinusOne,
            &LiebleinConfig::default(),
        );

        assert!(results.is_physical());
        assert_relative_eq!(results.rotor.pitch_chord, 0.587_716_093_562_382, max_relative = 1e-9);
        assert_relative_eq!(results.stator.pitch_chord, 1.010_434_541_278_696, max_relative = 1e-9);
        assert_relative_eq!(results.eta_tt, 0.877_680_130_511_670_7, max_relative = 1e-9);
    }

    #[test]
    fn overloaded_stage_is_not_physical() {
        // A diffusion target this high pushes s/l past the Lieblein pole.
        let design = MeanLineDesign::new(0.7156, 0.5894, 0.5, 1.0);
        let results = mean_line(&design, InletSwirl::OneMinusReaction, &LiebleinConfig::default());

        assert!(results.rotor.pitch_chord.is_finite());
        assert!(results.rotor.profile_loss.is_nan());
        assert!(results.eta_tt.is_nan());
        assert!(!results.is_physical());
    }

    #[test]
    fn with_flow_coefficient_keeps_other_targets() {
        let design = MeanLineDesign::reference().with_flow_coefficient(0.6);
        assert_relative_eq!(design.parameters.flow_coefficient, 0.6);
        assert_relative_eq!(design.parameters.stage_loading, 0.5894);
        assert_relative_eq!(design.diffusion_factor, 0.45);
    }
}

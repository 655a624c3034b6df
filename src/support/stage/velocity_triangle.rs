//! Closed-form velocity triangles of a normal stage.

use crate::support::trig::{arctand, tand};

/// Dimensionless design parameters of a normal stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageParameters {
    /// Flow coefficient `φ = c_x / U`.
    pub flow_coefficient: f64,

    /// Stage loading `ψ = Δh0 / U²`.
    pub stage_loading: f64,

    /// Degree of reaction `R`.
    pub reaction: f64,
}

impl StageParameters {
    /// Creates stage parameters from `φ`, `ψ` and `R`.
    #[must_use]
    pub fn new(flow_coefficient: f64, stage_loading: f64, reaction: f64) -> Self {
        Self {
            flow_coefficient,
            stage_loading,
            reaction,
        }
    }

    /// Recovers `ψ` and `R` from a set of velocity triangles at flow
    /// coefficient `φ`.
    ///
    /// Uses `ψ = φ (tan α2 - tan α1)` and `R = φ/2 (tan β1 + tan β2)`, which
    /// hold at any radius, so this also yields the local stage parameters of
    /// a spanwise distribution.
    #[must_use]
    pub fn from_triangles(flow_coefficient: f64, triangles: &VelocityTriangles) -> Self {
        let phi = flow_coefficient;
        Self {
            flow_coefficient: phi,
            stage_loading: phi * (tand(triangles.alpha2) - tand(triangles.alpha1)),
            reaction: 0.5 * phi * (tand(triangles.beta1) + tand(triangles.beta2)),
        }
    }
}

/// Relation used for the stage inlet swirl, `φ tan α1`.
///
/// The two forms differ in sign and are not interchangeable: only
/// [`InletSwirl::OneMinusReaction`] is consistent with the remaining
/// normal-stage identities, so recovering `R` from triangles built with
/// [`InletSwirl::ReactionMinusOne`] gives `2 - ψ - R` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InletSwirl {
    /// `φ tan α1 = 1 - R - ψ/2`.
    OneMinusReaction,

    /// `φ tan α1 = R + ψ/2 - 1`.
    ReactionMinusOne,
}

impl InletSwirl {
    /// The inlet swirl `φ tan α1` for the given stage parameters.
    #[must_use]
    pub fn swirl(self, parameters: &StageParameters) -> f64 {
        let StageParameters {
            stage_loading: psi,
            reaction,
            ..
        } = *parameters;

        match self {
            Self::OneMinusReaction => 1.0 - reaction - 0.5 * psi,
            Self::ReactionMinusOne => reaction + 0.5 * psi - 1.0,
        }
    }
}

/// Flow angles of a stage, in degrees.
///
/// Station 1 is the rotor inlet, 2 the rotor exit and stator inlet, 3 the
/// stator exit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityTriangles {
    /// Absolute flow angle at rotor inlet.
    pub alpha1: f64,

    /// Absolute flow angle at rotor exit.
    pub alpha2: f64,

    /// Absolute flow angle at stator exit.
    pub alpha3: f64,

    /// Relative flow angle at rotor inlet.
    pub beta1: f64,

    /// Relative flow angle at rotor exit.
    pub beta2: f64,
}

impl VelocityTriangles {
    /// Solves the velocity triangles of a normal stage.
    ///
    /// ```text
    /// tan α1 = swirl / φ          (see InletSwirl)
    /// tan α2 = ψ/φ + tan α1
    /// tan β2 = (1 - ψ)/φ - tan α1
    /// tan β1 = ψ/φ + tan β2
    /// α3 = α1
    /// ```
    ///
    /// A zero flow coefficient propagates as infinite tangents and ±90° angles.
    #[must_use]
    pub fn normal_stage(parameters: &StageParameters, inlet: InletSwirl) -> Self {
        let phi = parameters.flow_coefficient;
        let psi = parameters.stage_loading;

        let alpha1 = arctand(inlet.swirl(parameters) / phi);
        let alpha2 = arctand(psi / phi + tand(alpha1));
        let beta2 = arctand((1.0 - psi) / phi - tand(alpha1));
        let beta1 = arctand(psi / phi + tand(beta2));

        Self {
            alpha1,
            alpha2,
            alpha3: alpha1,
            beta1,
            beta2,
        }
    }

    /// Returns `true` if every angle is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [self.alpha1, self.alpha2, self.alpha3, self.beta1, self.beta2]
            .iter()
            .all(|a| a.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn reference() -> StageParameters {
        StageParameters::new(0.7156, 0.5894, 0.5)
    }

    #[test]
    fn symmetric_stage_angles() {
        let t = VelocityTriangles::normal_stage(&reference(), InletSwirl::OneMinusReaction);

        assert_relative_eq!(t.alpha1, 16.007_768_122_332_05, max_relative = 1e-12);
        assert_relative_eq!(t.alpha2, 47.998_052_779_387_7, max_relative = 1e-12);
        assert_relative_eq!(t.alpha3, t.alpha1);

        // 50% reaction mirrors the rotor and stator triangles.
        assert_relative_eq!(t.beta1, t.alpha2, max_relative = 1e-12);
        assert_relative_eq!(t.beta2, t.alpha1, max_relative = 1e-12);
    }

    #[test]
    fn reaction_minus_one_flips_inlet_swirl() {
        let a = VelocityTriangles::normal_stage(&reference(), InletSwirl::OneMinusReaction);
        let b = VelocityTriangles::normal_stage(&reference(), InletSwirl::ReactionMinusOne);

        assert_relative_eq!(b.alpha1, -a.alpha1, max_relative = 1e-12);
        assert_relative_eq!(b.alpha1, -16.007_768_122_332_05, max_relative = 1e-12);
        assert_relative_eq!(b.alpha2, 28.224_785_090_079_59, max_relative = 1e-10);
        assert_relative_eq!(b.beta1, 59.301_924_952_717_5, max_relative = 1e-10);
        assert_relative_eq!(b.beta2, 40.717_800_159_290_5, max_relative = 1e-10);
    }

    #[test]
    fn triangles_recover_parameters() {
        for (phi, psi, reaction) in [(0.7156, 0.5894, 0.5), (0.5, 0.4, 0.7), (0.9, 0.3, 0.35)] {
            let p = StageParameters::new(phi, psi, reaction);
            let t = VelocityTriangles::normal_stage(&p, InletSwirl::OneMinusReaction);
            let back = StageParameters::from_triangles(phi, &t);

            assert_relative_eq!(back.stage_loading, psi, max_relative = 1e-10);
            assert_relative_eq!(back.reaction, reaction, max_relative = 1e-10);
        }
    }

    #[test]
    fn reaction_minus_one_recovers_complementary_reaction() {
        let p = StageParameters::new(0.5, 0.4, 0.7);
        let t = VelocityTriangles::normal_stage(&p, InletSwirl::ReactionMinusOne);
        let back = StageParameters::from_triangles(0.5, &t);

        assert_relative_eq!(back.stage_loading, 0.4, max_relative = 1e-10);
        assert_relative_eq!(back.reaction, 2.0 - 0.4 - 0.7, max_relative = 1e-10);
    }

    #[test]
    fn zero_flow_coefficient_saturates_inlet_angle() {
        let p = StageParameters::new(0.0, 0.5, 0.5);
        let t = VelocityTriangles::normal_stage(&p, InletSwirl::OneMinusReaction);
        assert_relative_eq!(t.alpha1, 90.0);
    }
}

//! Cascade deviation sweep.

use crate::support::cascade::{
    CarterConfig, DeviationRule, LiebleinConfig, deviation::deflection, lieblein::profile_loss,
};

/// Blade geometry of a compressor cascade, angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CascadeBlade {
    /// Inlet metal angle `α1'`.
    pub inlet_angle: f64,

    /// Outlet metal angle `α2'`.
    pub outlet_angle: f64,

    /// Chordwise position of maximum camber as a fraction of chord, `a/l`.
    pub max_camber_position: f64,

    /// Incidence `i = α1 - α1'`.
    pub incidence: f64,
}

impl CascadeBlade {
    /// Camber angle `θ = α1' - α2'`.
    #[must_use]
    pub fn camber(&self) -> f64 {
        self.inlet_angle - self.outlet_angle
    }

    /// Inlet flow angle `α1 = α1' + i`.
    #[must_use]
    pub fn inlet_flow_angle(&self) -> f64 {
        self.inlet_angle + self.incidence
    }
}

/// Cascade performance at one pitch-to-chord ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CascadePoint {
    /// Pitch-to-chord ratio `s/l`.
    pub pitch_chord: f64,

    /// Deviation `δ`, degrees.
    pub deviation: f64,

    /// Outlet flow angle `α2 = α2' + δ`, degrees.
    pub outlet_flow_angle: f64,

    /// Flow deflection `α1 - α2`, degrees.
    pub deflection: f64,

    /// Lieblein profile loss of the flow turning `α1 → α2`.
    pub profile_loss: f64,
}

/// Cascade performance over a range of spacings.
#[derive(Debug, Clone, PartialEq)]
pub struct CascadeResults {
    /// Camber angle `θ`, degrees.
    pub camber: f64,

    /// Carter's coefficient `m` at the outlet metal angle.
    pub carter_coefficient: f64,

    /// One point per requested pitch-to-chord ratio, in input order.
    pub points: Vec<CascadePoint>,
}

impl CascadeResults {
    /// Deflection at every point, in input order.
    #[must_use]
    pub fn deflections(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.deflection).collect()
    }

    /// Profile loss at every point, in input order.
    #[must_use]
    pub fn profile_losses(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.profile_loss).collect()
    }
}

/// Evaluates deviation, deflection and loss at each pitch-to-chord ratio.
pub(crate) fn sweep(
    blade: &CascadeBlade,
    rule: DeviationRule,
    carter: &CarterConfig,
    lieblein: &LiebleinConfig,
    pitch_chords: &[f64],
) -> CascadeResults {
    let camber = blade.camber();
    let m = carter.coefficient(blade.max_camber_position, blade.outlet_angle);
    let alpha_in = blade.inlet_flow_angle();

    let points = pitch_chords
        .iter()
        .map(|&s_l| {
            let deviation = rule.deviation(carter, m, camber, s_l);
            let alpha_out = blade.outlet_angle + deviation;
            CascadePoint {
                pitch_chord: s_l,
                deviation,
                outlet_flow_angle: alpha_out,
                deflection: deflection(alpha_in, alpha_out),
                profile_loss: profile_loss(lieblein, s_l, alpha_in, alpha_out),
            }
        })
        .collect();

    CascadeResults {
        camber,
        carter_coefficient: m,
        points,
    }
}

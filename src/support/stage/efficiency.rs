//! Stage efficiency from blade-row profile losses.

use crate::support::trig::cosd;

use super::{StageParameters, VelocityTriangles};

/// Total-to-total efficiency of a normal stage.
///
/// ```text
/// η_tt = 1 - ½ (φ²/ψ) (Y_p,rotor / cos²β1 + Y_p,stator / cos²α2)
/// ```
///
/// Each row's loss coefficient is referred to its own inlet dynamic head,
/// hence the rotor term uses `β1` and the stator term `α2`.
/// A `NaN` loss from either row propagates to the result.
#[must_use]
pub fn total_to_total(
    parameters: &StageParameters,
    triangles: &VelocityTriangles,
    rotor_loss: f64,
    stator_loss: f64,
) -> f64 {
    let phi = parameters.flow_coefficient;
    let psi = parameters.stage_loading;

    let rotor = rotor_loss / cosd(triangles.beta1).powi(2);
    let stator = stator_loss / cosd(triangles.alpha2).powi(2);

    1.0 - 0.5 * phi.powi(2) / psi * (rotor + stator)
}

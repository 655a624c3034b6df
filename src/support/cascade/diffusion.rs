//! Diffusion factor and de Haller number.
//!
//! The diffusion factor bounds the deceleration on the suction surface of a
//! blade:
//!
//! ```text
//! DF = 1 - cos(α_in)/cos(α_out) + ½ (tan α_in - tan α_out) cos(α_in) · s/l
//! ```
//!
//! It is linear in `s/l`, so choosing a target `DF` fixes the blade spacing in
//! closed form through [`pitch_chord`].

use crate::support::trig::{cosd, tand};

/// Diffusion factor of a blade row with the given spacing and flow angles.
#[must_use]
pub fn diffusion_factor(pitch_chord: f64, alpha_in: f64, alpha_out: f64) -> f64 {
    1.0 - cosd(alpha_in) / cosd(alpha_out)
        + 0.5 * (tand(alpha_in) - tand(alpha_out)) * cosd(alpha_in) * pitch_chord
}

/// Pitch-to-chord ratio that gives a row the target diffusion factor.
///
/// This is the explicit inversion of [`diffusion_factor`]. A row with no
/// turning (`alpha_in == alpha_out`) has a zero denominator and the result is
/// infinite or `NaN`.
#[must_use]
pub fn pitch_chord(diffusion_factor: f64, alpha_in: f64, alpha_out: f64) -> f64 {
    (diffusion_factor + cosd(alpha_in) / cosd(alpha_out) - 1.0)
        / (0.5 * (tand(alpha_in) - tand(alpha_out)) * cosd(alpha_in))
}

/// De Haller number `W_out / W_in` for a row with constant axial velocity.
///
/// Values below about 0.72 indicate excessive diffusion.
#[must_use]
pub fn de_haller(alpha_in: f64, alpha_out: f64) -> f64 {
    cosd(alpha_in) / cosd(alpha_out)
}

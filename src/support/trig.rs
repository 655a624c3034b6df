//! Trigonometry on angles expressed in degrees.
//!
//! Turbomachinery design data (blade metal angles, flow angles, stagger) is
//! almost always tabulated in degrees. These helpers keep the conversion in one
//! place so the correlations in [`crate::support`] read like their textbook
//! forms.
//!
//! All functions follow IEEE 754 semantics at singularities: `tand(90.0)` is a
//! very large finite number, dividing by `cosd(90.0)` yields an infinite or
//! `NaN` result, and nothing panics.

use num_traits::Float;

/// Sine of an angle in degrees.
#[inline]
pub fn sind<T: Float>(degrees: T) -> T {
    degrees.to_radians().sin()
}

/// Cosine of an angle in degrees.
#[inline]
pub fn cosd<T: Float>(degrees: T) -> T {
    degrees.to_radians().cos()
}

/// Tangent of an angle in degrees.
#[inline]
pub fn tand<T: Float>(degrees: T) -> T {
    degrees.to_radians().tan()
}

/// Arctangent of a ratio, returned in degrees within (-90°, 90°).
#[inline]
pub fn arctand<T: Float>(ratio: T) -> T {
    ratio.atan().to_degrees()
}

//! Two-dimensional cascade correlations for a single blade row.
//!
//! A blade row is described by its inlet and outlet flow angles (degrees,
//! measured from the axial direction) and its pitch-to-chord ratio `s/l`.
//! The same functions serve rotors and stators: pass relative angles
//! (`β1 → β2`) for a rotor and absolute angles (`α2 → α3`) for a stator.
//!
//! - [`diffusion`]: Diffusion factor, its pitch-to-chord inversion and the de Haller number.
//! - [`lieblein`]: Lieblein's profile-loss correlation.
//! - [`deviation`]: Carter's deviation rule and the resulting flow deflection.

pub mod deviation;
pub mod diffusion;
pub mod lieblein;

pub use deviation::{CarterConfig, DeviationRule};
pub use lieblein::LiebleinConfig;

//! # Axial Stage
//!
//! Aerodynamic design models for axial-flow compressor and turbine stages,
//! built on [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations for stage and cascade design.
//! - [`support`]: The closed-form aerodynamic kernel the models are built from.
//!
//! ## Numeric domain
//!
//! Kernel functions in [`support`] are total over floating-point arithmetic.
//! Inputs outside a correlation's domain (a logarithm of a non-positive
//! number, a zero denominator) produce `NaN` or infinite results instead of
//! errors, so a parameter sweep always yields an output of matching length
//! and the breakdown region stays visible to the caller.
//!
//! Only construction of dimensional configuration (radii, mass flow, density)
//! is validated, using the types in [`support::constraint`].

pub mod models;
pub mod support;

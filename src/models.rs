//! Public stage design models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are grouped by domain. Everything here currently lives under
//! [`turbomachinery`].
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation lives. The [`twine_core::Model`] implementation
//! is a thin adapter that delegates to that core, which in turn composes the
//! formulas in [`crate::support`].

pub mod turbomachinery;

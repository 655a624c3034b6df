//! Supporting utilities used by models.
//!
//! These modules are public because they are useful on their own, but their
//! APIs are not stable.
//!
//! - [`trig`]: Degree-based trigonometry.
//! - [`stage`]: Normal-stage velocity triangles and stage efficiency.
//! - [`cascade`]: Blade-row correlations (diffusion, loss, deviation).
//! - [`sweep`]: Parameter grids and element-wise evaluation.
//! - [`constraint`]: Construction-time numeric constraints.

pub mod cascade;
pub mod constraint;
pub mod stage;
pub mod sweep;
pub mod trig;

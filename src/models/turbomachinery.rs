//! Axial turbomachinery design models.
//!
//! - [`stage`]: Mean-line stage design and its free-vortex extension across
//!   the blade span.
//! - [`cascade`]: Deviation, deflection and profile loss of a single cascade
//!   over a range of blade spacings.

pub mod cascade;
pub mod stage;

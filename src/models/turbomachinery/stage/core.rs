//! Stage design computations.
//!
//! The mean-line design fixes the velocity triangles, blade spacing and losses
//! at the mean radius. The free-vortex distribution then carries that design
//! across the span with constant axial velocity and `r c_θ` held constant at
//! every station.

mod error;
mod mean_line;
mod radial;

pub use error::RadialError;
pub use mean_line::{MeanLineDesign, MeanLineResults, RowPerformance};
pub use radial::{RadialGeometry, RadialResults, RadialStation, SpanwiseRow};

pub(super) use mean_line::mean_line;
pub(super) use radial::free_vortex;

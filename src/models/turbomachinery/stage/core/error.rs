use thiserror::Error;
use uom::si::f64::Length;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while configuring a spanwise stage distribution.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RadialError {
    /// A dimensional input was zero, negative or `NaN`.
    #[error("invalid geometry: {0}")]
    Constraint(#[from] ConstraintError),

    /// The blade is taller than the annulus allows.
    #[error("hub radius must be positive: mean_radius={mean_radius:?}, blade_height={blade_height:?}")]
    HubBelowAxis {
        /// Mean radius of the annulus.
        mean_radius: Length,

        /// Blade height, hub to tip.
        blade_height: Length,
    },

    /// The distribution needs at least a hub and a tip station.
    #[error("at least 2 radial stations are required, got {stations}")]
    TooFewStations {
        /// Requested station count.
        stations: usize,
    },
}

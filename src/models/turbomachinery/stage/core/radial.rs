//! Free-vortex spanwise distribution of a mean-line design.

use std::f64::consts::PI;

use uom::si::{
    angular_velocity::radian_per_second,
    f64::{Area, AngularVelocity, Length, MassDensity, MassRate, Velocity},
    length::meter,
    velocity::meter_per_second,
};

use crate::support::{
    cascade::diffusion::{de_haller, diffusion_factor},
    constraint::{Constrained, StrictlyPositive},
    stage::{StageParameters, VelocityTriangles},
    sweep::linspace,
    trig::{arctand, tand},
};

use super::{MeanLineResults, RadialError};

/// Annulus geometry and through-flow of a stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGeometry {
    mean_radius: Constrained<Length, StrictlyPositive>,
    blade_height: Constrained<Length, StrictlyPositive>,
    mass_rate: Constrained<MassRate, StrictlyPositive>,
    density: Constrained<MassDensity, StrictlyPositive>,
    aspect_ratio: Constrained<f64, StrictlyPositive>,
}

impl RadialGeometry {
    /// Creates an annulus geometry.
    ///
    /// `aspect_ratio` is the blade height over chord, `h/l`, shared by the
    /// rotor and stator.
    ///
    /// # Errors
    ///
    /// Returns [`RadialError::Constraint`] if any input is not strictly
    /// positive, or [`RadialError::HubBelowAxis`] if half the blade height
    /// reaches the mean radius.
    pub fn new(
        mean_radius: Length,
        blade_height: Length,
        mass_rate: MassRate,
        density: MassDensity,
        aspect_ratio: f64,
    ) -> Result<Self, RadialError> {
        let geometry = Self {
            mean_radius: StrictlyPositive::new(mean_radius)?,
            blade_height: StrictlyPositive::new(blade_height)?,
            mass_rate: StrictlyPositive::new(mass_rate)?,
            density: StrictlyPositive::new(density)?,
            aspect_ratio: StrictlyPositive::new(aspect_ratio)?,
        };

        if geometry.hub_radius() <= Length::new::<meter>(0.0) {
            return Err(RadialError::HubBelowAxis {
                mean_radius,
                blade_height,
            });
        }

        Ok(geometry)
    }

    /// Mean radius `r_m`.
    #[must_use]
    pub fn mean_radius(&self) -> Length {
        *self.mean_radius.as_ref()
    }

    /// Blade height `h`.
    #[must_use]
    pub fn blade_height(&self) -> Length {
        *self.blade_height.as_ref()
    }

    /// Hub radius `r_m - h/2`.
    #[must_use]
    pub fn hub_radius(&self) -> Length {
        self.mean_radius() - self.blade_height() * 0.5
    }

    /// Tip radius `r_m + h/2`.
    #[must_use]
    pub fn tip_radius(&self) -> Length {
        self.mean_radius() + self.blade_height() * 0.5
    }

    /// Blade chord `l = h / (h/l)`.
    #[must_use]
    pub fn chord(&self) -> Length {
        self.blade_height() / *self.aspect_ratio.as_ref()
    }

    /// Flow area of the annulus.
    #[must_use]
    pub fn annulus_area(&self) -> Area {
        let (hub, tip) = (self.hub_radius(), self.tip_radius());
        (tip * tip - hub * hub) * PI
    }

    /// Axial velocity `ṁ / (ρ A)`, uniform across the span.
    #[must_use]
    pub fn axial_velocity(&self) -> Velocity {
        *self.mass_rate.as_ref() / (*self.density.as_ref() * self.annulus_area())
    }
}

/// Spacing, loading and blade shape of one row at a radial station.
///
/// Blade metal angles are taken equal to the flow angles, so camber equals the
/// flow turning and stagger is the mean of the inlet and outlet angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanwiseRow {
    /// Local pitch-to-chord ratio.
    pub pitch_chord: f64,

    /// Local diffusion factor.
    pub diffusion_factor: f64,

    /// Local de Haller number.
    pub de_haller: f64,

    /// Blade camber angle, degrees.
    pub camber: f64,

    /// Blade stagger angle, degrees.
    pub stagger: f64,
}

impl SpanwiseRow {
    fn new(pitch_chord: f64, alpha_in: f64, alpha_out: f64) -> Self {
        Self {
            pitch_chord,
            diffusion_factor: diffusion_factor(pitch_chord, alpha_in, alpha_out),
            de_haller: de_haller(alpha_in, alpha_out),
            camber: alpha_in - alpha_out,
            stagger: 0.5 * (alpha_in + alpha_out),
        }
    }
}

/// Flow state and blading at one radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialStation {
    /// Station radius.
    pub radius: Length,

    /// Blade speed `U = Ω r`.
    pub blade_speed: Velocity,

    /// Tangential velocity `c_θ` at stations 1, 2 and 3.
    pub swirl_velocity: [Velocity; 3],

    /// Absolute velocity magnitude `c` at stations 1, 2 and 3.
    pub absolute_velocity: [Velocity; 3],

    /// Local flow angles.
    pub triangles: VelocityTriangles,

    /// Local `φ`, `ψ` and `R`.
    pub parameters: StageParameters,

    /// Rotor row at this radius.
    pub rotor: SpanwiseRow,

    /// Stator row at this radius.
    pub stator: SpanwiseRow,
}

/// A mean-line design distributed from hub to tip.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialResults {
    /// The mean-line design being distributed.
    pub mean_line: MeanLineResults,

    /// Axial velocity, uniform across the span.
    pub axial_velocity: Velocity,

    /// Rotor angular velocity.
    pub angular_velocity: AngularVelocity,

    /// Stations ordered from hub to tip.
    pub stations: Vec<RadialStation>,
}

impl RadialResults {
    /// Returns `true` if the mean-line design and every station are finite.
    #[must_use]
    pub fn is_physical(&self) -> bool {
        self.mean_line.is_physical()
            && self.stations.iter().all(|s| {
                s.triangles.is_finite()
                    && s.rotor.diffusion_factor.is_finite()
                    && s.stator.diffusion_factor.is_finite()
            })
    }
}

/// Distributes a mean-line design across the span as a free vortex.
///
/// Station count has already been validated to be at least 2.
pub(crate) fn free_vortex(
    geometry: &RadialGeometry,
    mean_line: &MeanLineResults,
    flow_coefficient: f64,
    stations: usize,
) -> RadialResults {
    let r_m = geometry.mean_radius().get::<meter>();
    let c_x = geometry.axial_velocity().get::<meter_per_second>();
    let omega = c_x / flow_coefficient / r_m;

    let mean = &mean_line.triangles;
    let vortex = [mean.alpha1, mean.alpha2, mean.alpha3].map(|alpha| r_m * c_x * tand(alpha));

    let radii = linspace(
        geometry.hub_radius().get::<meter>(),
        geometry.tip_radius().get::<meter>(),
        stations,
    );

    let stations = radii
        .into_iter()
        .map(|r| {
            let u = omega * r;
            let c_theta = vortex.map(|k| k / r);
            let [alpha1, alpha2, alpha3] = c_theta.map(|c_t| arctand(c_t / c_x));

            let triangles = VelocityTriangles {
                alpha1,
                alpha2,
                alpha3,
                beta1: arctand((u - c_theta[0]) / c_x),
                beta2: arctand((u - c_theta[1]) / c_x),
            };

            // Pitch grows linearly with radius at fixed blade count and chord.
            let scale = r / r_m;

            RadialStation {
                radius: Length::new::<meter>(r),
                blade_speed: Velocity::new::<meter_per_second>(u),
                swirl_velocity: c_theta.map(Velocity::new::<meter_per_second>),
                absolute_velocity: c_theta
                    .map(|c_t| Velocity::new::<meter_per_second>(c_x.hypot(c_t))),
                triangles,
                parameters: StageParameters::from_triangles(c_x / u, &triangles),
                rotor: SpanwiseRow::new(
                    mean_line.rotor.pitch_chord * scale,
                    triangles.beta1,
                    triangles.beta2,
                ),
                stator: SpanwiseRow::new(
                    mean_line.stator.pitch_chord * scale,
                    triangles.alpha2,
                    triangles.alpha3,
                ),
            }
        })
        .collect();

    RadialResults {
        mean_line: *mean_line,
        axial_velocity: Velocity::new::<meter_per_second>(c_x),
        angular_velocity: AngularVelocity::new::<radian_per_second>(omega),
        stations,
    }
}

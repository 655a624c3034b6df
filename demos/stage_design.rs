//! Console summary of an axial compressor stage design.
//!
//! # Usage
//!
//! ```text
//! cargo run --example stage_design
//! cargo run --example stage_design -- radial
//! RUST_LOG=axial_stage=debug cargo run --example stage_design -- cascade
//! ```
//!
//! # Modes
//!
//! - **mean** (default): Mean-line design of the reference stage and its
//!   efficiency over a range of flow coefficients.
//! - **radial**: Free-vortex distribution of the reference stage from hub to tip.
//! - **cascade**: Carter deviation and deflection of a cascade versus `s/l`.

use std::error::Error;

use axial_stage::{
    models::turbomachinery::{
        cascade::{CarterCascade, CascadeBlade},
        stage::{FreeVortexStage, MeanLineDesign, MeanLineStage, RadialGeometry},
    },
    support::{cascade::DeviationRule, stage::InletSwirl, sweep::linspace},
};
use tracing_subscriber::EnvFilter;
use twine_core::Model;
use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{Length, MassDensity, MassRate},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_second,
    velocity::meter_per_second,
};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mode = std::env::args().nth(1).unwrap_or_else(|| "mean".into());
    match mode.as_str() {
        "mean" => mean(),
        "radial" => radial(),
        "cascade" => cascade(),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: stage_design [mean|radial|cascade]");
            std::process::exit(1);
        }
    }
}

// --- Mean line ---------------------------------------------------------------

fn mean() -> Result<(), Box<dyn Error>> {
    let stage = MeanLineStage::new(InletSwirl::OneMinusReaction);
    let design = MeanLineDesign::reference();
    let results = stage.call(&design)?;

    let t = &results.triangles;
    println!("Mean-line design (phi, psi, R, DF) = (0.7156, 0.5894, 0.5, 0.45)");
    println!("  alpha1 = alpha3 = {:.2} deg", t.alpha1);
    println!("  alpha2          = {:.2} deg", t.alpha2);
    println!("  beta1           = {:.2} deg", t.beta1);
    println!("  beta2           = {:.2} deg", t.beta2);
    println!(
        "  rotor:  s/l = {:.4}, Yp = {:.4}, de Haller = {:.3}",
        results.rotor.pitch_chord, results.rotor.profile_loss, results.rotor.de_haller
    );
    println!(
        "  stator: s/l = {:.4}, Yp = {:.4}, de Haller = {:.3}",
        results.stator.pitch_chord, results.stator.profile_loss, results.stator.de_haller
    );
    println!("  eta_tt = {:.4}", results.eta_tt);

    println!("\nEfficiency versus flow coefficient");
    let phis = linspace(0.5, 1.0, 11);
    for (phi, eta) in phis.iter().zip(stage.efficiency_sweep(&design, &phis)) {
        println!("  phi = {phi:.2}  eta_tt = {eta:.4}");
    }

    Ok(())
}

// --- Radial ------------------------------------------------------------------

fn radial() -> Result<(), Box<dyn Error>> {
    let geometry = RadialGeometry::new(
        Length::new::<meter>(0.4),
        Length::new::<meter>(0.2),
        MassRate::new::<kilogram_per_second>(10.0),
        MassDensity::new::<kilogram_per_cubic_meter>(1.2),
        2.0,
    )?;
    let stage = FreeVortexStage::new(MeanLineStage::new(InletSwirl::OneMinusReaction), geometry, 5)?;
    let results = stage.call(&MeanLineDesign::reference())?;

    println!(
        "Free vortex: c_x = {:.3} m/s, N = {:.0} rpm, chord = {:.3} m",
        results.axial_velocity.get::<meter_per_second>(),
        results.angular_velocity.get::<revolution_per_minute>(),
        geometry.chord().get::<meter>(),
    );
    println!(
        "{:>7} {:>8} {:>8} {:>8} {:>8} {:>7} {:>7} {:>7} {:>7} {:>7}",
        "r [m]", "alpha1", "th_rot", "th_stat", "xi_rot", "phi", "psi", "R", "DF_r", "DF_s"
    );
    for s in &results.stations {
        println!(
            "{:>7.3} {:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>7.3} {:>7.3} {:>7.3} {:>7.3} {:>7.3}",
            s.radius.get::<meter>(),
            s.triangles.alpha1,
            s.rotor.camber,
            s.stator.camber,
            s.rotor.stagger,
            s.parameters.flow_coefficient,
            s.parameters.stage_loading,
            s.parameters.reaction,
            s.rotor.diffusion_factor,
            s.stator.diffusion_factor,
        );
    }

    Ok(())
}

// --- Cascade -----------------------------------------------------------------

fn cascade() -> Result<(), Box<dyn Error>> {
    let blade = CascadeBlade {
        inlet_angle: 48.0,
        outlet_angle: 16.0,
        max_camber_position: 0.4,
        incidence: 0.0,
    };
    let spacings = linspace(0.5, 2.5, 9);

    for rule in [DeviationRule::Carter, DeviationRule::CarterOutletCorrected] {
        let results = CarterCascade::new(blade, rule).call(&spacings)?;
        println!(
            "{rule:?}: camber = {:.1} deg, m = {:.4}",
            results.camber, results.carter_coefficient
        );
        for p in &results.points {
            println!(
                "  s/l = {:.2}  deviation = {:>6.3}  deflection = {:>6.3}  Yp = {:.4}",
                p.pitch_chord, p.deviation, p.deflection, p.profile_loss
            );
        }
    }

    Ok(())
}

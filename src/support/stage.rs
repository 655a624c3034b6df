//! Normal-stage kinematics and performance.
//!
//! A normal (repeating) stage has equal absolute flow angles at inlet and
//! exit, `α3 = α1`, and constant axial velocity. Its velocity triangles are
//! then fixed by three dimensionless numbers, collected in
//! [`StageParameters`]:
//!
//! - flow coefficient `φ = c_x / U`
//! - stage loading `ψ = Δh0 / U²`
//! - degree of reaction `R`
//!
//! Angles are in degrees from the axial direction. Absolute angles `α` belong
//! to the stator frame and relative angles `β` to the rotor frame.

pub mod efficiency;
pub mod velocity_triangle;

pub use velocity_triangle::{InletSwirl, StageParameters, VelocityTriangles};

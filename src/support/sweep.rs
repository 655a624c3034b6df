//! Parameter grids and element-wise evaluation.
//!
//! Every kernel function in [`crate::support`] is written for a single scalar
//! input. Design studies evaluate the same relation over a grid of inputs
//! (a range of pitch-to-chord ratios, flow coefficients or radii). Because
//! each grid point is independent, the array form of a relation is simply the
//! scalar form mapped over the grid:
//!
//! ```
//! use axial_stage::support::{cascade::diffusion::de_haller, sweep};
//!
//! let inlet = sweep::linspace(40.0, 50.0, 11);
//! let de_haller = sweep::map(&inlet, |alpha_in| de_haller(alpha_in, 16.0));
//! assert_eq!(de_haller.len(), inlet.len());
//! ```

/// Returns `n` evenly spaced values over the closed interval `[start, end]`.
///
/// Matches the conventions of NumPy's `linspace`: both endpoints are included,
/// `n == 1` yields `[start]`, and `n == 0` yields an empty vector. The final
/// value is exactly `end`.
#[must_use]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Applies a scalar relation to every element of `values`.
#[must_use]
pub fn map(values: &[f64], f: impl Fn(f64) -> f64) -> Vec<f64> {
    values.iter().map(|&x| f(x)).collect()
}

/// Applies a scalar relation of two arguments pairwise over two slices.
///
/// The output has the length of the shorter slice.
#[must_use]
pub fn zip_map(first: &[f64], second: &[f64], f: impl Fn(f64, f64) -> f64) -> Vec<f64> {
    first.iter().zip(second).map(|(&a, &b)| f(a, b)).collect()
}

/// Returns `true` if every value is finite.
///
/// This is the intended way to detect a correlation breakdown after a sweep.
#[must_use]
pub fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

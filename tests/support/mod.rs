//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use axisconv::float_types::Real;
use nalgebra::Vector3;

/// Tolerance for results that differ from the exact answer only by rounding.
pub const TIGHT: Real = Real::EPSILON * 64.0;

/// Tolerance for results built from several trigonometric steps.
#[cfg(feature = "f64")]
pub const LOOSE: Real = 1e-9;
/// Tolerance for results built from several trigonometric steps.
#[cfg(feature = "f32")]
pub const LOOSE: Real = 1e-4;

/// [`LOOSE`] scaled to the magnitude of `v`.
pub fn loose_for(v: &Vector3<Real>) -> Real {
    LOOSE * (1.0 + v.amax())
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Component-wise [`approx_eq`] for vectors.
pub fn approx_eq_vec(a: &Vector3<Real>, b: &Vector3<Real>, eps: Real) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| approx_eq(*x, *y, eps))
}

/// A fixed spread of vectors, including negative, tiny and large components.
pub fn sample_vectors() -> Vec<Vector3<Real>> {
    vec![
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 2.0, 3.0),
        Vector3::new(-4.5, 0.25, 9.0),
        Vector3::new(0.964224599, -1.58746422, -0.013700835),
        Vector3::new(1e-6, -1e-6, 5e-7),
        Vector3::new(1250.0, -300.5, 42.0),
        Vector3::new(-3.14159, 1.5707, -0.5),
    ]
}

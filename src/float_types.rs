// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Lazily-initialized tolerance used when comparing converted vectors.
/// Defaults depend on precision (`f32` vs `f64`), but can be overridden:
///  1) **Build-time**: set env var `AXISCONV_TOLERANCE` (e.g. `AXISCONV_TOLERANCE=1e-6 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before using the library
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
const fn default_tolerance() -> Real {
    #[cfg(feature = "f32")]
    {
        1e-5
    }
    #[cfg(feature = "f64")]
    {
        1e-9
    }
}

/// Returns the current tolerance.
/// If not set yet, it tries `AXISCONV_TOLERANCE` (parsed as the active `Real`) and
/// falls back to a sensible default.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        if let Some(environment_variable) = option_env!("AXISCONV_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        default_tolerance()
    })
}

/// Set the tolerance programmatically once (subsequent calls are ignored).
/// Call near program start: `axisconv::float_types::set_tolerance(1e-6);`
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

/// Quick helper to compare two scalars against [`tolerance`].
#[inline]
pub fn approx_eq(a: Real, b: Real) -> bool {
    (a - b).abs() <= tolerance()
}

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Frac Pi 2
/// π/2
#[cfg(feature = "f32")]
pub const FRAC_PI_2: Real = core::f32::consts::FRAC_PI_2;
/// π/2
#[cfg(feature = "f64")]
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;

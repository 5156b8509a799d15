//! Convert vectors from a left-handed, Y-up game-engine frame (X right, Y up,
//! Z forward) into a right-handed, Z-up robotics frame (X forward, Z up), and
//! draw the resulting orientations as labeled coordinate triads.
//!
//! ```
//! use axisconv::convert::AxisConventionConverter;
//! use nalgebra::Vector3;
//!
//! let converter = AxisConventionConverter::new();
//! let ros = converter.convert(&Vector3::new(0.0, 0.0, 1.0));
//! assert!((ros - Vector3::x()).norm() < 1e-12);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **svg-io**: render triad scenes to SVG
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for batch conversion
//! - **wasm**: `wasm-bindgen` bindings for the converter

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod convert;
pub mod errors;
pub mod euler;
pub mod float_types;
pub mod io;
pub mod logging;
pub mod triad;
pub mod vector;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use convert::{AxisConventionConverter, unity_to_ros};
pub use euler::EulerSequence;
pub use triad::Triad;

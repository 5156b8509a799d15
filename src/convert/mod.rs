//! Axis-convention conversion.

pub mod converter;
pub mod serial;
pub mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;

// Re-export core types
pub use converter::{AxisConventionConverter, EXPECTED_BASIS_IMAGES, unity_to_ros};
pub use serial::SerialBatch;
pub use traits::BatchConvert;

#[cfg(feature = "parallel")]
pub use parallel::ParallelBatch;

//! Traits for converting many vectors at once.

use crate::float_types::Real;
use nalgebra::Vector3;

/// Convert a batch of vectors.
///
/// Every implementation must give exactly the same result as calling
/// [`AxisConventionConverter::convert`](super::AxisConventionConverter::convert)
/// on each element in turn.
pub trait BatchConvert {
    fn convert_all(&self, vectors: &[Vector3<Real>]) -> Vec<Vector3<Real>>;
}

//! Parallel batch conversion

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::converter::AxisConventionConverter;
use super::traits::BatchConvert;
use crate::float_types::Real;
use nalgebra::Vector3;

/// Parallel implementation of `BatchConvert`, backed by rayon's global pool.
#[cfg(feature = "parallel")]
#[derive(Debug, Clone, Default)]
pub struct ParallelBatch {
    converter: AxisConventionConverter,
}

#[cfg(feature = "parallel")]
impl ParallelBatch {
    pub fn new() -> Self {
        Self {
            converter: AxisConventionConverter::new(),
        }
    }
}

#[cfg(feature = "parallel")]
impl BatchConvert for ParallelBatch {
    fn convert_all(&self, vectors: &[Vector3<Real>]) -> Vec<Vector3<Real>> {
        log::debug!("converting {} vectors in parallel", vectors.len());
        vectors
            .par_iter()
            .map(|v| self.converter.convert(v))
            .collect()
    }
}

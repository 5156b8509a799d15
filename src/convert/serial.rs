//! Serial batch conversion.

use super::converter::AxisConventionConverter;
use super::traits::BatchConvert;
use crate::float_types::Real;
use nalgebra::Vector3;

/// Serial implementation of `BatchConvert`.
#[derive(Debug, Clone, Default)]
pub struct SerialBatch {
    converter: AxisConventionConverter,
}

impl SerialBatch {
    pub fn new() -> Self {
        Self {
            converter: AxisConventionConverter::new(),
        }
    }
}

impl BatchConvert for SerialBatch {
    fn convert_all(&self, vectors: &[Vector3<Real>]) -> Vec<Vector3<Real>> {
        log::debug!("converting {} vectors serially", vectors.len());
        vectors.iter().map(|v| self.converter.convert(v)).collect()
    }
}

//! Reading a converted angle triple back as a rotation.

use crate::convert::AxisConventionConverter;
use crate::float_types::Real;
use crate::vector;
use nalgebra::{Rotation3, Vector3};

/// Order in which the three angles of a triple are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EulerSequence {
    /// Rotate about X, then the new Y, then the new Z: `Rx(a)·Ry(b)·Rz(c)`.
    #[default]
    IntrinsicXyz,
    /// Rotate about the fixed X, then fixed Y, then fixed Z: `Rz(c)·Ry(b)·Rx(a)`.
    ExtrinsicXyz,
}

impl EulerSequence {
    /// Build the rotation described by `angles` (radians) in this sequence.
    pub fn rotation(&self, angles: &Vector3<Real>) -> Rotation3<Real> {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), angles.x);
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), angles.y);
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), angles.z);

        match self {
            EulerSequence::IntrinsicXyz => rx * ry * rz,
            EulerSequence::ExtrinsicXyz => rz * ry * rx,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            EulerSequence::IntrinsicXyz => "intrinsic XYZ",
            EulerSequence::ExtrinsicXyz => "extrinsic xyz",
        }
    }
}

/// Turn a sensor orientation given in source-frame degrees into a target-frame
/// rotation: degrees -> radians -> [`AxisConventionConverter::convert`] ->
/// [`EulerSequence::rotation`].
pub fn sensor_rotation(degrees: &Vector3<Real>, sequence: EulerSequence) -> Rotation3<Real> {
    let converted = AxisConventionConverter::new().convert(&vector::to_radians(degrees));
    sequence.rotation(&converted)
}

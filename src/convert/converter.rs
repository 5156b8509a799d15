//! The left-handed Y-up -> right-handed Z-up axis conversion.

use crate::errors::ValidationError;
use crate::float_types::{FRAC_PI_2, Real, tolerance};
use crate::vector;
use nalgebra::{Matrix3, Rotation3, Vector3};

/// Where the source unit axes X, Y and Z land in the target frame.
///
/// Derived from the transform itself: `(a, b, c) -> (c, a, -b)`.
pub const EXPECTED_BASIS_IMAGES: [[Real; 3]; 3] = [
    [0.0, 1.0, 0.0],
    [0.0, 0.0, -1.0],
    [1.0, 0.0, 0.0],
];

/// Converts vectors from the game-engine frame (X right, Y up, Z forward,
/// left-handed) to the robotics frame (X forward, Z up, right-handed).
///
/// The conversion is a fixed permutation `(x, y, z) -> (z, y, x)` followed by
/// a −90° rotation about the permuted X axis. The rotation constant is
/// specific to this pair of frames; another pair needs its own constant
/// derived from how the basis vectors must map.
///
/// The same mapping is applied to positions and to Euler-angle triples; how
/// converted angles are read back is up to the caller (see
/// [`EulerSequence`](crate::euler::EulerSequence)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisConventionConverter {
    realignment: Rotation3<Real>,
}

impl Default for AxisConventionConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl AxisConventionConverter {
    pub fn new() -> Self {
        AxisConventionConverter {
            realignment: Rotation3::from_axis_angle(&Vector3::x_axis(), -FRAC_PI_2),
        }
    }

    /// Converter with a different realignment, for exercising the basis check.
    #[cfg(test)]
    pub(crate) const fn with_realignment(realignment: Rotation3<Real>) -> Self {
        AxisConventionConverter { realignment }
    }

    /// Swap the first and third components, leaving the second in place.
    #[inline]
    pub fn permute(v: &Vector3<Real>) -> Vector3<Real> {
        Vector3::new(v.z, v.y, v.x)
    }

    /// The fixed −90° rotation about X applied after [`permute`](Self::permute).
    pub const fn realignment(&self) -> &Rotation3<Real> {
        &self.realignment
    }

    /// The whole conversion as one matrix (realignment × permutation).
    ///
    /// The determinant is −1 because the two frames differ in handedness.
    pub fn matrix(&self) -> Matrix3<Real> {
        let permutation = Matrix3::new(
            0.0, 0.0, 1.0, //
            0.0, 1.0, 0.0, //
            1.0, 0.0, 0.0,
        );
        self.realignment.matrix() * permutation
    }

    /// Convert `v` from the source frame into the target frame.
    pub fn convert(&self, v: &Vector3<Real>) -> Vector3<Real> {
        let converted = self.realignment * Self::permute(v);
        log::trace!(
            "convert ({}, {}, {}) -> ({}, {}, {})",
            v.x,
            v.y,
            v.z,
            converted.x,
            converted.y,
            converted.z
        );
        converted
    }

    /// Undo [`convert`](Self::convert): target frame back to source frame.
    ///
    /// The permutation is its own inverse, so this is the inverse rotation
    /// followed by the same permutation.
    pub fn revert(&self, w: &Vector3<Real>) -> Vector3<Real> {
        Self::permute(&(self.realignment.inverse() * w))
    }

    /// Validate a raw slice (see [`vector::from_slice`]) and convert it.
    pub fn try_convert(&self, values: &[Real]) -> Result<Vector3<Real>, ValidationError> {
        let v = vector::from_slice(values)?;
        Ok(self.convert(&v))
    }

    /// Images of the source unit vectors X, Y and Z.
    pub fn basis_images(&self) -> [Vector3<Real>; 3] {
        [
            self.convert(&Vector3::x()),
            self.convert(&Vector3::y()),
            self.convert(&Vector3::z()),
        ]
    }

    /// Check every source unit axis against [`EXPECTED_BASIS_IMAGES`] within
    /// the configured [`tolerance`].
    pub fn check_basis(&self) -> Result<(), ValidationError> {
        let eps = tolerance();
        for ((axis, found), expected) in ['X', 'Y', 'Z']
            .into_iter()
            .zip(self.basis_images())
            .zip(EXPECTED_BASIS_IMAGES)
        {
            let expected = Vector3::from(expected);
            if (found - expected).amax() > eps {
                return Err(ValidationError::BasisMismatch {
                    axis,
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }
}

/// Convert with a default [`AxisConventionConverter`].
///
/// ```
/// # use axisconv::convert::unity_to_ros;
/// # use nalgebra::Vector3;
/// let ros = unity_to_ros(&Vector3::new(1.0, 2.0, 3.0));
/// assert!((ros - Vector3::new(3.0, 1.0, -2.0)).norm() < 1e-5);
/// ```
pub fn unity_to_ros(v: &Vector3<Real>) -> Vector3<Real> {
    AxisConventionConverter::new().convert(v)
}

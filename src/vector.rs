//! Building and validating the `Vector3` triples fed to the converter.

use crate::errors::ValidationError;
use crate::float_types::Real;
use nalgebra::Vector3;

/// Number of components in every triple handled by this crate.
pub const COMPONENTS: usize = 3;

/// Build a [`Vector3`] from a raw slice.
///
/// Fails fast when the slice does not hold exactly three components or when a
/// component is NaN / infinite.
///
/// ```
/// # use axisconv::vector::from_slice;
/// let v = from_slice(&[1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(v.z, 3.0);
/// assert!(from_slice(&[1.0, 2.0]).is_err());
/// ```
pub fn from_slice(values: &[Real]) -> Result<Vector3<Real>, ValidationError> {
    if values.len() != COMPONENTS {
        return Err(ValidationError::WrongComponentCount {
            expected: COMPONENTS,
            found: values.len(),
        });
    }

    if let Some((index, value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(ValidationError::NonFinite {
            index,
            value: *value,
        });
    }

    Ok(Vector3::new(values[0], values[1], values[2]))
}

/// Parse a triple such as `"55.246, -90.955, -0.785"` or `"1 2 3"`.
///
/// Commas and whitespace are both accepted as separators.
pub fn parse(text: &str) -> Result<Vector3<Real>, ValidationError> {
    let values = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| {
            token
                .parse::<Real>()
                .map_err(|_| ValidationError::NotANumber {
                    index,
                    token: token.to_string(),
                })
        })
        .collect::<Result<Vec<Real>, _>>()?;

    from_slice(&values)
}

/// Component-wise degrees -> radians.
pub fn to_radians(degrees: &Vector3<Real>) -> Vector3<Real> {
    degrees.map(|d| d.to_radians())
}

/// Component-wise radians -> degrees.
pub fn to_degrees(radians: &Vector3<Real>) -> Vector3<Real> {
    radians.map(|r| r.to_degrees())
}

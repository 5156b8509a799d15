//! Validation errors

use crate::float_types::Real;
use nalgebra::Vector3;

/// All the possible validation issues we might encounter while building or
/// checking a triple.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (WrongComponentCount) The input did not hold exactly three components
    #[error("(WrongComponentCount) Expected {expected} components, found {found}")]
    WrongComponentCount { expected: usize, found: usize },
    /// (NonFinite) A component is NaN or infinite
    #[error("(NonFinite) Component {index} is not finite: {value}")]
    NonFinite { index: usize, value: Real },
    /// (NotANumber) A textual component could not be parsed
    #[error("(NotANumber) Component {index} ({token:?}) is not a number")]
    NotANumber { index: usize, token: String },
    /// (BasisMismatch) A source basis vector did not land on its expected target axis
    #[error("(BasisMismatch) Source axis {axis} maps to {found}, expected {expected}")]
    BasisMismatch {
        axis: char,
        expected: Vector3<Real>,
        found: Vector3<Real>,
    },
}

//! Coordinate triads: the three unit axes of a rotation drawn at an offset.
//!
//! A [`Triad`] is plain geometry. Renderers (see the `svg-io` feature) only
//! need the segment endpoints, the label anchors and the colors.

use crate::float_types::Real;
use nalgebra::{Point3, Rotation3, Vector3};

/// Colorblind-safe colors for the X, Y and Z axes.
pub const AXIS_COLORS: [&str; 3] = ["#FF6666", "#005533", "#1199EE"];

/// Upper-case axis labels.
pub const AXIS_LABELS: [char; 3] = ['X', 'Y', 'Z'];

/// Label anchors sit this far out along each axis, relative to the axis length.
pub const LABEL_DISTANCE: Real = 1.2;

/// One rotated axis of a triad.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSegment {
    pub label: char,
    pub color: &'static str,
    pub start: Point3<Real>,
    pub end: Point3<Real>,
    /// Where the axis label is drawn, slightly past `end`.
    pub label_anchor: Point3<Real>,
}

/// A named, rotated, offset set of three axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Triad {
    pub name: Option<String>,
    pub rotation: Rotation3<Real>,
    pub offset: Point3<Real>,
    pub scale: Real,
    pub axes: [AxisSegment; 3],
}

impl Triad {
    /// Build the triad for `rotation`, placed at `offset`, with axes of length `scale`.
    ///
    /// Axis *i* runs from `offset` to `offset + R·(scale·eᵢ)`; its label sits at
    /// `offset + R·(1.2·scale·eᵢ)`.
    pub fn new(
        rotation: Rotation3<Real>,
        name: Option<&str>,
        offset: Point3<Real>,
        scale: Real,
    ) -> Self {
        let axes = std::array::from_fn(|i| {
            let unit = Vector3::ith(i, 1.0);
            AxisSegment {
                label: AXIS_LABELS[i],
                color: AXIS_COLORS[i],
                start: offset,
                end: offset + rotation * (unit * scale),
                label_anchor: offset + rotation * (unit * (scale * LABEL_DISTANCE)),
            }
        });

        Triad {
            name: name.map(str::to_string),
            rotation,
            offset,
            scale,
            axes,
        }
    }

    /// Unrotated triad of unit length.
    pub fn identity(name: Option<&str>, offset: Point3<Real>) -> Self {
        Self::new(Rotation3::identity(), name, offset, 1.0)
    }

    /// Direction of each axis after rotation, without offset.
    pub fn directions(&self) -> [Vector3<Real>; 3] {
        std::array::from_fn(|i| self.axes[i].end - self.axes[i].start)
    }
}

//! Orthographic SVG rendering of coordinate triads.

use crate::float_types::Real;
use crate::io::IoError;
use crate::triad::Triad;
use crate::vector;
use nalgebra::Point3;
use std::path::Path;
use svg::Document;
use svg::node::element::{Circle, Line, Text};

const LINE_HEIGHT: Real = 16.0;
const BADGE_RADIUS: Real = 11.0;
const TICK_LENGTH: Real = 4.0;
const FRAME_COLOR: &str = "#888888";

/// Orthographic camera described by elevation above the XY plane and azimuth
/// about Z, both in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoView {
    pub elevation_deg: Real,
    pub azimuth_deg: Real,
}

impl Default for OrthoView {
    /// The usual 3D-plot camera: 30° up, −60° around.
    fn default() -> Self {
        OrthoView {
            elevation_deg: 30.0,
            azimuth_deg: -60.0,
        }
    }
}

impl OrthoView {
    /// Project `p` onto the view plane; `v` grows upwards.
    pub fn project(&self, p: &Point3<Real>) -> (Real, Real) {
        let (se, ce) = self.elevation_deg.to_radians().sin_cos();
        let (sa, ca) = self.azimuth_deg.to_radians().sin_cos();

        // right = (-sin a, cos a, 0), up = (-sin e cos a, -sin e sin a, cos e)
        let u = -sa * p.x + ca * p.y;
        let v = -se * ca * p.x - se * sa * p.y + ce * p.z;
        (u, v)
    }
}

/// Triads plus the decorations drawn around them.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub triads: Vec<Triad>,
    pub annotation: Option<String>,
    pub bounds: Option<(Point3<Real>, Point3<Real>)>,
    /// Tick positions along X, Y and Z, drawn on the frame edges through the
    /// minimum corner of the bounds.
    pub ticks: Option<[Vec<Real>; 3]>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, triad: Triad) {
        self.triads.push(triad);
    }

    pub fn with_annotation<S: Into<String>>(mut self, text: S) -> Self {
        self.annotation = Some(text.into());
        self
    }

    /// Fix the plotted volume instead of fitting it to the triads.
    pub fn with_bounds(mut self, min: Point3<Real>, max: Point3<Real>) -> Self {
        self.bounds = Some((min, max));
        self
    }

    /// Draw the frame edges with tick marks at the given positions. Ticks
    /// outside the bounds are skipped.
    pub fn with_ticks(mut self, x: Vec<Real>, y: Vec<Real>, z: Vec<Real>) -> Self {
        self.ticks = Some([x, y, z]);
        self
    }

    /// Plotted volume: explicit bounds, or the box around every drawn point.
    pub fn bounds(&self) -> (Point3<Real>, Point3<Real>) {
        if let Some(bounds) = self.bounds {
            return bounds;
        }

        let mut points = self.triads.iter().flat_map(|triad| {
            std::iter::once(triad.offset).chain(
                triad
                    .axes
                    .iter()
                    .flat_map(|axis| [axis.end, axis.label_anchor]),
            )
        });

        let Some(first) = points.next() else {
            return (Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
        };

        points.fold((first, first), |(min, max), p| {
            (min.inf(&p), max.sup(&p))
        })
    }

    /// Render to an SVG string of `width` × `height` pixels.
    pub fn to_svg(&self, view: &OrthoView, width: u32, height: u32) -> Result<String, IoError> {
        if width == 0 || height == 0 {
            return Err(IoError::MalformedInput(format!(
                "SVG size must be positive, got {width}x{height}"
            )));
        }

        let (min, max) = self.bounds();
        vector::from_slice(min.coords.as_slice())?;
        vector::from_slice(max.coords.as_slice())?;

        let screen = ScreenMap::fit(view, (min, max), width as Real, height as Real);

        let mut document = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0, 0, width, height));

        if let Some(ticks) = &self.ticks {
            document = draw_frame(document, &screen, (min, max), ticks);
        }

        for triad in &self.triads {
            for axis in &triad.axes {
                let (x1, y1) = screen.map(&axis.start);
                let (x2, y2) = screen.map(&axis.end);
                document = document.add(
                    Line::new()
                        .set("x1", x1)
                        .set("y1", y1)
                        .set("x2", x2)
                        .set("y2", y2)
                        .set("stroke", axis.color)
                        .set("stroke-width", 2),
                );

                let (lx, ly) = screen.map(&axis.label_anchor);
                document = document.add(
                    Text::new(axis.label.to_string())
                        .set("x", lx)
                        .set("y", ly)
                        .set("fill", axis.color)
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "central"),
                );
            }

            if let Some(name) = &triad.name {
                let (cx, cy) = screen.map(&triad.offset);
                document = document
                    .add(
                        Circle::new()
                            .set("cx", cx)
                            .set("cy", cy)
                            .set("r", BADGE_RADIUS)
                            .set("fill", "white")
                            .set("fill-opacity", 0.8)
                            .set("stroke", "black"),
                    )
                    .add(
                        Text::new(name.as_str())
                            .set("x", cx)
                            .set("y", cy)
                            .set("fill", "black")
                            .set("text-anchor", "middle")
                            .set("dominant-baseline", "central"),
                    );
            }
        }

        if let Some(annotation) = &self.annotation {
            let x = 0.6 * width as Real;
            let y0 = 0.3 * height as Real;
            for (i, line) in annotation.lines().filter(|l| !l.is_empty()).enumerate() {
                document = document.add(
                    Text::new(line)
                        .set("x", x)
                        .set("y", y0 + i as Real * LINE_HEIGHT)
                        .set("fill", "black")
                        .set("text-anchor", "start"),
                );
            }
        }

        log::debug!(
            "rendered {} triads to a {width}x{height} SVG",
            self.triads.len()
        );
        Ok(document.to_string())
    }

    /// Render and write to `path`.
    pub fn write_svg<P: AsRef<Path>>(
        &self,
        path: P,
        view: &OrthoView,
        width: u32,
        height: u32,
    ) -> Result<(), IoError> {
        let svg = self.to_svg(view, width, height)?;
        std::fs::write(path.as_ref(), svg)?;
        log::info!("wrote {}", path.as_ref().display());
        Ok(())
    }
}

/// Frame edges from the minimum corner along each axis, with a short mark and
/// a numeric label at every tick inside the bounds.
fn draw_frame(
    mut document: Document,
    screen: &ScreenMap,
    (min, max): (Point3<Real>, Point3<Real>),
    ticks: &[Vec<Real>; 3],
) -> Document {
    for (i, positions) in ticks.iter().enumerate() {
        let mut far = min;
        far[i] = max[i];
        let (x1, y1) = screen.map(&min);
        let (x2, y2) = screen.map(&far);
        document = document.add(
            Line::new()
                .set("x1", x1)
                .set("y1", y1)
                .set("x2", x2)
                .set("y2", y2)
                .set("stroke", FRAME_COLOR)
                .set("stroke-width", 1),
        );

        for &t in positions.iter().filter(|&&t| t >= min[i] && t <= max[i]) {
            let mut at = min;
            at[i] = t;
            let (x, y) = screen.map(&at);
            document = document
                .add(
                    Line::new()
                        .set("x1", x)
                        .set("y1", y)
                        .set("x2", x)
                        .set("y2", y + TICK_LENGTH)
                        .set("stroke", FRAME_COLOR)
                        .set("stroke-width", 1),
                )
                .add(
                    Text::new(format!("{t}"))
                        .set("x", x)
                        .set("y", y + TICK_LENGTH + LINE_HEIGHT * 0.75)
                        .set("fill", FRAME_COLOR)
                        .set("font-size", 10)
                        .set("text-anchor", "middle"),
                );
        }
    }
    document
}

/// Maps projected coordinates into pixel space with equal aspect.
struct ScreenMap {
    view: OrthoView,
    u_min: Real,
    v_min: Real,
    scale: Real,
    pad_x: Real,
    pad_y: Real,
    height: Real,
}

impl ScreenMap {
    fn fit(
        view: &OrthoView,
        (min, max): (Point3<Real>, Point3<Real>),
        width: Real,
        height: Real,
    ) -> Self {
        let mut u_min = Real::MAX;
        let mut u_max = Real::MIN;
        let mut v_min = Real::MAX;
        let mut v_max = Real::MIN;

        for i in 0..8 {
            let corner = Point3::new(
                if i & 1 == 0 { min.x } else { max.x },
                if i & 2 == 0 { min.y } else { max.y },
                if i & 4 == 0 { min.z } else { max.z },
            );
            let (u, v) = view.project(&corner);
            u_min = u_min.min(u);
            u_max = u_max.max(u);
            v_min = v_min.min(v);
            v_max = v_max.max(v);
        }

        let margin = 0.05 * width.min(height);
        let span_u = (u_max - u_min).max(Real::EPSILON);
        let span_v = (v_max - v_min).max(Real::EPSILON);
        let scale = ((width - 2.0 * margin) / span_u).min((height - 2.0 * margin) / span_v);

        ScreenMap {
            view: *view,
            u_min,
            v_min,
            scale,
            pad_x: margin + (width - 2.0 * margin - span_u * scale) * 0.5,
            pad_y: margin + (height - 2.0 * margin - span_v * scale) * 0.5,
            height,
        }
    }

    fn map(&self, p: &Point3<Real>) -> (Real, Real) {
        let (u, v) = self.view.project(p);
        let x = self.pad_x + (u - self.u_min) * self.scale;
        let y = self.height - (self.pad_y + (v - self.v_min) * self.scale);
        (x, y)
    }
}

// main.rs
//
// Converts one sensor orientation from the game-engine frame into the robotics
// frame and draws both the identity orientation and the converted one.

use std::process::ExitCode;

use axisconv::convert::AxisConventionConverter;
use axisconv::euler::EulerSequence;
use axisconv::float_types::Real;
use axisconv::triad::Triad;
use axisconv::{logging, vector};
use nalgebra::{Point3, Vector3};
use simplelog::LevelFilter;

/// Sensor orientation in the game-engine frame, degrees.
const SENSOR_ORIENTATION_DEG: [Real; 3] = [55.246, -90.955, -0.785];

fn main() -> ExitCode {
    logging::init(LevelFilter::Info);

    let converter = AxisConventionConverter::new();
    if let Err(error) = converter.check_basis() {
        log::error!("Axis conversion failed its basis check: {error}");
        return ExitCode::FAILURE;
    }

    let sensor_deg = Vector3::from(SENSOR_ORIENTATION_DEG);
    let sensor_ros = converter.convert(&vector::to_radians(&sensor_deg));
    log::info!(
        "sensor orientation ({}, {}, {}) deg -> ({:.9}, {:.9}, {:.9}) rad",
        sensor_deg.x,
        sensor_deg.y,
        sensor_deg.z,
        sensor_ros.x,
        sensor_ros.y,
        sensor_ros.z
    );
    println!("[{} {} {}]", sensor_ros.x, sensor_ros.y, sensor_ros.z);

    let sequence = EulerSequence::IntrinsicXyz;
    let r0 = Triad::identity(Some("r0"), Point3::origin());
    let r_s = Triad::new(
        sequence.rotation(&sensor_ros),
        Some("r_s"),
        Point3::new(3.0, 0.0, 0.0),
        1.0,
    );
    log::info!("sensor triad read as {} Euler angles", sequence.name());

    render(vec![r0, r_s], sequence)
}

#[cfg(feature = "svg-io")]
fn render(triads: Vec<Triad>, sequence: EulerSequence) -> ExitCode {
    use axisconv::io::svg::{OrthoView, Scene};

    let mut scene = Scene::new()
        .with_annotation(format!(
            "ROS Convention: Identity Rotation\nSensor Orientation: {} Euler Rotation",
            sequence.name()
        ))
        .with_bounds(Point3::new(-1.25, -1.25, -1.25), Point3::new(6.25, 1.25, 1.25))
        .with_ticks(
            (-1..8).map(|t| t as Real).collect(),
            vec![-1.0, 0.0, 1.0],
            vec![-1.0, 0.0, 1.0],
        );
    for triad in triads {
        scene.push(triad);
    }

    match scene.write_svg("triads.svg", &OrthoView::default(), 600, 500) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("Could not write triads.svg. Message: {error}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "svg-io"))]
fn render(triads: Vec<Triad>, _sequence: EulerSequence) -> ExitCode {
    for triad in &triads {
        for axis in &triad.axes {
            log::info!(
                "{} {}: ({:.3}, {:.3}, {:.3}) -> ({:.3}, {:.3}, {:.3})",
                triad.name.as_deref().unwrap_or("?"),
                axis.label,
                axis.start.x,
                axis.start.y,
                axis.start.z,
                axis.end.x,
                axis.end.y,
                axis.end.z
            );
        }
    }
    ExitCode::SUCCESS
}

use super::vector_js::Vector3Js;
use crate::convert::AxisConventionConverter;
use crate::float_types::Real;
use crate::vector;
use nalgebra::Vector3;
use wasm_bindgen::prelude::*;

/// Convert a game-engine vector (positions, or Euler angles in radians).
#[wasm_bindgen(js_name = unityToRos)]
pub fn unity_to_ros(v: &Vector3Js) -> Vector3Js {
    AxisConventionConverter::new().convert(&Vector3::from(v)).into()
}

/// Undo `unityToRos`.
#[wasm_bindgen(js_name = rosToUnity)]
pub fn ros_to_unity(v: &Vector3Js) -> Vector3Js {
    AxisConventionConverter::new().revert(&Vector3::from(v)).into()
}

/// Convert an Euler triple given in degrees; the result is in radians.
#[wasm_bindgen(js_name = unityToRosDegrees)]
pub fn unity_to_ros_degrees(x: f64, y: f64, z: f64) -> Result<Vector3Js, JsValue> {
    let degrees = vector::from_slice(&[x as Real, y as Real, z as Real])
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let radians: Vector3<Real> = vector::to_radians(&degrees);
    Ok(AxisConventionConverter::new().convert(&radians).into())
}

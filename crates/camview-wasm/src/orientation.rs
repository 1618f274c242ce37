//! WASM bindings for orientation reconciliation.
//!
//! Hosts pass the platform's display rotation and the camera's mounting
//! angle and get back the rotations to apply to the driver and the preview.

use crate::to_js_error;
use camview_core::orientation::{self, DisplayRotation, Facing, RotationResult, SensorOrientation};
use wasm_bindgen::prelude::*;

/// Rotation result accessible from JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsRotation {
    display_to_sensor: u16,
    needed_rotation: u16,
}

#[wasm_bindgen]
impl JsRotation {
    /// Clockwise degrees for the driver's display orientation.
    #[wasm_bindgen(getter)]
    pub fn display_to_sensor(&self) -> u16 {
        self.display_to_sensor
    }

    /// Clockwise degrees to rotate the raw preview before rendering.
    #[wasm_bindgen(getter)]
    pub fn needed_rotation(&self) -> u16 {
        self.needed_rotation
    }
}

impl From<RotationResult> for JsRotation {
    fn from(result: RotationResult) -> Self {
        Self {
            display_to_sensor: result.display_to_sensor,
            needed_rotation: result.needed_rotation,
        }
    }
}

fn facing_from_bool(front_facing: bool) -> Facing {
    if front_facing {
        Facing::Front
    } else {
        Facing::Back
    }
}

fn rotate(display: DisplayRotation, sensor_orientation: i32, front_facing: bool) -> JsRotation {
    orientation::reconcile(
        display,
        SensorOrientation::new(sensor_orientation),
        facing_from_bool(front_facing),
    )
    .into()
}

/// Reconcile a display rotation given in degrees.
///
/// # Arguments
///
/// * `display_degrees` - Display rotation, clockwise; must be a multiple of 90
/// * `sensor_orientation` - Sensor mounting angle, clockwise
/// * `front_facing` - True for a user-facing (mirrored) camera
///
/// # Errors
///
/// Throws if `display_degrees` is not a multiple of 90.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const rotation = reconcile_rotation(screen.orientation.angle, 90, false);
/// ```
#[wasm_bindgen]
pub fn reconcile_rotation(
    display_degrees: i32,
    sensor_orientation: i32,
    front_facing: bool,
) -> Result<JsRotation, JsValue> {
    let display = DisplayRotation::from_degrees(display_degrees).map_err(to_js_error)?;
    Ok(rotate(display, sensor_orientation, front_facing))
}

/// Reconcile a display rotation given as a surface code (0-3).
///
/// Values outside 0-3 are treated as degrees, which some devices report.
///
/// # Errors
///
/// Throws if the value is neither a surface code nor a multiple of 90.
#[wasm_bindgen]
pub fn reconcile_surface_rotation(
    surface_code: i32,
    sensor_orientation: i32,
    front_facing: bool,
) -> Result<JsRotation, JsValue> {
    let display = DisplayRotation::from_surface_code(surface_code).map_err(to_js_error)?;
    Ok(rotate(display, sensor_orientation, front_facing))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_back_camera() {
        let result = rotate(DisplayRotation::Rotate0, 90, false);
        assert_eq!(result.display_to_sensor(), 90);
        assert_eq!(result.needed_rotation(), 90);
    }

    #[test]
    fn test_rotate_front_camera() {
        let result = rotate(DisplayRotation::Rotate0, 90, true);
        assert_eq!(result.display_to_sensor(), 270);
        assert_eq!(result.needed_rotation(), 90);
    }

    #[test]
    fn test_rotate_wraps_sensor_degrees() {
        assert_eq!(
            rotate(DisplayRotation::Rotate90, -270, false),
            rotate(DisplayRotation::Rotate90, 90, false)
        );
    }

    #[test]
    fn test_from_rotation_result() {
        let js: JsRotation = RotationResult {
            display_to_sensor: 270,
            needed_rotation: 90,
        }
        .into();
        assert_eq!(js.display_to_sensor(), 270);
        assert_eq!(js.needed_rotation(), 90);
    }
}

/// WASM-specific tests that require JsValue.
///
/// These tests exercise functions that return `Result<T, JsValue>` and can only
/// run on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_reconcile_rotation_degrees() {
        let result = reconcile_rotation(90, 90, false).unwrap();
        assert_eq!(result.display_to_sensor(), 0);
    }

    #[wasm_bindgen_test]
    fn test_reconcile_rotation_negative() {
        let result = reconcile_rotation(-90, 90, false).unwrap();
        assert_eq!(result.display_to_sensor(), 180);
    }

    #[wasm_bindgen_test]
    fn test_reconcile_rotation_invalid() {
        assert!(reconcile_rotation(45, 90, false).is_err());
    }

    #[wasm_bindgen_test]
    fn test_reconcile_surface_rotation() {
        let result = reconcile_surface_rotation(1, 90, false).unwrap();
        assert_eq!(result.display_to_sensor(), 0);
    }
}

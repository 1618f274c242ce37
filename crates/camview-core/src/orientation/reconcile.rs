//! Clockwise rotation between display and camera sensor.
//!
//! # Algorithm
//!
//! ```text
//! sensor'           = front ? (360 - sensor) % 360 : sensor
//! display_to_sensor = (360 + sensor' - display) % 360
//! needed            = front ? (360 - display_to_sensor) % 360 : display_to_sensor
//! ```
//!
//! Both outputs are kept: the driver's display orientation takes
//! `display_to_sensor`, software compensation takes `needed`.

use super::types::{DisplayRotation, Facing, OrientationError, RotationResult, SensorOrientation};
use tracing::debug;

/// Reconcile a normalized display rotation with a sensor's mounting angle.
///
/// # Arguments
///
/// * `display` - Display rotation relative to the natural orientation
/// * `sensor` - Sensor mounting angle relative to the natural orientation
/// * `facing` - Whether the sensor faces the user
///
/// # Returns
///
/// Both the display-to-sensor rotation and the rotation needed for the
/// preview. Every value lies in `[0, 360)`.
///
/// # Example
///
/// ```
/// use camview_core::orientation::{reconcile, DisplayRotation, Facing, SensorOrientation};
///
/// let result = reconcile(DisplayRotation::Rotate0, SensorOrientation::new(90), Facing::Front);
/// assert_eq!(result.display_to_sensor, 270);
/// assert_eq!(result.needed_rotation, 90);
/// ```
pub fn reconcile(
    display: DisplayRotation,
    sensor: SensorOrientation,
    facing: Facing,
) -> RotationResult {
    let natural_to_display = display.degrees();
    debug!(degrees = natural_to_display, "Display at");
    debug!(degrees = sensor.degrees(), ?facing, "Camera at");

    let natural_to_camera = match facing {
        Facing::Front => {
            let mirrored = sensor.mirrored();
            debug!(degrees = mirrored.degrees(), "Front camera overridden");
            mirrored
        }
        Facing::Back => sensor,
    }
    .degrees();

    let display_to_sensor = (360 + natural_to_camera - natural_to_display) % 360;
    debug!(degrees = display_to_sensor, "Final display orientation");

    let needed_rotation = match facing {
        Facing::Front => (360 - display_to_sensor) % 360,
        Facing::Back => display_to_sensor,
    };
    debug!(degrees = needed_rotation, "Clockwise rotation from display to camera");

    RotationResult {
        display_to_sensor,
        needed_rotation,
    }
}

/// Reconcile using raw platform values.
///
/// `display_degrees` is normalized with [`DisplayRotation::from_degrees`] and
/// `sensor_degrees` is wrapped into `[0, 360)`.
///
/// # Errors
///
/// Returns [`OrientationError::InvalidRotation`] if `display_degrees` is not a
/// multiple of 90. The caller should abandon configuring the camera for this
/// session; retrying with the same platform state gives the same answer.
pub fn reconcile_raw(
    display_degrees: i32,
    sensor_degrees: i32,
    facing: Facing,
) -> Result<RotationResult, OrientationError> {
    let display = DisplayRotation::from_degrees(display_degrees)?;
    Ok(reconcile(display, SensorOrientation::new(sensor_degrees), facing))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(display: i32, sensor: i32, facing: Facing) -> RotationResult {
        reconcile_raw(display, sensor, facing).unwrap()
    }

    #[test]
    fn test_back_camera_natural_display() {
        let result = run(0, 90, Facing::Back);
        assert_eq!(result.display_to_sensor, 90);
        assert_eq!(result.needed_rotation, 90);
    }

    #[test]
    fn test_back_camera_display_matches_sensor() {
        let result = run(90, 90, Facing::Back);
        assert_eq!(result.display_to_sensor, 0);
        assert_eq!(result.needed_rotation, 0);
    }

    #[test]
    fn test_front_camera_natural_display() {
        // Sensor mirrored to 270, compensated back to 90
        let result = run(0, 90, Facing::Front);
        assert_eq!(result.display_to_sensor, 270);
        assert_eq!(result.needed_rotation, 90);
    }

    #[test]
    fn test_front_camera_landscape_display() {
        // sensor' = 90, (360 + 90 - 90) % 360 = 0
        let result = run(90, 270, Facing::Front);
        assert_eq!(result.display_to_sensor, 0);
        assert_eq!(result.needed_rotation, 0);
    }

    #[test]
    fn test_back_camera_display_ahead_of_sensor() {
        // (360 + 90 - 270) % 360 = 180
        let result = run(270, 90, Facing::Back);
        assert_eq!(result.display_to_sensor, 180);
        assert_eq!(result.needed_rotation, 180);
    }

    #[test]
    fn test_negative_display_rotation_normalized() {
        let negative = run(-90, 90, Facing::Back);
        let canonical = run(270, 90, Facing::Back);
        assert_eq!(negative, canonical);
    }

    #[test]
    fn test_invalid_display_rotation() {
        let result = reconcile_raw(45, 90, Facing::Back);
        assert_eq!(result, Err(OrientationError::InvalidRotation(45)));
    }

    #[test]
    fn test_sensor_degrees_wrapped() {
        assert_eq!(run(0, 450, Facing::Back), run(0, 90, Facing::Back));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

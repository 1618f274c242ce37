//! Core types for orientation reconciliation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for orientation reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrientationError {
    /// The platform reported a display rotation that is not a multiple of 90°.
    #[error("Bad rotation: {0}")]
    InvalidRotation(i32),
}

/// Display rotation relative to the device's natural orientation, clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DisplayRotation {
    /// Natural orientation.
    #[default]
    Rotate0,
    /// Quarter turn clockwise.
    Rotate90,
    /// Half turn.
    Rotate180,
    /// Three quarter turns clockwise.
    Rotate270,
}

impl DisplayRotation {
    /// Clockwise rotation in degrees.
    pub fn degrees(self) -> u16 {
        match self {
            DisplayRotation::Rotate0 => 0,
            DisplayRotation::Rotate90 => 90,
            DisplayRotation::Rotate180 => 180,
            DisplayRotation::Rotate270 => 270,
        }
    }

    /// Normalize a raw rotation in degrees.
    ///
    /// Any multiple of 90 is accepted and wrapped into `[0, 360)`, so `-90`
    /// becomes [`DisplayRotation::Rotate270`]. Some devices report such values.
    ///
    /// # Errors
    ///
    /// Returns [`OrientationError::InvalidRotation`] if `raw` is not a multiple of 90.
    pub fn from_degrees(raw: i32) -> Result<Self, OrientationError> {
        if raw % 90 != 0 {
            return Err(OrientationError::InvalidRotation(raw));
        }

        Ok(match raw.rem_euclid(360) {
            0 => DisplayRotation::Rotate0,
            90 => DisplayRotation::Rotate90,
            180 => DisplayRotation::Rotate180,
            // Only 270 remains for a multiple of 90
            _ => DisplayRotation::Rotate270,
        })
    }

    /// Interpret a platform surface rotation code.
    ///
    /// Codes 0-3 are quarter turns (0°, 90°, 180°, 270°). Anything else is
    /// treated as raw degrees and goes through [`DisplayRotation::from_degrees`].
    ///
    /// # Errors
    ///
    /// Returns [`OrientationError::InvalidRotation`] for out-of-range codes that
    /// are not multiples of 90.
    pub fn from_surface_code(code: i32) -> Result<Self, OrientationError> {
        match code {
            0 => Ok(DisplayRotation::Rotate0),
            1 => Ok(DisplayRotation::Rotate90),
            2 => Ok(DisplayRotation::Rotate180),
            3 => Ok(DisplayRotation::Rotate270),
            other => Self::from_degrees(other),
        }
    }
}

/// Which way the camera sensor points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    /// Toward the user. Preview is mirrored.
    Front,
    /// Away from the user.
    #[default]
    Back,
}

/// Mounting angle of a camera sensor relative to the natural orientation,
/// clockwise, in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u16", from = "u16")]
pub struct SensorOrientation(u16);

impl SensorOrientation {
    /// Create from any integer number of degrees, wrapping into `[0, 360)`.
    pub fn new(degrees: i32) -> Self {
        // rem_euclid result is always in 0..360
        Self(degrees.rem_euclid(360) as u16)
    }

    /// Clockwise degrees.
    pub fn degrees(self) -> u16 {
        self.0
    }

    /// Orientation as seen through a mirrored (front-facing) preview.
    pub fn mirrored(self) -> Self {
        Self((360 - self.0) % 360)
    }
}

impl From<u16> for SensorOrientation {
    fn from(value: u16) -> Self {
        Self::new(i32::from(value))
    }
}

impl From<SensorOrientation> for u16 {
    fn from(value: SensorOrientation) -> Self {
        value.0
    }
}

/// Result of reconciling display and sensor orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RotationResult {
    /// Clockwise rotation from display to sensor.
    ///
    /// This is the value the camera driver wants as its display orientation.
    pub display_to_sensor: u16,
    /// Clockwise rotation to apply to the raw preview before rendering.
    ///
    /// Equal to `display_to_sensor` for back cameras; compensated for the
    /// mirrored preview on front cameras.
    pub needed_rotation: u16,
}

//! Per-session preview geometry.

use super::{CameraDevice, ConfigError, DisplayInfo};
use crate::orientation::{reconcile, DisplayRotation, RotationResult};
use crate::preview::{adjust_for_orientation, find_best_preview_size};
use crate::Size;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Values read once from the camera and display when a session opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionGeometry {
    /// Display/sensor rotation for this session
    pub rotation: RotationResult,
    /// Screen resolution in the orientation at session start
    pub screen_resolution: Size,
    /// Preview size chosen for the screen, as first selected
    pub camera_resolution: Size,
    /// Preview size requested from the driver; follows the driver if it
    /// substitutes another size
    pub best_preview_size: Size,
    /// `best_preview_size` oriented to match the screen
    pub preview_size_on_screen: Size,
}

impl SessionGeometry {
    /// Read the camera and display and compute the session geometry.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidRotation`] if the display rotation is not a
    ///   multiple of 90°
    /// - [`ConfigError::Preview`] if the camera offers no usable preview size
    pub fn from_camera<C, D>(camera: &C, display: &D) -> Result<Self, ConfigError>
    where
        C: CameraDevice + ?Sized,
        D: DisplayInfo + ?Sized,
    {
        let display_rotation = DisplayRotation::from_surface_code(display.rotation_code())?;
        let rotation = reconcile(display_rotation, camera.sensor_orientation(), camera.facing());
        info!(
            display_to_sensor = rotation.display_to_sensor,
            needed_rotation = rotation.needed_rotation,
            "Reconciled camera orientation"
        );

        let screen_resolution = display.resolution();
        info!(%screen_resolution, "Screen resolution in current orientation");

        let params = camera.parameters().unwrap_or_else(|| {
            warn!("No camera parameters available while reading preview sizes");
            Default::default()
        });
        let best_preview_size = find_best_preview_size(
            &params.supported_preview_sizes,
            params.preview_size,
            screen_resolution,
        )?;
        info!(%best_preview_size, "Best available preview size");

        let preview_size_on_screen = adjust_for_orientation(best_preview_size, screen_resolution);
        info!(%preview_size_on_screen, "Preview size on screen");

        Ok(Self {
            rotation,
            screen_resolution,
            camera_resolution: best_preview_size,
            best_preview_size,
            preview_size_on_screen,
        })
    }

    /// Adopt the preview size the driver actually applied.
    pub(crate) fn adopt_preview_size(&mut self, size: Size) {
        self.best_preview_size = size;
        self.preview_size_on_screen = adjust_for_orientation(size, self.screen_resolution);
    }
}

//! Camview Core - camera preview orientation and parameter policy
//!
//! This crate provides the platform-independent part of configuring a camera
//! preview for barcode scanning: reconciling display rotation with sensor
//! mounting, choosing and orienting the preview size, and deciding which
//! capture parameters to request from the hardware.
//!
//! Camera I/O stays with the host. Hosts implement [`CameraDevice`] and
//! [`DisplayInfo`] and hand them to a [`PreviewConfigurator`].

pub mod configure;
pub mod orientation;
pub mod params;
pub mod preview;
pub mod settings;

pub use configure::{
    apply_capture_settings, set_torch_state, torch_state, ApplyReport, CameraDevice, ConfigError,
    ConfigWarning, DisplayInfo, PreviewConfigurator, SessionGeometry,
};
pub use orientation::{
    reconcile, reconcile_raw, DisplayRotation, Facing, OrientationError, RotationResult,
    SensorOrientation,
};
pub use params::{CameraParameters, MeteringArea};
pub use preview::{adjust_for_orientation, find_best_preview_size, PreviewError};
pub use settings::{CameraSettings, LightMode};

use std::fmt;

/// Pixel dimensions of a screen or camera buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct Size {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Portrait means strictly taller than wide; squares count as landscape.
    pub fn is_portrait(&self) -> bool {
        self.width < self.height
    }

    /// Same dimensions with width and height exchanged
    pub fn swapped(&self) -> Self {
        Self::new(self.height, self.width)
    }

    /// This size oriented so that width >= height
    pub fn landscape(&self) -> Self {
        if self.is_portrait() {
            self.swapped()
        } else {
            *self
        }
    }

    /// Width divided by height. Not finite when height is zero.
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Check if either dimension is zero
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

//! Camera configuration for a preview session.
//!
//! This module is the thin stateful layer around the pure computations: it
//! reads the camera and display through host-implemented traits, runs the
//! orientation and preview-size logic once per session, and writes the
//! resulting parameters back to the driver.
//!
//! # Session Flow
//!
//! 1. [`PreviewConfigurator::init_from_camera`] computes [`SessionGeometry`]
//! 2. [`PreviewConfigurator::apply_desired_parameters`] pushes parameters
//! 3. [`set_torch_state`] / [`torch_state`] toggle the light during the
//!    session
//!
//! Geometry is not recomputed when the display rotates; hosts reopen the
//! camera (and build a new configurator) instead.

mod geometry;
mod session;

pub use geometry::SessionGeometry;
pub use session::{
    apply_capture_settings, set_torch_state, torch_state, ApplyReport, PreviewConfigurator,
};

use crate::orientation::{Facing, OrientationError, SensorOrientation};
use crate::params::CameraParameters;
use crate::preview::PreviewError;
use crate::Size;
use thiserror::Error;

/// Error types for camera configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The display reported an unusable rotation. Configuration must stop.
    #[error(transparent)]
    InvalidRotation(#[from] OrientationError),

    /// No usable preview size could be determined.
    #[error(transparent)]
    Preview(#[from] PreviewError),

    /// The host failed to talk to the camera.
    #[error("Camera device error: {0}")]
    Device(String),
}

impl ConfigError {
    pub fn device<S: Into<String>>(message: S) -> Self {
        Self::Device(message.into())
    }
}

/// Conditions that degrade configuration without aborting the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The driver returned no parameter set; nothing was configured.
    NoParametersAvailable,
    /// The driver accepted a different preview size than requested.
    /// `reported` is now the session's preview size.
    PreviewSizeMismatch { requested: Size, reported: Size },
}

/// Access to an open camera, implemented by the host.
pub trait CameraDevice {
    /// Which way the sensor faces.
    fn facing(&self) -> Facing;

    /// Sensor mounting angle relative to the device's natural orientation.
    fn sensor_orientation(&self) -> SensorOrientation;

    /// Current parameters, or `None` if the hardware cannot provide them.
    fn parameters(&self) -> Option<CameraParameters>;

    /// Write a full parameter set to the driver.
    fn set_parameters(&mut self, params: &CameraParameters) -> Result<(), ConfigError>;

    /// Set the driver's clockwise display orientation in degrees.
    fn set_display_orientation(&mut self, degrees: u16) -> Result<(), ConfigError>;
}

/// Access to the display the preview is shown on, implemented by the host.
pub trait DisplayInfo {
    /// Platform rotation value: a surface code 0-3, or raw degrees on some
    /// devices. See [`crate::DisplayRotation::from_surface_code`].
    fn rotation_code(&self) -> i32;

    /// Screen resolution in the current orientation.
    fn resolution(&self) -> Size;
}

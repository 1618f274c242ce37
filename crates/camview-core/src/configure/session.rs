//! Applying scanner parameters to an open camera.

use super::{CameraDevice, ConfigError, ConfigWarning, DisplayInfo, SessionGeometry};
use crate::params::{self, CameraParameters};
use crate::settings::{CameraSettings, LightMode};
use crate::Size;
use tracing::{debug, info, warn};

/// What [`PreviewConfigurator::apply_desired_parameters`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    /// Preview size in effect after the driver had its say
    pub preview_size: Size,
    /// Display orientation written to the driver, `None` if skipped
    pub display_orientation: Option<u16>,
    /// Degradations the caller may want to surface
    pub warnings: Vec<ConfigWarning>,
}

impl ApplyReport {
    /// True if the camera was left unconfigured.
    pub fn is_skipped(&self) -> bool {
        self.warnings.contains(&ConfigWarning::NoParametersAvailable)
    }
}

/// Apply the torch, focus and scanner hints to a parameter set.
///
/// The torch starts on only when `light_mode` is [`LightMode::On`]. In safe
/// mode only the torch and a conservative focus mode are requested. Preview
/// size and display orientation are not touched here.
pub fn apply_capture_settings(
    params: &mut CameraParameters,
    settings: &CameraSettings,
    light_mode: LightMode,
    safe_mode: bool,
) {
    if safe_mode {
        warn!("In camera config safe mode -- most settings will not be honored");
    }

    apply_torch(params, settings, light_mode.torch_on(), safe_mode);

    params::set_focus(
        params,
        settings.auto_focus,
        settings.disable_continuous_focus,
        safe_mode,
    );

    if safe_mode {
        return;
    }

    if settings.invert_scan {
        params::set_invert_color(params);
    }

    if !settings.disable_barcode_scene_mode {
        params::set_barcode_scene_mode(params);
    }

    if !settings.disable_metering {
        params::set_video_stabilization(params);
        params::set_focus_area(params);
        params::set_metering(params);
    }

    // Also works around low preview frame rates on some devices
    params.recording_hint = true;
}

fn apply_torch(params: &mut CameraParameters, settings: &CameraSettings, on: bool, safe_mode: bool) {
    params::set_torch(params, on);
    if !safe_mode && !settings.disable_exposure {
        params::set_best_exposure(params, on);
    }
}

/// Configures one camera session.
///
/// Create it when the camera opens; drop it when the camera closes.
#[derive(Debug, Clone)]
pub struct PreviewConfigurator {
    geometry: SessionGeometry,
}

impl PreviewConfigurator {
    /// Read orientation and preview size information for a new session.
    ///
    /// # Errors
    ///
    /// Fails if the display rotation is invalid or no preview size can be
    /// determined. The camera should not be configured in either case.
    pub fn init_from_camera<C, D>(camera: &C, display: &D) -> Result<Self, ConfigError>
    where
        C: CameraDevice + ?Sized,
        D: DisplayInfo + ?Sized,
    {
        Ok(Self {
            geometry: SessionGeometry::from_camera(camera, display)?,
        })
    }

    /// Session geometry, including any preview size the driver substituted.
    pub fn geometry(&self) -> &SessionGeometry {
        &self.geometry
    }

    /// Push scanner parameters, preview size and display orientation.
    ///
    /// If the camera has no parameters the session is left unconfigured and
    /// the report carries [`ConfigWarning::NoParametersAvailable`]. If the
    /// driver settles on another preview size it is adopted and reported as
    /// [`ConfigWarning::PreviewSizeMismatch`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Device`] if the host fails to write to the camera.
    pub fn apply_desired_parameters<C>(
        &mut self,
        camera: &mut C,
        settings: &CameraSettings,
        light_mode: LightMode,
        safe_mode: bool,
    ) -> Result<ApplyReport, ConfigError>
    where
        C: CameraDevice + ?Sized,
    {
        let Some(mut params) = camera.parameters() else {
            warn!("Device error: no camera parameters are available. Proceeding without configuration.");
            return Ok(ApplyReport {
                preview_size: self.geometry.best_preview_size,
                display_orientation: None,
                warnings: vec![ConfigWarning::NoParametersAvailable],
            });
        };
        debug!(?params, "Initial camera parameters");

        apply_capture_settings(&mut params, settings, light_mode, safe_mode);

        let requested = self.geometry.best_preview_size;
        params.preview_size = Some(requested);
        camera.set_parameters(&params)?;

        let display_orientation = self.geometry.rotation.display_to_sensor;
        camera.set_display_orientation(display_orientation)?;

        let mut warnings = Vec::new();
        let reported = camera.parameters().and_then(|after| after.preview_size);
        if let Some(reported) = reported.filter(|size| *size != requested) {
            warn!(
                %requested,
                %reported,
                "Camera said it supported preview size, but after setting it, preview size differs"
            );
            self.geometry.adopt_preview_size(reported);
            warnings.push(ConfigWarning::PreviewSizeMismatch { requested, reported });
        }

        info!(
            preview_size = %self.geometry.best_preview_size,
            display_orientation,
            "Camera parameters applied"
        );
        Ok(ApplyReport {
            preview_size: self.geometry.best_preview_size,
            display_orientation: Some(display_orientation),
            warnings,
        })
    }
}

/// Whether the camera's flash is currently lighting the scene.
///
/// False when the camera has no parameters.
pub fn torch_state<C>(camera: &C) -> bool
where
    C: CameraDevice + ?Sized,
{
    camera
        .parameters()
        .is_some_and(|params| params::torch_enabled(&params))
}

/// Switch the torch during a session, adjusting exposure to match.
///
/// Exposure is left alone when `settings.disable_exposure` is set. Does
/// nothing (with a warning) if the camera has no parameters.
///
/// # Errors
///
/// Returns [`ConfigError::Device`] if the host fails to write to the camera.
pub fn set_torch_state<C>(
    camera: &mut C,
    settings: &CameraSettings,
    on: bool,
) -> Result<(), ConfigError>
where
    C: CameraDevice + ?Sized,
{
    let Some(mut params) = camera.parameters() else {
        warn!("No camera parameters available; torch unchanged");
        return Ok(());
    };
    apply_torch(&mut params, settings, on, false);
    camera.set_parameters(&params)
}

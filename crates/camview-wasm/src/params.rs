//! WASM bindings for the scanner parameter policy.
//!
//! Parameter sets and settings cross the boundary as plain JS objects using
//! the camelCase field names of the core types:
//!
//! ```typescript
//! const params = {
//!   flashMode: 'off',
//!   supportedFlashModes: ['off', 'torch'],
//!   supportedFocusModes: ['auto', 'continuous-picture'],
//! };
//! const updated = configure_parameters(params, { invertScan: true }, 0, false);
//! ```

use crate::to_js_error;
use camview_core::params;
use camview_core::{apply_capture_settings, CameraParameters, CameraSettings, LightMode};
use wasm_bindgen::prelude::*;

/// Convert a u8 light mode value to the core LightMode enum.
///
/// Values:
/// - 0 = Off
/// - 1 = On
///
/// Any other value is Auto.
pub(crate) fn light_mode_from_u8(value: u8) -> LightMode {
    match value {
        0 => LightMode::Off,
        1 => LightMode::On,
        _ => LightMode::Auto,
    }
}

/// Apply the scanner policy to an owned parameter set.
fn configure(
    mut camera_params: CameraParameters,
    settings: &CameraSettings,
    light_mode: LightMode,
    safe_mode: bool,
) -> CameraParameters {
    apply_capture_settings(&mut camera_params, settings, light_mode, safe_mode);
    camera_params
}

fn parse_settings(settings: JsValue) -> Result<CameraSettings, JsValue> {
    if settings.is_undefined() || settings.is_null() {
        return Ok(CameraSettings::default());
    }
    serde_wasm_bindgen::from_value(settings)
        .map_err(|e| to_js_error(format!("Invalid camera settings: {}", e)))
}

fn parse_params(value: JsValue) -> Result<CameraParameters, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| to_js_error(format!("Invalid camera parameters: {}", e)))
}

/// Apply torch, focus and scanner hints to a camera parameter object.
///
/// Preview size and display orientation are left to the host, which gets
/// them from `find_best_preview_size` and `reconcile_surface_rotation`.
///
/// # Arguments
///
/// * `camera_params` - Current parameters as reported by the camera
/// * `settings` - Scanner settings object; `undefined` uses defaults
/// * `light_mode` - 0 = off, 1 = on, anything else = auto
/// * `safe_mode` - Only apply torch and conservative focus
///
/// # Returns
///
/// The updated parameter object.
///
/// # Errors
///
/// Throws if either object cannot be deserialized.
#[wasm_bindgen]
pub fn configure_parameters(
    camera_params: JsValue,
    settings: JsValue,
    light_mode: u8,
    safe_mode: bool,
) -> Result<JsValue, JsValue> {
    let camera_params = parse_params(camera_params)?;
    let settings = parse_settings(settings)?;

    let updated = configure(camera_params, &settings, light_mode_from_u8(light_mode), safe_mode);
    serde_wasm_bindgen::to_value(&updated).map_err(to_js_error)
}

/// Check whether a parameter object has the flash lighting the scene.
///
/// # Errors
///
/// Throws if the object cannot be deserialized.
#[wasm_bindgen]
pub fn torch_enabled(camera_params: JsValue) -> Result<bool, JsValue> {
    let camera_params = parse_params(camera_params)?;
    Ok(params::torch_enabled(&camera_params))
}

//! Parameter helpers that request scanner-friendly settings.
//!
//! Every helper only selects values the driver advertises. A value that is
//! already set is left alone, and an unsupported feature is skipped with a
//! log event rather than an error.

use super::modes::*;
use super::{CameraParameters, MeteringArea, AREA_PER_1000};
use tracing::{debug, info};

/// Exposure compensation (EV) targeted while the torch is on.
const MIN_EXPOSURE_COMPENSATION: f32 = 0.0;
/// Exposure compensation (EV) targeted while the torch is off.
const MAX_EXPOSURE_COMPENSATION: f32 = 1.5;

/// First of `desired` that appears in `supported`.
fn find_settable_value(name: &str, supported: &[String], desired: &[&str]) -> Option<String> {
    debug!(setting = name, ?supported, ?desired, "Requesting");
    let found = desired
        .iter()
        .find(|value| supported.iter().any(|s| s == *value))
        .map(|value| value.to_string());

    if found.is_none() {
        info!(setting = name, "No supported values match");
    }
    found
}

/// Store `value` into `slot` unless it already holds it.
fn set_if_changed(name: &str, slot: &mut Option<String>, value: String) {
    if slot.as_deref() == Some(value.as_str()) {
        info!(setting = name, %value, "Already set");
    } else {
        info!(setting = name, %value, "Setting");
        *slot = Some(value);
    }
}

/// Select a focus mode.
///
/// With `auto_focus`, plain `auto` is used in safe mode or when continuous
/// focus is disabled; otherwise the continuous modes are preferred. When no
/// auto mode is available (and not in safe mode) `macro` or `edof` is tried.
pub fn set_focus(
    params: &mut CameraParameters,
    auto_focus: bool,
    disable_continuous: bool,
    safe_mode: bool,
) {
    let supported = &params.supported_focus_modes;
    let mut focus_mode = None;

    if auto_focus {
        focus_mode = if safe_mode || disable_continuous {
            find_settable_value("focus mode", supported, &[FOCUS_AUTO])
        } else {
            find_settable_value(
                "focus mode",
                supported,
                &[FOCUS_CONTINUOUS_PICTURE, FOCUS_CONTINUOUS_VIDEO, FOCUS_AUTO],
            )
        };
    }

    // Auto focus may have been requested but unavailable
    if !safe_mode && focus_mode.is_none() {
        focus_mode = find_settable_value("focus mode", supported, &[FOCUS_MACRO, FOCUS_EDOF]);
    }

    if let Some(mode) = focus_mode {
        set_if_changed("focus mode", &mut params.focus_mode, mode);
    }
}

/// Switch the torch on (`torch`, else `on`) or off.
pub fn set_torch(params: &mut CameraParameters, on: bool) {
    let desired: &[&str] = if on {
        &[FLASH_TORCH, FLASH_ON]
    } else {
        &[FLASH_OFF]
    };

    if let Some(mode) = find_settable_value("flash mode", &params.supported_flash_modes, desired) {
        set_if_changed("flash mode", &mut params.flash_mode, mode);
    }
}

/// Whether the flash mode currently lights the scene.
pub fn torch_enabled(params: &CameraParameters) -> bool {
    matches!(params.flash_mode.as_deref(), Some(FLASH_ON) | Some(FLASH_TORCH))
}

/// Pick exposure compensation for the torch state.
///
/// Targets 0.0 EV with the light on and +1.5 EV with it off, rounded to the
/// driver's step and clamped to its index range.
pub fn set_best_exposure(params: &mut CameraParameters, light_on: bool) {
    let min = params.min_exposure_compensation;
    let max = params.max_exposure_compensation;
    let step = params.exposure_compensation_step;

    if (min == 0 && max == 0) || step <= 0.0 || step.is_nan() {
        info!("Camera does not support exposure compensation");
        return;
    }

    let target = if light_on {
        MIN_EXPOSURE_COMPENSATION
    } else {
        MAX_EXPOSURE_COMPENSATION
    };
    // Float-to-int casts saturate, and the clamp keeps the index in range
    let steps = ((target / step).round() as i32).clamp(min.min(max), max.max(min));
    let actual = step * steps as f32;

    if params.exposure_compensation == steps {
        info!(steps, actual, "Exposure compensation already set");
    } else {
        info!(steps, actual, "Setting exposure compensation");
        params.exposure_compensation = steps;
    }
}

/// Turn on video stabilization if the driver supports it.
pub fn set_video_stabilization(params: &mut CameraParameters) {
    if !params.video_stabilization_supported {
        info!("This device does not support video stabilization");
    } else if params.video_stabilization {
        info!("Video stabilization already enabled");
    } else {
        info!("Enabling video stabilization");
        params.video_stabilization = true;
    }
}

/// Request the barcode scene mode.
pub fn set_barcode_scene_mode(params: &mut CameraParameters) {
    if params.scene_mode.as_deref() == Some(SCENE_MODE_BARCODE) {
        info!("Barcode scene mode already set");
        return;
    }

    if let Some(mode) = find_settable_value(
        "scene mode",
        &params.supported_scene_modes,
        &[SCENE_MODE_BARCODE],
    ) {
        params.scene_mode = Some(mode);
    }
}

/// Request the negative color effect.
pub fn set_invert_color(params: &mut CameraParameters) {
    if params.color_effect.as_deref() == Some(EFFECT_NEGATIVE) {
        info!("Negative effect already set");
        return;
    }

    if let Some(effect) = find_settable_value(
        "color effect",
        &params.supported_color_effects,
        &[EFFECT_NEGATIVE],
    ) {
        params.color_effect = Some(effect);
    }
}

/// Focus on the center of the frame.
pub fn set_focus_area(params: &mut CameraParameters) {
    if params.max_num_focus_areas == 0 {
        info!("Device does not support focus areas");
        return;
    }

    debug!(old = ?params.focus_areas, "Old focus areas");
    params.focus_areas = vec![MeteringArea::centered(AREA_PER_1000)];
    info!(new = ?params.focus_areas, "Setting focus area");
}

/// Meter on the center of the frame.
pub fn set_metering(params: &mut CameraParameters) {
    if params.max_num_metering_areas == 0 {
        info!("Device does not support metering areas");
        return;
    }

    debug!(old = ?params.metering_areas, "Old metering areas");
    params.metering_areas = vec![MeteringArea::centered(AREA_PER_1000)];
    info!(new = ?params.metering_areas, "Setting metering area");
}

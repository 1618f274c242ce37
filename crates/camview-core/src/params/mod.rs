//! Hardware camera parameter set.
//!
//! [`CameraParameters`] is a typed snapshot of what a camera driver reports:
//! the current value of each setting plus the values it supports. Hosts read
//! one from the driver, the helpers in this module change it, and the host
//! writes it back.
//!
//! Mode names are the strings drivers use (`"torch"`, `"continuous-picture"`),
//! kept as strings because drivers add vendor-specific values.

mod apply;

pub use apply::{
    set_barcode_scene_mode, set_best_exposure, set_focus, set_focus_area, set_invert_color,
    set_metering, set_torch, set_video_stabilization, torch_enabled,
};

use crate::Size;
use serde::{Deserialize, Serialize};

/// Driver mode names.
pub mod modes {
    pub const FOCUS_AUTO: &str = "auto";
    pub const FOCUS_CONTINUOUS_PICTURE: &str = "continuous-picture";
    pub const FOCUS_CONTINUOUS_VIDEO: &str = "continuous-video";
    pub const FOCUS_MACRO: &str = "macro";
    pub const FOCUS_EDOF: &str = "edof";

    pub const FLASH_OFF: &str = "off";
    pub const FLASH_ON: &str = "on";
    pub const FLASH_TORCH: &str = "torch";

    pub const EFFECT_NEGATIVE: &str = "negative";

    pub const SCENE_MODE_BARCODE: &str = "barcode";
}

/// Half-width of the centered focus/metering rectangle, in driver units.
pub const AREA_PER_1000: i32 = 400;

/// A weighted rectangle on the driver's -1000..1000 coordinate grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeteringArea {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub weight: u32,
}

impl MeteringArea {
    /// A square centered on the frame, `half_extent` units from center to edge.
    pub fn centered(half_extent: i32) -> Self {
        Self {
            left: -half_extent,
            top: -half_extent,
            right: half_extent,
            bottom: half_extent,
            weight: 1,
        }
    }
}

/// Snapshot of a camera driver's parameters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CameraParameters {
    /// Current preview buffer size
    pub preview_size: Option<Size>,
    pub supported_preview_sizes: Vec<Size>,

    pub focus_mode: Option<String>,
    pub supported_focus_modes: Vec<String>,

    pub flash_mode: Option<String>,
    pub supported_flash_modes: Vec<String>,

    pub color_effect: Option<String>,
    pub supported_color_effects: Vec<String>,

    pub scene_mode: Option<String>,
    pub supported_scene_modes: Vec<String>,

    /// Exposure compensation index, in units of `exposure_compensation_step`
    pub exposure_compensation: i32,
    pub min_exposure_compensation: i32,
    pub max_exposure_compensation: i32,
    /// EV per compensation index step
    pub exposure_compensation_step: f32,

    pub video_stabilization_supported: bool,
    pub video_stabilization: bool,

    pub max_num_focus_areas: u32,
    pub focus_areas: Vec<MeteringArea>,

    pub max_num_metering_areas: u32,
    pub metering_areas: Vec<MeteringArea>,

    /// Hint that the preview feeds continuous processing
    pub recording_hint: bool,
}

//! Scanner preferences that drive camera parameter selection.
//!
//! Hosts load these from whatever settings store they own and pass them in
//! explicitly. Missing fields fall back to the defaults below, so a partial
//! object deserializes cleanly.

use serde::{Deserialize, Serialize};

/// User-facing toggles consumed when configuring the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CameraSettings {
    /// Request an auto focus mode (continuous when allowed)
    pub auto_focus: bool,
    /// Restrict auto focus to the plain `auto` mode
    pub disable_continuous_focus: bool,
    /// Ask for the negative color effect, for light-on-dark codes
    pub invert_scan: bool,
    /// Skip the barcode scene mode hint
    pub disable_barcode_scene_mode: bool,
    /// Skip video stabilization, focus areas and metering areas
    pub disable_metering: bool,
    /// Skip exposure compensation
    pub disable_exposure: bool,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            auto_focus: true,
            disable_continuous_focus: false,
            invert_scan: false,
            disable_barcode_scene_mode: true,
            disable_metering: true,
            disable_exposure: true,
        }
    }
}

impl CameraSettings {
    /// Create settings with default values
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ambient light signal used to pick the initial torch state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightMode {
    /// Dark enough that the torch should be on
    On,
    /// Bright enough that the torch should be off
    Off,
    /// Not decided yet
    #[default]
    Auto,
}

impl LightMode {
    /// Whether the torch starts switched on for this mode
    pub fn torch_on(self) -> bool {
        self == LightMode::On
    }
}

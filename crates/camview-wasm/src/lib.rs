//! Camview WASM - WebAssembly bindings for Camview
//!
//! This crate exposes the camview-core orientation and parameter policy to
//! JavaScript/TypeScript hosts that own the camera and display APIs.
//!
//! # Module Structure
//!
//! - `orientation` - Display/sensor rotation reconciliation
//! - `preview` - Preview size selection and on-screen orientation
//! - `params` - Scanner parameter policy applied to a JS parameter object
//!
//! # Usage
//!
//! ```typescript
//! import init, { reconcile_surface_rotation } from '@camview/wasm';
//!
//! await init();
//!
//! const rotation = reconcile_surface_rotation(screenCode, sensorOrientation, isFront);
//! video.style.transform = `rotate(${rotation.needed_rotation}deg)`;
//! ```

use wasm_bindgen::prelude::*;

mod orientation;
mod params;
mod preview;

pub use orientation::{reconcile_rotation, reconcile_surface_rotation, JsRotation};
pub use params::{configure_parameters, torch_enabled};
pub use preview::{adjust_for_orientation, find_best_preview_size, JsSize};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Convert any displayable error into a JS `Error` object.
pub(crate) fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

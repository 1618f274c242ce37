//! WASM bindings for preview size selection.

use crate::to_js_error;
use camview_core::preview;
use camview_core::Size;
use wasm_bindgen::prelude::*;

/// Pixel dimensions accessible from JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsSize {
    width: u32,
    height: u32,
}

#[wasm_bindgen]
impl JsSize {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> JsSize {
        JsSize { width, height }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl From<Size> for JsSize {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

impl From<JsSize> for Size {
    fn from(size: JsSize) -> Self {
        Size::new(size.width, size.height)
    }
}

/// `{ width, height }` object as passed from JavaScript.
#[derive(serde::Deserialize)]
struct SizeJs {
    width: u32,
    height: u32,
}

impl From<SizeJs> for Size {
    fn from(size: SizeJs) -> Self {
        Size::new(size.width, size.height)
    }
}

/// Orient a preview size to match the screen.
///
/// Width and height are swapped when exactly one of the two is portrait.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const onScreen = adjust_for_orientation(640, 480, window.innerWidth, window.innerHeight);
/// ```
#[wasm_bindgen]
pub fn adjust_for_orientation(
    preview_width: u32,
    preview_height: u32,
    screen_width: u32,
    screen_height: u32,
) -> JsSize {
    preview::adjust_for_orientation(
        Size::new(preview_width, preview_height),
        Size::new(screen_width, screen_height),
    )
    .into()
}

/// Treat a zero-area default as "no default".
fn default_size(width: u32, height: u32) -> Option<Size> {
    Some(Size::new(width, height)).filter(|size| !size.is_empty())
}

/// Pick the supported preview size that best fits the screen.
///
/// # Arguments
///
/// * `sizes` - Array of `{ width, height }` objects
/// * `default_width`, `default_height` - Current preview size; pass zeros for none
/// * `screen_width`, `screen_height` - Screen resolution in its current orientation
///
/// # Errors
///
/// Throws if `sizes` is malformed, or if no size qualifies and there is no default.
#[wasm_bindgen]
pub fn find_best_preview_size(
    sizes: JsValue,
    default_width: u32,
    default_height: u32,
    screen_width: u32,
    screen_height: u32,
) -> Result<JsSize, JsValue> {
    let sizes: Vec<SizeJs> = serde_wasm_bindgen::from_value(sizes)
        .map_err(|e| to_js_error(format!("Invalid preview sizes: {}", e)))?;
    let supported: Vec<Size> = sizes.into_iter().map(Size::from).collect();

    preview::find_best_preview_size(
        &supported,
        default_size(default_width, default_height),
        Size::new(screen_width, screen_height),
    )
    .map(JsSize::from)
    .map_err(to_js_error)
}

//! Preview size selection and on-screen orientation.
//!
//! Camera drivers advertise a discrete set of preview sizes in sensor
//! orientation (usually landscape). This module picks the one that best fits
//! the screen and works out how that buffer is laid out on screen.

mod adjust;
mod select;

pub use adjust::adjust_for_orientation;
pub use select::{find_best_preview_size, MAX_ASPECT_DISTORTION, MIN_PREVIEW_PIXELS};

use thiserror::Error;

/// Error types for preview size selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PreviewError {
    /// No acceptable size and the driver has no default preview size.
    #[error("Parameters contained no preview size")]
    NoPreviewSize,
}

//! Display/sensor orientation reconciliation.
//!
//! A camera sensor is mounted at a fixed clockwise angle relative to the
//! device's natural orientation, while the display can be rotated in quarter
//! turns. This module computes the clockwise rotation that makes the raw
//! preview buffer appear upright on the display.
//!
//! # Conventions
//!
//! - All angles are clockwise degrees normalized into `[0, 360)`
//! - Front-facing sensors produce a mirrored preview, so their orientation is
//!   mirrored before and the result compensated after the subtraction
//!
//! # Example
//!
//! ```
//! use camview_core::orientation::{reconcile, DisplayRotation, Facing, SensorOrientation};
//!
//! let result = reconcile(DisplayRotation::Rotate0, SensorOrientation::new(90), Facing::Back);
//! assert_eq!(result.needed_rotation, 90);
//! ```

mod reconcile;
mod types;

pub use reconcile::{reconcile, reconcile_raw};
pub use types::{DisplayRotation, Facing, OrientationError, RotationResult, SensorOrientation};

//! Best preview size selection.
//!
//! Candidates are compared in landscape orientation so that a portrait screen
//! can still match the landscape sizes drivers usually advertise.

use super::PreviewError;
use crate::Size;
use tracing::{debug, info, warn};

/// Smallest preview worth decoding barcodes from (480x320).
pub const MIN_PREVIEW_PIXELS: u64 = 480 * 320;

/// Largest tolerated difference between candidate and screen aspect ratios.
pub const MAX_ASPECT_DISTORTION: f64 = 0.15;

/// Pick the supported preview size that best fits the screen.
///
/// # Arguments
///
/// * `supported` - Sizes the driver advertises, in any order
/// * `default` - The driver's current preview size, used as a fallback
/// * `screen` - Screen resolution in its current orientation
///
/// # Returns
///
/// A size matching the screen exactly if there is one, else the largest
/// candidate that is big enough and close enough in aspect ratio, else
/// `default`.
///
/// # Errors
///
/// Returns [`PreviewError::NoPreviewSize`] if nothing qualifies and there is
/// no default.
pub fn find_best_preview_size(
    supported: &[Size],
    default: Option<Size>,
    screen: Size,
) -> Result<Size, PreviewError> {
    let fallback = || -> Result<Size, PreviewError> {
        let size = default.ok_or(PreviewError::NoPreviewSize)?;
        info!(%size, "No suitable preview sizes, using default");
        Ok(size)
    };

    if supported.is_empty() {
        warn!("Device returned no supported preview sizes; using default");
        return fallback();
    }

    let mut candidates = supported.to_vec();
    candidates.sort_by(|a, b| b.pixel_count().cmp(&a.pixel_count()));
    debug!(
        sizes = ?candidates.iter().map(Size::to_string).collect::<Vec<_>>(),
        "Supported preview sizes"
    );

    let screen_landscape = screen.landscape();
    let screen_aspect = screen_landscape.aspect_ratio();
    let mut largest = None;

    for candidate in candidates {
        if candidate.pixel_count() < MIN_PREVIEW_PIXELS {
            continue;
        }

        let oriented = candidate.landscape();
        let distortion = (oriented.aspect_ratio() - screen_aspect).abs();
        // NaN when the screen has a zero dimension
        if distortion.is_nan() || distortion > MAX_ASPECT_DISTORTION {
            continue;
        }

        if oriented == screen_landscape {
            info!(size = %candidate, "Found preview size exactly matching screen size");
            return Ok(candidate);
        }

        largest.get_or_insert(candidate);
    }

    match largest {
        Some(size) => {
            info!(%size, "Using largest suitable preview size");
            Ok(size)
        }
        None => fallback(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(list: &[(u32, u32)]) -> Vec<Size> {
        list.iter().map(|&(w, h)| Size::new(w, h)).collect()
    }

    #[test]
    fn test_exact_match_wins_over_larger() {
        let supported = sizes(&[(3840, 2160), (1920, 1080), (1280, 720)]);
        let result = find_best_preview_size(&supported, None, Size::new(1920, 1080));
        assert_eq!(result, Ok(Size::new(1920, 1080)));
    }

    #[test]
    fn test_exact_match_on_portrait_screen() {
        let supported = sizes(&[(3840, 2160), (1920, 1080)]);
        let result = find_best_preview_size(&supported, None, Size::new(1080, 1920));
        assert_eq!(result, Ok(Size::new(1920, 1080)));
    }

    #[test]
    fn test_largest_with_matching_aspect() {
        // 16:9 screen, no exact match; 4:3 sizes are too distorted
        let supported = sizes(&[(1280, 720), (2048, 1536), (960, 540), (1600, 900)]);
        let result = find_best_preview_size(&supported, None, Size::new(1080, 1920));
        assert_eq!(result, Ok(Size::new(1600, 900)));
    }

    #[test]
    fn test_small_sizes_filtered() {
        // 320x180 is 16:9 but below the pixel threshold
        let supported = sizes(&[(320, 180), (176, 144)]);
        let result = find_best_preview_size(&supported, Some(Size::new(640, 480)), Size::new(1920, 1080));
        assert_eq!(result, Ok(Size::new(640, 480)));
    }

    #[test]
    fn test_distortion_threshold() {
        // 4:3 (1.333) vs 16:10 (1.6): distortion 0.267 > 0.15
        let supported = sizes(&[(1024, 768)]);
        let result = find_best_preview_size(&supported, None, Size::new(1280, 800));
        assert_eq!(result, Err(PreviewError::NoPreviewSize));

        // 3:2 (1.5) vs 16:10 (1.6): distortion 0.1 is accepted
        let supported = sizes(&[(720, 480)]);
        let result = find_best_preview_size(&supported, None, Size::new(1280, 800));
        assert_eq!(result, Ok(Size::new(720, 480)));
    }

    #[test]
    fn test_empty_supported_uses_default() {
        let result = find_best_preview_size(&[], Some(Size::new(640, 480)), Size::new(1920, 1080));
        assert_eq!(result, Ok(Size::new(640, 480)));
    }

    #[test]
    fn test_no_candidates_and_no_default() {
        let result = find_best_preview_size(&[], None, Size::new(1920, 1080));
        assert_eq!(result, Err(PreviewError::NoPreviewSize));
    }

    #[test]
    fn test_zero_sized_screen_falls_back() {
        let supported = sizes(&[(1920, 1080)]);
        let result = find_best_preview_size(&supported, Some(Size::new(640, 480)), Size::new(0, 0));
        assert_eq!(result, Ok(Size::new(640, 480)));
    }

    #[test]
    fn test_input_order_irrelevant() {
        let forward = sizes(&[(1280, 720), (1600, 900), (1920, 1080)]);
        let mut reversed = forward.clone();
        reversed.reverse();
        let screen = Size::new(2560, 1440);
        assert_eq!(
            find_best_preview_size(&forward, None, screen),
            find_best_preview_size(&reversed, None, screen)
        );
        assert_eq!(
            find_best_preview_size(&forward, None, screen),
            Ok(Size::new(1920, 1080))
        );
    }

    #[test]
    fn test_preview_error_display() {
        assert_eq!(
            PreviewError::NoPreviewSize.to_string(),
            "Parameters contained no preview size"
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn size_strategy() -> impl Strategy<Value = Size> {
        (1u32..=4000, 1u32..=4000).prop_map(|(w, h)| Size::new(w, h))
    }

    proptest! {
        /// Property: The selection is either advertised or the default.
        #[test]
        fn prop_result_is_known_size(
            supported in prop::collection::vec(size_strategy(), 0..12),
            default in size_strategy(),
            screen in size_strategy(),
        ) {
            let result = find_best_preview_size(&supported, Some(default), screen).unwrap();
            prop_assert!(result == default || supported.contains(&result));
        }

        /// Property: An advertised pick is big enough and close in aspect ratio.
        #[test]
        fn prop_advertised_pick_is_acceptable(
            supported in prop::collection::vec(size_strategy(), 1..12),
            screen in size_strategy(),
        ) {
            if let Ok(result) = find_best_preview_size(&supported, None, screen) {
                prop_assert!(result.pixel_count() >= MIN_PREVIEW_PIXELS);
                let distortion =
                    (result.landscape().aspect_ratio() - screen.landscape().aspect_ratio()).abs();
                prop_assert!(distortion <= MAX_ASPECT_DISTORTION);
            }
        }
    }
}

//! Orienting a preview size to match the screen.

use crate::Size;

/// Determine the preview size as laid out on screen.
///
/// If the screen and preview agree on portrait/landscape the preview is
/// returned unchanged, otherwise its width and height are swapped. Portrait
/// means `width < height`.
///
/// # Example
///
/// ```
/// use camview_core::{adjust_for_orientation, Size};
///
/// let on_screen = adjust_for_orientation(Size::new(640, 480), Size::new(1080, 1920));
/// assert_eq!(on_screen, Size::new(480, 640));
/// ```
pub fn adjust_for_orientation(preview: Size, screen: Size) -> Size {
    if screen.is_portrait() == preview.is_portrait() {
        preview
    } else {
        preview.swapped()
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
        /// Property: The result never changes the set of dimensions.
        #[test]
        fn prop_dimensions_preserved(preview in size_strategy(), screen in size_strategy()) {
            let result = adjust_for_orientation(preview, screen);
            prop_assert_eq!(result.pixel_count(), preview.pixel_count());
            prop_assert!(result == preview || result == preview.swapped());
        }

        /// Property: Non-square results agree with the screen's orientation.
        #[test]
        fn prop_matches_screen_orientation(preview in size_strategy(), screen in size_strategy()) {
            prop_assume!(preview.width != preview.height);
            let result = adjust_for_orientation(preview, screen);
            prop_assert_eq!(result.is_portrait(), screen.is_portrait());
        }
    }
}

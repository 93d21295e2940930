//! Fit an image inside a bounding box without ever enlarging it.
//!
//! The fit is computed in two independent passes:
//!
//! 1. If the width exceeds `max_width`, pin the width and scale the height.
//! 2. If the (possibly already scaled) height still exceeds `max_height`,
//!    pin the height and recompute the width from the *original* ratio.
//!
//! This is not the same as taking the minimum of the two scale factors in
//! every case: the second pass only runs when the first one left the height
//! out of bounds, and it overrides the first pass entirely.

use std::borrow::Cow;

use crate::error::ImageError;
use crate::pixels::PixelImage;
use crate::transform::{resize, FilterType};

/// Compute the dimensions `width`x`height` should be scaled to so that it
/// fits inside `max_width`x`max_height`.
///
/// Returns the input dimensions unchanged when they already fit. Every
/// computed side is at least 1 pixel.
///
/// # Example
///
/// ```
/// use picture_editor_core::scale::plan_scale_down;
///
/// assert_eq!(plan_scale_down(800, 600, 400, 400), (400, 300));
/// assert_eq!(plan_scale_down(300, 800, 400, 400), (150, 400));
/// assert_eq!(plan_scale_down(100, 50, 400, 400), (100, 50));
/// ```
pub fn plan_scale_down(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }

    let (w, h) = (width as f64, height as f64);
    let (mut new_width, mut new_height) = (width, height);

    if new_width > max_width {
        new_width = max_width;
        new_height = scaled(h * max_width as f64 / w);
    }
    if new_height > max_height {
        new_height = max_height;
        new_width = scaled(w * max_height as f64 / h);
    }

    (new_width, new_height)
}

#[inline]
fn scaled(value: f64) -> u32 {
    (value.round() as u32).max(1)
}

/// Scale an image down to fit within `max_width`x`max_height`.
///
/// When the image already fits, the input is returned borrowed and nothing
/// is allocated. Otherwise a new image is resampled with `filter`.
///
/// # Errors
///
/// * [`ImageError::InvalidImage`] if the source has a zero dimension
/// * [`ImageError::InvalidBounds`] if either maximum is zero
pub fn scale_down(
    image: &PixelImage,
    max_width: u32,
    max_height: u32,
    filter: FilterType,
) -> Result<Cow<'_, PixelImage>, ImageError> {
    image.ensure_valid()?;
    if max_width == 0 || max_height == 0 {
        return Err(ImageError::InvalidBounds {
            max_width,
            max_height,
        });
    }

    let (new_width, new_height) =
        plan_scale_down(image.width(), image.height(), max_width, max_height);

    if (new_width, new_height) == image.dimensions() {
        return Ok(Cow::Borrowed(image));
    }

    resize(image, new_width, new_height, filter).map(Cow::Owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_image(width: u32, height: u32) -> PixelImage {
        // Create a simple gradient image for testing
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8); // R
                pixels.push(((y * 255) / height.max(1)) as u8); // G
                pixels.push(128); // B
            }
        }
        PixelImage::from_rgb(width, height, pixels).unwrap()
    }

    #[test]
    fn test_plan_width_bound() {
        // Width pass only: 600 * 400 / 800 = 300 fits the height bound.
        assert_eq!(plan_scale_down(800, 600, 400, 400), (400, 300));
    }

    #[test]
    fn test_plan_height_bound() {
        // Width already fits; height pass: 300 * 400 / 800 = 150.
        assert_eq!(plan_scale_down(300, 800, 400, 400), (150, 400));
    }

    #[test]
    fn test_plan_both_passes() {
        // Width pass gives 400x800, still too tall; height pass recomputes
        // the width from the original 1000x2000 ratio.
        assert_eq!(plan_scale_down(1000, 2000, 400, 400), (200, 400));
    }

    #[test]
    fn test_plan_already_fits() {
        assert_eq!(plan_scale_down(100, 50, 400, 400), (100, 50));
        assert_eq!(plan_scale_down(400, 400, 400, 400), (400, 400));
    }

    #[test]
    fn test_plan_rounds_to_nearest() {
        // 4000 * 2560 / 6000 = 1706.67
        assert_eq!(plan_scale_down(6000, 4000, 2560, 2560), (2560, 1707));
    }

    #[test]
    fn test_plan_extreme_ratio_keeps_one_pixel() {
        assert_eq!(plan_scale_down(10_000, 1, 100, 100), (100, 1));
        assert_eq!(plan_scale_down(1, 10_000, 100, 100), (1, 100));
    }

    #[test]
    fn test_scale_down_borrows_when_fitting() {
        let img = create_test_image(100, 50);
        let result = scale_down(&img, 400, 400, FilterType::Bilinear).unwrap();

        assert!(matches!(result, Cow::Borrowed(_)));
        assert!(std::ptr::eq(result.as_ref(), &img));
    }

    #[test]
    fn test_scale_down_resamples() {
        let img = create_test_image(800, 600);
        let result = scale_down(&img, 400, 400, FilterType::Bilinear).unwrap();

        assert!(matches!(result, Cow::Owned(_)));
        assert_eq!(result.dimensions(), (400, 300));
        assert_eq!(result.pixels().len(), 400 * 300 * 3);
    }

    #[test]
    fn test_scale_down_zero_bounds_error() {
        let img = create_test_image(100, 50);
        assert_eq!(
            scale_down(&img, 0, 50, FilterType::Bilinear),
            Err(ImageError::InvalidBounds {
                max_width: 0,
                max_height: 50
            })
        );
    }

    #[test]
    fn test_scale_down_empty_image_error() {
        let img = PixelImage::from_rgb(0, 0, vec![]).unwrap();
        assert!(matches!(
            scale_down(&img, 10, 10, FilterType::Bilinear),
            Err(ImageError::InvalidImage { .. })
        ));
    }

    #[test]
    fn test_scale_down_leaves_source_untouched() {
        let img = create_test_image(300, 200);
        let before = img.clone();
        let _ = scale_down(&img, 100, 100, FilterType::Lanczos3).unwrap();
        assert_eq!(img, before);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

//! The single-pass crop → resample → color adjustment pipeline.

use crate::adjustments::{apply_color_matrix, ColorMatrix};
use crate::error::ImageError;
use crate::pixels::PixelImage;
use crate::{ColorAdjustment, Rectangle};

use super::crop::{extract_region, resolve_region};
use super::resize::{resize, FilterType};

/// Produce a finished image from a region of `source`.
///
/// # Arguments
///
/// * `source` - Image to read from; never modified
/// * `adjustment` - Brightness / contrast / saturation to apply
/// * `source_rect` - Region to crop, in source pixels; [`Rectangle::EMPTY`] selects the whole image
/// * `destination_rect` - Output extents; only its width and height are used.
///   [`Rectangle::EMPTY`] keeps the size of `source_rect`
/// * `filter` - Interpolating filter used when the output size differs from the region
///
/// # Order of Operations
///
/// 1. Extract `source_rect`
/// 2. Resample to the output size
/// 3. Apply the color matrix to every output pixel
///
/// # Errors
///
/// * [`ImageError::InvalidImage`] if `source` has a zero dimension
/// * [`ImageError::InvalidRegion`] if `source_rect` extends outside `source`
pub fn transform(
    source: &PixelImage,
    adjustment: &ColorAdjustment,
    source_rect: Rectangle,
    destination_rect: Rectangle,
    filter: FilterType,
) -> Result<PixelImage, ImageError> {
    source.ensure_valid()?;
    let region = resolve_region(source, source_rect)?;

    let (out_width, out_height) = if destination_rect.is_empty() {
        (region.width, region.height)
    } else {
        (destination_rect.width, destination_rect.height)
    };

    let cropped = extract_region(source, region)?;
    let resized = resize(&cropped, out_width, out_height, filter)?;
    drop(cropped);

    let matrix = ColorMatrix::from_adjustment(adjustment);
    if matrix.is_identity() {
        return Ok(resized);
    }

    let (width, height, layout) = (resized.width(), resized.height(), resized.layout());
    let channels = resized.channels();
    let mut pixels = resized.into_pixels();
    apply_color_matrix(&mut pixels, channels, &matrix);

    PixelImage::new(width, height, layout, pixels)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn region_strategy() -> impl Strategy<Value = (u32, u32, Rectangle)> {
        (2u32..=48, 2u32..=48).prop_flat_map(|(width, height)| {
            (0..width, 0..height).prop_flat_map(move |(x, y)| {
                (1..=width - x, 1..=height - y).prop_map(move |(w, h)| {
                    (width, height, Rectangle::new(x as i32, y as i32, w, h))
                })
            })
        })
    }

    proptest! {
        /// Property: The output has exactly the requested size.
        #[test]
        fn prop_output_size(
            (width, height, rect) in region_strategy(),
            (dw, dh) in (0u32..=32, 0u32..=32),
        ) {
            let img = PixelImage::from_rgb(width, height, vec![64u8; (width * height * 3) as usize]).unwrap();
            let dest = Rectangle::new(0, 0, dw, dh);
            let result = transform(&img, &ColorAdjustment::default(), rect, dest, FilterType::Bilinear).unwrap();

            let expected = if dest.is_empty() { (rect.width, rect.height) } else { (dw, dh) };
            prop_assert_eq!(result.dimensions(), expected);
        }

        /// Property: The source buffer is bit-identical after any transform.
        #[test]
        fn prop_source_untouched(
            (width, height, rect) in region_strategy(),
            brightness in -1.0f32..=1.0,
            contrast in 0.0f32..=2.0,
            saturation in 0.0f32..=2.0,
        ) {
            let pixels: Vec<u8> = (0..width * height * 3).map(|i| (i * 7 % 256) as u8).collect();
            let img = PixelImage::from_rgb(width, height, pixels.clone()).unwrap();
            let adj = ColorAdjustment::new(brightness, contrast, saturation);
            let _ = transform(&img, &adj, rect, Rectangle::new(0, 0, 9, 9), FilterType::Lanczos3).unwrap();
            prop_assert_eq!(img.pixels(), pixels.as_slice());
        }

        /// Property: Identical inputs give identical outputs.
        #[test]
        fn prop_deterministic(
            (width, height, rect) in region_strategy(),
            contrast in 0.0f32..=2.0,
        ) {
            let pixels: Vec<u8> = (0..width * height * 3).map(|i| (i % 256) as u8).collect();
            let img = PixelImage::from_rgb(width, height, pixels).unwrap();
            let adj = ColorAdjustment::new(0.1, contrast, 0.8);
            let dest = Rectangle::new(0, 0, 11, 5);
            let a = transform(&img, &adj, rect, dest, FilterType::CatmullRom).unwrap();
            let b = transform(&img, &adj, rect, dest, FilterType::CatmullRom).unwrap();
            prop_assert_eq!(a, b);
        }

        /// Property: Any rectangle poking outside the image is rejected.
        #[test]
        fn prop_out_of_bounds_rejected(
            (width, height) in (1u32..=64, 1u32..=64),
            overflow in 1u32..=16,
        ) {
            let img = PixelImage::from_rgb(width, height, vec![0u8; (width * height * 3) as usize]).unwrap();
            let rect = Rectangle::new(0, 0, width + overflow, height);
            let result = transform(&img, &ColorAdjustment::default(), rect, Rectangle::EMPTY, FilterType::Bilinear);
            prop_assert!(
                matches!(result, Err(ImageError::InvalidRegion { .. })),
                "expected InvalidRegion"
            );
        }
    }
}

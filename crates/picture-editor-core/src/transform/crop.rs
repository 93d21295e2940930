//! Crop geometry and region extraction.
//!
//! Crop rectangles are expressed in source pixel coordinates with the origin
//! at the top-left corner. Nothing here clamps: a rectangle that does not
//! fit its image is reported as [`ImageError::InvalidRegion`].
//!
//! # Example
//!
//! ```ignore
//! // Largest centered square of a 1000x500 image
//! let window = plan_crop_window(1000, 500, 1.0)?;
//! assert_eq!(window, Rectangle::new(250, 0, 500, 500));
//! ```

use crate::error::ImageError;
use crate::pixels::PixelImage;
use crate::Rectangle;

/// Compute the largest centered rectangle of the given aspect ratio
/// (width / height) that fits inside a `width`x`height` image.
///
/// An image relatively wider than the target keeps its full height and is
/// trimmed equally left and right; otherwise it keeps its full width and is
/// trimmed top and bottom. Equal ratios take the second branch and yield the
/// whole image.
///
/// # Errors
///
/// * [`ImageError::InvalidImage`] if either dimension is zero
/// * [`ImageError::InvalidAspectRatio`] if `aspect_ratio` is not a positive finite number
pub fn plan_crop_window(width: u32, height: u32, aspect_ratio: f64) -> Result<Rectangle, ImageError> {
    if width == 0 || height == 0 {
        return Err(ImageError::InvalidImage { width, height });
    }
    if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
        return Err(ImageError::InvalidAspectRatio(aspect_ratio));
    }

    let actual_ratio = width as f64 / height as f64;

    let window = if actual_ratio > aspect_ratio {
        let new_width = fit_extent(height as f64 * aspect_ratio, width);
        Rectangle::new(((width - new_width) / 2) as i32, 0, new_width, height)
    } else {
        let new_height = fit_extent(width as f64 / aspect_ratio, height);
        Rectangle::new(0, ((height - new_height) / 2) as i32, width, new_height)
    };

    Ok(window)
}

/// Round to whole pixels, keeping the result in `1..=limit`.
#[inline]
fn fit_extent(value: f64, limit: u32) -> u32 {
    (value.round() as u32).clamp(1, limit)
}

/// Copy a rectangle out of an image into a new image.
///
/// An empty `rect` selects the whole image.
///
/// # Errors
///
/// * [`ImageError::InvalidImage`] if the source has a zero dimension
/// * [`ImageError::InvalidRegion`] if `rect` extends outside the source
pub fn extract_region(image: &PixelImage, rect: Rectangle) -> Result<PixelImage, ImageError> {
    image.ensure_valid()?;
    let rect = resolve_region(image, rect)?;

    // Fast path: full-frame region returns a clone
    if rect == Rectangle::new(0, 0, image.width(), image.height()) {
        return Ok(image.clone());
    }

    let channels = image.channels();
    let src_stride = image.stride();
    let row_bytes = rect.width as usize * channels;
    let left = rect.x as usize * channels;

    let mut output = Vec::with_capacity(row_bytes * rect.height as usize);

    // Copy pixel data row by row
    for src_y in rect.y as usize..rect.y as usize + rect.height as usize {
        let start = src_y * src_stride + left;
        output.extend_from_slice(&image.pixels()[start..start + row_bytes]);
    }

    PixelImage::new(rect.width, rect.height, image.layout(), output)
}

/// Replace an empty rectangle with the full image and check bounds.
pub(crate) fn resolve_region(image: &PixelImage, rect: Rectangle) -> Result<Rectangle, ImageError> {
    if rect.is_empty() {
        return Ok(Rectangle::new(0, 0, image.width(), image.height()));
    }
    if !rect.fits_within(image.width(), image.height()) {
        return Err(ImageError::InvalidRegion {
            rect,
            width: image.width(),
            height: image.height(),
        });
    }
    Ok(rect)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test image where each pixel has a unique value based on position.
    fn test_image(width: u32, height: u32) -> PixelImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.push(v); // R
                pixels.push(v); // G
                pixels.push(v); // B
            }
        }
        PixelImage::from_rgb(width, height, pixels).unwrap()
    }

    // ===== Crop Window Tests =====

    #[test]
    fn test_window_wide_image_to_square() {
        let window = plan_crop_window(1000, 500, 1.0).unwrap();
        assert_eq!(window, Rectangle::new(250, 0, 500, 500));
    }

    #[test]
    fn test_window_tall_image_to_square() {
        let window = plan_crop_window(500, 1000, 1.0).unwrap();
        assert_eq!(window, Rectangle::new(0, 250, 500, 500));
    }

    #[test]
    fn test_window_equal_ratio_is_full_image() {
        let window = plan_crop_window(400, 300, 4.0 / 3.0).unwrap();
        assert_eq!(window, Rectangle::new(0, 0, 400, 300));
    }

    #[test]
    fn test_window_landscape_target() {
        // 400x300 to 16:9: width 400, height round(400 / 1.777) = 225, y = 37
        let window = plan_crop_window(400, 300, 16.0 / 9.0).unwrap();
        assert_eq!(window, Rectangle::new(0, 37, 400, 225));
    }

    #[test]
    fn test_window_odd_remainder() {
        // 101x50 to 1.0: width 50, remainder 51 split as x = 25
        let window = plan_crop_window(101, 50, 1.0).unwrap();
        assert_eq!(window, Rectangle::new(25, 0, 50, 50));
    }

    #[test]
    fn test_window_rejects_bad_ratio() {
        for ratio in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                plan_crop_window(100, 100, ratio),
                Err(ImageError::InvalidAspectRatio(_))
            ));
        }
    }

    #[test]
    fn test_window_rejects_empty_image() {
        assert_eq!(
            plan_crop_window(0, 10, 1.0),
            Err(ImageError::InvalidImage {
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn test_window_tiny_ratio_keeps_one_pixel() {
        let window = plan_crop_window(10, 10, 0.0001).unwrap();
        assert_eq!(window.width, 1);
        assert_eq!(window.height, 10);

        let window = plan_crop_window(10, 10, 10_000.0).unwrap();
        assert_eq!(window.width, 10);
        assert_eq!(window.height, 1);
    }

    // ===== Extraction Tests =====

    #[test]
    fn test_extract_full_region() {
        let img = test_image(20, 10);
        let result = extract_region(&img, Rectangle::new(0, 0, 20, 10)).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_extract_empty_rect_selects_everything() {
        let img = test_image(20, 10);
        let result = extract_region(&img, Rectangle::EMPTY).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_extract_pixel_values_preserved() {
        let img = test_image(10, 10);
        let result = extract_region(&img, Rectangle::new(3, 3, 4, 4)).unwrap();

        assert_eq!(result.dimensions(), (4, 4));
        // First pixel should be from (3, 3): 3 * 10 + 3 = 33
        assert_eq!(&result.pixels()[0..3], &[33, 33, 33]);
        // Last pixel should be from (6, 6): 6 * 10 + 6 = 66
        let len = result.pixels().len();
        assert_eq!(result.pixels()[len - 1], 66);
    }

    #[test]
    fn test_extract_rgba_region() {
        let pixels: Vec<u8> = (0..4 * 2 * 4).map(|i| i as u8).collect();
        let img = PixelImage::from_rgba(4, 2, pixels).unwrap();
        let result = extract_region(&img, Rectangle::new(1, 1, 2, 1)).unwrap();

        // Pixel (1, 1) starts at byte (1 * 4 + 1) * 4 = 20
        assert_eq!(result.pixels(), &[20, 21, 22, 23, 24, 25, 26, 27]);
    }

    #[test]
    fn test_extract_out_of_bounds() {
        let img = test_image(40, 40);
        let rect = Rectangle::new(10, 10, 50, 50);
        assert_eq!(
            extract_region(&img, rect),
            Err(ImageError::InvalidRegion {
                rect,
                width: 40,
                height: 40
            })
        );
    }

    #[test]
    fn test_extract_negative_origin() {
        let img = test_image(40, 40);
        assert!(matches!(
            extract_region(&img, Rectangle::new(-1, 0, 10, 10)),
            Err(ImageError::InvalidRegion { .. })
        ));
    }

    #[test]
    fn test_extract_touching_edges_is_valid() {
        let img = test_image(40, 40);
        let result = extract_region(&img, Rectangle::new(30, 35, 10, 5)).unwrap();
        assert_eq!(result.dimensions(), (10, 5));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

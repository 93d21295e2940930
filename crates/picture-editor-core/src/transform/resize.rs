//! Resampling to exact dimensions.
//!
//! Every filter here interpolates across source pixels. Nearest-neighbour
//! sampling is not offered.

use serde::{Deserialize, Serialize};

use crate::error::ImageError;
use crate::pixels::{buffer_len, PixelImage};

/// Filter type for resampling operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterType {
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Catmull-Rom bicubic interpolation.
    CatmullRom,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::CatmullRom => image::imageops::FilterType::CatmullRom,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Resize an image to exact dimensions.
///
/// The channel layout is preserved. When the dimensions already match, a
/// copy of the input is returned without resampling.
///
/// # Errors
///
/// * [`ImageError::InvalidImage`] if the source or the target has a zero dimension
/// * [`ImageError::TooLarge`] if the target buffer would overflow `usize`
pub fn resize(
    image: &PixelImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<PixelImage, ImageError> {
    image.ensure_valid()?;
    if width == 0 || height == 0 {
        return Err(ImageError::InvalidImage { width, height });
    }
    if buffer_len(width, height, image.layout()).is_none() {
        return Err(ImageError::TooLarge {
            width: width.into(),
            height: height.into(),
        });
    }

    // Fast path: if dimensions match, just clone
    if image.dimensions() == (width, height) {
        return Ok(image.clone());
    }

    let dynamic = image
        .to_dynamic()
        .ok_or_else(|| ImageError::ResampleFailed("Failed to create image buffer".to_string()))?;

    let filter = filter.to_image_filter();
    let resized = match dynamic {
        image::DynamicImage::ImageRgba8(rgba) => {
            PixelImage::from_rgba_image(image::imageops::resize(&rgba, width, height, filter))
        }
        other => PixelImage::from_rgb_image(image::imageops::resize(
            &other.into_rgb8(),
            width,
            height,
            filter,
        )),
    };

    Ok(resized)
}

//! JPEG encoding for storage.
//!
//! Uses the `image` crate's baseline JPEG encoder. JPEG carries no alpha, so
//! RGBA images are flattened by dropping the alpha channel.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

use crate::pixels::{PixelImage, PixelLayout};

/// Quality used when the caller does not configure one.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Largest side a baseline JPEG frame header can carry.
pub const MAX_JPEG_DIMENSION: u32 = 65_535;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// JPEG encoding failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode an image to JPEG bytes.
///
/// # Arguments
///
/// * `image` - Image to encode
/// * `quality` - JPEG quality, clamped to 1-100 (100 is highest quality)
///
/// # Quality Guidelines
///
/// * 90-100: High quality, suitable for further editing
/// * 75-90: Good quality, recommended for most uses
/// * Below 60: Low quality, visible artifacts
pub fn encode_jpeg(image: &PixelImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    if image.is_empty() {
        return Err(EncodeError::InvalidDimensions {
            width: image.width(),
            height: image.height(),
        });
    }

    let quality = quality.clamp(1, 100);

    let flattened;
    let rgb = match image.layout() {
        PixelLayout::Rgb8 => image,
        PixelLayout::Rgba8 => {
            flattened = image.to_rgb();
            &flattened
        }
    };

    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(rgb.pixels(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}


// ============================================================================
// Property-Based Tests
// ============================================================================

//! Byte buffer → [`PixelImage`] with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageError as CodecError, ImageReader};

use super::{DecodeError, Orientation};
use crate::pixels::PixelImage;

/// Decode an image from bytes, applying EXIF orientation correction.
///
/// The format is detected from the content (JPEG, PNG, GIF, BMP, TIFF and
/// WebP are enabled). Images with an alpha channel decode to
/// [`PixelLayout::Rgba8`](crate::PixelLayout::Rgba8), everything else to
/// [`PixelLayout::Rgb8`](crate::PixelLayout::Rgb8). Only the first frame of
/// an animated image is read.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are empty or not a supported format.
/// Returns `DecodeError::CorruptedFile` if the image data is damaged.
pub fn decode_image(bytes: &[u8]) -> Result<PixelImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::InvalidFormat);
    }

    let orientation = extract_orientation(bytes);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader.decode().map_err(|e| match e {
        CodecError::Unsupported(_) => DecodeError::InvalidFormat,
        other => DecodeError::CorruptedFile(other.to_string()),
    })?;

    Ok(into_pixel_image(apply_orientation(img, orientation)))
}

fn into_pixel_image(img: DynamicImage) -> PixelImage {
    if img.color().has_alpha() {
        PixelImage::from_rgba_image(img.into_rgba8())
    } else {
        PixelImage::from_rgb_image(img.into_rgb8())
    }
}

/// Extract EXIF orientation from image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    extract_orientation(bytes)
}

fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    Reader::new()
        .read_from_container(&mut cursor)
        .ok()
        .and_then(|exif| {
            exif.get_field(Tag::Orientation, In::PRIMARY)
                .and_then(|field| field.value.get_uint(0))
        })
        .map(Orientation::from)
        .unwrap_or_default()
}

/// Apply EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

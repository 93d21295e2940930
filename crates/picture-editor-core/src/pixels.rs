//! In-memory raster type shared by every stage of the pipeline.

use serde::{Deserialize, Serialize};

use crate::error::ImageError;

/// Channel layout of a [`PixelImage`] buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PixelLayout {
    /// 3 bytes per pixel: red, green, blue.
    #[default]
    Rgb8,
    /// 4 bytes per pixel: red, green, blue, alpha.
    Rgba8,
}

impl PixelLayout {
    /// Number of bytes per pixel.
    #[inline]
    pub fn channels(self) -> usize {
        match self {
            PixelLayout::Rgb8 => 3,
            PixelLayout::Rgba8 => 4,
        }
    }

    /// Map a channel count back to a layout.
    pub fn from_channels(channels: u8) -> Option<Self> {
        match channels {
            3 => Some(PixelLayout::Rgb8),
            4 => Some(PixelLayout::Rgba8),
            _ => None,
        }
    }
}

/// An immutable raster: dimensions, layout and a row-major pixel buffer.
///
/// Operations never mutate a `PixelImage`; each one returns a new value owned
/// by the caller. Zero dimensions are representable so that an empty decode
/// result can be passed around, but every core operation rejects them with
/// [`ImageError::InvalidImage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelImage {
    width: u32,
    height: u32,
    layout: PixelLayout,
    pixels: Vec<u8>,
}

impl PixelImage {
    /// Wrap a pixel buffer, checking that its length matches the dimensions.
    ///
    /// Dimensions whose byte count overflows `usize` are rejected with
    /// [`ImageError::TooLarge`].
    pub fn new(
        width: u32,
        height: u32,
        layout: PixelLayout,
        pixels: Vec<u8>,
    ) -> Result<Self, ImageError> {
        let expected = buffer_len(width, height, layout).ok_or(ImageError::TooLarge {
            width: width.into(),
            height: height.into(),
        })?;
        if pixels.len() != expected {
            return Err(ImageError::BufferMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            layout,
            pixels,
        })
    }

    /// Shorthand for an RGB image.
    pub fn from_rgb(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, ImageError> {
        Self::new(width, height, PixelLayout::Rgb8, pixels)
    }

    /// Shorthand for an RGBA image.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, ImageError> {
        Self::new(width, height, PixelLayout::Rgba8, pixels)
    }

    /// Create an image from an `image::RgbImage`.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            layout: PixelLayout::Rgb8,
            pixels: img.into_raw(),
        }
    }

    /// Create an image from an `image::RgbaImage`.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            layout: PixelLayout::Rgba8,
            pixels: img.into_raw(),
        }
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width and height as a tuple.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Channel layout of the buffer.
    #[inline]
    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    /// Bytes per pixel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.layout.channels()
    }

    /// Borrow the raw pixel buffer.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the image and return its pixel buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Bytes in one row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * self.channels()
    }

    /// Check if this is an empty image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Fail with [`ImageError::InvalidImage`] if either dimension is zero.
    pub fn ensure_valid(&self) -> Result<(), ImageError> {
        if self.is_empty() {
            return Err(ImageError::InvalidImage {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Copy into an `image` crate buffer of the same layout.
    pub(crate) fn to_dynamic(&self) -> Option<image::DynamicImage> {
        let pixels = self.pixels.clone();
        match self.layout {
            PixelLayout::Rgb8 => image::RgbImage::from_raw(self.width, self.height, pixels)
                .map(image::DynamicImage::ImageRgb8),
            PixelLayout::Rgba8 => image::RgbaImage::from_raw(self.width, self.height, pixels)
                .map(image::DynamicImage::ImageRgba8),
        }
    }

    /// Drop the alpha channel, if any.
    pub fn to_rgb(&self) -> PixelImage {
        match self.layout {
            PixelLayout::Rgb8 => self.clone(),
            PixelLayout::Rgba8 => {
                let pixels = self
                    .pixels
                    .chunks_exact(4)
                    .flat_map(|px| [px[0], px[1], px[2]])
                    .collect();
                PixelImage {
                    width: self.width,
                    height: self.height,
                    layout: PixelLayout::Rgb8,
                    pixels,
                }
            }
        }
    }
}

/// Byte length of a `width` x `height` buffer, or `None` if it overflows
/// `usize`. The row stride is checked too, so it fits even for zero rows.
pub(crate) fn buffer_len(width: u32, height: u32, layout: PixelLayout) -> Option<usize> {
    usize::try_from(width)
        .ok()?
        .checked_mul(layout.channels())?
        .checked_mul(usize::try_from(height).ok()?)
}

//! Error type shared by the core image operations.

use thiserror::Error;

use crate::Rectangle;

/// Precondition failures of the core operations.
///
/// The core never clamps or repairs its inputs: every violated precondition
/// surfaces as one of these variants so the caller can decide whether to skip
/// the record, substitute a default, or abort.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImageError {
    /// Image has a zero width or height.
    #[error("Invalid image: dimensions {width}x{height} must be non-zero")]
    InvalidImage { width: u32, height: u32 },

    /// Rectangle does not lie within the image it addresses.
    #[error(
        "Invalid region: ({}, {}, {}x{}) is outside the {width}x{height} image",
        .rect.x, .rect.y, .rect.width, .rect.height
    )]
    InvalidRegion {
        rect: Rectangle,
        width: u32,
        height: u32,
    },

    /// Bounding box for a scale-down has a zero side.
    #[error("Invalid bounds: max width ({max_width}) and max height ({max_height}) must be non-zero")]
    InvalidBounds { max_width: u32, max_height: u32 },

    /// Aspect ratio is zero, negative, NaN or infinite.
    #[error("Invalid aspect ratio: {0}")]
    InvalidAspectRatio(f64),

    /// Pixel buffer length does not match width * height * channels.
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    BufferMismatch { expected: usize, actual: usize },

    /// Dimensions whose pixel buffer cannot be addressed or stored.
    #[error("Image too large: {width}x{height}")]
    TooLarge { width: u64, height: u64 },

    /// The resampler rejected the buffer.
    #[error("Resampling failed: {0}")]
    ResampleFailed(String),
}

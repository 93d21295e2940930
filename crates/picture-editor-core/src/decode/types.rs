//! Decode error and EXIF orientation types.

use thiserror::Error;

/// Reasons an uploaded picture could not be turned into pixels.
///
/// Kept separate from [`crate::ImageError`] so callers can tell a bad upload
/// apart from a bad crop or bad parameters.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Empty input, or a format that is not recognized or not enabled.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The format was recognized but the data is damaged or truncated.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),
}

/// The EXIF `Orientation` tag: how the stored pixels must be flipped or
/// rotated to appear upright. Discriminants are the tag values 1-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Orientation {
    #[default]
    Normal = 1,
    FlipHorizontal = 2,
    Rotate180 = 3,
    FlipVertical = 4,
    /// Mirrored across the top-left / bottom-right diagonal.
    Transpose = 5,
    Rotate90CW = 6,
    /// Mirrored across the top-right / bottom-left diagonal.
    Transverse = 7,
    Rotate270CW = 8,
}

impl From<u32> for Orientation {
    /// Unknown tag values read as `Normal`.
    fn from(value: u32) -> Self {
        match value {
            2 => Self::FlipHorizontal,
            3 => Self::Rotate180,
            4 => Self::FlipVertical,
            5 => Self::Transpose,
            6 => Self::Rotate90CW,
            7 => Self::Transverse,
            8 => Self::Rotate270CW,
            _ => Self::Normal,
        }
    }
}

//! Image encoding for storage.
//!
//! Results are always re-encoded as JPEG before they are written back to
//! the host's row storage.
//!
//! # Examples
//!
//! ```ignore
//! use picture_editor_core::{encode::encode_jpeg, PixelImage};
//!
//! let image = PixelImage::from_rgb(100, 100, vec![128u8; 100 * 100 * 3])?;
//! let jpeg_bytes = encode_jpeg(&image, 90)?;
//! println!("Encoded {} bytes", jpeg_bytes.len());
//! ```

mod jpeg;

pub use jpeg::{encode_jpeg, EncodeError, DEFAULT_JPEG_QUALITY, MAX_JPEG_DIMENSION};

//! Image decoding for uploaded pictures.
//!
//! Uploaded pictures arrive as opaque byte buffers. This module turns them
//! into a [`PixelImage`](crate::PixelImage), correcting the EXIF orientation
//! so the crop coordinates a user picks line up with what they see.
//!
//! Decode failures are reported as [`DecodeError`], distinct from the core's
//! [`ImageError`](crate::ImageError).
//!
//! # Examples
//!
//! ```ignore
//! use picture_editor_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width(), image.height());
//! ```

mod reader;
mod types;

pub use reader::{decode_image, get_orientation};
pub use types::{DecodeError, Orientation};

//! Image decoding WASM bindings.
//!
//! This module exposes the picture-editor-core decoder to JavaScript.
//!
//! # Functions
//!
//! - [`decode_image`] - Decode a JPEG, PNG, GIF, BMP, TIFF or WebP image from bytes
//! - [`get_orientation`] - Read the EXIF orientation tag
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@picture-editor/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! console.log(`Decoded ${image.width}x${image.height}, ${image.channels} channels`);
//! ```

use crate::types::{js_error, JsPixelImage};
use picture_editor_core::decode;
use wasm_bindgen::prelude::*;

/// Decode an image from bytes.
///
/// EXIF orientation is applied so the pixels match what the user sees.
/// Images with transparency decode to 4 channels, everything else to 3.
///
/// # Errors
///
/// Returns an error if:
/// - The bytes are empty or not a supported format
/// - The image is corrupted or truncated
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsPixelImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsPixelImage::from_core)
        .map_err(js_error)
}

/// Read the EXIF orientation (1-8) of an encoded image.
///
/// Returns 1 (normal) when there is no EXIF data.
#[wasm_bindgen]
pub fn get_orientation(bytes: &[u8]) -> u8 {
    decode::get_orientation(bytes) as u8
}

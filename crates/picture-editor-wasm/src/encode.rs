//! Image encoding WASM bindings.
//!
//! This module exposes the picture-editor-core JPEG encoder to JavaScript so
//! a processed image can be stored or downloaded.
//!
//! # Example
//!
//! ```typescript
//! import { encode_jpeg } from '@picture-editor/wasm';
//!
//! const jpegBytes = encode_jpeg(image, 90);
//! await writable.write(new Blob([jpegBytes], { type: 'image/jpeg' }));
//! ```

use crate::types::{js_error, JsPixelImage};
use picture_editor_core::encode;
use wasm_bindgen::prelude::*;

/// Encode an image to JPEG bytes.
///
/// # Arguments
///
/// * `image` - The image to encode; an alpha channel is discarded
/// * `quality` - JPEG quality (1-100, where 100 is highest quality, recommended: 90)
///
/// # Returns
///
/// A `Uint8Array` containing the JPEG-encoded bytes, or an error if encoding fails.
///
/// # Errors
///
/// Returns an error if:
/// - Width or height is zero
/// - Encoding fails internally
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsPixelImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(image.as_core(), quality).map_err(js_error)
}

/// The quality used by the picture actions when none is configured.
#[wasm_bindgen]
pub fn default_jpeg_quality() -> u8 {
    encode::DEFAULT_JPEG_QUALITY
}


/// WASM-specific tests that require JsValue.
///
/// These tests exercise error paths that construct a `JsValue`, which only
/// works on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_encode_jpeg_invalid_dimensions() {
        let img = JsPixelImage::new(0, 100, 3, vec![]).unwrap();
        let result = encode_jpeg(&img, 90);
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_encode_jpeg_quality_range() {
        let img = JsPixelImage::new(50, 50, 3, vec![128u8; 50 * 50 * 3]).unwrap();

        let low = encode_jpeg(&img, 20).unwrap();
        let high = encode_jpeg(&img, 95).unwrap();

        assert_eq!(&low[0..2], &[0xFF, 0xD8]);
        assert_eq!(&high[0..2], &[0xFF, 0xD8]);
    }
}

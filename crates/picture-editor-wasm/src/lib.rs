//! Picture Editor WASM - WebAssembly bindings for the picture editor
//!
//! This crate exposes the picture-editor-core functionality to a
//! browser-hosted editing form.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for images and crop windows
//! - `adjustments` - Brightness, contrast and saturation
//! - `decode` - Image decoding with EXIF orientation
//! - `encode` - JPEG encoding
//! - `transform` - Scale-down, crop planning and the transform pipeline
//! - `actions` - Upload initialization and stored-picture transforms
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, plan_crop_window } from '@picture-editor/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const window = plan_crop_window(image.width, image.height, 4 / 3);
//! ```

use wasm_bindgen::prelude::*;

mod actions;
mod adjustments;
mod decode;
mod encode;
mod transform;
mod types;

// Re-export public types
pub use actions::{init_picture, scale_transform_picture, transform_picture, JsPictureResult};
pub use adjustments::{apply_adjustment, ColorAdjustment};
pub use decode::{decode_image, get_orientation};
pub use encode::{default_jpeg_quality, encode_jpeg};
pub use transform::{plan_crop_window, scale_down, transform};
pub use types::{JsCropWindow, JsPixelImage};

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

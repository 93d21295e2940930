//! WASM bindings for scaling, crop planning and the transform pipeline.

use crate::adjustments::ColorAdjustment;
use crate::types::{filter_from_u8, js_error, JsCropWindow, JsPixelImage};
use picture_editor_core::{scale, transform as pipeline, Rectangle};
use wasm_bindgen::prelude::*;

/// Shrink an image to fit within `max_width` x `max_height`.
///
/// The image is never enlarged; an image that already fits comes back as an
/// unchanged copy.
///
/// # Arguments
///
/// * `filter` - 0 = Bilinear, 1 = CatmullRom, 2 = Lanczos3
///
/// # Example (TypeScript)
///
/// ```typescript
/// const stored = scale_down(image, 1200, 800, 0);
/// ```
#[wasm_bindgen]
pub fn scale_down(
    image: &JsPixelImage,
    max_width: u32,
    max_height: u32,
    filter: u8,
) -> Result<JsPixelImage, JsValue> {
    scale::scale_down(image.as_core(), max_width, max_height, filter_from_u8(filter))
        .map(|scaled| JsPixelImage::from_core(scaled.into_owned()))
        .map_err(js_error)
}

/// Compute the largest centered window of `aspect_ratio` (width / height)
/// inside a `width` x `height` image.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const window = plan_crop_window(image.width, image.height, 16 / 9);
/// ```
#[wasm_bindgen]
pub fn plan_crop_window(width: u32, height: u32, aspect_ratio: f64) -> Result<JsCropWindow, JsValue> {
    pipeline::plan_crop_window(width, height, aspect_ratio)
        .map(JsCropWindow::from)
        .map_err(js_error)
}

/// Crop, resample and colour-adjust an image in one pass.
///
/// # Arguments
///
/// * `source` - Region to take from the image; an empty window means the whole image
/// * `destination_width`, `destination_height` - Output size; 0 keeps the region's size
/// * `filter` - 0 = Bilinear, 1 = CatmullRom, 2 = Lanczos3
///
/// # Example (TypeScript)
///
/// ```typescript
/// const window = new JsCropWindow(100, 50, 400, 300);
/// const adj = ColorAdjustment.from_percent(10, 110, 100);
/// const thumb = transform(image, adj, window, 200, 150, 2);
/// ```
#[wasm_bindgen]
pub fn transform(
    image: &JsPixelImage,
    adjustment: &ColorAdjustment,
    source: &JsCropWindow,
    destination_width: u32,
    destination_height: u32,
    filter: u8,
) -> Result<JsPixelImage, JsValue> {
    pipeline::transform(
        image.as_core(),
        adjustment.inner(),
        Rectangle::from(*source),
        Rectangle::new(0, 0, destination_width, destination_height),
        filter_from_u8(filter),
    )
    .map(JsPixelImage::from_core)
    .map_err(js_error)
}

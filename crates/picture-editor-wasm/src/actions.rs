//! Picture action WASM bindings.
//!
//! A browser form has no data row, so each binding seeds an in-memory row
//! with the uploaded bytes, runs the core action against it and hands the
//! written cells back as a [`JsPictureResult`].
//!
//! Options are plain objects with camelCase keys, read through
//! `serde-wasm-bindgen`.
//!
//! # Example
//!
//! ```typescript
//! const init = init_picture(uploadBytes, { aspectRatio: 4 / 3, maxWidth: 1600 });
//! const stored = init.image ?? uploadBytes;
//! const crop = init.crop;
//!
//! const thumb = scale_transform_picture(stored, {
//!   x: crop.x, y: crop.y, width: crop.width, height: crop.height,
//!   aspectRatio: 4 / 3, storeWidth: 320, brightness: 10,
//! });
//! ```

use crate::types::{js_error, JsCropWindow};
use picture_editor_core::actions::{
    self, lenient, ActionError, AdjustmentPercent, InitOutcome, InitPictureConfig, MemoryRow,
    ScaleTransformConfig, TransformConfig, TransformOutcome,
};
use picture_editor_core::encode::DEFAULT_JPEG_QUALITY;
use picture_editor_core::{FilterType, Rectangle};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

const IMAGE: &str = "image";
const OUTPUT: &str = "output";
const CROP_X: &str = "x";
const CROP_Y: &str = "y";
const CROP_WIDTH: &str = "width";
const CROP_HEIGHT: &str = "height";

fn default_quality() -> u8 {
    DEFAULT_JPEG_QUALITY
}

/// Options for [`init_picture`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InitOptions {
    aspect_ratio: f64,
    max_width: u32,
    #[serde(default = "default_quality")]
    jpeg_quality: u8,
    #[serde(default)]
    filter: FilterType,
}

/// Options for [`transform_picture`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TransformOptions {
    #[serde(flatten)]
    adjustment: AdjustmentPercent,
    #[serde(default = "default_quality")]
    jpeg_quality: u8,
    #[serde(default)]
    filter: FilterType,
}

/// Options for [`scale_transform_picture`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScaleTransformOptions {
    #[serde(flatten)]
    transform: TransformOptions,
    #[serde(default, deserialize_with = "lenient::offset")]
    x: i32,
    #[serde(default, deserialize_with = "lenient::offset")]
    y: i32,
    #[serde(default, deserialize_with = "lenient::extent")]
    width: u32,
    #[serde(default, deserialize_with = "lenient::extent")]
    height: u32,
    aspect_ratio: f64,
    #[serde(default, deserialize_with = "lenient::extent")]
    store_width: u32,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            adjustment: AdjustmentPercent::default(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            filter: FilterType::default(),
        }
    }
}

impl TransformOptions {
    fn to_config(&self) -> TransformConfig {
        TransformConfig {
            in_image: IMAGE.to_string(),
            out_image: OUTPUT.to_string(),
            adjustment: self.adjustment,
            jpeg_quality: self.jpeg_quality,
            filter: self.filter,
        }
    }
}

/// Cells written by a picture action.
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct JsPictureResult {
    image: Option<Vec<u8>>,
    width: u32,
    height: u32,
    crop: Option<Rectangle>,
}

#[wasm_bindgen]
impl JsPictureResult {
    /// JPEG bytes written by the action, or undefined when nothing was
    /// written (the upload was kept or the source was unreadable).
    #[wasm_bindgen(getter)]
    pub fn image(&self) -> Option<Vec<u8>> {
        self.image.clone()
    }

    /// Width of the stored picture, 0 when nothing was processed
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the stored picture, 0 when nothing was processed
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Crop window written by `init_picture`
    #[wasm_bindgen(getter)]
    pub fn crop(&self) -> Option<JsCropWindow> {
        self.crop.map(JsCropWindow::from)
    }
}

/// Shrink an upload to the configured bounds and plan its initial crop.
///
/// Options: `aspectRatio`, `maxWidth`, optional `jpegQuality` and `filter`.
/// Empty bytes produce an empty result.
#[wasm_bindgen]
pub fn init_picture(bytes: Vec<u8>, options: JsValue) -> Result<JsPictureResult, JsValue> {
    let options: InitOptions = serde_wasm_bindgen::from_value(options).map_err(js_error)?;
    run_init(bytes, &options).map_err(js_error)
}

/// Colour-adjust a whole picture.
///
/// Options: optional `brightness` (0), `contrast` (100), `saturation` (100)
/// in percent, `jpegQuality` and `filter`. Undecodable bytes produce a
/// result without an image.
#[wasm_bindgen]
pub fn transform_picture(bytes: Vec<u8>, options: JsValue) -> Result<JsPictureResult, JsValue> {
    let options: TransformOptions = if options.is_undefined() || options.is_null() {
        TransformOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options).map_err(js_error)?
    };
    run_transform(bytes, &options).map_err(js_error)
}

/// Crop, colour-adjust and rescale a picture to `storeWidth`.
///
/// Options: the transform options plus `x`, `y`, `width`, `height`,
/// `aspectRatio` and `storeWidth`.
#[wasm_bindgen]
pub fn scale_transform_picture(bytes: Vec<u8>, options: JsValue) -> Result<JsPictureResult, JsValue> {
    let options: ScaleTransformOptions = serde_wasm_bindgen::from_value(options).map_err(js_error)?;
    run_scale_transform(bytes, &options).map_err(js_error)
}

pub(crate) fn run_init(bytes: Vec<u8>, options: &InitOptions) -> Result<JsPictureResult, ActionError> {
    let config = InitPictureConfig {
        image_column: IMAGE.to_string(),
        x_column: CROP_X.to_string(),
        y_column: CROP_Y.to_string(),
        width_column: CROP_WIDTH.to_string(),
        height_column: CROP_HEIGHT.to_string(),
        aspect_ratio: options.aspect_ratio,
        max_width: options.max_width,
        jpeg_quality: options.jpeg_quality,
        filter: options.filter,
    };
    let mut row = MemoryRow::new().with_bytes(IMAGE, bytes);

    match actions::init_picture(&mut row, &config)? {
        InitOutcome::Skipped => Ok(JsPictureResult::default()),
        InitOutcome::Initialized {
            width,
            height,
            rescaled,
            crop,
        } => Ok(JsPictureResult {
            image: if rescaled { row.take_bytes(IMAGE) } else { None },
            width,
            height,
            crop: Some(crop),
        }),
    }
}

pub(crate) fn run_transform(
    bytes: Vec<u8>,
    options: &TransformOptions,
) -> Result<JsPictureResult, ActionError> {
    let mut row = MemoryRow::new().with_bytes(IMAGE, bytes);
    let outcome = actions::transform_picture(&mut row, &options.to_config())?;
    Ok(collect_output(&mut row, outcome))
}

pub(crate) fn run_scale_transform(
    bytes: Vec<u8>,
    options: &ScaleTransformOptions,
) -> Result<JsPictureResult, ActionError> {
    let config = ScaleTransformConfig {
        transform: options.transform.to_config(),
        x: options.x,
        y: options.y,
        width: options.width,
        height: options.height,
        aspect_ratio: options.aspect_ratio,
        store_width: options.store_width,
    };
    let mut row = MemoryRow::new().with_bytes(IMAGE, bytes);
    let outcome = actions::scale_transform_picture(&mut row, &config)?;
    Ok(collect_output(&mut row, outcome))
}

fn collect_output(row: &mut MemoryRow, outcome: TransformOutcome) -> JsPictureResult {
    match outcome {
        TransformOutcome::Cleared => JsPictureResult::default(),
        TransformOutcome::Stored { width, height, .. } => JsPictureResult {
            image: row.take_bytes(OUTPUT),
            width,
            height,
            crop: None,
        },
    }
}

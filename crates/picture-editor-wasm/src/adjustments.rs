//! Colour adjustment WASM bindings.
//!
//! This module provides JavaScript bindings for the ColorAdjustment type,
//! allowing brightness, contrast and saturation to be set from TypeScript.

use crate::types::{js_error, JsPixelImage};
use picture_editor_core::{transform, FilterType, Rectangle};
use wasm_bindgen::prelude::*;

/// Colour adjustment wrapper for JavaScript
#[wasm_bindgen]
pub struct ColorAdjustment {
    inner: picture_editor_core::ColorAdjustment,
}

#[wasm_bindgen]
impl ColorAdjustment {
    /// Create an adjustment that leaves the picture unchanged
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: picture_editor_core::ColorAdjustment::default(),
        }
    }

    /// Create from whole percentages (brightness 0, contrast 100 and
    /// saturation 100 are neutral)
    pub fn from_percent(brightness: i32, contrast: i32, saturation: i32) -> Self {
        Self {
            inner: picture_editor_core::ColorAdjustment::from_percent(brightness, contrast, saturation),
        }
    }

    /// Get brightness offset (0 = unchanged)
    #[wasm_bindgen(getter)]
    pub fn brightness(&self) -> f32 {
        self.inner.brightness
    }

    /// Set brightness offset
    #[wasm_bindgen(setter)]
    pub fn set_brightness(&mut self, value: f32) {
        self.inner.brightness = value;
    }

    /// Get contrast factor (1 = unchanged)
    #[wasm_bindgen(getter)]
    pub fn contrast(&self) -> f32 {
        self.inner.contrast
    }

    /// Set contrast factor
    #[wasm_bindgen(setter)]
    pub fn set_contrast(&mut self, value: f32) {
        self.inner.contrast = value;
    }

    /// Get saturation factor (1 = unchanged)
    #[wasm_bindgen(getter)]
    pub fn saturation(&self) -> f32 {
        self.inner.saturation
    }

    /// Set saturation factor
    #[wasm_bindgen(setter)]
    pub fn set_saturation(&mut self, value: f32) {
        self.inner.saturation = value;
    }

    /// Check if the adjustment leaves every pixel unchanged
    pub fn is_identity(&self) -> bool {
        self.inner.is_identity()
    }

    /// Serialize to JSON for storage
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(js_error)
    }

    /// Deserialize from JSON
    pub fn from_json(value: JsValue) -> Result<ColorAdjustment, JsValue> {
        let inner: picture_editor_core::ColorAdjustment =
            serde_wasm_bindgen::from_value(value).map_err(js_error)?;
        Ok(Self { inner })
    }
}

impl Default for ColorAdjustment {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorAdjustment {
    pub(crate) fn inner(&self) -> &picture_editor_core::ColorAdjustment {
        &self.inner
    }
}

/// Apply a colour adjustment to a whole image.
///
/// Returns a new image; the source is left untouched. Alpha passes through.
///
/// # Example (TypeScript)
/// ```typescript
/// const adj = ColorAdjustment.from_percent(10, 120, 80);
/// const adjusted = apply_adjustment(sourceImage, adj);
/// ```
#[wasm_bindgen]
pub fn apply_adjustment(
    image: &JsPixelImage,
    adjustment: &ColorAdjustment,
) -> Result<JsPixelImage, JsValue> {
    transform(
        image.as_core(),
        adjustment.inner(),
        Rectangle::EMPTY,
        Rectangle::EMPTY,
        FilterType::default(),
    )
    .map(JsPixelImage::from_core)
    .map_err(js_error)
}

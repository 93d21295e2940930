//! WASM-compatible wrapper types.
//!
//! This module provides JavaScript-friendly types that wrap the core picture
//! editor types, handling the conversion between Rust and JavaScript data
//! representations.

use std::fmt::Display;

use picture_editor_core::{FilterType, PixelImage, PixelLayout, Rectangle};
use wasm_bindgen::prelude::*;

/// A decoded image wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`. Keep the image in WASM memory while
/// chaining operations and only extract pixels at the end.
///
/// The `free()` method can be called to explicitly release WASM memory, but this is
/// optional as wasm-bindgen's finalizer will handle cleanup automatically.
#[wasm_bindgen]
pub struct JsPixelImage {
    inner: PixelImage,
}

#[wasm_bindgen]
impl JsPixelImage {
    /// Create an image from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `channels` - 3 for RGB, 4 for RGBA
    /// * `pixels` - Pixel data, row-major order
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, channels: u8, pixels: Vec<u8>) -> Result<JsPixelImage, JsValue> {
        Self::try_new(width, height, channels, pixels).map_err(js_error)
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Bytes per pixel: 3 (RGB) or 4 (RGBA)
    #[wasm_bindgen(getter)]
    pub fn channels(&self) -> u8 {
        self.inner.channels() as u8
    }

    /// Get the number of bytes in the pixel buffer
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixels().len()
    }

    /// Returns pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels().to_vec()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsPixelImage {
    pub(crate) fn try_new(
        width: u32,
        height: u32,
        channels: u8,
        pixels: Vec<u8>,
    ) -> Result<Self, String> {
        let layout = PixelLayout::from_channels(channels)
            .ok_or_else(|| format!("Unsupported channel count: {}", channels))?;
        PixelImage::new(width, height, layout, pixels)
            .map(Self::from_core)
            .map_err(|e| e.to_string())
    }

    pub(crate) fn from_core(inner: PixelImage) -> Self {
        Self { inner }
    }

    pub(crate) fn as_core(&self) -> &PixelImage {
        &self.inner
    }
}

/// A crop window in pixel coordinates.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsCropWindow {
    inner: Rectangle,
}

#[wasm_bindgen]
impl JsCropWindow {
    /// Create a window. A zero width or height selects the whole image.
    #[wasm_bindgen(constructor)]
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> JsCropWindow {
        Self {
            inner: Rectangle::new(x, y, width, height),
        }
    }

    /// The empty window, meaning "whole image"
    pub fn empty() -> JsCropWindow {
        Self::from(Rectangle::EMPTY)
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> i32 {
        self.inner.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> i32 {
        self.inner.y
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl From<Rectangle> for JsCropWindow {
    fn from(inner: Rectangle) -> Self {
        Self { inner }
    }
}

impl From<JsCropWindow> for Rectangle {
    fn from(window: JsCropWindow) -> Self {
        window.inner
    }
}

/// Convert a u8 filter type value to the core FilterType enum.
///
/// Values:
/// - 0 = Bilinear (fast, the default)
/// - 1 = CatmullRom
/// - 2 = Lanczos3 (best quality, slowest)
///
/// Any other value defaults to Bilinear.
pub(crate) fn filter_from_u8(value: u8) -> FilterType {
    match value {
        1 => FilterType::CatmullRom,
        2 => FilterType::Lanczos3,
        _ => FilterType::Bilinear,
    }
}

/// Turn any error into the string `JsValue` thrown to JavaScript.
pub(crate) fn js_error(e: impl Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

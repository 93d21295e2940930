//! Picture Editor Core - constrained image adjustment
//!
//! This crate turns an uploaded picture into a stored picture of bounded
//! size and a fixed aspect ratio:
//!
//! - [`scale`] shrinks a picture into a bounding box, never enlarging it
//! - [`adjustments`] builds one colour matrix from brightness, contrast and
//!   saturation and applies it in a single pass
//! - [`transform`] plans the initial centered crop window and runs the
//!   crop → resample → colour pipeline
//! - [`decode`] and [`encode`] convert between stored bytes and pixels
//! - [`actions`] wire all of the above to a host data row
//!
//! Everything except [`actions`] is pure and synchronous, and every public
//! type is `Send + Sync`.

pub mod actions;
pub mod adjustments;
pub mod decode;
pub mod encode;
mod error;
pub mod luminance;
mod pixels;
pub mod scale;
pub mod transform;

use serde::{Deserialize, Serialize};

pub use adjustments::{apply_color_matrix, ColorMatrix};
pub use error::ImageError;
pub use pixels::{PixelImage, PixelLayout};
pub use scale::{plan_scale_down, scale_down};
pub use transform::{extract_region, plan_crop_window, resize, transform, FilterType};

/// Colour adjustment parameters.
///
/// `brightness` is an offset in normalized units (0 = unchanged, 1 = +255
/// levels). `contrast` and `saturation` are factors (1 = unchanged,
/// 0 = flat grey / fully desaturated).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorAdjustment {
    pub brightness: f32,
    pub contrast: f32,
    pub saturation: f32,
}

impl Default for ColorAdjustment {
    fn default() -> Self {
        Self {
            brightness: 0.0,
            contrast: 1.0,
            saturation: 1.0,
        }
    }
}

impl ColorAdjustment {
    pub fn new(brightness: f32, contrast: f32, saturation: f32) -> Self {
        Self {
            brightness,
            contrast,
            saturation,
        }
    }

    /// Build from whole percentages: brightness 0, contrast 100 and
    /// saturation 100 leave the picture unchanged.
    pub fn from_percent(brightness: i32, contrast: i32, saturation: i32) -> Self {
        Self::new(
            brightness as f32 / 100.0,
            contrast as f32 / 100.0,
            saturation as f32 / 100.0,
        )
    }

    /// Check if applying this adjustment leaves every pixel unchanged
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

/// An axis-aligned rectangle in pixel coordinates.
///
/// A rectangle with zero width or height is empty. Where an operation takes
/// an optional region, [`Rectangle::EMPTY`] means "the whole image".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rectangle {
    pub const EMPTY: Rectangle = Rectangle {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// True if the rectangle lies entirely inside a `width`x`height` image.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x as u64 + self.width as u64 <= width as u64
            && self.y as u64 + self.height as u64 <= height as u64
    }
}

//! Action parameters.
//!
//! Every field the host binds is explicit. Fields the host may omit carry a
//! serde default, so a partially filled JSON object still deserializes.
//! Percentages and crop numbers go through [`lenient`], so a float, a
//! numeric string or null is accepted and anything else falls back to the
//! field default.

use serde::{Deserialize, Serialize};

use super::lenient;
use crate::encode::DEFAULT_JPEG_QUALITY;
use crate::transform::FilterType;
use crate::ColorAdjustment;

fn default_quality() -> u8 {
    DEFAULT_JPEG_QUALITY
}

/// Colour adjustment in whole percent, as entered on a form.
///
/// `brightness` is an offset (0 = unchanged), `contrast` and `saturation`
/// are factors (100 = unchanged).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdjustmentPercent {
    #[serde(deserialize_with = "lenient::brightness")]
    pub brightness: i32,
    #[serde(deserialize_with = "lenient::contrast")]
    pub contrast: i32,
    #[serde(deserialize_with = "lenient::saturation")]
    pub saturation: i32,
}

impl Default for AdjustmentPercent {
    fn default() -> Self {
        Self {
            brightness: 0,
            contrast: 100,
            saturation: 100,
        }
    }
}

impl AdjustmentPercent {
    pub fn to_adjustment(self) -> ColorAdjustment {
        ColorAdjustment::from_percent(self.brightness, self.contrast, self.saturation)
    }
}

/// Parameters of [`init_picture`](super::init_picture).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitPictureConfig {
    /// Column holding the uploaded picture; overwritten when rescaled.
    pub image_column: String,
    pub x_column: String,
    pub y_column: String,
    pub width_column: String,
    pub height_column: String,
    /// Target crop aspect ratio (width / height).
    pub aspect_ratio: f64,
    /// Widest stored picture; the height bound follows from the aspect ratio.
    pub max_width: u32,
    #[serde(default = "default_quality")]
    pub jpeg_quality: u8,
    #[serde(default)]
    pub filter: FilterType,
}

/// Parameters of [`transform_picture`](super::transform_picture).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformConfig {
    /// Column holding the source picture.
    pub in_image: String,
    /// Column receiving the JPEG result.
    pub out_image: String,
    #[serde(flatten)]
    pub adjustment: AdjustmentPercent,
    #[serde(default = "default_quality")]
    pub jpeg_quality: u8,
    #[serde(default)]
    pub filter: FilterType,
}

/// Parameters of [`scale_transform_picture`](super::scale_transform_picture).
///
/// A zero `width` or `height` selects the whole source; a zero
/// `store_width` keeps the crop's own size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleTransformConfig {
    #[serde(flatten)]
    pub transform: TransformConfig,
    #[serde(default, deserialize_with = "lenient::offset")]
    pub x: i32,
    #[serde(default, deserialize_with = "lenient::offset")]
    pub y: i32,
    #[serde(default, deserialize_with = "lenient::extent")]
    pub width: u32,
    #[serde(default, deserialize_with = "lenient::extent")]
    pub height: u32,
    pub aspect_ratio: f64,
    #[serde(default, deserialize_with = "lenient::extent")]
    pub store_width: u32,
}

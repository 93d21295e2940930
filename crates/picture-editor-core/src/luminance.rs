//! Luminance weights used for the saturation blend.
//!
//! The gray point a pixel is desaturated toward is the ITU-R BT.709
//! weighted sum of its channels. The same weights are used wherever the
//! crate needs a perceptual gray, so the color matrix and any luminance
//! query agree.

/// ITU-R BT.709 coefficient for red channel in luminance calculation.
pub const LUMINANCE_R: f32 = 0.2126;

/// ITU-R BT.709 coefficient for green channel in luminance calculation.
pub const LUMINANCE_G: f32 = 0.7152;

/// ITU-R BT.709 coefficient for blue channel in luminance calculation.
pub const LUMINANCE_B: f32 = 0.0722;

/// The three weights in channel order.
pub const LUMINANCE_WEIGHTS: [f32; 3] = [LUMINANCE_R, LUMINANCE_G, LUMINANCE_B];

/// Calculate luminance from normalized RGB values (0.0 to 1.0).
#[inline]
pub fn calculate_luminance(r: f32, g: f32, b: f32) -> f32 {
    LUMINANCE_R * r + LUMINANCE_G * g + LUMINANCE_B * b
}

//! Brightness / contrast / saturation as a single color matrix.
//!
//! The three parameters of a [`ColorAdjustment`] are turned into one affine
//! transform on normalized (0.0 to 1.0) RGB triples, so each pixel is touched
//! exactly once.
//!
//! ## Composition Order
//! 1. Saturation: `out = gray + s * (in - gray)`, gray = BT.709 luminance
//! 2. Contrast: `out = (in - 0.5) * k + 0.5`
//! 3. Brightness: `out = in + b`
//!
//! The steps do not commute; [`ColorMatrix::from_adjustment`] composes them
//! in exactly this order. Results are clamped once, after the full transform.

use crate::luminance::LUMINANCE_WEIGHTS;
use crate::ColorAdjustment;

/// Mid-gray on the normalized scale; contrast pivots around it.
const MIDPOINT: f32 = 0.5;

/// An affine RGB transform: a 3x3 matrix plus a per-channel offset.
///
/// `out[i] = sum(matrix[i][j] * in[j]) + offset[i]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix {
    /// Row-major 3x3 linear part.
    pub matrix: [[f32; 3]; 3],
    /// Translation added after the linear part.
    pub offset: [f32; 3],
}

impl Default for ColorMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl ColorMatrix {
    /// The transform that leaves every color unchanged.
    pub const fn identity() -> Self {
        Self {
            matrix: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            offset: [0.0; 3],
        }
    }

    /// Blend each channel toward the luminance-weighted gray.
    ///
    /// `s = 1` is the identity, `s = 0` is grayscale, `s > 1` oversaturates.
    pub fn saturation(s: f32) -> Self {
        let mut matrix = [[0.0; 3]; 3];
        for (i, row) in matrix.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (1.0 - s) * LUMINANCE_WEIGHTS[j];
                if i == j {
                    *cell += s;
                }
            }
        }
        Self {
            matrix,
            offset: [0.0; 3],
        }
    }

    /// Scale channel values around mid-gray.
    pub fn contrast(k: f32) -> Self {
        let shift = MIDPOINT * (1.0 - k);
        Self {
            matrix: [[k, 0.0, 0.0], [0.0, k, 0.0], [0.0, 0.0, k]],
            offset: [shift; 3],
        }
    }

    /// Add a flat offset to every channel.
    pub fn brightness(b: f32) -> Self {
        Self {
            offset: [b; 3],
            ..Self::identity()
        }
    }

    /// Compose: apply `self` first, then `next`.
    pub fn then(&self, next: &ColorMatrix) -> ColorMatrix {
        let mut matrix = [[0.0; 3]; 3];
        let mut offset = next.offset;

        for i in 0..3 {
            for j in 0..3 {
                matrix[i][j] = (0..3).map(|k| next.matrix[i][k] * self.matrix[k][j]).sum();
            }
            offset[i] += (0..3)
                .map(|k| next.matrix[i][k] * self.offset[k])
                .sum::<f32>();
        }

        ColorMatrix { matrix, offset }
    }

    /// Build the full saturation -> contrast -> brightness transform.
    pub fn from_adjustment(adjustment: &ColorAdjustment) -> Self {
        Self::saturation(adjustment.saturation)
            .then(&Self::contrast(adjustment.contrast))
            .then(&Self::brightness(adjustment.brightness))
    }

    /// True if applying this matrix cannot change any pixel.
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Transform one normalized RGB triple. No clamping.
    #[inline]
    pub fn apply_rgb(&self, rgb: [f32; 3]) -> [f32; 3] {
        let m = &self.matrix;
        [
            m[0][0] * rgb[0] + m[0][1] * rgb[1] + m[0][2] * rgb[2] + self.offset[0],
            m[1][0] * rgb[0] + m[1][1] * rgb[1] + m[1][2] * rgb[2] + self.offset[1],
            m[2][0] * rgb[0] + m[2][1] * rgb[1] + m[2][2] * rgb[2] + self.offset[2],
        ]
    }
}

/// Apply a color matrix to 8-bit pixel data in place.
///
/// # Arguments
/// * `pixels` - Interleaved pixel data, row-major
/// * `channels` - Bytes per pixel (3 for RGB, 4 for RGBA; alpha is left alone)
/// * `matrix` - The transform to apply
///
/// Trailing bytes that do not form a complete pixel are left untouched.
///
/// # Panics
///
/// In debug builds, if `channels` is less than 3. Release builds leave such
/// a buffer unchanged, since it has no RGB triple to transform.
pub fn apply_color_matrix(pixels: &mut [u8], channels: usize, matrix: &ColorMatrix) {
    debug_assert!(channels >= 3, "apply_color_matrix needs RGB pixels, got {channels} channel(s)");
    // Early exit if no adjustments
    if matrix.is_identity() || channels < 3 {
        return;
    }

    for chunk in pixels.chunks_exact_mut(channels) {
        let rgb = [
            chunk[0] as f32 / 255.0,
            chunk[1] as f32 / 255.0,
            chunk[2] as f32 / 255.0,
        ];

        let [r, g, b] = matrix.apply_rgb(rgb);

        chunk[0] = to_u8(r);
        chunk[1] = to_u8(g);
        chunk[2] = to_u8(b);
    }
}

#[inline]
fn to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}


// ============================================================================
// Property-Based Tests
// ============================================================================

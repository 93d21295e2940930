//! Colour adjustment, crop and rescale of a stored picture.

use super::{
    read_picture, store_picture, ActionError, RowStore, ScaleTransformConfig, TransformConfig,
};
use crate::encode::MAX_JPEG_DIMENSION;
use crate::error::ImageError;
use crate::pixels::PixelImage;
use crate::transform::transform;
use crate::Rectangle;

/// What a transform action did to the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformOutcome {
    /// The source was missing or unreadable; the output cell was set to null.
    Cleared,
    /// A JPEG result was stored.
    Stored { width: u32, height: u32, bytes: usize },
}

/// Apply the configured colour adjustment to the whole source picture and
/// store the JPEG result in the output column.
///
/// A missing, empty or undecodable source is not an error: a warning is
/// logged and the output cell is cleared.
pub fn transform_picture<R: RowStore>(
    row: &mut R,
    config: &TransformConfig,
) -> Result<TransformOutcome, ActionError> {
    run(row, config, Rectangle::EMPTY, Rectangle::EMPTY)
}

/// Crop the configured window out of the source picture, adjust its colour
/// and scale it to `store_width` by `store_width / aspect_ratio` (truncated
/// toward zero, at least 1).
///
/// A zero crop width or height selects the whole source; a zero
/// `store_width` keeps the crop's own size. Missing sources are handled as
/// in [`transform_picture`].
///
/// # Errors
///
/// * [`ActionError::Image`] if the aspect ratio is not finite and positive,
///   the stored size exceeds [`MAX_JPEG_DIMENSION`] on either side, or the
///   crop window lies outside the source
/// * [`ActionError::Encode`] if the result cannot be encoded
pub fn scale_transform_picture<R: RowStore>(
    row: &mut R,
    config: &ScaleTransformConfig,
) -> Result<TransformOutcome, ActionError> {
    let aspect_ratio = config.aspect_ratio;
    if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
        return Err(ImageError::InvalidAspectRatio(aspect_ratio).into());
    }

    let source_rect = Rectangle::new(config.x, config.y, config.width, config.height);
    let destination_rect = if config.store_width == 0 {
        Rectangle::EMPTY
    } else {
        let height = (f64::from(config.store_width) / aspect_ratio).trunc().max(1.0);
        if config.store_width > MAX_JPEG_DIMENSION || height > f64::from(MAX_JPEG_DIMENSION) {
            return Err(ImageError::TooLarge {
                width: config.store_width.into(),
                height: height as u64,
            }
            .into());
        }
        Rectangle::new(0, 0, config.store_width, height as u32)
    };

    run(row, &config.transform, source_rect, destination_rect)
}

fn run<R: RowStore>(
    row: &mut R,
    config: &TransformConfig,
    source_rect: Rectangle,
    destination_rect: Rectangle,
) -> Result<TransformOutcome, ActionError> {
    let Some(source) = load_source(row, &config.in_image) else {
        row.set_bytes(&config.out_image, None);
        return Ok(TransformOutcome::Cleared);
    };

    let adjustment = config.adjustment.to_adjustment();
    let result = transform(
        &source,
        &adjustment,
        source_rect,
        destination_rect,
        config.filter,
    )?;
    drop(source);

    let bytes = store_picture(row, &config.out_image, &result, config.jpeg_quality)?;
    tracing::info!(
        column = %config.out_image,
        width = result.width(),
        height = result.height(),
        bytes,
        "stored transformed picture"
    );

    Ok(TransformOutcome::Stored {
        width: result.width(),
        height: result.height(),
        bytes,
    })
}

fn load_source<R: RowStore>(row: &R, column: &str) -> Option<PixelImage> {
    match read_picture(row, column) {
        None => {
            tracing::warn!(column, "no source picture to transform");
            None
        }
        Some(Err(e)) => {
            tracing::warn!(column, error = %e, "could not read source picture");
            None
        }
        Some(Ok(image)) => Some(image),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::test_support::jpeg_picture;
    use crate::actions::{AdjustmentPercent, CellValue, MemoryRow};
    use crate::decode::decode_image;
    use crate::transform::FilterType;

    fn transform_config(adjustment: AdjustmentPercent) -> TransformConfig {
        TransformConfig {
            in_image: "Photo".into(),
            out_image: "Result".into(),
            adjustment,
            jpeg_quality: 90,
            filter: FilterType::Bilinear,
        }
    }

    fn scale_config(crop: Rectangle, aspect_ratio: f64, store_width: u32) -> ScaleTransformConfig {
        ScaleTransformConfig {
            transform: transform_config(AdjustmentPercent::default()),
            x: crop.x,
            y: crop.y,
            width: crop.width,
            height: crop.height,
            aspect_ratio,
            store_width,
        }
    }

    fn stored_result(row: &MemoryRow) -> PixelImage {
        decode_image(row.get_bytes("Result").unwrap()).unwrap()
    }

    #[test]
    fn test_missing_source_clears_output() {
        let mut row = MemoryRow::new().with_bytes("Result", vec![1, 2, 3]);

        let outcome = transform_picture(&mut row, &transform_config(Default::default())).unwrap();

        assert_eq!(outcome, TransformOutcome::Cleared);
        assert_eq!(row.cell("Result"), Some(&CellValue::Null));
    }

    #[test]
    fn test_undecodable_source_clears_output() {
        let mut row = MemoryRow::new()
            .with_bytes("Photo", vec![0xDE, 0xAD, 0xBE, 0xEF])
            .with_bytes("Result", vec![1]);

        let outcome = transform_picture(&mut row, &transform_config(Default::default())).unwrap();

        assert_eq!(outcome, TransformOutcome::Cleared);
        assert_eq!(row.get_bytes("Result"), None);
    }

    #[test]
    fn test_transform_keeps_full_frame() {
        let mut row = MemoryRow::new().with_bytes("Photo", jpeg_picture(40, 30));

        let outcome = transform_picture(&mut row, &transform_config(Default::default())).unwrap();

        assert!(matches!(outcome, TransformOutcome::Stored { width: 40, height: 30, .. }));
        assert_eq!(stored_result(&row).dimensions(), (40, 30));
        assert!(row.get_bytes("Photo").is_some());
    }

    #[test]
    fn test_transform_desaturates() {
        let mut row = MemoryRow::new().with_bytes("Photo", jpeg_picture(32, 16));
        let adjustment = AdjustmentPercent {
            saturation: 0,
            ..Default::default()
        };

        transform_picture(&mut row, &transform_config(adjustment)).unwrap();

        let result = stored_result(&row);
        for px in result.pixels().chunks_exact(3) {
            let spread = px.iter().max().unwrap() - px.iter().min().unwrap();
            assert!(spread <= 8, "pixel {:?} is not gray", px);
        }
    }

    #[test]
    fn test_transform_brightens() {
        let mut row = MemoryRow::new().with_bytes("Photo", jpeg_picture(16, 16));
        let before = decode_image(row.get_bytes("Photo").unwrap()).unwrap();
        let adjustment = AdjustmentPercent {
            brightness: 20,
            ..Default::default()
        };

        transform_picture(&mut row, &transform_config(adjustment)).unwrap();

        let mean = |img: &PixelImage| {
            img.pixels().iter().map(|&v| v as f64).sum::<f64>() / img.pixels().len() as f64
        };
        assert!(mean(&stored_result(&row)) > mean(&before) + 20.0);
    }

    #[test]
    fn test_scale_transform_crops_and_scales() {
        let mut row = MemoryRow::new().with_bytes("Photo", jpeg_picture(400, 300));

        let outcome =
            scale_transform_picture(&mut row, &scale_config(Rectangle::new(100, 50, 200, 100), 2.0, 100))
                .unwrap();

        assert!(matches!(outcome, TransformOutcome::Stored { width: 100, height: 50, .. }));
        assert_eq!(stored_result(&row).dimensions(), (100, 50));
    }

    #[test]
    fn test_scale_transform_height_is_truncated() {
        // 100 / 1.5 = 66.67 -> 66
        let mut row = MemoryRow::new().with_bytes("Photo", jpeg_picture(300, 200));

        scale_transform_picture(&mut row, &scale_config(Rectangle::new(0, 0, 300, 200), 1.5, 100))
            .unwrap();

        assert_eq!(stored_result(&row).dimensions(), (100, 66));
    }

    #[test]
    fn test_scale_transform_zero_store_width_keeps_crop_size() {
        let mut row = MemoryRow::new().with_bytes("Photo", jpeg_picture(400, 300));

        scale_transform_picture(&mut row, &scale_config(Rectangle::new(10, 20, 120, 80), 1.5, 0))
            .unwrap();

        assert_eq!(stored_result(&row).dimensions(), (120, 80));
    }

    #[test]
    fn test_scale_transform_empty_crop_uses_whole_source() {
        let mut row = MemoryRow::new().with_bytes("Photo", jpeg_picture(80, 40));

        scale_transform_picture(&mut row, &scale_config(Rectangle::EMPTY, 2.0, 0)).unwrap();

        assert_eq!(stored_result(&row).dimensions(), (80, 40));
    }

    #[test]
    fn test_scale_transform_crop_outside_source() {
        let mut row = MemoryRow::new()
            .with_bytes("Photo", jpeg_picture(40, 40))
            .with_bytes("Result", vec![7]);

        let result =
            scale_transform_picture(&mut row, &scale_config(Rectangle::new(10, 10, 50, 50), 1.0, 20));

        assert!(matches!(
            result,
            Err(ActionError::Image(ImageError::InvalidRegion { .. }))
        ));
        assert_eq!(row.get_bytes("Result"), Some(&[7u8][..]));
    }

    #[test]
    fn test_scale_transform_invalid_aspect_ratio() {
        let mut row = MemoryRow::new().with_bytes("Photo", jpeg_picture(40, 40));
        let result = scale_transform_picture(&mut row, &scale_config(Rectangle::EMPTY, 0.0, 20));
        assert!(matches!(
            result,
            Err(ActionError::Image(ImageError::InvalidAspectRatio(_)))
        ));
    }

    #[test]
    fn test_scale_transform_tiny_ratio_is_too_large() {
        let mut row = MemoryRow::new()
            .with_bytes("Photo", jpeg_picture(40, 40))
            .with_bytes("Result", vec![7]);

        // 2^-30 keeps the quotient exact: 100 * 2^30 rows
        let ratio = 1.0 / f64::from(1u32 << 30);
        let result = scale_transform_picture(&mut row, &scale_config(Rectangle::EMPTY, ratio, 100));

        assert!(matches!(
            result,
            Err(ActionError::Image(ImageError::TooLarge {
                width: 100,
                height: 107_374_182_400
            }))
        ));
        assert_eq!(row.get_bytes("Result"), Some(&[7u8][..]));
    }

    #[test]
    fn test_scale_transform_store_size_limit() {
        let mut row = MemoryRow::new().with_bytes("Photo", jpeg_picture(40, 40));

        // 65535 / 0.5 = 131070 rows
        let result =
            scale_transform_picture(&mut row, &scale_config(Rectangle::EMPTY, 0.5, MAX_JPEG_DIMENSION));
        assert!(matches!(result, Err(ActionError::Image(ImageError::TooLarge { .. }))));

        let result = scale_transform_picture(
            &mut row,
            &scale_config(Rectangle::EMPTY, 1_000_000.0, MAX_JPEG_DIMENSION + 1),
        );
        assert!(matches!(result, Err(ActionError::Image(ImageError::TooLarge { .. }))));
    }

    #[test]
    fn test_scale_transform_missing_source_clears_output() {
        let mut row = MemoryRow::new().with_bytes("Result", vec![1]);

        let outcome =
            scale_transform_picture(&mut row, &scale_config(Rectangle::EMPTY, 1.0, 10)).unwrap();

        assert_eq!(outcome, TransformOutcome::Cleared);
        assert_eq!(row.get_bytes("Result"), None);
    }
}

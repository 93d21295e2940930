//! Upload normalization and initial crop planning.

use std::borrow::Cow;

use super::{read_picture, store_picture, ActionError, InitPictureConfig, RowStore};
use crate::error::ImageError;
use crate::scale::scale_down;
use crate::transform::plan_crop_window;
use crate::Rectangle;

/// What [`init_picture`] did to the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// The image cell was null or empty; nothing was written.
    Skipped,
    /// The crop window was written.
    Initialized {
        /// Dimensions of the stored picture.
        width: u32,
        height: u32,
        /// Whether the picture was shrunk and re-encoded.
        rescaled: bool,
        crop: Rectangle,
    },
}

/// Normalize an uploaded picture and store its initial crop window.
///
/// The picture is shrunk to fit `max_width` by `max_width / aspect_ratio`
/// (the height bound truncated toward zero). When it had to shrink, the
/// result is re-encoded as JPEG and replaces the upload; otherwise the
/// stored bytes are left untouched. The largest centered window of the
/// target aspect ratio is then written to the X, Y, width and height columns.
///
/// # Errors
///
/// * [`ActionError::Decode`] if the upload cannot be decoded
/// * [`ActionError::Image`] if the aspect ratio is not finite and positive,
///   or the bounds collapse to zero
/// * [`ActionError::Encode`] if the shrunk picture cannot be encoded
pub fn init_picture<R: RowStore>(
    row: &mut R,
    config: &InitPictureConfig,
) -> Result<InitOutcome, ActionError> {
    let Some(decoded) = read_picture(row, &config.image_column) else {
        tracing::debug!(column = %config.image_column, "no picture to initialize");
        return Ok(InitOutcome::Skipped);
    };
    let source = decoded?;

    let aspect_ratio = config.aspect_ratio;
    if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
        return Err(ImageError::InvalidAspectRatio(aspect_ratio).into());
    }
    let max_height = (f64::from(config.max_width) / aspect_ratio) as u32;

    let scaled = scale_down(&source, config.max_width, max_height, config.filter)?;
    let rescaled = matches!(scaled, Cow::Owned(_));
    if rescaled {
        let len = store_picture(row, &config.image_column, &scaled, config.jpeg_quality)?;
        tracing::info!(
            from_width = source.width(),
            from_height = source.height(),
            to_width = scaled.width(),
            to_height = scaled.height(),
            bytes = len,
            "rescaled uploaded picture"
        );
    }

    let crop = plan_crop_window(scaled.width(), scaled.height(), aspect_ratio)?;
    row.set_int(&config.x_column, i64::from(crop.x));
    row.set_int(&config.y_column, i64::from(crop.y));
    row.set_int(&config.width_column, i64::from(crop.width));
    row.set_int(&config.height_column, i64::from(crop.height));
    tracing::debug!(?crop, "initial crop window");

    Ok(InitOutcome::Initialized {
        width: scaled.width(),
        height: scaled.height(),
        rescaled,
        crop,
    })
}

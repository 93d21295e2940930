//! Form actions that run the core against a host data row.
//!
//! An action reads an uploaded picture from a [`RowStore`], takes its numeric
//! parameters from an explicit configuration struct, runs the core, and
//! writes the JPEG result (and, for [`init_picture`], the initial crop
//! window) back into the row.
//!
//! Unlike the core modules, actions log: skipped rows and unreadable uploads
//! are reported with `tracing::warn!`, stored results with `tracing::info!`.
//! Installing a subscriber is left to the host.
//!
//! Every intermediate image is an owned local, so it is released on every
//! return path, including early `?` returns.

mod config;
mod init_picture;
pub mod lenient;
mod transform_picture;

use std::collections::HashMap;

use thiserror::Error;

use crate::decode::{decode_image, DecodeError};
use crate::encode::{encode_jpeg, EncodeError};
use crate::error::ImageError;
use crate::pixels::PixelImage;

pub use config::{AdjustmentPercent, InitPictureConfig, ScaleTransformConfig, TransformConfig};
pub use init_picture::{init_picture, InitOutcome};
pub use transform_picture::{scale_transform_picture, transform_picture, TransformOutcome};

/// Errors surfaced by the actions.
///
/// Each variant wraps the error of the stage that failed unchanged, so a
/// caller can distinguish a bad upload from a bad crop or an encoder fault.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The stored bytes could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A core precondition was violated.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// The result could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Access to the host's current data row.
///
/// Columns are addressed by name; a missing column and a null cell are both
/// reported as `None`.
pub trait RowStore {
    /// Read a binary cell.
    fn get_bytes(&self, column: &str) -> Option<&[u8]>;

    /// Write a binary cell; `None` stores null.
    fn set_bytes(&mut self, column: &str, value: Option<Vec<u8>>);

    /// Write an integer cell.
    fn set_int(&mut self, column: &str, value: i64);
}

/// A single cell of a [`MemoryRow`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Null,
    Bytes(Vec<u8>),
    Int(i64),
}

/// A `HashMap`-backed [`RowStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryRow {
    cells: HashMap<String, CellValue>,
}

impl MemoryRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper to seed a binary cell.
    pub fn with_bytes(mut self, column: &str, bytes: Vec<u8>) -> Self {
        self.cells.insert(column.to_string(), CellValue::Bytes(bytes));
        self
    }

    /// Look up a cell.
    pub fn cell(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Read an integer cell.
    pub fn get_int(&self, column: &str) -> Option<i64> {
        match self.cells.get(column) {
            Some(CellValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    /// Take a binary cell out of the row, leaving null behind.
    pub fn take_bytes(&mut self, column: &str) -> Option<Vec<u8>> {
        match self.cells.insert(column.to_string(), CellValue::Null) {
            Some(CellValue::Bytes(bytes)) => Some(bytes),
            _ => None,
        }
    }
}

impl RowStore for MemoryRow {
    fn get_bytes(&self, column: &str) -> Option<&[u8]> {
        match self.cells.get(column) {
            Some(CellValue::Bytes(bytes)) => Some(bytes),
            _ => None,
        }
    }

    fn set_bytes(&mut self, column: &str, value: Option<Vec<u8>>) {
        let cell = value.map_or(CellValue::Null, CellValue::Bytes);
        self.cells.insert(column.to_string(), cell);
    }

    fn set_int(&mut self, column: &str, value: i64) {
        self.cells.insert(column.to_string(), CellValue::Int(value));
    }
}

/// Decode the picture in `column`, treating a null or empty cell as absent.
fn read_picture<R: RowStore>(row: &R, column: &str) -> Option<Result<PixelImage, DecodeError>> {
    row.get_bytes(column)
        .filter(|bytes| !bytes.is_empty())
        .map(decode_image)
}

/// Encode `image` and store it in `column`. Returns the encoded size.
fn store_picture<R: RowStore>(
    row: &mut R,
    column: &str,
    image: &PixelImage,
    quality: u8,
) -> Result<usize, ActionError> {
    let bytes = encode_jpeg(image, quality)?;
    let len = bytes.len();
    row.set_bytes(column, Some(bytes));
    Ok(len)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_row_bytes() {
        let mut row = MemoryRow::new().with_bytes("img", vec![1, 2, 3]);
        assert_eq!(row.get_bytes("img"), Some(&[1u8, 2, 3][..]));
        assert_eq!(row.get_bytes("missing"), None);

        row.set_bytes("img", None);
        assert_eq!(row.get_bytes("img"), None);
        assert_eq!(row.cell("img"), Some(&CellValue::Null));
    }

    #[test]
    fn test_memory_row_ints() {
        let mut row = MemoryRow::new();
        row.set_int("x", 42);
        assert_eq!(row.get_int("x"), Some(42));
        assert_eq!(row.get_bytes("x"), None);
    }

    #[test]
    fn test_take_bytes_leaves_null() {
        let mut row = MemoryRow::new().with_bytes("img", vec![9]);
        assert_eq!(row.take_bytes("img"), Some(vec![9]));
        assert_eq!(row.cell("img"), Some(&CellValue::Null));
    }

    #[test]
    fn test_read_picture_empty_cell_is_absent() {
        let row = MemoryRow::new().with_bytes("img", vec![]);
        assert!(read_picture(&row, "img").is_none());
        assert!(read_picture(&row, "other").is_none());
    }

    #[test]
    fn test_read_picture_garbage_is_error() {
        let row = MemoryRow::new().with_bytes("img", vec![0, 1, 2, 3]);
        assert!(matches!(read_picture(&row, "img"), Some(Err(_))));
    }

    #[test]
    fn test_action_error_is_transparent() {
        let err: ActionError = ImageError::InvalidAspectRatio(0.0).into();
        assert_eq!(err.to_string(), "Invalid aspect ratio: 0");
    }
}

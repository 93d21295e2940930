//! Geometric operations: crop planning, region extraction, resampling, and
//! the combined transform pipeline.
//!
//! # Transform Order
//!
//! [`transform`] applies, in this order:
//! 1. Crop (extract the source rectangle)
//! 2. Resample to the destination size
//! 3. Color adjustment
//!
//! # Coordinate System
//!
//! - Rectangles are in source pixel coordinates
//! - Origin is top-left corner
//! - A rectangle with zero width or height means "use the full extents"

mod crop;
mod pipeline;
mod resize;

pub use crop::{extract_region, plan_crop_window};
pub use pipeline::transform;
pub use resize::{resize, FilterType};

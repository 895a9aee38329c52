#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// raster container for resampling operations.
pub mod raster;

/// Error types for the raster module.
pub mod error;

/// numeric sample kinds and conversions.
pub mod sample;

pub use crate::error::RasterError;
pub use crate::raster::{Raster, RasterSize};
pub use crate::sample::{Sample, SampleKind};

//! Geometric warp resampling with bilinear interpolation.
//!
//! Every destination pixel is mapped back into source space through a
//! [`WarpMapping`] and blended from the four surrounding source samples.
//! The operator handles three orthogonal complications:
//!
//! - destination pixels whose mapped coordinate falls outside the source
//! - an optional region-of-interest gate on source pixels
//! - an optional no-data sentinel range on source samples
//!
//! # Examples
//!
//! Resampling under an identity mapping:
//!
//! ```no_run
//! use geowarp_raster::{Raster, RasterSize};
//! use geowarp_resample::warp::{warp_bilinear, AffineWarp, WarpOptions};
//!
//! let size = RasterSize { width: 16, height: 16 };
//! let src = Raster::from_size_val(size, 1, 0.5f32).unwrap();
//! let mut dst = Raster::from_size_val(size, 1, 0.0f32).unwrap();
//!
//! warp_bilinear(&src, &mut dst, &AffineWarp::identity(), &WarpOptions::default()).unwrap();
//! ```

mod bilinear;
mod mapping;
mod sampler;

pub use bilinear::{
    warp_bilinear, warp_bilinear_indexed, Background, BorderExtend, WarpOptions,
};
pub use mapping::{AffineWarp, WarpMapping};

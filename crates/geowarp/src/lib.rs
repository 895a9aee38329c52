#![doc = include_str!("../../../README.md")]

#[doc(inline)]
pub use geowarp_raster as raster;

#[doc(inline)]
pub use geowarp_resample as resample;

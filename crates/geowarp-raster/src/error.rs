/// An error type for raster construction and access.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RasterError {
    /// Error when the data length does not match the raster geometry.
    #[error("Data length ({0}) does not match the raster geometry ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when a raster dimension is zero.
    #[error("Raster dimensions must be non-zero, got {0}x{1}")]
    ZeroDimension(usize, usize),

    /// Error when the band count is zero.
    #[error("Raster must have at least one band")]
    ZeroBands,
}

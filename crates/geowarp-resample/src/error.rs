use geowarp_raster::RasterError;

/// An error type for resampling configuration.
///
/// Every variant is a construction-time mismatch; once a pass starts it
/// runs to completion.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ResampleError {
    /// Source and destination band counts differ.
    #[error("Source has {0} bands but destination has {1}")]
    BandCountMismatch(usize, usize),

    /// Per-band background values do not cover the destination bands.
    #[error("Background values ({0}) do not match destination bands ({1})")]
    BackgroundLengthMismatch(usize, usize),

    /// A paletted source must carry the raw indices in a single band.
    #[error("Paletted source must have exactly one band, got {0}")]
    PalettedSourceBands(usize),

    /// Palette band count does not match the destination.
    #[error("Palette provides {0} bands but destination has {1}")]
    PaletteBandMismatch(usize, usize),

    /// A palette lookup table has the wrong length.
    #[error("Palette table for band {0} must have 256 entries, got {1}")]
    InvalidPaletteTable(usize, usize),

    /// A palette must provide at least one band.
    #[error("Palette must provide at least one band")]
    EmptyPalette,

    /// Error coming from the raster container.
    #[error(transparent)]
    Raster(#[from] RasterError),
}

use geowarp_raster::{Raster, Sample};

use super::bilinear::BorderExtend;
use crate::palette::PaletteTable;

/// Per-band random access reads of the source raster.
///
/// Coordinates are absolute; the engine only requests coordinates that
/// passed the bounds gate plus the one-pixel right/bottom halo when a
/// border extension is configured.
pub(crate) trait SampleSource<T: Sample>: Sync {
    fn read(&self, x: i64, y: i64, band: usize) -> T;
}

/// Reads backed directly by the physical raster.
///
/// With a border policy the halo is served synthetically instead of
/// materializing an extended copy of the source.
pub(crate) struct DirectSource<'a, T: Sample> {
    raster: &'a Raster<T>,
    border: Option<BorderExtend<T>>,
    min_x: i64,
    min_y: i64,
    width: i64,
    height: i64,
}

impl<'a, T: Sample> DirectSource<'a, T> {
    pub(crate) fn new(raster: &'a Raster<T>, border: Option<BorderExtend<T>>) -> Self {
        Self {
            raster,
            border,
            min_x: i64::from(raster.min_x()),
            min_y: i64::from(raster.min_y()),
            width: raster.width() as i64,
            height: raster.height() as i64,
        }
    }
}

impl<T: Sample> SampleSource<T> for DirectSource<'_, T> {
    #[inline]
    fn read(&self, x: i64, y: i64, band: usize) -> T {
        let mut ix = x - self.min_x;
        let mut iy = y - self.min_y;
        match self.border {
            Some(BorderExtend::Constant(fill)) => {
                if ix >= self.width || iy >= self.height {
                    return fill;
                }
            }
            Some(BorderExtend::Clamp) => {
                if ix >= self.width {
                    ix = self.width - 1;
                }
                if iy >= self.height {
                    iy = self.height - 1;
                }
            }
            None => {}
        }
        self.raster.sample(ix as usize, iy as usize, band)
    }
}

/// Indexed-source decorator: every read of the single physical band is
/// redirected through the palette table of the requested output band.
pub(crate) struct PalettedSource<'a> {
    source: DirectSource<'a, u8>,
    palette: &'a PaletteTable,
}

impl<'a> PalettedSource<'a> {
    pub(crate) fn new(source: DirectSource<'a, u8>, palette: &'a PaletteTable) -> Self {
        Self { source, palette }
    }
}

impl SampleSource<u8> for PalettedSource<'_> {
    #[inline]
    fn read(&self, x: i64, y: i64, band: usize) -> u8 {
        self.palette.lookup(band, self.source.read(x, y, 0))
    }
}

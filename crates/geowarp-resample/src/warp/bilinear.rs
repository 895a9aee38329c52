use num_traits::Zero;

use geowarp_raster::{Raster, Sample};

use super::mapping::WarpMapping;
use super::sampler::{DirectSource, PalettedSource, SampleSource};
use crate::error::ResampleError;
use crate::interpolation::{bilinear_blend, bilinear_blend_masked};
use crate::nodata::{NoDataClassifier, NoDataRange};
use crate::palette::PaletteTable;
use crate::parallel;
use crate::roi::{RegionOfInterest, WHOLE_PLANE};

/// Fill value for destination pixels the source cannot contribute to.
#[derive(Debug, Clone, PartialEq)]
pub enum Background<T> {
    /// One value broadcast to every destination band.
    Scalar(T),
    /// One value per destination band.
    PerBand(Vec<T>),
}

/// Border extension policy for the source raster.
///
/// When configured, the source is treated as one pixel wider and taller on
/// its right/bottom edge, so corner reads along the last row and column
/// stay usable and the bounds gate covers the full source extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BorderExtend<T> {
    /// Repeat the edge sample.
    Clamp,
    /// Fill the halo with a fixed value.
    Constant(T),
}

/// Configuration of one resampling pass.
///
/// Every field is optional; the default runs with no exclusions, no
/// background fill (out-of-bounds pixels are left untouched), and no
/// border extension.
pub struct WarpOptions<'a, T: Sample> {
    /// Region-of-interest gate over source pixels.
    pub roi: Option<&'a dyn RegionOfInterest>,
    /// Range of source sample values excluded from the blend.
    pub nodata: Option<NoDataRange<T>>,
    /// Fill for out-of-bounds or fully excluded destination pixels.
    pub background: Option<Background<T>>,
    /// Border extension of the source raster.
    pub border: Option<BorderExtend<T>>,
}

impl<T: Sample> Default for WarpOptions<'_, T> {
    fn default() -> Self {
        Self {
            roi: None,
            nodata: None,
            background: None,
            border: None,
        }
    }
}

/// The exclusion configuration of a pass, resolved once before any row is
/// processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExclusionMode {
    None,
    RoiOnly,
    NoDataOnly,
    RoiAndNoData,
}

/// Everything the row loop needs, resolved once per pass.
struct Plan<'a, T: Sample> {
    min_x: f32,
    max_x: f32,
    min_y: f32,
    max_y: f32,
    background: Vec<T>,
    set_background: bool,
    has_roi: bool,
    roi: &'a dyn RegionOfInterest,
    classifier: NoDataClassifier<T>,
}

impl<'a, T: Sample> Plan<'a, T> {
    fn new(
        src: &Raster<T>,
        dst_bands: usize,
        options: &WarpOptions<'a, T>,
    ) -> Result<Self, ResampleError> {
        // Without a border extension the last source row/column cannot host
        // the 2x2 read window, so the gate excludes it.
        let pad = if options.border.is_some() { 0 } else { 1 };
        let min_x = src.min_x() as f32;
        let min_y = src.min_y() as f32;
        let max_x = (src.min_x() + src.width() as i32 - pad) as f32;
        let max_y = (src.min_y() + src.height() as i32 - pad) as f32;

        let (background, set_background) = match &options.background {
            None => (vec![T::zero(); dst_bands], false),
            Some(Background::Scalar(v)) => (vec![*v; dst_bands], true),
            Some(Background::PerBand(values)) => {
                if values.len() != dst_bands {
                    return Err(ResampleError::BackgroundLengthMismatch(
                        values.len(),
                        dst_bands,
                    ));
                }
                (values.clone(), true)
            }
        };

        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
            background,
            set_background,
            has_roi: options.roi.is_some(),
            roi: options.roi.unwrap_or(&WHOLE_PLANE),
            classifier: NoDataClassifier::new(options.nodata),
        })
    }

    fn mode(&self) -> ExclusionMode {
        match (self.has_roi, self.classifier.is_enabled()) {
            (false, false) => ExclusionMode::None,
            (true, false) => ExclusionMode::RoiOnly,
            (false, true) => ExclusionMode::NoDataOnly,
            (true, true) => ExclusionMode::RoiAndNoData,
        }
    }
}

/// Resample a raster under an inverse warp mapping with bilinear
/// interpolation.
///
/// Every destination pixel is mapped into source space, gated against the
/// source bounds and the configured exclusions, and blended from its four
/// surrounding samples. Destination pixels whose mapped coordinate falls
/// outside the usable source extent receive the background value, or stay
/// untouched when no background is configured. Pixels whose four corners
/// are unanimously excluded by the ROI or the no-data range always receive
/// the background value.
///
/// # Arguments
///
/// * `src` - The source raster.
/// * `dst` - The destination raster; same sample kind and band count.
/// * `warp` - The destination-to-source mapping, queried per scanline.
/// * `options` - ROI, no-data, background, and border configuration.
///
/// # Errors
///
/// Returns an error when the band counts differ or a per-band background
/// does not cover the destination bands.
///
/// # Example
///
/// ```
/// use geowarp_raster::{Raster, RasterSize};
/// use geowarp_resample::warp::{warp_bilinear, AffineWarp, Background, WarpOptions};
///
/// let size = RasterSize { width: 4, height: 4 };
/// let src = Raster::from_size_val(size, 1, 7u8).unwrap();
/// let mut dst = Raster::from_size_val(size, 1, 0u8).unwrap();
///
/// let options = WarpOptions {
///     background: Some(Background::Scalar(255)),
///     ..Default::default()
/// };
/// warp_bilinear(&src, &mut dst, &AffineWarp::identity(), &options).unwrap();
/// ```
pub fn warp_bilinear<T: Sample>(
    src: &Raster<T>,
    dst: &mut Raster<T>,
    warp: &dyn WarpMapping,
    options: &WarpOptions<'_, T>,
) -> Result<(), ResampleError> {
    if src.bands() != dst.bands() {
        return Err(ResampleError::BandCountMismatch(src.bands(), dst.bands()));
    }

    let plan = Plan::new(src, dst.bands(), options)?;
    let source = DirectSource::new(src, options.border);
    dispatch(&source, dst, warp, &plan);

    Ok(())
}

/// Resample an indexed 8-bit raster, expanding it through a palette.
///
/// The source carries raw indices in a single band; every read is
/// redirected through the palette before interpolation, and the
/// destination carries one band per palette channel. The no-data range, if
/// any, applies to the palette-mapped values.
///
/// # Errors
///
/// Returns an error when the source is not single-band, the palette band
/// count does not match the destination, or the background configuration
/// is invalid.
pub fn warp_bilinear_indexed(
    src: &Raster<u8>,
    palette: &PaletteTable,
    dst: &mut Raster<u8>,
    warp: &dyn WarpMapping,
    options: &WarpOptions<'_, u8>,
) -> Result<(), ResampleError> {
    if src.bands() != 1 {
        return Err(ResampleError::PalettedSourceBands(src.bands()));
    }
    if palette.bands() != dst.bands() {
        return Err(ResampleError::PaletteBandMismatch(
            palette.bands(),
            dst.bands(),
        ));
    }

    let plan = Plan::new(src, dst.bands(), options)?;
    let source = PalettedSource::new(DirectSource::new(src, options.border), palette);
    dispatch(&source, dst, warp, &plan);

    Ok(())
}

/// Selects the monomorphized row loop for the resolved exclusion mode.
fn dispatch<T: Sample, S: SampleSource<T>>(
    source: &S,
    dst: &mut Raster<T>,
    warp: &dyn WarpMapping,
    plan: &Plan<'_, T>,
) {
    log::debug!(
        "bilinear warp pass: mode={:?} kind={:?} dst={}x{}x{}",
        plan.mode(),
        T::KIND,
        dst.width(),
        dst.height(),
        dst.bands()
    );

    match plan.mode() {
        ExclusionMode::None => run::<T, S, false, false>(source, dst, warp, plan),
        ExclusionMode::RoiOnly => run::<T, S, true, false>(source, dst, warp, plan),
        ExclusionMode::NoDataOnly => run::<T, S, false, true>(source, dst, warp, plan),
        ExclusionMode::RoiAndNoData => run::<T, S, true, true>(source, dst, warp, plan),
    }
}

/// The row loop. One body, four instantiations; the capability flags are
/// const so the pixel loop carries no mode branches.
fn run<T: Sample, S: SampleSource<T>, const HAS_ROI: bool, const HAS_NODATA: bool>(
    source: &S,
    dst: &mut Raster<T>,
    warp: &dyn WarpMapping,
    plan: &Plan<'_, T>,
) {
    let width = dst.width();
    let bands = dst.bands();
    let dst_min_x = dst.min_x();
    let dst_min_y = dst.min_y();

    parallel::par_iter_rows_warp(
        dst.as_slice_mut(),
        width * bands,
        2 * width,
        |h, coords, dst_row| {
            warp.map_row(dst_min_x, dst_min_y + h as i32, width, coords);

            for (dst_pixel, pair) in dst_row.chunks_exact_mut(bands).zip(coords.chunks_exact(2)) {
                let sx = pair[0];
                let sy = pair[1];

                // NaN coordinates fail this gate and take the background path.
                let inside =
                    sx >= plan.min_x && sx < plan.max_x && sy >= plan.min_y && sy < plan.max_y;
                if !inside {
                    if plan.set_background {
                        for (d, bg) in dst_pixel.iter_mut().zip(&plan.background) {
                            *d = *bg;
                        }
                    }
                    continue;
                }

                let xint = i64::from(sx.floor() as i32);
                let yint = i64::from(sy.floor() as i32);
                let xfrac = f64::from(sx - sx.floor());
                let yfrac = f64::from(sy - sy.floor());

                if HAS_ROI {
                    let o00 = !plan.roi.contains(xint, yint);
                    let o01 = !plan.roi.contains(xint + 1, yint);
                    let o10 = !plan.roi.contains(xint, yint + 1);
                    let o11 = !plan.roi.contains(xint + 1, yint + 1);
                    if o00 && o01 && o10 && o11 {
                        for (d, bg) in dst_pixel.iter_mut().zip(&plan.background) {
                            *d = *bg;
                        }
                        continue;
                    }
                }

                for (b, d) in dst_pixel.iter_mut().enumerate() {
                    let p00 = source.read(xint, yint, b);
                    let p01 = source.read(xint + 1, yint, b);
                    let p10 = source.read(xint, yint + 1, b);
                    let p11 = source.read(xint + 1, yint + 1, b);

                    let s00 = p00.to_f64();
                    let s01 = p01.to_f64();
                    let s10 = p10.to_f64();
                    let s11 = p11.to_f64();

                    if HAS_NODATA {
                        let w00 = plan.classifier.is_nodata(p00);
                        let w01 = plan.classifier.is_nodata(p01);
                        let w10 = plan.classifier.is_nodata(p10);
                        let w11 = plan.classifier.is_nodata(p11);

                        if w00 && w01 && w10 && w11 {
                            *d = plan.background[b];
                        } else {
                            *d = T::from_f64(bilinear_blend_masked(
                                s00, s01, s10, s11, xfrac, yfrac, w00, w01, w10, w11,
                            ));
                        }
                    } else {
                        *d = T::from_f64(bilinear_blend(s00, s01, s10, s11, xfrac, yfrac));
                    }
                }
            }
        },
    );
}

#[cfg(test)]
mod tests {
    use super::{warp_bilinear, Background, WarpOptions};
    use crate::warp::AffineWarp;
    use crate::ResampleError;
    use geowarp_raster::{Raster, RasterSize};

    fn gradient(width: usize, height: usize) -> Raster<u8> {
        let data = (0..width * height).map(|i| i as u8).collect();
        Raster::new(RasterSize { width, height }, 1, data).unwrap()
    }

    #[test]
    fn identity_copies_the_interior() -> Result<(), ResampleError> {
        let src = gradient(4, 4);
        let mut dst = Raster::from_size_val(src.size(), 1, 0u8)?;

        warp_bilinear(
            &src,
            &mut dst,
            &AffineWarp::identity(),
            &WarpOptions::default(),
        )?;

        // interior pixels equal the source; the last row/column is outside
        // the gate without a border extension
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(dst.sample(x, y, 0), src.sample(x, y, 0));
            }
        }

        Ok(())
    }

    #[test]
    fn out_of_bounds_gets_background() -> Result<(), ResampleError> {
        let src = gradient(4, 4);
        let mut dst = Raster::from_size_val(src.size(), 1, 0u8)?;

        // shift far off the right edge
        let options = WarpOptions {
            background: Some(Background::Scalar(200)),
            ..Default::default()
        };
        warp_bilinear(&src, &mut dst, &AffineWarp::translation(100.0, 0.0), &options)?;

        assert!(dst.as_slice().iter().all(|&v| v == 200));

        Ok(())
    }

    #[test]
    fn out_of_bounds_untouched_without_background() -> Result<(), ResampleError> {
        let src = gradient(4, 4);
        let mut dst = Raster::from_size_val(src.size(), 1, 77u8)?;

        warp_bilinear(
            &src,
            &mut dst,
            &AffineWarp::translation(100.0, 0.0),
            &WarpOptions::default(),
        )?;

        assert!(dst.as_slice().iter().all(|&v| v == 77));

        Ok(())
    }

    #[test]
    fn band_mismatch_rejected() -> Result<(), ResampleError> {
        let src = Raster::from_size_val(
            RasterSize {
                width: 4,
                height: 4,
            },
            2,
            0u8,
        )?;
        let mut dst = Raster::from_size_val(src.size(), 1, 0u8)?;

        let res = warp_bilinear(
            &src,
            &mut dst,
            &AffineWarp::identity(),
            &WarpOptions::default(),
        );
        assert_eq!(res, Err(ResampleError::BandCountMismatch(2, 1)));

        Ok(())
    }

    #[test]
    fn per_band_background_length_checked() -> Result<(), ResampleError> {
        let src = Raster::from_size_val(
            RasterSize {
                width: 4,
                height: 4,
            },
            3,
            0u8,
        )?;
        let mut dst = Raster::from_size_val(src.size(), 3, 0u8)?;

        let options = WarpOptions {
            background: Some(Background::PerBand(vec![1, 2])),
            ..Default::default()
        };
        let res = warp_bilinear(&src, &mut dst, &AffineWarp::identity(), &options);
        assert_eq!(res, Err(ResampleError::BackgroundLengthMismatch(2, 3)));

        Ok(())
    }
}

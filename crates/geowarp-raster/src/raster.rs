use crate::error::RasterError;

/// Raster size in pixels
///
/// A struct to represent the size of a raster in pixels.
///
/// # Examples
///
/// ```
/// use geowarp_raster::RasterSize;
///
/// let size = RasterSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(size.width, 10);
/// assert_eq!(size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterSize {
    /// Width of the raster in pixels
    pub width: usize,
    /// Height of the raster in pixels
    pub height: usize,
}

impl std::fmt::Display for RasterSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "RasterSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for RasterSize {
    fn from(size: [usize; 2]) -> Self {
        RasterSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// A rectangular grid of samples with one or more bands.
///
/// Samples are stored band-interleaved in row-major order: the sample at
/// `(x, y, band)` lives at `((y * width) + x) * bands + band`. The raster
/// carries an integer origin so it can describe a tile of a larger grid;
/// a stand-alone raster has origin `(0, 0)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster<T> {
    size: RasterSize,
    bands: usize,
    origin: (i32, i32),
    data: Vec<T>,
}

impl<T> Raster<T> {
    /// Create a new raster from sample data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the raster in pixels.
    /// * `bands` - The number of bands.
    /// * `data` - The band-interleaved sample data.
    ///
    /// # Errors
    ///
    /// If the data length does not match `width * height * bands`, or a
    /// dimension or the band count is zero, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use geowarp_raster::{Raster, RasterSize};
    ///
    /// let raster = Raster::<u8>::new(
    ///    RasterSize {
    ///       width: 10,
    ///      height: 20,
    ///  },
    /// 3,
    /// vec![0u8; 10 * 20 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(raster.size().width, 10);
    /// assert_eq!(raster.size().height, 20);
    /// assert_eq!(raster.bands(), 3);
    /// ```
    pub fn new(size: RasterSize, bands: usize, data: Vec<T>) -> Result<Self, RasterError> {
        if size.width == 0 || size.height == 0 {
            return Err(RasterError::ZeroDimension(size.width, size.height));
        }
        if bands == 0 {
            return Err(RasterError::ZeroBands);
        }
        if data.len() != size.width * size.height * bands {
            return Err(RasterError::InvalidDataLength(
                data.len(),
                size.width * size.height * bands,
            ));
        }

        Ok(Self {
            size,
            bands,
            origin: (0, 0),
            data,
        })
    }

    /// Create a new raster filled with a single value.
    ///
    /// # Examples
    ///
    /// ```
    /// use geowarp_raster::{Raster, RasterSize};
    ///
    /// let raster = Raster::from_size_val(
    ///   RasterSize {
    ///     width: 10,
    ///    height: 20,
    /// }, 1, 0.0f32).unwrap();
    ///
    /// assert_eq!(raster.size().width, 10);
    /// assert_eq!(raster.bands(), 1);
    /// ```
    pub fn from_size_val(size: RasterSize, bands: usize, val: T) -> Result<Self, RasterError>
    where
        T: Clone,
    {
        let data = vec![val; size.width * size.height * bands];
        Raster::new(size, bands, data)
    }

    /// Move the raster origin, keeping the sample data.
    ///
    /// The origin locates the raster within a larger grid; coordinates
    /// queried by the resampler are absolute.
    pub fn with_origin(mut self, min_x: i32, min_y: i32) -> Self {
        self.origin = (min_x, min_y);
        self
    }

    /// Get the size of the raster in pixels.
    pub fn size(&self) -> RasterSize {
        self.size
    }

    /// Get the width of the raster in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the raster in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of bands.
    pub fn bands(&self) -> usize {
        self.bands
    }

    /// Get the x coordinate of the raster origin.
    pub fn min_x(&self) -> i32 {
        self.origin.0
    }

    /// Get the y coordinate of the raster origin.
    pub fn min_y(&self) -> i32 {
        self.origin.1
    }

    /// Get a reference to a sample by physical (buffer) coordinates.
    ///
    /// Returns `None` when the coordinates or band are out of range.
    pub fn get(&self, x: usize, y: usize, band: usize) -> Option<&T> {
        if x >= self.size.width || y >= self.size.height || band >= self.bands {
            return None;
        }
        self.data.get((y * self.size.width + x) * self.bands + band)
    }

    /// Read a sample by physical (buffer) coordinates.
    ///
    /// # Panics
    ///
    /// Panics when the coordinates or band are out of range.
    pub fn sample(&self, x: usize, y: usize, band: usize) -> T
    where
        T: Copy,
    {
        self.data[(y * self.size.width + x) * self.bands + band]
    }

    /// Get the raster data as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the raster data as a mutable slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

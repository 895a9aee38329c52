use num_traits::Zero;

/// Discriminant for the numeric kinds a [`Raster`](crate::Raster) can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    /// 8-bit unsigned samples.
    U8,
    /// 16-bit unsigned samples.
    U16,
    /// 16-bit signed samples.
    I16,
    /// 32-bit signed integer samples.
    I32,
    /// 32-bit floating point samples.
    F32,
    /// 64-bit floating point samples.
    F64,
}

/// Trait for raster sample types.
///
/// Implemented for exactly the six kinds the resampler supports. Interpolation
/// arithmetic runs in `f64`; a sample is widened with [`Sample::to_f64`] and the
/// blended value is narrowed back with [`Sample::from_f64`].
///
/// Send and Sync are required to share the source raster across row workers.
pub trait Sample: Copy + PartialOrd + Zero + Send + Sync + 'static {
    /// The numeric kind of this sample type.
    const KIND: SampleKind;

    /// Widen the sample to `f64`. Exact for all six kinds.
    fn to_f64(self) -> f64;

    /// Narrow an interpolated value back to the sample kind.
    ///
    /// Integer kinds truncate toward zero, saturate at the `i32` range, then
    /// keep the low bits of their own width.
    fn from_f64(v: f64) -> Self;
}

impl Sample for u8 {
    const KIND: SampleKind = SampleKind::U8;

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn from_f64(v: f64) -> Self {
        (v as i32) as u8
    }
}

impl Sample for u16 {
    const KIND: SampleKind = SampleKind::U16;

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn from_f64(v: f64) -> Self {
        (v as i32) as u16
    }
}

impl Sample for i16 {
    const KIND: SampleKind = SampleKind::I16;

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn from_f64(v: f64) -> Self {
        (v as i32) as i16
    }
}

impl Sample for i32 {
    const KIND: SampleKind = SampleKind::I32;

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn from_f64(v: f64) -> Self {
        v as i32
    }
}

impl Sample for f32 {
    const KIND: SampleKind = SampleKind::F32;

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn from_f64(v: f64) -> Self {
        v as f32
    }
}

impl Sample for f64 {
    const KIND: SampleKind = SampleKind::F64;

    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(v: f64) -> Self {
        v
    }
}

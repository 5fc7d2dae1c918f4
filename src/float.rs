use num_traits::{Float, FloatConst, FromPrimitive, NumAssign};

/// Floating-point types used for performing Fourier transforms.
pub trait FftFloat:
    Float
    + FloatConst
    + FromPrimitive
    + NumAssign
    + Default
    + Clone
    + Send
    + Sync
    + core::fmt::Debug
    + 'static
{
    /// Narrows a value computed in double precision, rounding to nearest.
    fn lossy_from(value: f64) -> Self;
}

impl FftFloat for f32 {
    #[inline]
    fn lossy_from(value: f64) -> Self {
        value as f32
    }
}

impl FftFloat for f64 {
    #[inline]
    fn lossy_from(value: f64) -> Self {
        value
    }
}

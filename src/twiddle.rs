use crate::float::FftFloat;
use num_complex::Complex;

/// Computes `exp(-2πi * index / size)`, or its conjugate for inverse transforms.
///
/// The angle is formed in double precision and narrowed to `T` before the trigonometric
/// functions are evaluated in `T`.
#[inline]
pub(crate) fn compute_twiddle<T: FftFloat>(index: usize, size: usize, forward: bool) -> Complex<T> {
    let theta = T::lossy_from(core::f64::consts::PI * 2.0 * index as f64 / size as f64);
    let twiddle = Complex::new(theta.cos(), -theta.sin());
    if forward {
        twiddle
    } else {
        twiddle.conj()
    }
}

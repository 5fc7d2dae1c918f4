//! Direct evaluation of the discrete Fourier transform.

use crate::error::{Error, Result};
use crate::float::FftFloat;
use crate::twiddle::compute_twiddle;
use crate::Spectrum;
use tracing::debug;

/// Computes the discrete Fourier transform of a real signal by direct O(N²) summation.
///
/// Every term's factor is evaluated independently, so the result serves as the reference for
/// the fast transform.  Any non-zero length is accepted.
///
/// Fails with [`Error::InvalidSize`] for an empty signal.
pub fn discrete_fourier_transform<T: FftFloat>(signal: &[T]) -> Result<Spectrum<T>> {
    let size = signal.len();
    if size == 0 {
        return Err(Error::empty());
    }
    debug!(size, "naive dft");

    let mut output = Spectrum::<T>::new(size);
    for (k, coefficient) in output.iter_mut().enumerate() {
        // k * n mod size, kept exact without forming the product
        let mut index = 0;
        for &sample in signal {
            *coefficient += compute_twiddle::<T>(index, size, true) * sample;
            index += k;
            if index >= size {
                index -= size;
            }
        }
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    fn near(actual: &[Complex<f32>], expected: &[(f32, f32)]) {
        assert_eq!(actual.len(), expected.len());
        for (actual, (re, im)) in actual.iter().zip(expected.iter()) {
            assert!(
                (actual - Complex::new(*re, *im)).norm() < 1e-5,
                "{} != {}+{}i",
                actual,
                re,
                im
            );
        }
    }

    #[test]
    fn impulse() {
        let output = discrete_fourier_transform(&[1.0f32, 0.0, 0.0, 0.0]).unwrap();
        near(&output, &[(1.0, 0.0); 4]);
    }

    #[test]
    fn dc() {
        let output = discrete_fourier_transform(&[1.0f32; 4]).unwrap();
        near(&output, &[(4.0, 0.0), (0.0, 0.0), (0.0, 0.0), (0.0, 0.0)]);
    }

    #[test]
    fn cosine() {
        let output = discrete_fourier_transform(&[1.0f32, 0.0, -1.0, 0.0]).unwrap();
        near(&output, &[(0.0, 0.0), (2.0, 0.0), (0.0, 0.0), (2.0, 0.0)]);
    }

    #[test]
    fn arbitrary_length() {
        let output = discrete_fourier_transform(&[1.0f32, 2.0, 3.0]).unwrap();
        let half = 3f32.sqrt() / 2.0;
        near(&output, &[(6.0, 0.0), (-1.5, half), (-1.5, -half)]);
    }

    #[test]
    fn single_sample() {
        let output = discrete_fourier_transform(&[-2.5f64]).unwrap();
        assert_eq!(output.as_slice(), &[Complex::new(-2.5, 0.0)]);
    }

    #[test]
    fn empty() {
        assert_eq!(
            discrete_fourier_transform::<f32>(&[]).unwrap_err(),
            Error::empty()
        );
    }
}

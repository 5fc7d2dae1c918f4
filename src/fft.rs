//! Iterative radix-2 Cooley-Tukey transform.

use crate::bits::{log2_power_of_two, reverse_bits};
use crate::buffer::UniqueBuffer;
use crate::error::Result;
use crate::float::FftFloat;
use crate::twiddle::compute_twiddle;
use crate::{Spectrum, Transform};
use num_complex::Complex;
use num_traits::One as _;
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Inputs of at least this many samples run each stage's segments on the rayon pool.
#[cfg(feature = "parallel")]
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Combines the two halves of one segment.
///
/// On entry the lower and upper halves hold the transforms of the even and odd subsequences.
#[inline]
fn butterfly<T: FftFloat>(segment: &mut [Complex<T>], base: Complex<T>) {
    let (lower, upper) = segment.split_at_mut(segment.len() / 2);
    let mut w = Complex::<T>::one();
    for (u, t) in lower.iter_mut().zip(upper.iter_mut()) {
        let product = w * *t;
        let sum = *u;
        *u = sum + product;
        *t = sum - product;
        w = w * base;
    }
}

/// Runs one stage, combining every pair of adjacent `m / 2`-point transforms.
fn stage<T: FftFloat>(data: &mut [Complex<T>], m: usize, forward: bool) {
    let base = compute_twiddle::<T>(1, m, forward);
    trace!(m, "radix-2 stage");

    #[cfg(feature = "parallel")]
    {
        if data.len() >= PARALLEL_THRESHOLD && data.len() > m {
            data.par_chunks_exact_mut(m)
                .for_each(|segment| butterfly(segment, base));
            return;
        }
    }

    sequential_stage(data, m, base);
}

fn sequential_stage<T: FftFloat>(data: &mut [Complex<T>], m: usize, base: Complex<T>) {
    for segment in data.chunks_exact_mut(m) {
        butterfly(segment, base);
    }
}

/// Runs all stages over bit-reversed data.
fn stages<T: FftFloat>(data: &mut [Complex<T>], count: u32, forward: bool) {
    for s in 0..count {
        stage(data, 1 << (s + 1), forward);
    }
}

fn scale<T: FftFloat>(data: &mut [Complex<T>]) {
    let factor = T::lossy_from(data.len() as f64).recip();
    for x in data.iter_mut() {
        *x = *x * factor;
    }
}

/// Computes the discrete Fourier transform of a real signal in O(N log N).
///
/// Samples are written to the output in bit-reversed order, then combined in place one stage
/// at a time.  The result matches [`discrete_fourier_transform`](crate::discrete_fourier_transform)
/// up to rounding.
///
/// Fails with [`Error::InvalidSize`](crate::Error::InvalidSize) unless the signal length is a
/// non-zero power of two; the signal is never modified.
pub fn fast_fourier_transform<T: FftFloat>(signal: &[T]) -> Result<Spectrum<T>> {
    let size = signal.len();
    let count = log2_power_of_two(size)?;
    debug!(size, stages = count, "radix-2 fft");

    let mut output = Spectrum::<T>::new(size);
    for (index, &sample) in signal.iter().enumerate() {
        output[reverse_bits(index, count)] = Complex::new(sample, T::zero());
    }
    stages(&mut output, count, true);
    Ok(output)
}

/// Computes the inverse transform of a spectrum, scaled by `1 / N`.
pub fn inverse_fast_fourier_transform<T: FftFloat>(
    spectrum: &[Complex<T>],
) -> Result<UniqueBuffer<Complex<T>>> {
    let size = spectrum.len();
    let count = log2_power_of_two(size)?;
    debug!(size, stages = count, "radix-2 ifft");

    let mut output = UniqueBuffer::<Complex<T>>::new(size);
    for (index, &coefficient) in spectrum.iter().enumerate() {
        output[reverse_bits(index, count)] = coefficient;
    }
    stages(&mut output, count, false);
    scale(&mut output);
    Ok(output)
}

/// Applies a forward or inverse transform to complex data in place.
///
/// The bit-reversal permutation is done by swapping, so no scratch storage is needed.  On error
/// `data` is left untouched.
pub fn fast_fourier_transform_in_place<T: FftFloat>(
    data: &mut [Complex<T>],
    transform: Transform,
) -> Result<()> {
    let size = data.len();
    let count = log2_power_of_two(size)?;
    debug!(size, stages = count, ?transform, "radix-2 fft in place");

    for i in 0..size {
        let j = reverse_bits(i, count);
        if i < j {
            data.swap(i, j);
        }
    }
    stages(data, count, transform.is_forward());
    if transform == Transform::Ifft {
        scale(data);
    }
    Ok(())
}

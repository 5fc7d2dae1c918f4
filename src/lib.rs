//! This crate provides discrete Fourier transforms of real signals in pure Rust.
//!
//! # Implementation
//! [`discrete_fourier_transform`] evaluates the transform definition directly in O(N²) and
//! accepts any non-empty signal.  [`fast_fourier_transform`] is an iterative radix-2
//! Cooley-Tukey FFT: a bit-reversal permutation followed by `log2(N)` in-place butterfly stages.
//! It requires the signal length to be a power of two.
//!
//! Signals and spectra are held in [`UniqueBuffer`], a fixed-size buffer with a single owner
//! and a pluggable [`Release`] strategy for memory allocated elsewhere.
//!
//! # Optional features
//! -  **`parallel`** - Runs the independent butterflies of each FFT stage on the `rayon` thread
//!    pool for large inputs.  Results are identical to the sequential path.
//!
//! ```
//! use fourier_transform::{fast_fourier_transform, Signal};
//!
//! let signal: Signal = Signal::from_slice(&[1.0, 0.0, -1.0, 0.0]);
//! let spectrum = fast_fourier_transform(&signal).unwrap();
//! assert!((spectrum[1].re - 2.0).abs() < 1e-6);
//! ```

mod bits;
pub mod buffer;
mod dft;
mod error;
mod fft;
mod float;
mod twiddle;

pub use bits::*;
pub use buffer::{BoxRelease, CRelease, Release, ReleaseFn, UniqueBuffer};
pub use dft::*;
pub use error::*;
pub use fft::*;
pub use float::*;

pub use num_complex;
use num_complex::Complex;

/// A real-valued time-domain signal.
pub type Signal<T = f32> = UniqueBuffer<T>;

/// The complex frequency-domain coefficients of a signal.
pub type Spectrum<T = f32> = UniqueBuffer<Complex<T>>;

/// Specifies the direction of a transform.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transform {
    /// Forward transform, using `exp(-2πi kn / N)`
    Fft,
    /// Inverse transform, using `exp(2πi kn / N)` and scaled by `1 / N`
    Ifft,
}

impl Transform {
    /// Returns true if the transform is a forward transform.
    #[inline]
    pub fn is_forward(&self) -> bool {
        match self {
            Self::Fft => true,
            Self::Ifft => false,
        }
    }

    /// Returns the inverse transform.
    #[inline]
    pub fn inverse(&self) -> Self {
        match self {
            Self::Fft => Self::Ifft,
            Self::Ifft => Self::Fft,
        }
    }
}

/// A transform algorithm.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// Direct O(N²) summation, any non-zero size
    Naive,
    /// Iterative radix-2 FFT, power-of-two sizes
    Radix2,
}

impl Algorithm {
    /// Picks the fastest algorithm able to transform `size` samples.
    pub fn for_size(size: usize) -> Self {
        if size.is_power_of_two() {
            Self::Radix2
        } else {
            Self::Naive
        }
    }

    /// Transforms a real signal into its spectrum.
    pub fn transform<T: FftFloat>(self, signal: &[T]) -> Result<Spectrum<T>> {
        match self {
            Self::Naive => discrete_fourier_transform(signal),
            Self::Radix2 => fast_fourier_transform(signal),
        }
    }
}

impl core::str::FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(name: &str) -> core::result::Result<Self, Self::Err> {
        match name {
            "dft" | "naive" => Ok(Self::Naive),
            "fft" | "radix2" => Ok(Self::Radix2),
            _ => Err(ParseAlgorithmError(name.to_string())),
        }
    }
}

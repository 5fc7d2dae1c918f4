use thiserror::Error;

/// The size requirement a transform input failed to meet.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SizeConstraint {
    /// The input must contain at least one sample.
    NonEmpty,
    /// The input length must be a power of two.
    PowerOfTwo,
}

impl core::fmt::Display for SizeConstraint {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::NonEmpty => write!(f, "must not be empty"),
            Self::PowerOfTwo => write!(f, "must be a power of two"),
        }
    }
}

/// Errors produced by buffers and transforms.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("invalid size {size}: {constraint}")]
    InvalidSize {
        size: usize,
        constraint: SizeConstraint,
    },

    #[error("index {index} out of range for buffer of size {size}")]
    OutOfRange { index: usize, size: usize },
}

impl Error {
    pub(crate) fn empty() -> Self {
        Self::InvalidSize {
            size: 0,
            constraint: SizeConstraint::NonEmpty,
        }
    }

    pub(crate) fn not_power_of_two(size: usize) -> Self {
        Self::InvalidSize {
            size,
            constraint: SizeConstraint::PowerOfTwo,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;

/// An algorithm name that is not recognized.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("unknown algorithm '{0}'")]
pub struct ParseAlgorithmError(pub String);

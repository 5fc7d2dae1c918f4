//! Index helpers for radix-2 transforms.

use crate::error::{Error, Result};

/// Returns `k` such that `2^k == size`.
///
/// Fails with [`Error::InvalidSize`] unless `size` is an exact power of two.
pub fn log2_power_of_two(size: usize) -> Result<u32> {
    if size == 0 {
        Err(Error::empty())
    } else if !size.is_power_of_two() {
        Err(Error::not_power_of_two(size))
    } else {
        Ok(size.trailing_zeros())
    }
}

/// Reverses the order of the low `width` bits of `value`.
///
/// Bits at or above `width` do not appear in the result.  Widths larger than `usize::BITS` are
/// treated as `usize::BITS`.
#[inline]
pub fn reverse_bits(value: usize, width: u32) -> usize {
    match width {
        0 => 0,
        w if w >= usize::BITS => value.reverse_bits(),
        w => value.reverse_bits() >> (usize::BITS - w),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SizeConstraint;

    #[test]
    fn log2_of_powers() {
        for k in 0..usize::BITS {
            assert_eq!(log2_power_of_two(1 << k), Ok(k));
        }
    }

    #[test]
    fn log2_rejects_other_sizes() {
        assert_eq!(
            log2_power_of_two(0),
            Err(Error::InvalidSize {
                size: 0,
                constraint: SizeConstraint::NonEmpty
            })
        );
        for size in [3, 6, 12, 1000, usize::MAX] {
            assert_eq!(
                log2_power_of_two(size),
                Err(Error::InvalidSize {
                    size,
                    constraint: SizeConstraint::PowerOfTwo
                })
            );
        }
    }

    #[test]
    fn known_reversals() {
        assert_eq!(reverse_bits(0b1010, 4), 0b0101);
        assert_eq!(reverse_bits(0b0001, 4), 0b1000);
        assert_eq!(reverse_bits(0b110, 3), 0b011);
        assert_eq!(reverse_bits(1, 1), 1);
        assert_eq!(reverse_bits(5, 0), 0);
        assert_eq!(reverse_bits(1, usize::BITS), 1 << (usize::BITS - 1));
    }

    #[test]
    fn high_bits_are_ignored() {
        assert_eq!(reverse_bits(0b1111_0001, 4), 0b1000);
        assert_eq!(reverse_bits(usize::MAX, 3), 0b111);
    }

    #[test]
    fn involution() {
        for width in 0..=12 {
            for i in 0..(1usize << width) {
                assert_eq!(reverse_bits(reverse_bits(i, width), width), i);
            }
        }
    }

    #[test]
    fn bijection() {
        for width in 0..=12 {
            let size = 1usize << width;
            let mut seen = vec![false; size];
            for i in 0..size {
                let j = reverse_bits(i, width);
                assert!(j < size);
                assert!(!seen[j], "collision at {} for width {}", j, width);
                seen[j] = true;
            }
        }
    }
}

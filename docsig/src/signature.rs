//! Traits of binary signatures of primitive integer types.
use std::hash::Hash;

use num_traits::int::PrimInt;

/// Trait of a binary signature held in a primitive unsigned integer.
/// Only the lowest bits up to some width are used.
pub trait Signature: Default + PrimInt + Hash {
    /// Gets the number of bits the type can hold.
    fn dim() -> usize;

    /// Gets the Hamming distance to the other signature.
    #[inline(always)]
    fn hamdist(self, rhs: Self) -> usize {
        (self ^ rhs).count_ones() as usize
    }

    /// Flips the `i`-th bit.
    #[inline(always)]
    fn flip(self, i: usize) -> Self {
        debug_assert!(i < Self::dim());
        self ^ (Self::one() << i)
    }

    /// Produces a signature whose lowest `width` bits are set.
    #[inline(always)]
    fn mask(width: usize) -> Self {
        debug_assert!(width <= Self::dim());
        if width == Self::dim() {
            Self::max_value()
        } else {
            (Self::one() << width) - Self::one()
        }
    }

    /// Checks if no bit at or above `width` is set.
    #[inline(always)]
    fn fits(self, width: usize) -> bool {
        self & !Self::mask(width) == Self::zero()
    }
}

macro_rules! impl_signature {
    ($($t:ty),*) => {
        $(
            impl Signature for $t {
                #[inline(always)]
                fn dim() -> usize {
                    <$t>::BITS as usize
                }
            }
        )*
    };
}

impl_signature!(u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_u8() {
        assert_eq!(u8::mask(0), 0b00000000);
        assert_eq!(u8::mask(4), 0b00001111);
        assert_eq!(u8::mask(8), 0b11111111);
    }

    #[test]
    fn test_mask_u32() {
        assert_eq!(u32::mask(24), 0x00ff_ffff);
        assert_eq!(u32::mask(32), u32::MAX);
    }

    #[test]
    fn test_hamdist() {
        assert_eq!(0b0000_0000u8.hamdist(0b0000_0011), 2);
        assert_eq!(0b0000_0000u8.hamdist(0b0000_0111), 3);
        assert_eq!(u64::MAX.hamdist(0), 64);
    }

    #[test]
    fn test_flip() {
        assert_eq!(0u16.flip(0), 1);
        assert_eq!(0u16.flip(15), 0x8000);
        assert_eq!(0b101u16.flip(2), 0b001);
    }

    #[test]
    fn test_fits() {
        assert!(0x00ff_ffffu32.fits(24));
        assert!(!0x0100_0000u32.fits(24));
        assert!(u32::MAX.fits(32));
    }
}

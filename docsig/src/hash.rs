//! String hashing of single tokens.
use rand_xoshiro::rand_core::{RngCore, SeedableRng};

const DJB2_INIT: u32 = 5381;

/// Hashes a token with [djb2](http://www.cse.yorku.ca/~oz/hash.html),
/// i.e., `h = h * 33 + c` over Unicode scalar values in wraparound 32-bit arithmetic.
///
/// # Examples
///
/// ```
/// use docsig::djb2;
///
/// assert_eq!(djb2(""), 5381);
/// assert_eq!(djb2("a"), 177670);
/// ```
#[inline]
pub fn djb2<S>(token: S) -> u32
where
    S: AsRef<str>,
{
    token
        .as_ref()
        .chars()
        .fold(DJB2_INIT, |h, c| h.wrapping_mul(33).wrapping_add(c as u32))
}

/// The same recurrence as [`djb2`] in 64-bit arithmetic.
#[inline]
pub fn djb2_wide<S>(token: S) -> u64
where
    S: AsRef<str>,
{
    token.as_ref().chars().fold(DJB2_INIT as u64, |h, c| {
        h.wrapping_mul(33).wrapping_add(c as u64)
    })
}

/// Scrambles a value with a seed through one SplitMix64 step.
#[inline(always)]
pub fn hash_u64(x: u64, seed: u64) -> u64 {
    rand_xoshiro::SplitMix64::seed_from_u64(x ^ seed).next_u64()
}

//! Simhash over word sets.
use crate::hash::{djb2_wide, hash_u64};
use crate::signature::Signature;

/// Default number of bits in a signature.
pub const DEFAULT_BIT_WIDTH: usize = 24;

const MAX_BIT_WIDTH: usize = 64;

/// [Simhash](https://doi.org/10.1145/509907.509965) by bit voting over a word set.
///
/// Each word is hashed with [`djb2_wide`] scrambled by a seeded SplitMix64 step.
/// For every bit position `i < bit_width`, a counter is incremented if the `i`-th bit
/// of the word hash is set and decremented otherwise.
/// The `i`-th counter decides the `(bit_width-1-i)`-th bit of the signature,
/// which is set iff the counter is positive.
#[derive(Clone, Copy, Debug)]
pub struct SimHasher {
    bit_width: usize,
    seed: u64,
}

impl Default for SimHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BIT_WIDTH)
    }
}

impl SimHasher {
    /// Creates an instance producing `bit_width`-bit signatures (in the range of `[1,64]`).
    pub fn new(bit_width: usize) -> Self {
        assert!((1..=MAX_BIT_WIDTH).contains(&bit_width));
        Self { bit_width, seed: 0 }
    }

    /// Sets the seed value for scrambling word hashes.
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Gets the number of bits in a signature.
    pub const fn bit_width(&self) -> usize {
        self.bit_width
    }

    /// Hashes a word.
    #[inline(always)]
    pub fn word_hash<W>(&self, word: W) -> u64
    where
        W: AsRef<str>,
    {
        hash_u64(djb2_wide(word), self.seed)
    }

    /// Computes the signature of a word set.
    /// Duplicate words are counted as many times as they appear.
    /// An empty set produces zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use docsig::SimHasher;
    ///
    /// let hasher = SimHasher::default();
    /// let x: u32 = hasher.sign(["linux", "server", "interface"]);
    /// let y: u32 = hasher.sign(["interface", "server", "linux"]);
    /// assert_eq!(x, y);
    /// assert!(x < 1 << 24);
    /// assert_eq!(hasher.sign::<u32, _, &str>([]), 0);
    /// ```
    pub fn sign<S, I, W>(&self, words: I) -> S
    where
        S: Signature,
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        assert!(self.bit_width <= S::dim());
        let mut counters = [0i64; MAX_BIT_WIDTH];
        let counters = &mut counters[..self.bit_width];
        for h in words.into_iter().map(|w| self.word_hash(w)) {
            for (i, c) in counters.iter_mut().enumerate() {
                if (h >> i) & 1 == 1 {
                    *c += 1;
                } else {
                    *c -= 1;
                }
            }
        }
        counters.iter().fold(S::zero(), |acc, &c| {
            if c > 0 {
                (acc << 1) | S::one()
            } else {
                acc << 1
            }
        })
    }
}

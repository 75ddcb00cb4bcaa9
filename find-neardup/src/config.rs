//! Configuration of signature computation.
use crate::errors::{FindNeardupError, Result};

/// Default number of words in a k-gram.
pub const DEFAULT_K: usize = 3;
/// Default window size of winnowing.
pub const DEFAULT_W: usize = 4;
/// Default number of bits in a simhash signature.
pub const DEFAULT_BIT_WIDTH: usize = docsig::simhash::DEFAULT_BIT_WIDTH;
/// Default minimum number of characters in an admitted word.
pub const DEFAULT_MIN_TOKEN_LENGTH: usize = 3;

const MAX_BIT_WIDTH: usize = 32;

/// Parameters shared by signers and searchers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Number of words in a k-gram for rolling hashing (must be more than 0).
    pub k: usize,
    /// Window size of winnowing (must be more than 0).
    pub w: usize,
    /// Number of bits in a simhash signature (in the range of `[1,32]`).
    pub bit_width: usize,
    /// Minimum number of characters in an admitted word.
    pub min_token_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            w: DEFAULT_W,
            bit_width: DEFAULT_BIT_WIDTH,
            min_token_length: DEFAULT_MIN_TOKEN_LENGTH,
        }
    }
}

impl Config {
    /// Creates a validated instance.
    ///
    /// # Examples
    ///
    /// ```
    /// use find_neardup::Config;
    ///
    /// assert_eq!(Config::new(3, 4, 24, 3).unwrap(), Config::default());
    /// assert!(Config::new(0, 4, 24, 3).is_err());
    /// ```
    pub fn new(k: usize, w: usize, bit_width: usize, min_token_length: usize) -> Result<Self> {
        let config = Self {
            k,
            w,
            bit_width,
            min_token_length,
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the number of words in a k-gram.
    ///
    /// # Examples
    ///
    /// ```
    /// use find_neardup::Config;
    ///
    /// let config = Config::default().k(5).w(2).bit_width(32).min_token_length(1);
    /// assert_eq!(config, Config::new(5, 2, 32, 1).unwrap());
    /// ```
    pub const fn k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Sets the window size of winnowing.
    pub const fn w(mut self, w: usize) -> Self {
        self.w = w;
        self
    }

    /// Sets the number of bits in a simhash signature.
    pub const fn bit_width(mut self, bit_width: usize) -> Self {
        self.bit_width = bit_width;
        self
    }

    /// Sets the minimum number of characters in an admitted word.
    pub const fn min_token_length(mut self, min_token_length: usize) -> Self {
        self.min_token_length = min_token_length;
        self
    }

    /// Checks the parameters.
    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(FindNeardupError::input("k must not be 0."));
        }
        if self.w == 0 {
            return Err(FindNeardupError::input("w must not be 0."));
        }
        if self.bit_width == 0 || MAX_BIT_WIDTH < self.bit_width {
            return Err(FindNeardupError::input(
                "bit_width must be in the range of [1,32].",
            ));
        }
        Ok(())
    }
}

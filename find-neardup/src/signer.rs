//! Signers composing a [`Normalizer`] with a signature function.
use docsig::{Fingerprint, SimHasher, Winnower, Winnowing};
use hashbrown::HashSet;

use crate::config::Config;
use crate::feature::Normalizer;

/// Trait of a transform from text into a signature.
pub trait Signer {
    /// Type of produced signatures.
    type Signature;

    /// Computes the signature of a text.
    fn sign(&self, text: &str) -> Self::Signature;
}

/// Signer producing selected winnowing fingerprints of the word sequence.
#[derive(Clone, Debug)]
pub struct WinnowingSigner {
    normalizer: Normalizer,
    winnower: Winnower,
}

impl WinnowingSigner {
    /// Creates an instance with `config.k` and `config.w`.
    /// The config is assumed to be validated.
    pub fn new(config: &Config, normalizer: Normalizer) -> Self {
        Self {
            normalizer,
            winnower: Winnower::new(config.k, config.w),
        }
    }

    /// Computes both all and selected fingerprints of a text.
    pub fn winnowing(&self, text: &str) -> Winnowing {
        self.winnower.fingerprints(&self.normalizer.words(text))
    }

    /// Gets the normalizer.
    pub const fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }
}

impl Signer for WinnowingSigner {
    type Signature = HashSet<Fingerprint>;

    fn sign(&self, text: &str) -> Self::Signature {
        self.winnowing(text).selected
    }
}

/// Signer producing a simhash signature of the word set.
#[derive(Clone, Debug)]
pub struct SimHashSigner {
    normalizer: Normalizer,
    hasher: SimHasher,
}

impl SimHashSigner {
    /// Creates an instance with `config.bit_width`.
    /// The config is assumed to be validated.
    pub fn new(config: &Config, normalizer: Normalizer) -> Self {
        Self {
            normalizer,
            hasher: SimHasher::new(config.bit_width),
        }
    }

    /// Gets the number of bits in a signature.
    pub const fn bit_width(&self) -> usize {
        self.hasher.bit_width()
    }

    /// Gets the normalizer.
    pub const fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }
}

impl Signer for SimHashSigner {
    type Signature = u32;

    fn sign(&self, text: &str) -> Self::Signature {
        self.hasher.sign(&self.normalizer.word_set(text))
    }
}

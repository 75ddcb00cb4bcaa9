//! Searcher of documents sharing winnowing fingerprints.
use std::hash::Hash;

use docsig::Fingerprint;
use hashbrown::HashSet;
use neardup_index::FingerprintIndex;
use rayon::prelude::*;

use crate::config::Config;
use crate::errors::{FindNeardupError, Result};
use crate::feature::Normalizer;
use crate::signer::{Signer, WinnowingSigner};

/// Searcher of documents sharing word sequences with a query,
/// using winnowing fingerprints of word k-grams.
pub struct WinnowingSearcher<D> {
    signer: WinnowingSigner,
    index: FingerprintIndex<D>,
    shows_progress: bool,
}

impl<D> WinnowingSearcher<D>
where
    D: Hash + Eq + Clone,
{
    /// Creates an instance with the default [`Normalizer`].
    ///
    /// # Arguments
    ///
    /// * `config` - Parameters, of which `k`, `w`, and `min_token_length` are used.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_normalizer(config, Normalizer::new(config.min_token_length))
    }

    /// Creates an instance with a given normalizer.
    pub fn with_normalizer(config: Config, normalizer: Normalizer) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            signer: WinnowingSigner::new(&config, normalizer),
            index: FingerprintIndex::new(),
            shows_progress: false,
        })
    }

    /// Shows the progress via the standard error output?
    pub const fn shows_progress(mut self, yes: bool) -> Self {
        self.shows_progress = yes;
        self
    }

    /// Indexes a document by the fingerprints of its text.
    /// A text with less than `k` admitted words is not retrievable.
    pub fn add(&mut self, text: &str, doc: D) {
        let signature = self.signer.sign(text);
        self.add_signature(&signature, doc);
    }

    /// Indexes a document by precomputed fingerprints.
    pub fn add_signature(&mut self, signature: &HashSet<Fingerprint>, doc: D) {
        self.index.add(signature.iter().cloned(), doc);
    }

    /// Finds documents sharing at least one fingerprint with the text.
    ///
    /// # Examples
    ///
    /// ```
    /// use find_neardup::{Config, WinnowingSearcher};
    ///
    /// let mut searcher = WinnowingSearcher::new(Config::default()).unwrap();
    /// searcher.add("Welcome to Jimbocho, the town of books and curry!", 0);
    /// searcher.add("Linux servers require administrators to configure interfaces.", 1);
    ///
    /// let found = searcher.find("We welcome you to Jimbocho, the town of books and curry.");
    /// assert!(found.contains(&0));
    /// assert!(!found.contains(&1));
    /// ```
    pub fn find(&self, text: &str) -> HashSet<D> {
        self.find_signature(&self.signer.sign(text))
    }

    /// Finds documents sharing at least one fingerprint with the signature.
    pub fn find_signature(&self, signature: &HashSet<Fingerprint>) -> HashSet<D> {
        self.index.find(signature.iter().cloned())
    }

    /// Finds the same documents as [`Self::find`], paired with the number of
    /// shared fingerprints in descending order.
    pub fn find_ranked(&self, text: &str) -> Vec<(D, usize)> {
        self.index.find_ranked(self.signer.sign(text))
    }

    /// Removes a document from the buckets of the text's fingerprints,
    /// returning `true` if it was found in any of them.
    pub fn remove(&mut self, text: &str, doc: &D) -> bool {
        self.index.remove(self.signer.sign(text), doc)
    }

    /// Builds the index from pairs of a document and its text (must not be empty).
    pub fn build<I, T>(mut self, documents: I) -> Result<Self>
    where
        I: IntoIterator<Item = (D, T)>,
        T: AsRef<str>,
    {
        for (i, (doc, text)) in documents.into_iter().enumerate() {
            if self.shows_progress && (i + 1) % 1000 == 0 {
                eprintln!("Processed {} documents...", i + 1);
            }
            let text = text.as_ref();
            if text.is_empty() {
                return Err(FindNeardupError::input("Input document must not be empty."));
            }
            self.add(text, doc);
        }
        Ok(self)
    }

    /// Builds the index in the same manner as [`Self::build`],
    /// computing signatures in parallel and then adding them in the input order.
    pub fn build_in_parallel<I, T>(mut self, documents: I) -> Result<Self>
    where
        I: IntoIterator<Item = (D, T)>,
        D: Send + Sync,
        T: AsRef<str> + Send + Sync,
    {
        let documents: Vec<_> = documents.into_iter().collect();
        if documents.iter().any(|(_, text)| text.as_ref().is_empty()) {
            return Err(FindNeardupError::input("Input document must not be empty."));
        }
        if self.shows_progress {
            eprintln!(
                "[WinnowingSearcher::build_in_parallel] Signing {} documents...",
                documents.len()
            );
        }
        let signer = &self.signer;
        let signatures: Vec<_> = documents
            .par_iter()
            .map(|(_, text)| signer.sign(text.as_ref()))
            .collect();
        for (i, ((doc, _), signature)) in documents.into_iter().zip(signatures).enumerate() {
            if self.shows_progress && (i + 1) % 1000 == 0 {
                eprintln!("Processed {} documents...", i + 1);
            }
            self.add_signature(&signature, doc);
        }
        if self.shows_progress {
            eprintln!(
                "[WinnowingSearcher::build_in_parallel] #buckets={}",
                self.index.num_buckets()
            );
        }
        Ok(self)
    }

    /// Gets the signer.
    pub const fn signer(&self) -> &WinnowingSigner {
        &self.signer
    }

    /// Gets the number of distinct retrievable documents.
    pub fn len(&self) -> usize {
        self.index.num_docs()
    }

    /// Checks if no document is retrievable.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

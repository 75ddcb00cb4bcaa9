//! Searcher of documents with nearby simhash signatures.
use neardup_index::SimHashIndex;
use rayon::prelude::*;

use crate::config::Config;
use crate::errors::{FindNeardupError, Result};
use crate::feature::Normalizer;
use crate::signer::{Signer, SimHashSigner};

/// Searcher of documents whose word sets have simhash signatures
/// within Hamming distance 2 of a query.
pub struct SimHashSearcher<D> {
    signer: SimHashSigner,
    index: SimHashIndex<u32, D>,
    shows_progress: bool,
}

impl<D> SimHashSearcher<D>
where
    D: Clone,
{
    /// Creates an instance with the default [`Normalizer`].
    ///
    /// # Arguments
    ///
    /// * `config` - Parameters, of which `bit_width` and `min_token_length` are used.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_normalizer(config, Normalizer::new(config.min_token_length))
    }

    /// Creates an instance with a given normalizer.
    pub fn with_normalizer(config: Config, normalizer: Normalizer) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            signer: SimHashSigner::new(&config, normalizer),
            index: SimHashIndex::new(config.bit_width)?,
            shows_progress: false,
        })
    }

    /// Shows the progress via the standard error output?
    pub const fn shows_progress(mut self, yes: bool) -> Self {
        self.shows_progress = yes;
        self
    }

    /// Indexes a document by the signature of its text.
    pub fn add(&mut self, text: &str, doc: D) -> Result<()> {
        let signature = self.signer.sign(text);
        self.add_signature(signature, doc)
    }

    /// Indexes a document by a precomputed signature.
    pub fn add_signature(&mut self, signature: u32, doc: D) -> Result<()> {
        Ok(self.index.add(signature, doc)?)
    }

    /// Finds documents whose signatures are within Hamming distance 2 of the text's.
    /// A document may appear more than once (see [`SimHashIndex::find`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use find_neardup::{Config, SimHashSearcher};
    ///
    /// let mut searcher = SimHashSearcher::new(Config::default()).unwrap();
    /// searcher.add("Welcome to Jimbocho, the town of books and curry!", 0).unwrap();
    ///
    /// let found = searcher.find("Welcome to the town of books and curry, Jimbocho!");
    /// assert_eq!(found, vec![0]);
    /// ```
    pub fn find(&self, text: &str) -> Vec<D> {
        self.find_signature(self.signer.sign(text))
    }

    /// Finds documents whose signatures are within Hamming distance 2 of the signature.
    pub fn find_signature(&self, signature: u32) -> Vec<D> {
        self.index.find(signature)
    }

    /// Removes every occurrence of a document indexed with the text,
    /// returning the number of removed occurrences.
    pub fn remove(&mut self, text: &str, doc: &D) -> usize
    where
        D: PartialEq,
    {
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
            self.add(text, doc)?;
        }
        Ok(self)
    }

    /// Builds the index in the same manner as [`Self::build`],
    /// computing signatures in parallel and then adding them in the input order.
    pub fn build_in_parallel<I, T>(self, documents: I) -> Result<Self>
    where
        I: IntoIterator<Item = (D, T)>,
        T: AsRef<str> + Sync,
    {
        let (docs, texts): (Vec<D>, Vec<T>) = documents.into_iter().unzip();
        let signatures = self.sign_all_in_parallel(&texts)?;
        self.build_from_signatures(docs.into_iter().zip(signatures))
    }

    /// Builds the index from pairs of a document and its precomputed signature,
    /// e.g., from [`Self::sign_all`] or [`Self::sign_all_in_parallel`].
    pub fn build_from_signatures<I>(mut self, signatures: I) -> Result<Self>
    where
        I: IntoIterator<Item = (D, u32)>,
    {
        for (i, (doc, signature)) in signatures.into_iter().enumerate() {
            if self.shows_progress && (i + 1) % 1000 == 0 {
                eprintln!("Processed {} documents...", i + 1);
            }
            self.add_signature(signature, doc)?;
        }
        if self.shows_progress {
            eprintln!(
                "[SimHashSearcher::build_from_signatures] #buckets={}",
                self.index.num_buckets()
            );
        }
        Ok(self)
    }

    /// Computes the signatures of texts (must not be empty) in the input order.
    pub fn sign_all<T>(&self, texts: &[T]) -> Result<Vec<u32>>
    where
        T: AsRef<str>,
    {
        check_texts(texts)?;
        Ok(texts.iter().map(|text| self.signer.sign(text.as_ref())).collect())
    }

    /// Computes the signatures in the same manner as [`Self::sign_all`] in parallel.
    ///
    /// # Examples
    ///
    /// ```
    /// use find_neardup::{Config, SimHashSearcher};
    ///
    /// let texts = ["Welcome to Jimbocho!", "The town of books and curry."];
    /// let searcher = SimHashSearcher::new(Config::default()).unwrap();
    /// let signatures = searcher.sign_all_in_parallel(&texts).unwrap();
    /// assert_eq!(signatures, searcher.sign_all(&texts).unwrap());
    ///
    /// let searcher = searcher
    ///     .build_from_signatures(signatures.into_iter().enumerate())
    ///     .unwrap();
    /// assert!(searcher.find(texts[1]).contains(&1));
    /// ```
    pub fn sign_all_in_parallel<T>(&self, texts: &[T]) -> Result<Vec<u32>>
    where
        T: AsRef<str> + Sync,
    {
        check_texts(texts)?;
        if self.shows_progress {
            eprintln!(
                "[SimHashSearcher::sign_all_in_parallel] Signing {} documents...",
                texts.len()
            );
        }
        let signer = &self.signer;
        Ok(texts
            .par_iter()
            .map(|text| signer.sign(text.as_ref()))
            .collect())
    }

    /// Gets the signer.
    pub const fn signer(&self) -> &SimHashSigner {
        &self.signer
    }

    /// Gets the number of indexed documents.
    pub const fn len(&self) -> usize {
        self.index.len()
    }

    /// Checks if no document is indexed.
    pub const fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

fn check_texts<T>(texts: &[T]) -> Result<()>
where
    T: AsRef<str>,
{
    if texts.iter().any(|text| text.as_ref().is_empty()) {
        return Err(FindNeardupError::input("Input document must not be empty."));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use docsig::Signature;

    const DOCUMENTS: [&str; 4] = [
        "Welcome to Jimbocho, the town of books and curry!",
        "Welcome to Jimbocho, the city of books and curry!",
        "We welcome you to Jimbocho, the town of books and curry.",
        "Welcome to the town of books and curry, Jimbocho!",
    ];

    fn example_searcher() -> SimHashSearcher<usize> {
        SimHashSearcher::new(Config::default())
            .unwrap()
            .build(DOCUMENTS.iter().enumerate())
            .unwrap()
    }

    #[test]
    fn test_same_word_set() {
        let searcher = example_searcher();
        assert_eq!(searcher.len(), 4);
        let mut found = searcher.find(DOCUMENTS[0]);
        found.sort_unstable();
        assert!(found.starts_with(&[0]));
        assert!(found.contains(&3));
    }

    #[test]
    fn test_consistent_with_distance() {
        let searcher = example_searcher();
        let signer = searcher.signer();
        for (i, query) in DOCUMENTS.iter().enumerate() {
            let q = signer.sign(query);
            let found = searcher.find(query);
            for (j, doc) in DOCUMENTS.iter().enumerate() {
                let d = signer.sign(doc);
                assert_eq!(found.contains(&j), q.hamdist(d) <= 2, "i={i},j={j}");
            }
        }
    }

    #[test]
    fn test_parallel() {
        let sequential = example_searcher();
        let parallel = SimHashSearcher::new(Config::default())
            .unwrap()
            .build_in_parallel(DOCUMENTS.iter().enumerate())
            .unwrap();
        assert_eq!(parallel.len(), sequential.len());
        for doc in DOCUMENTS {
            assert_eq!(parallel.find(doc), sequential.find(doc));
        }
    }

    #[test]
    fn test_empty_word_set() {
        let mut searcher = SimHashSearcher::new(Config::default()).unwrap();
        searcher.add("a an to", "short").unwrap();
        assert_eq!(searcher.signer().sign("a an to"), 0);
        assert_eq!(searcher.find("of it"), vec!["short"]);
    }

    #[test]
    fn test_duplicates() {
        let mut searcher = SimHashSearcher::new(Config::default()).unwrap();
        searcher.add(DOCUMENTS[0], 0).unwrap();
        searcher.add(DOCUMENTS[0], 0).unwrap();
        assert_eq!(searcher.find(DOCUMENTS[0]), vec![0, 0]);
        assert_eq!(searcher.remove(DOCUMENTS[0], &0), 2);
        assert!(searcher.is_empty());
    }

    #[test]
    fn test_build_from_signatures() {
        let searcher = SimHashSearcher::new(Config::default()).unwrap();
        let signatures = searcher.sign_all(&DOCUMENTS).unwrap();
        assert_eq!(signatures, searcher.sign_all_in_parallel(&DOCUMENTS).unwrap());
        for (text, &signature) in DOCUMENTS.iter().zip(&signatures) {
            assert_eq!(searcher.signer().sign(text), signature);
        }

        let searcher = searcher
            .build_from_signatures(signatures.into_iter().enumerate())
            .unwrap();
        let expected = example_searcher();
        assert_eq!(searcher.len(), expected.len());
        for doc in DOCUMENTS {
            assert_eq!(searcher.find(doc), expected.find(doc));
        }
    }

    #[test]
    fn test_sign_all_empty() {
        let searcher = SimHashSearcher::<usize>::new(Config::default()).unwrap();
        assert!(searcher.sign_all(&["books", ""]).is_err());
        assert!(searcher.sign_all_in_parallel(&["", "books"]).is_err());
        assert!(searcher.sign_all::<&str>(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_empty_document() {
        let result = SimHashSearcher::new(Config::default())
            .unwrap()
            .build([(0, "")]);
        assert!(result.is_err());
    }
}

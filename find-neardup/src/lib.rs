//! Retrieval of near-duplicate documents by winnowing fingerprints and simhash signatures.
//!
//! Texts are normalized into words by a [`Normalizer`](feature::Normalizer),
//! signed by a [`Signer`](signer::Signer), and indexed by one of two searchers:
//!
//! * [`WinnowingSearcher`] finds documents sharing a run of words with a query;
//! * [`SimHashSearcher`] finds documents with similar word sets.
//!
//! [`FullTextSearcher`] is a fallback aggregating an external full-text engine.
#![deny(missing_docs)]

pub mod config;
pub mod errors;
pub mod feature;
pub mod fulltext;
pub mod signer;
pub mod simhash;
pub mod summary;
pub mod winnowing;

pub use config::Config;
pub use fulltext::{FullTextEngine, FullTextSearcher};
pub use simhash::SimHashSearcher;
pub use summary::RandomSummary;
pub use winnowing::WinnowingSearcher;

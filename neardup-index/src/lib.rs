//! This library provides in-memory indexes for retrieving near-duplicate candidates
//! of a query document from its signature, without scanning all stored documents.
//!
//! * [`FingerprintIndex`] is an inverted index from winnowing fingerprints to documents.
//! * [`SimHashIndex`] buckets documents by simhash signature and probes the Hamming ball
//!   of radius 2 around a query.
//!
//! Both take `&mut self` for mutation and `&self` for queries, so an index built by a
//! single writer can be queried concurrently.
#![deny(missing_docs)]

pub mod fingerprint;
pub mod simhash;

pub use fingerprint::FingerprintIndex;
pub use simhash::SimHashIndex;

//! Deterministic signatures of normalized word sequences.
//!
//! Two independent paths are provided:
//!
//! * word k-grams hashed with a rolling djb2 scheme and thinned out by
//!   [winnowing](https://doi.org/10.1145/872757.872770), see [`Winnower`];
//! * bit-voting [simhash](https://doi.org/10.1145/509907.509965) codes over word sets,
//!   see [`SimHasher`].
//!
//! Every function here is pure and gives identical results across processes.
#![deny(missing_docs)]

pub mod hash;
pub mod rolling;
pub mod signature;
pub mod simhash;
pub mod winnowing;

pub use hash::{djb2, djb2_wide};
pub use rolling::{rolling_hashes, RollingHasher};
pub use signature::Signature;
pub use simhash::SimHasher;
pub use winnowing::{winnow, Winnower, Winnowing};

/// Hash value of a window of `k` consecutive words.
pub type Fingerprint = u32;

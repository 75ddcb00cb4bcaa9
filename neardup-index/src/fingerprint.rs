//! Inverted index from winnowing fingerprints to documents.
use std::cmp::Reverse;
use std::hash::Hash;

use docsig::Fingerprint;
use hashbrown::{HashMap, HashSet};

/// Inverted index from fingerprints to sets of documents.
///
/// A document added with fingerprints `A` is found by a query with fingerprints `B`
/// iff `A` and `B` intersect.
pub struct FingerprintIndex<D> {
    buckets: HashMap<Fingerprint, HashSet<D>>,
    // Number of buckets containing each document.
    postings: HashMap<D, usize>,
}

impl<D> Default for FingerprintIndex<D> {
    fn default() -> Self {
        Self {
            buckets: HashMap::new(),
            postings: HashMap::new(),
        }
    }
}

impl<D> FingerprintIndex<D>
where
    D: Hash + Eq + Clone,
{
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `doc` to the bucket of every fingerprint in `signature`.
    /// Adding the same pair twice has no effect.
    pub fn add<I>(&mut self, signature: I, doc: D)
    where
        I: IntoIterator<Item = Fingerprint>,
    {
        for fp in signature {
            if self.buckets.entry(fp).or_default().insert(doc.clone()) {
                *self.postings.entry(doc.clone()).or_insert(0) += 1;
            }
        }
    }

    /// Returns the union of the buckets of all fingerprints in `signature`.
    ///
    /// # Examples
    ///
    /// ```
    /// use neardup_index::FingerprintIndex;
    ///
    /// let mut index = FingerprintIndex::new();
    /// index.add([5, 9, 12], "D2");
    /// index.add([20, 30], "D3");
    ///
    /// let found = index.find([9, 30]);
    /// assert_eq!(found.len(), 2);
    /// assert!(found.contains("D2") && found.contains("D3"));
    /// ```
    pub fn find<I>(&self, signature: I) -> HashSet<D>
    where
        I: IntoIterator<Item = Fingerprint>,
    {
        let mut results = HashSet::new();
        for fp in signature {
            if let Some(bucket) = self.buckets.get(&fp) {
                results.extend(bucket.iter().cloned());
            }
        }
        results
    }

    /// Returns the same documents as [`Self::find`], each paired with the number of
    /// distinct query fingerprints it shares, in descending order of the number.
    /// Documents sharing the same number are in arbitrary order.
    pub fn find_ranked<I>(&self, signature: I) -> Vec<(D, usize)>
    where
        I: IntoIterator<Item = Fingerprint>,
    {
        let mut seen = HashSet::new();
        let mut counter = HashMap::<D, usize>::new();
        for fp in signature {
            if !seen.insert(fp) {
                continue;
            }
            if let Some(bucket) = self.buckets.get(&fp) {
                for doc in bucket {
                    *counter.entry(doc.clone()).or_insert(0) += 1;
                }
            }
        }
        let mut ranked: Vec<_> = counter.into_iter().collect();
        ranked.sort_by_key(|&(_, cnt)| Reverse(cnt));
        ranked
    }

    /// Removes `doc` from the buckets of all fingerprints in `signature`,
    /// returning `true` if it was found in any of them.
    /// The document stays retrievable through fingerprints not in `signature`.
    pub fn remove<I>(&mut self, signature: I, doc: &D) -> bool
    where
        I: IntoIterator<Item = Fingerprint>,
    {
        let mut removed = false;
        for fp in signature {
            let (hit, emptied) = match self.buckets.get_mut(&fp) {
                Some(bucket) => (bucket.remove(doc), bucket.is_empty()),
                None => (false, false),
            };
            if emptied {
                self.buckets.remove(&fp);
            }
            if !hit {
                continue;
            }
            removed = true;
            if let Some(cnt) = self.postings.get_mut(doc) {
                *cnt -= 1;
                if *cnt == 0 {
                    self.postings.remove(doc);
                }
            }
        }
        removed
    }

    /// Checks if `doc` is in any bucket.
    pub fn contains(&self, doc: &D) -> bool {
        self.postings.contains_key(doc)
    }

    /// Gets the number of distinct documents in any bucket.
    /// Documents added with no fingerprint are not counted.
    pub fn num_docs(&self) -> usize {
        self.postings.len()
    }

    /// Gets the number of non-empty buckets.
    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    /// Checks if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

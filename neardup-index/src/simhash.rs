//! Bucket index of simhash signatures with Hamming-radius probing.
use anyhow::{anyhow, Result};
use docsig::Signature;
use hashbrown::HashMap;

/// Largest radius of Hamming-ball probing.
pub const MAX_RADIUS: usize = 2;

/// Index from simhash signatures of `bit_width` bits to lists of documents.
///
/// Buckets are lists, not sets: a document added twice is stored twice.
/// Likewise, [`Self::find`] concatenates the probed buckets without deduplication,
/// so the number of occurrences of a document in the result can be used as a
/// relevance signal by a downstream re-ranking stage.
pub struct SimHashIndex<S, D> {
    buckets: HashMap<S, Vec<D>>,
    bit_width: usize,
    num_postings: usize,
}

impl<S, D> SimHashIndex<S, D>
where
    S: Signature,
    D: Clone,
{
    /// Creates an empty index for signatures of `bit_width` bits
    /// (in the range of `[1, S::dim()]`).
    pub fn new(bit_width: usize) -> Result<Self> {
        if bit_width == 0 || S::dim() < bit_width {
            return Err(anyhow!(
                "The bit width must be in the range of [1,{}], but got {bit_width}.",
                S::dim()
            ));
        }
        Ok(Self {
            buckets: HashMap::new(),
            bit_width,
            num_postings: 0,
        })
    }

    /// Appends `doc` to the bucket of `signature`.
    /// An error is returned if `signature` has a bit set at or above the bit width.
    pub fn add(&mut self, signature: S, doc: D) -> Result<()> {
        if !signature.fits(self.bit_width) {
            return Err(anyhow!(
                "The input signature must fit in {} bits.",
                self.bit_width
            ));
        }
        self.buckets.entry(signature).or_default().push(doc);
        self.num_postings += 1;
        Ok(())
    }

    /// Returns the documents whose signatures are within Hamming distance 2 of `signature`.
    ///
    /// It probes `1 + b + b(b-1)/2` buckets for the bit width `b`: the exact signature,
    /// then for every `i` the signature with the `i`-th bit flipped followed by those with
    /// the `i`-th and every `j`-th (`j > i`) bits flipped.
    /// Results are concatenated in this order and may contain duplicates.
    ///
    /// # Examples
    ///
    /// ```
    /// use neardup_index::SimHashIndex;
    ///
    /// let mut index = SimHashIndex::<u32, _>::new(6).unwrap();
    /// index.add(0b000000, "D1").unwrap();
    ///
    /// assert_eq!(index.find(0b000011), vec!["D1"]);
    /// assert!(index.find(0b000111).is_empty());
    /// ```
    pub fn find(&self, signature: S) -> Vec<D> {
        self.collect(signature, MAX_RADIUS)
    }

    /// Returns the documents whose signatures are within Hamming distance `radius`
    /// (at most [`MAX_RADIUS`]) of `signature`, in the same probing order as [`Self::find`].
    pub fn find_within(&self, signature: S, radius: usize) -> Result<Vec<D>> {
        Self::check_radius(radius)?;
        Ok(self.collect(signature, radius))
    }

    /// Enumerates the signatures probed for a query within `radius`
    /// (at most [`MAX_RADIUS`]), in the order described in [`Self::find`].
    pub fn probes(&self, signature: S, radius: usize) -> Result<Vec<S>> {
        Self::check_radius(radius)?;
        Ok(self.ball(signature, radius))
    }

    fn check_radius(radius: usize) -> Result<()> {
        if MAX_RADIUS < radius {
            return Err(anyhow!(
                "The radius must be at most {MAX_RADIUS}, but got {radius}."
            ));
        }
        Ok(())
    }

    fn ball(&self, signature: S, radius: usize) -> Vec<S> {
        let mut probes = vec![signature];
        if radius == 0 {
            return probes;
        }
        for i in 0..self.bit_width {
            let s_i = signature.flip(i);
            probes.push(s_i);
            if radius >= 2 {
                for j in i + 1..self.bit_width {
                    probes.push(s_i.flip(j));
                }
            }
        }
        probes
    }

    /// Removes every occurrence of `doc` from the bucket of `signature`,
    /// returning the number of removed occurrences.
    pub fn remove(&mut self, signature: S, doc: &D) -> usize
    where
        D: PartialEq,
    {
        let removed = if let Some(bucket) = self.buckets.get_mut(&signature) {
            let len = bucket.len();
            bucket.retain(|d| d != doc);
            let removed = len - bucket.len();
            if bucket.is_empty() {
                self.buckets.remove(&signature);
            }
            removed
        } else {
            0
        };
        self.num_postings -= removed;
        removed
    }

    /// Gets the number of bits in signatures.
    pub const fn bit_width(&self) -> usize {
        self.bit_width
    }

    /// Gets the number of non-empty buckets.
    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    /// Gets the number of stored documents, counting duplicates.
    pub const fn len(&self) -> usize {
        self.num_postings
    }

    /// Checks if the index is empty.
    pub const fn is_empty(&self) -> bool {
        self.num_postings == 0
    }

    fn collect(&self, signature: S, radius: usize) -> Vec<D> {
        let mut candidates = vec![];
        for probe in self.ball(signature, radius) {
            if let Some(bucket) = self.buckets.get(&probe) {
                candidates.extend(bucket.iter().cloned());
            }
        }
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use hashbrown::HashSet;

    #[test]
    fn test_radius() {
        let mut index = SimHashIndex::<u32, _>::new(6).unwrap();
        index.add(0b000000, "D1").unwrap();
        assert_eq!(index.find(0b000000), vec!["D1"]);
        assert_eq!(index.find(0b100000), vec!["D1"]);
        assert_eq!(index.find(0b000011), vec!["D1"]);
        assert!(index.find(0b000111).is_empty());
        assert!(index.find(0b111111).is_empty());
    }

    #[test]
    fn test_empty() {
        let index = SimHashIndex::<u32, usize>::new(24).unwrap();
        assert!(index.is_empty());
        assert!(index.find(0).is_empty());
    }

    #[test]
    fn test_duplicates() {
        let mut index = SimHashIndex::<u16, _>::new(8).unwrap();
        index.add(0b0000_0001, 1).unwrap();
        index.add(0b0000_0001, 1).unwrap();
        index.add(0b0000_0011, 1).unwrap();
        index.add(0b1000_0000, 2).unwrap();
        assert_eq!(index.len(), 4);
        assert_eq!(index.num_buckets(), 3);

        let mut found = index.find(0b0000_0001);
        found.sort_unstable();
        assert_eq!(found, vec![1, 1, 1, 2]);
    }

    #[test]
    fn test_probe_order() {
        let mut index = SimHashIndex::<u8, _>::new(3).unwrap();
        for s in 0..8u8 {
            index.add(s, s).unwrap();
        }
        assert_eq!(index.find(0b000), vec![0, 1, 3, 5, 2, 6, 4]);
    }

    #[test]
    fn test_probes() {
        let index = SimHashIndex::<u32, ()>::new(24).unwrap();
        let query = 0x00a5_a5a5;
        for (radius, expected) in [(0, 1), (1, 25), (2, 301)] {
            let probes = index.probes(query, radius).unwrap();
            assert_eq!(probes.len(), expected);
            let distinct: HashSet<_> = probes.iter().cloned().collect();
            assert_eq!(distinct.len(), expected);
            assert!(probes
                .iter()
                .all(|&p| p.fits(24) && p.hamdist(query) <= radius));
        }
    }

    #[test]
    fn test_probes_invalid_radius() {
        let index = SimHashIndex::<u32, ()>::new(24).unwrap();
        assert!(index.probes(0, MAX_RADIUS).is_ok());
        assert!(index.probes(0, MAX_RADIUS + 1).is_err());
        assert!(index.probes(0, 5).is_err());
    }

    #[test]
    fn test_find_within() {
        let mut index = SimHashIndex::<u32, _>::new(6).unwrap();
        index.add(0b000000, "D1").unwrap();
        assert!(index.find_within(0b000001, 0).unwrap().is_empty());
        assert_eq!(index.find_within(0b000001, 1).unwrap(), vec!["D1"]);
        assert!(index.find_within(0b000001, 3).is_err());
    }

    #[test]
    fn test_remove() {
        let mut index = SimHashIndex::<u32, _>::new(24).unwrap();
        index.add(7, "a").unwrap();
        index.add(7, "b").unwrap();
        index.add(7, "a").unwrap();
        assert_eq!(index.remove(7, &"a"), 2);
        assert_eq!(index.remove(7, &"a"), 0);
        assert_eq!(index.len(), 1);
        assert_eq!(index.remove(7, &"b"), 1);
        assert!(index.is_empty());
        assert_eq!(index.num_buckets(), 0);
    }

    #[test]
    fn test_invalid_input() {
        assert!(SimHashIndex::<u8, ()>::new(0).is_err());
        assert!(SimHashIndex::<u8, ()>::new(9).is_err());
        let mut index = SimHashIndex::<u32, ()>::new(24).unwrap();
        assert!(index.add(1 << 24, ()).is_err());
        assert!(index.is_empty());
    }
}

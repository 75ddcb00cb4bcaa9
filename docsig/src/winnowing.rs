//! Winnowing selection of fingerprints.
use hashbrown::HashSet;

use crate::rolling::RollingHasher;
use crate::Fingerprint;

/// Fingerprints of a document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Winnowing {
    /// All distinct fingerprints in the stream.
    pub all: HashSet<Fingerprint>,
    /// Fingerprints selected as window minima.
    pub selected: HashSet<Fingerprint>,
}

/// Selects the minimum of every window of `w` consecutive fingerprints.
///
/// If the stream has less than `w` fingerprints, its global minimum is selected.
/// An empty stream produces empty sets.
///
/// # Examples
///
/// ```
/// use docsig::{rolling_hashes, winnow};
///
/// let tokens = ["b", "a", "a", "a", "b", "a", "a", "a"];
/// let result = winnow(rolling_hashes(&tokens, 3), 3);
/// assert_eq!(result.all.len(), 4);
/// assert!(result.selected.contains(&1243690));
/// assert!(result.selected.contains(&1243691));
/// assert_eq!(result.selected.len(), 2);
/// ```
pub fn winnow<I>(fingerprints: I, w: usize) -> Winnowing
where
    I: IntoIterator<Item = Fingerprint>,
{
    assert!(w >= 1);
    let fps: Vec<_> = fingerprints.into_iter().collect();
    let all = fps.iter().cloned().collect();
    let selected = if fps.len() < w {
        fps.iter().min().cloned().into_iter().collect()
    } else {
        fps.windows(w)
            .filter_map(|window| window.iter().min().cloned())
            .collect()
    };
    Winnowing { all, selected }
}

/// Winnowing over word `k`-grams with window size `w`.
///
/// Any run of at least `k + w - 1` words shared by two documents
/// yields at least one shared selected fingerprint.
#[derive(Clone, Copy, Debug)]
pub struct Winnower {
    hasher: RollingHasher,
    w: usize,
}

impl Winnower {
    /// Creates an instance (`k` and `w` must be more than 0).
    pub fn new(k: usize, w: usize) -> Self {
        assert!(w >= 1);
        Self {
            hasher: RollingHasher::new(k),
            w,
        }
    }

    /// Gets the number of words in a k-gram.
    pub const fn k(&self) -> usize {
        self.hasher.k()
    }

    /// Gets the window size.
    pub const fn w(&self) -> usize {
        self.w
    }

    /// Computes the fingerprints of a word sequence.
    pub fn fingerprints<T>(&self, tokens: &[T]) -> Winnowing
    where
        T: AsRef<str>,
    {
        winnow(self.hasher.iter(tokens), self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(fps: &[Fingerprint]) -> HashSet<Fingerprint> {
        fps.iter().cloned().collect()
    }

    #[test]
    fn test_uniform() {
        let result = Winnower::new(3, 3).fingerprints(&["a", "a", "a", "a"]);
        assert_eq!(result.all, set(&[1243690]));
        assert_eq!(result.selected, set(&[1243690]));
    }

    #[test]
    fn test_mixed() {
        let tokens = ["b", "a", "a", "a", "b", "a", "a", "a"];
        let result = Winnower::new(3, 3).fingerprints(&tokens);
        assert_eq!(result.all, set(&[1243690, 1243691, 1243692, 1243694]));
        assert_eq!(result.selected, set(&[1243690, 1243691]));
    }

    #[test]
    fn test_empty() {
        let result = Winnower::new(3, 4).fingerprints(&["a", "b"]);
        assert!(result.all.is_empty());
        assert!(result.selected.is_empty());
        assert_eq!(winnow([], 2), Winnowing::default());
    }

    #[test]
    fn test_global_minimum() {
        let result = winnow([7, 3, 9], 4);
        assert_eq!(result.all, set(&[3, 7, 9]));
        assert_eq!(result.selected, set(&[3]));
    }

    #[test]
    fn test_windows() {
        let result = winnow([77, 74, 42, 17, 98, 50, 17, 98, 8, 88, 67, 39, 77, 74, 42], 4);
        assert_eq!(result.selected, set(&[8, 17, 39]));
    }

    #[test]
    fn test_single_window() {
        assert_eq!(winnow([5, 1, 4], 1).selected, set(&[1, 4, 5]));
        assert_eq!(winnow([5, 1, 4], 3).selected, set(&[1]));
    }
}

//! Rabin-Karp style rolling hashing over word k-grams.
use crate::hash::djb2;
use crate::Fingerprint;

/// Shifts left, treating shifts of the full width or more as producing zero.
#[inline(always)]
fn shl(h: Fingerprint, s: usize) -> Fingerprint {
    u32::try_from(s)
        .ok()
        .and_then(|s| h.checked_shl(s))
        .unwrap_or(0)
}

/// Rolling hasher yielding one [`Fingerprint`] per window of `k` consecutive words.
///
/// The fingerprint of words `t_0..t_k` is `sum(djb2(t_i) << (k-1-i))`
/// in wraparound 32-bit arithmetic.
#[derive(Clone, Copy, Debug)]
pub struct RollingHasher {
    k: usize,
}

impl RollingHasher {
    /// Creates an instance for `k`-grams (must be more than 0).
    pub fn new(k: usize) -> Self {
        assert!(k >= 1);
        Self { k }
    }

    /// Gets the number of words in a window.
    pub const fn k(&self) -> usize {
        self.k
    }

    /// Creates an iterator of fingerprints over `tokens`.
    /// It yields `tokens.len() - k + 1` values, or nothing if `tokens` has less than `k` words.
    pub fn iter<'a, T>(&self, tokens: &'a [T]) -> RollingHashIter<'a, T>
    where
        T: AsRef<str>,
    {
        RollingHashIter {
            tokens,
            k: self.k,
            window: Vec::with_capacity(self.k),
            position: 0,
            acc: 0,
        }
    }
}

/// Shorthand of `RollingHasher::new(k).iter(tokens)`.
///
/// # Examples
///
/// ```
/// use docsig::rolling_hashes;
///
/// let fps: Vec<_> = rolling_hashes(&["b", "a", "a", "a"], 3).collect();
/// assert_eq!(fps, vec![1243694, 1243690]);
/// ```
pub fn rolling_hashes<T>(tokens: &[T], k: usize) -> RollingHashIter<T>
where
    T: AsRef<str>,
{
    RollingHasher::new(k).iter(tokens)
}

/// Iterator of rolling fingerprints.
pub struct RollingHashIter<'a, T> {
    tokens: &'a [T],
    k: usize,
    // Ring buffer of the token hashes in the current window.
    window: Vec<Fingerprint>,
    // Position of the next incoming token.
    position: usize,
    acc: Fingerprint,
}

impl<'a, T> Iterator for RollingHashIter<'a, T>
where
    T: AsRef<str>,
{
    type Item = Fingerprint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position == 0 {
            if self.tokens.len() < self.k {
                return None;
            }
            for token in &self.tokens[..self.k] {
                let h = djb2(token);
                self.window.push(h);
                self.acc = (self.acc << 1).wrapping_add(h);
            }
            self.position = self.k;
            return Some(self.acc);
        }
        if self.position >= self.tokens.len() {
            return None;
        }
        let h = djb2(&self.tokens[self.position]);
        let slot = self.position % self.k;
        let removed = shl(self.window[slot], self.k - 1);
        self.acc = (self.acc.wrapping_sub(removed) << 1).wrapping_add(h);
        self.window[slot] = h;
        self.position += 1;
        Some(self.acc)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.position == 0 {
            (self.tokens.len() + 1).saturating_sub(self.k)
        } else {
            self.tokens.len() - self.position
        };
        (remaining, Some(remaining))
    }
}

impl<'a, T> ExactSizeIterator for RollingHashIter<'a, T> where T: AsRef<str> {}

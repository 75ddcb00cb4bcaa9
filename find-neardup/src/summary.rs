//! Random summaries of word sets for full-text queries.
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Default maximum number of words in a summary.
pub const DEFAULT_MAX_WORDS: usize = 4;

/// Generator of short queries from word sets by random sampling.
pub struct RandomSummary {
    max_words: usize,
    rng: Xoshiro256PlusPlus,
}

impl Default for RandomSummary {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WORDS, None)
    }
}

impl RandomSummary {
    /// Creates an instance.
    ///
    /// # Arguments
    ///
    /// * `max_words` - Maximum number of words in a summary.
    /// * `seed` - Seed value for random values.
    pub fn new(max_words: usize, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random::<u64>);
        Self {
            max_words,
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    /// Gets the maximum number of words in a summary.
    pub const fn max_words(&self) -> usize {
        self.max_words
    }

    /// Produces a space-separated summary of at most `max_words` distinct words
    /// sampled uniformly without replacement. Apostrophes are removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use find_neardup::RandomSummary;
    ///
    /// let mut summary = RandomSummary::new(4, Some(42));
    /// assert_eq!(summary.summarize(["linux", "eth0"]), "eth0 linux");
    ///
    /// let words = ["linux", "server", "administrator", "interface", "eth0", "configure"];
    /// assert_eq!(summary.summarize(words).split(' ').count(), 4);
    /// ```
    pub fn summarize<I, W>(&mut self, words: I) -> String
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let words: Vec<W> = words.into_iter().collect();
        let mut picked: Vec<&str> = words.iter().map(|w| w.as_ref()).collect();
        // The sampling must not depend on the iteration order of a hash set.
        picked.sort_unstable();
        picked.dedup();
        if self.max_words < picked.len() {
            picked = picked
                .choose_multiple(&mut self.rng, self.max_words)
                .cloned()
                .collect();
        }
        picked.join(" ").replace('\'', "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use hashbrown::HashSet;

    const WORDS: [&str; 8] = [
        "linux",
        "server",
        "administrator",
        "interface",
        "eth0",
        "configure",
        "require",
        "tend",
    ];

    #[test]
    fn test_few_words() {
        let mut summary = RandomSummary::new(4, Some(1));
        assert_eq!(summary.summarize(["tend", "linux", "linux"]), "linux tend");
        assert_eq!(summary.summarize(Vec::<String>::new()), "");
    }

    #[test]
    fn test_sampling() {
        let mut summary = RandomSummary::new(4, Some(1));
        for _ in 0..10 {
            let result = summary.summarize(WORDS);
            let picked: HashSet<_> = result.split(' ').collect();
            assert_eq!(picked.len(), 4);
            assert!(picked.iter().all(|w| WORDS.contains(w)));
        }
    }

    #[test]
    fn test_seeded() {
        let mut x = RandomSummary::new(3, Some(42));
        let mut y = RandomSummary::new(3, Some(42));
        let reversed: Vec<_> = WORDS.iter().rev().collect();
        for _ in 0..5 {
            assert_eq!(x.summarize(WORDS), y.summarize(&reversed));
        }
    }

    #[test]
    fn test_apostrophe() {
        let mut summary = RandomSummary::default();
        assert_eq!(summary.summarize(["o'reilly", "books"]), "books oreilly");
    }
}

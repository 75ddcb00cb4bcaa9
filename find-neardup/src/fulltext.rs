//! Frequency voting over a probabilistic full-text engine.
use std::cmp::Reverse;
use std::hash::Hash;

use hashbrown::HashMap;

use crate::summary::RandomSummary;

/// Default number of queries issued per search.
pub const DEFAULT_ITERATIONS: usize = 10;

/// Number of candidates requested per query and returned per search.
pub const NUM_RESULTS: usize = 5;

/// Trait of an external ranked full-text engine.
pub trait FullTextEngine {
    /// Identifier of a stored document.
    type Id;
    /// Error raised by the engine.
    type Error;

    /// Returns at most `limit` identifiers of documents matching `query` in the order of rank,
    /// excluding `exclude` if given.
    fn search(
        &mut self,
        query: &str,
        exclude: Option<&Self::Id>,
        limit: usize,
    ) -> Result<Vec<Self::Id>, Self::Error>;
}

/// Searcher issuing random summaries of a word set to a [`FullTextEngine`] repeatedly
/// and voting on the returned candidates.
pub struct FullTextSearcher {
    summary: RandomSummary,
    iterations: usize,
    shows_progress: bool,
}

impl Default for FullTextSearcher {
    fn default() -> Self {
        Self::new(RandomSummary::default(), DEFAULT_ITERATIONS)
    }
}

impl FullTextSearcher {
    /// Creates an instance issuing `iterations` queries per search.
    pub const fn new(summary: RandomSummary, iterations: usize) -> Self {
        Self {
            summary,
            iterations,
            shows_progress: false,
        }
    }

    /// Shows the progress via the standard error output?
    pub const fn shows_progress(mut self, yes: bool) -> Self {
        self.shows_progress = yes;
        self
    }

    /// Gets the number of queries issued per search.
    pub const fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the [`NUM_RESULTS`] identifiers most frequently returned by the engine
    /// over all iterations. Ties are broken by the first appearance.
    /// The first error from the engine is returned as it is.
    pub fn find<E, W>(
        &mut self,
        engine: &mut E,
        words: &[W],
        exclude: Option<&E::Id>,
    ) -> Result<Vec<E::Id>, E::Error>
    where
        E: FullTextEngine,
        E::Id: Hash + Eq + Clone,
        W: AsRef<str>,
    {
        // Identifier to the pair of its frequency and first appearance.
        let mut counter = HashMap::<E::Id, (usize, usize)>::new();
        for i in 0..self.iterations {
            let query = self.summary.summarize(words);
            if self.shows_progress {
                eprintln!("[FullTextSearcher::find] Query {}: {query}", i + 1);
            }
            for id in engine.search(&query, exclude, NUM_RESULTS)? {
                let order = counter.len();
                counter.entry(id).or_insert((0, order)).0 += 1;
            }
        }
        let mut ranked: Vec<_> = counter.into_iter().collect();
        ranked.sort_unstable_by_key(|&(_, (cnt, order))| (Reverse(cnt), order));
        Ok(ranked
            .into_iter()
            .take(NUM_RESULTS)
            .map(|(id, _)| id)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Engine returning the listed documents containing any query word.
    struct ListEngine {
        documents: Vec<(u32, &'static str)>,
        num_calls: usize,
    }

    impl FullTextEngine for ListEngine {
        type Id = u32;
        type Error = String;

        fn search(
            &mut self,
            query: &str,
            exclude: Option<&u32>,
            limit: usize,
        ) -> Result<Vec<u32>, String> {
            self.num_calls += 1;
            Ok(self
                .documents
                .iter()
                .filter(|(id, _)| Some(id) != exclude)
                .filter(|(_, text)| query.split(' ').any(|w| text.split(' ').any(|t| t == w)))
                .map(|&(id, _)| id)
                .take(limit)
                .collect())
        }
    }

    struct FailingEngine;

    impl FullTextEngine for FailingEngine {
        type Id = u32;
        type Error = &'static str;

        fn search(&mut self, _: &str, _: Option<&u32>, _: usize) -> Result<Vec<u32>, Self::Error> {
            Err("unavailable")
        }
    }

    fn example_engine() -> ListEngine {
        ListEngine {
            documents: vec![
                (0, "linux server interface"),
                (1, "linux desktop"),
                (2, "curry books"),
                (3, "server interface eth0"),
                (4, "eth0"),
            ],
            num_calls: 0,
        }
    }

    #[test]
    fn test_voting() {
        let mut engine = example_engine();
        let mut searcher = FullTextSearcher::new(RandomSummary::new(4, Some(42)), 10);
        let words = ["linux", "server", "interface"];
        let results = searcher.find(&mut engine, &words, None).unwrap();
        assert_eq!(engine.num_calls, 10);
        // Every summary includes all three words, so every query hits the same documents.
        assert_eq!(results, vec![0, 1, 3]);
    }

    #[test]
    fn test_exclude() {
        let mut engine = example_engine();
        let mut searcher = FullTextSearcher::new(RandomSummary::new(4, Some(42)), 3);
        let words = ["linux", "server", "interface"];
        let results = searcher.find(&mut engine, &words, Some(&0)).unwrap();
        assert_eq!(results, vec![1, 3]);
    }

    #[test]
    fn test_top_candidates() {
        let mut engine = ListEngine {
            documents: (0..10).map(|i| (i, "books")).collect(),
            num_calls: 0,
        };
        let mut searcher = FullTextSearcher::new(RandomSummary::new(1, Some(7)), 4);
        let results = searcher.find(&mut engine, &["books"], None).unwrap();
        assert_eq!(results, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_no_iterations() {
        let mut engine = example_engine();
        let mut searcher = FullTextSearcher::new(RandomSummary::new(4, Some(42)), 0);
        assert!(searcher.find(&mut engine, &["linux"], None).unwrap().is_empty());
        assert_eq!(engine.num_calls, 0);
    }

    #[test]
    fn test_error() {
        let mut searcher = FullTextSearcher::default();
        let result = searcher.find(&mut FailingEngine, &["linux"], None);
        assert_eq!(result, Err("unavailable"));
    }
}

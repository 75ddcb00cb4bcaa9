//! Normalization of text into words.
use std::io::{BufRead, BufReader, Read};
use std::sync::Arc;

use hashbrown::HashSet;

use crate::errors::Result;

/// Set of informative words admitted by a [`Normalizer`].
#[derive(Clone, Debug, Default)]
pub struct Wordlist {
    words: HashSet<String>,
}

impl Wordlist {
    /// Creates an instance from words, which are trimmed and lowercased.
    pub fn new<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Reads a wordlist of one word per line.
    pub fn from_reader<R>(rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let mut words = vec![];
        for line in BufReader::new(rdr).lines() {
            words.push(line?);
        }
        Ok(Self::new(words))
    }

    /// Checks if the word is listed.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Gets the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Checks if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Normalizer converting text into lowercased words.
///
/// Text is split at characters other than alphanumerics and apostrophes,
/// apostrophes at both ends of a word are stripped, and lowercased words shorter than
/// `min_token_length` characters or missing from the wordlist (if given) are dropped.
#[derive(Clone, Debug)]
pub struct Normalizer {
    min_token_length: usize,
    wordlist: Option<Arc<Wordlist>>,
}

impl Normalizer {
    /// Creates an instance admitting words of at least `min_token_length` characters.
    pub const fn new(min_token_length: usize) -> Self {
        Self {
            min_token_length,
            wordlist: None,
        }
    }

    /// Admits only words in the wordlist.
    pub fn wordlist(mut self, wordlist: Option<Arc<Wordlist>>) -> Self {
        self.wordlist = wordlist;
        self
    }

    /// Gets the minimum number of characters in an admitted word.
    pub const fn min_token_length(&self) -> usize {
        self.min_token_length
    }

    /// Produces the sequence of admitted words.
    ///
    /// # Examples
    ///
    /// ```
    /// use find_neardup::feature::Normalizer;
    ///
    /// let normalizer = Normalizer::new(3);
    /// assert_eq!(
    ///     normalizer.words("Welcome to Jimbocho, the town of books!"),
    ///     vec!["welcome", "jimbocho", "the", "town", "books"],
    /// );
    /// ```
    pub fn words(&self, text: &str) -> Vec<String> {
        self.iter(text).collect()
    }

    /// Produces the set of admitted words.
    pub fn word_set(&self, text: &str) -> HashSet<String> {
        self.iter(text).collect()
    }

    fn iter<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .map(|t| t.trim_matches('\''))
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
            // Lowercasing may change the number of characters.
            .filter(|t| self.min_token_length <= t.chars().count())
            .filter(|t| self.wordlist.as_ref().map_or(true, |wl| wl.contains(t)))
    }
}

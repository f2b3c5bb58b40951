//! The word index: the one piece of state shared across solve calls.
//!
//! Built once from the raw word source, immutable afterwards. Safe for
//! unsynchronized concurrent reads; the server shares it behind an `Arc`.

use std::collections::{BTreeSet, HashSet};

/// An index over all dictionary words of a single fixed character length,
/// plus the alphabet actually occurring in those words.
///
/// The alphabet is derived, not assumed: a dictionary in a non-Latin script
/// (or one using accented letters) yields exactly the characters its words
/// contain, sorted for deterministic neighbor enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordIndex {
    length: usize,
    words: HashSet<String>,
    alphabet: Vec<char>,
}

impl WordIndex {
    /// Build an index from already-normalized words, keeping only those of
    /// exactly `length` characters. Duplicates collapse.
    ///
    /// An empty result is a valid index: every chain query against it simply
    /// finds no chain.
    pub fn build<I, S>(words: I, length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .filter(|w| w.as_ref().chars().count() == length)
            .map(|w| w.as_ref().to_string())
            .collect();

        let letters: BTreeSet<char> = words.iter().flat_map(|w| w.chars()).collect();
        let alphabet: Vec<char> = letters.into_iter().collect();

        debug_assert!(words.iter().all(|w| w.chars().count() == length));

        Self { length, words, alphabet }
    }

    /// The fixed character length of every indexed word.
    pub fn word_length(&self) -> usize {
        self.length
    }

    /// Number of indexed words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Distinct characters occurring in the indexed words, sorted.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Look up a word and borrow the index's own copy of it. Lets the solver
    /// key its transient maps by `&str` borrowed from the index instead of
    /// cloning on every relaxation.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(String::as_str)
    }

    /// Iterate the word set. No ordering guarantees.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub(crate) fn words(&self) -> &HashSet<String> {
        &self.words
    }
}

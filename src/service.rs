//! The chain service boundary: validation, normalization, and the mapping of
//! solver output to chain / no-chain.
//!
//! The service owns the [`WordIndex`] as an explicit value built once at
//! construction and read-only afterwards. Callers share the service itself
//! (behind an `Arc` in the server); no global state, no lock.

use thiserror::Error;
use tracing::debug;

use crate::anagram;
use crate::chain::find_chain;
use crate::index::WordIndex;
use crate::normalize::{fold, Normalizer};

/// A rejected request. Every variant carries the required word length so the
/// message can tell the caller what to send instead; empty and wrong-length
/// inputs get distinct messages, independently for source and target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("the start word is empty; please give me a {want}-letter word")]
    EmptySource { want: usize },
    #[error("the start word has {got} letters; please give me a {want}-letter word")]
    SourceLength { got: usize, want: usize },
    #[error("the end word is empty; please give me a {want}-letter word")]
    EmptyTarget { want: usize },
    #[error("the end word has {got} letters; please give me a {want}-letter word")]
    TargetLength { got: usize, want: usize },
    #[error("the word is empty; please give me a {want}-letter word")]
    EmptyWord { want: usize },
    #[error("the word has {got} letters; please give me a {want}-letter word")]
    WordLength { got: usize, want: usize },
}

/// Which request field a word came from, for error selection.
#[derive(Clone, Copy)]
enum Field {
    Source,
    Target,
    Word,
}

/// Boundary service for chain and anagram requests over one dictionary.
pub struct ChainService {
    index: WordIndex,
    normalizer: Normalizer,
}

impl ChainService {
    /// Build a service over `words`, indexing those of `length` characters.
    /// Uses the default [`fold`] normalizer.
    pub fn new<I, S>(words: I, length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_normalizer(words, length, fold)
    }

    /// Build a service with a caller-supplied normalizer. The same function
    /// is applied to every dictionary word here and to every query word
    /// later, so membership checks cannot disagree on casing or diacritics.
    pub fn with_normalizer<I, S>(words: I, length: usize, normalizer: Normalizer) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized = words.into_iter().map(|w| normalizer(w.as_ref()));
        let index = WordIndex::build(normalized, length);
        debug!(
            words = index.len(),
            length,
            alphabet = index.alphabet().len(),
            "word index built"
        );
        Self { index, normalizer }
    }

    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    /// Shortest chain from `source` to `target`. `Ok(None)` means no chain
    /// connects the two words; that includes either word being absent from
    /// the dictionary.
    pub fn find_chain(
        &self,
        source: &str,
        target: &str,
    ) -> Result<Option<Vec<String>>, RequestError> {
        let source = self.check(source, Field::Source)?;
        let target = self.check(target, Field::Target)?;
        let chain = find_chain(&self.index, &source, &target);
        debug!(
            %source,
            %target,
            found = chain.is_some(),
            steps = chain.as_ref().map(|c| c.len().saturating_sub(1)),
            "chain request"
        );
        Ok(chain)
    }

    /// Anagrams of `word` in the dictionary, excluding `word` itself.
    pub fn anagrams(&self, word: &str) -> Result<Vec<String>, RequestError> {
        let word = self.check(word, Field::Word)?;
        let hits = anagram::anagrams(&word, &self.index);
        debug!(%word, hits = hits.len(), "anagram request");
        Ok(hits)
    }

    fn check(&self, raw: &str, field: Field) -> Result<String, RequestError> {
        let want = self.index.word_length();
        let word = (self.normalizer)(raw);
        if word.is_empty() {
            return Err(match field {
                Field::Source => RequestError::EmptySource { want },
                Field::Target => RequestError::EmptyTarget { want },
                Field::Word => RequestError::EmptyWord { want },
            });
        }
        let got = word.chars().count();
        if got != want {
            return Err(match field {
                Field::Source => RequestError::SourceLength { got, want },
                Field::Target => RequestError::TargetLength { got, want },
                Field::Word => RequestError::WordLength { got, want },
            });
        }
        Ok(word)
    }
}

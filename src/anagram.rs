//! Anagram lookup: same-length dictionary words with the same letters.

use rayon::prelude::*;

use crate::index::WordIndex;

/// Sorted character multiset of a word; two words are anagrams iff their
/// signatures are equal.
fn signature(word: &str) -> Vec<char> {
    let mut chars: Vec<char> = word.chars().collect();
    chars.sort_unstable();
    chars
}

/// All indexed words that are anagrams of `word`, excluding `word` itself.
///
/// `word` must already be normalized the same way the index was. Results are
/// sorted, since the index holds its words unordered.
pub fn anagrams(word: &str, index: &WordIndex) -> Vec<String> {
    let sig = signature(word);
    let mut hits: Vec<String> = index
        .words()
        .par_iter()
        .filter(|w| w.as_str() != word && signature(w) == sig)
        .cloned()
        .collect();
    hits.sort_unstable();
    hits
}

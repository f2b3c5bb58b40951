//! Lazy enumeration of one-substitution dictionary neighbors.
//!
//! The ladder graph is never materialized: a `Neighbors` iterator walks the
//! candidate space position by position, alphabet character by alphabet
//! character, and yields only the candidates that are dictionary members.
//! At most `L × |alphabet|` candidates are tried per word.

use crate::index::WordIndex;

/// Iterator over the dictionary words reachable from one word by changing
/// exactly one character.
///
/// Positions advance in increasing order; within a position the alphabet is
/// scanned in the index's fixed sorted order, so enumeration is deterministic
/// and the search that consumes it is reproducible. The iterator borrows only
/// the index; it is restartable by constructing it again.
pub struct Neighbors<'a> {
    index: &'a WordIndex,
    original: Vec<char>,
    candidate: String,
    pos: usize,
    alpha: usize,
}

/// Enumerate the one-substitution neighbors of `word` within `index`.
///
/// A word whose length differs from the index's yields nothing: every
/// candidate it forms keeps that length and cannot be a member.
pub fn neighbors<'a>(word: &str, index: &'a WordIndex) -> Neighbors<'a> {
    Neighbors {
        index,
        original: word.chars().collect(),
        candidate: String::with_capacity(word.len()),
        pos: 0,
        alpha: 0,
    }
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let alphabet = self.index.alphabet();
        while self.pos < self.original.len() {
            while self.alpha < alphabet.len() {
                let c = alphabet[self.alpha];
                self.alpha += 1;
                if c == self.original[self.pos] {
                    continue;
                }
                self.candidate.clear();
                for (i, &orig) in self.original.iter().enumerate() {
                    self.candidate.push(if i == self.pos { c } else { orig });
                }
                if let Some(hit) = self.index.get(&self.candidate) {
                    return Some(hit);
                }
            }
            self.alpha = 0;
            self.pos += 1;
        }
        None
    }
}

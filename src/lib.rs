//! # Word Chain
//!
//! Word-puzzle services over a fixed-length dictionary: word ladder
//! pathfinding and anagram lookup.
//!
//! The core is the chain solver: it treats same-length dictionary words as
//! nodes of an implicit graph (an edge connects two words that differ in
//! exactly one character) and finds a shortest path between two endpoints
//! with an A* search keyed by Hamming distance.

pub mod anagram;
pub mod chain;
pub mod index;
pub mod neighbors;
pub mod normalize;
pub mod server;
pub mod service;

pub use anagram::anagrams;
pub use chain::{find_chain, hamming};
pub use index::WordIndex;
pub use neighbors::{neighbors, Neighbors};
pub use normalize::{fold, Normalizer};
pub use service::{ChainService, RequestError};

use std::io;
use std::path::Path;

/// Default word length for the bundled dictionary
pub const WORD_LENGTH: usize = 5;

/// Load the dictionary from the embedded file
pub fn load_dictionary() -> Vec<String> {
    include_str!("../dictionary/dictionary.txt")
        .lines()
        .filter(|line| !line.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Load a dictionary from a word file, one word per line, blank lines skipped.
///
/// Lines are trimmed but not otherwise normalized; [`ChainService`] applies
/// its normalizer to every dictionary word it is given.
pub fn load_dictionary_from(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|s| s.to_string())
        .collect())
}

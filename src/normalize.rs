//! Boundary-layer text normalization.
//!
//! The core compares words by exact character sequence, so every word must be
//! folded to one canonical form before it reaches the index or a query. The
//! default fold is trim + Unicode lowercase + NFC, which makes precomposed
//! and decomposed spellings of the same accented letter compare equal.
//!
//! Normalization is pluggable: [`ChainService`](crate::service::ChainService)
//! takes any `Normalizer` and applies the same function to the dictionary and
//! to every query word, so membership checks can never disagree on casing or
//! diacritics.

use unicode_normalization::UnicodeNormalization;

/// A normalization function supplied by the boundary layer.
pub type Normalizer = fn(&str) -> String;

/// Normalize a word: trim surrounding whitespace, lowercase, NFC-compose.
pub fn fold(raw: &str) -> String {
    raw.trim().to_lowercase().nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_and_whitespace() {
        assert_eq!(fold("  APPLE "), "apple");
    }

    #[test]
    fn composes_decomposed_accents() {
        // "a" + combining acute composes to the precomposed letter
        assert_eq!(fold("a\u{0301}lom"), "\u{00e1}lom");
        assert_eq!(fold("\u{00c1}LOM"), "\u{00e1}lom");
    }
}

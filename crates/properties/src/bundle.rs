//! The property bundle produced for every analyzed string.
//!
//! # Determinism
//!
//! Every field of [`PropertyBundle`] is a function of the input text alone:
//! - Same `length`, `is_palindrome`, `unique_characters` and `word_count`
//! - Same `sha256_hash` identity hash
//! - Same `character_frequency_map`, including its iteration order
//!
//! The frequency map is ordered by character so serialized output is stable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Character (as a one-char string) to occurrence count.
pub type FrequencyMap = BTreeMap<String, usize>;

/// Derived metrics for one input string.
///
/// ```text
/// PropertyBundle
/// ├── length: usize                     # chars in the raw text
/// ├── is_palindrome: bool               # raw text == reversed raw text
/// ├── unique_characters: usize          # distinct non-whitespace chars
/// ├── word_count: usize                 # whitespace-separated runs
/// ├── sha256_hash: String               # hex SHA-256 of the raw bytes
/// └── character_frequency_map: Map      # per-char counts, whitespace removed
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PropertyBundle {
    /// Number of chars in the unmodified text, whitespace included.
    pub length: usize,

    /// Whether the unmodified text reads the same in both directions.
    ///
    /// No case folding, whitespace removal or Unicode normalization is
    /// applied before the comparison.
    pub is_palindrome: bool,

    /// Number of distinct chars once all whitespace is removed.
    pub unique_characters: usize,

    /// Number of maximal runs of non-whitespace chars.
    pub word_count: usize,

    /// Lowercase hex SHA-256 digest of the UTF-8 bytes of the text.
    pub sha256_hash: String,

    /// Occurrence count per char over the whitespace-stripped text.
    pub character_frequency_map: FrequencyMap,
}

impl PropertyBundle {
    /// Whether the whitespace-stripped text contained `ch` at least once.
    pub fn contains_char(&self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.character_frequency_map
            .contains_key(&*ch.encode_utf8(&mut buf))
    }
}

use crate::bundle::PropertyBundle;
use crate::chars::{character_frequency, is_palindrome};
use crate::hash::hash_text;
use crate::whitespace::{count_words, strip_whitespace};

/// Main entry point. Derives the full [`PropertyBundle`] for `text`.
///
/// The function is total: every input, including the empty string, produces
/// a bundle. Rejecting blank input is a workflow decision left to callers
/// (see [`is_blank`](crate::is_blank)).
pub fn analyze(text: &str) -> PropertyBundle {
    // Whitespace is stripped once and shared by the two char statistics.
    let stripped = strip_whitespace(text);
    let character_frequency_map = character_frequency(&stripped);

    PropertyBundle {
        length: text.chars().count(),
        is_palindrome: is_palindrome(text),
        unique_characters: character_frequency_map.len(),
        word_count: count_words(text),
        sha256_hash: hash_text(text),
        character_frequency_map,
    }
}

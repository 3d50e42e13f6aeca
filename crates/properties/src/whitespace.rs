//! Whitespace handling.
//!
//! Stripping removes Unicode whitespace as defined by [`char::is_whitespace`].
//! Word counting splits only on space, tab and newline.
//!
//! ```rust
//! use properties::{count_words, strip_whitespace};
//!
//! assert_eq!(strip_whitespace("  a b\tc\n"), "abc");
//! assert_eq!(count_words("  hello   world  "), 2);
//! ```

/// Removes every whitespace run from `text`.
///
/// Returns an empty string for empty or whitespace-only input.
pub fn strip_whitespace(text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());
    stripped.extend(text.chars().filter(|ch| !ch.is_whitespace()));
    stripped
}

/// Counts maximal runs of chars between word separators.
///
/// Only space, tab and newline separate words; other whitespace such as
/// `\r` or a non-breaking space is part of a word. Empty or whitespace-only
/// text has zero words.
pub fn count_words(text: &str) -> usize {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0;
    }

    let mut words = 0;
    let mut in_word = false;
    for ch in trimmed.chars() {
        if is_word_separator(ch) {
            in_word = false;
        } else if !in_word {
            words += 1;
            in_word = true;
        }
    }
    words
}

fn is_word_separator(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n')
}

/// True when nothing is left of `text` after whitespace removal.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

//! Char-level statistics: palindrome check, distinct chars, frequencies.

use std::collections::HashSet;

use crate::bundle::FrequencyMap;
use crate::whitespace::strip_whitespace;

/// Two-pointer palindrome check over the chars of `text`.
///
/// Comparison is exact char equality on the raw input. Empty and
/// single-char strings are palindromes.
///
/// ```rust
/// use properties::is_palindrome;
///
/// assert!(is_palindrome("racecar"));
/// assert!(is_palindrome(""));
/// assert!(!is_palindrome("A man a plan a canal Panama"));
/// ```
pub fn is_palindrome(text: &str) -> bool {
    let mut forward = text.chars();
    let mut backward = text.chars().rev();
    let half = text.chars().count() / 2;

    for _ in 0..half {
        if forward.next() != backward.next() {
            return false;
        }
    }
    true
}

/// Number of distinct chars in `text` once whitespace is removed.
///
/// ```rust
/// use properties::unique_characters;
///
/// assert_eq!(unique_characters("aabb cc"), 3);
/// ```
pub fn unique_characters(text: &str) -> usize {
    text.chars()
        .filter(|ch| !ch.is_whitespace())
        .collect::<HashSet<char>>()
        .len()
}

/// Per-char occurrence counts over `text` with whitespace removed.
///
/// ```rust
/// use properties::character_frequency;
///
/// let freq = character_frequency("aab");
/// assert_eq!(freq.get("a"), Some(&2));
/// assert_eq!(freq.get("b"), Some(&1));
/// assert_eq!(freq.len(), 2);
/// ```
pub fn character_frequency(text: &str) -> FrequencyMap {
    let mut freq = FrequencyMap::new();
    for ch in strip_whitespace(text).chars() {
        *freq.entry(ch.to_string()).or_insert(0) += 1;
    }
    freq
}

use properties::{strip_whitespace, PropertyBundle};
use serde::{Deserialize, Serialize};

/// Optional constraints over a [`PropertyBundle`].
///
/// Every field is an explicit `Option`: `None` means "no constraint", and an
/// explicit `Some(0)` is a real constraint. The same shape is used for query
/// parameters, for the translator's output and for echoing the applied filter
/// back to callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredFilter {
    /// Required palindrome status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,

    /// Inclusive lower bound on `length`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Inclusive upper bound on `length`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Exact required word count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,

    /// Char (or token) that must occur in the whitespace-stripped value.
    /// An empty string is treated as absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<String>,
}

impl StructuredFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_palindrome(mut self, is_palindrome: bool) -> Self {
        self.is_palindrome = Some(is_palindrome);
        self
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_word_count(mut self, word_count: usize) -> Self {
        self.word_count = Some(word_count);
        self
    }

    pub fn with_contains_character(mut self, needle: impl Into<String>) -> Self {
        self.contains_character = Some(needle.into());
        self
    }

    /// Drops constraints that carry no information (an empty
    /// `contains_character`), so the echoed filter reflects what was applied.
    pub fn normalized(mut self) -> Self {
        if self.contains_character.as_deref() == Some("") {
            self.contains_character = None;
        }
        self
    }

    /// True when no constraint is present.
    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_needle().is_none()
    }

    /// Evaluate the filter against one analyzed value.
    ///
    /// `value` is the original text the bundle was computed from; it is only
    /// consulted for multi-char containment.
    pub fn matches(&self, value: &str, props: &PropertyBundle) -> bool {
        if let Some(expected) = self.is_palindrome {
            if props.is_palindrome != expected {
                return false;
            }
        }
        if let Some(min) = self.min_length {
            if props.length < min {
                return false;
            }
        }
        if let Some(max) = self.max_length {
            if props.length > max {
                return false;
            }
        }
        if let Some(expected) = self.word_count {
            if props.word_count != expected {
                return false;
            }
        }
        if let Some(needle) = self.contains_needle() {
            if !contains(value, props, needle) {
                return false;
            }
        }
        true
    }

    fn contains_needle(&self) -> Option<&str> {
        self.contains_character.as_deref().filter(|s| !s.is_empty())
    }
}

/// Single chars are answered from the frequency map; longer tokens fall back
/// to substring search over the whitespace-stripped value.
fn contains(value: &str, props: &PropertyBundle, needle: &str) -> bool {
    let mut chars = needle.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => props.contains_char(ch),
        _ => strip_whitespace(value).contains(needle),
    }
}

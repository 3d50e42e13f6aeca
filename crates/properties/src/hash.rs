//! Content hashing.
//!
//! ```text
//! SHA-256(text_bytes) -> lowercase hex
//! ```
//!
//! The digest covers the raw text, whitespace included, so two strings that
//! differ only in spacing get different identities.

use sha2::{Digest, Sha256};

/// Hash arbitrary text with SHA-256 and return a lowercase hex digest.
///
/// ```rust
/// use properties::hash_text;
///
/// let hash = hash_text("hello world");
/// assert_eq!(hash.len(), 64);
/// assert_eq!(hash, hash_text("hello world"));
/// assert_ne!(hash, hash_text("hello world!"));
/// ```
pub fn hash_text(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

//! stringlens property layer.
//!
//! This crate derives a fixed bundle of properties from an input string. The
//! query and storage layers rely on it for stable, content-addressed records.
//!
//! ## What we compute
//!
//! - Character length of the raw text (whitespace included)
//! - Palindrome status over the raw text (case and space sensitive)
//! - Distinct character count after whitespace removal
//! - Word count over whitespace-separated runs
//! - SHA-256 content hash, used as the record identifier
//! - Per-character frequency map after whitespace removal
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence. The same text yields a
//! byte-for-byte identical [`PropertyBundle`] on any machine, which is what
//! lets callers deduplicate by hash.
//!
//! ```rust
//! use properties::analyze;
//!
//! let props = analyze("racecar");
//! assert_eq!(props.length, 7);
//! assert!(props.is_palindrome);
//! assert_eq!(props.word_count, 1);
//! ```

mod analyze;
mod bundle;
mod chars;
mod hash;
mod whitespace;

pub use crate::analyze::analyze;
pub use crate::bundle::{FrequencyMap, PropertyBundle};
pub use crate::chars::{character_frequency, is_palindrome, unique_characters};
pub use crate::hash::hash_text;
pub use crate::whitespace::{count_words, is_blank, strip_whitespace};

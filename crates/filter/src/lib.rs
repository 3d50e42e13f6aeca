//! # stringlens filters (`filter`)
//!
//! ## Purpose
//!
//! `filter` decides which analyzed strings a query selects. It owns two pure
//! pieces that share one data shape:
//!
//! - [`StructuredFilter`]: optional constraints over a
//!   [`PropertyBundle`](properties::PropertyBundle), combined by logical AND
//!   over only the constraints that are present. An empty filter matches
//!   everything.
//! - [`Translator`]: maps free text such as `"single word palindromes"` onto a
//!   `StructuredFilter` by running an ordered chain of lexical [`Rule`]s.
//!
//! Neither piece can fail. Text the translator does not understand simply
//! produces an empty filter.
//!
//! ## Example
//!
//! ```
//! use filter::{translate, StructuredFilter};
//! use properties::analyze;
//!
//! let filter = translate("find a single word palindrome");
//! assert_eq!(
//!     filter,
//!     StructuredFilter::new().with_palindrome(true).with_word_count(1)
//! );
//!
//! let value = "racecar";
//! assert!(filter.matches(value, &analyze(value)));
//! assert!(!filter.matches("two words", &analyze("two words")));
//! ```

mod structured;
mod translate;

pub use crate::structured::StructuredFilter;
pub use crate::translate::{translate, Effect, Rule, Translation, Translator};

//! Workspace umbrella crate for stringlens.
//!
//! Re-exports the property extractor, the filter and translator, the record
//! store and the query engine so callers can depend on a single crate.
//!
//! ```
//! use stringlens::{QueryEngine, StructuredFilter, analyze, translate};
//!
//! let props = analyze("racecar");
//! assert!(props.is_palindrome);
//!
//! let filter = translate("single word palindromes");
//! assert_eq!(filter, StructuredFilter::new().with_palindrome(true).with_word_count(1));
//!
//! let engine = QueryEngine::in_memory();
//! engine.create("racecar").unwrap();
//! assert_eq!(engine.query_by_filter(&filter).unwrap().count, 1);
//! ```

pub use filter::{Effect, Rule, StructuredFilter, Translation, Translator, translate};
pub use properties::{
    FrequencyMap, PropertyBundle, analyze, character_frequency, count_words, hash_text, is_blank,
    is_palindrome, strip_whitespace, unique_characters,
};
pub use query::{
    FilterQueryResult, InterpretedQuery, NaturalLanguageQueryResult, QueryEngine, QueryError,
    QueryKind, QueryMetrics, filter_records, interpret, set_query_metrics,
};
#[cfg(feature = "backend-redb")]
pub use store::RedbBackend;
pub use store::{BackendConfig, InMemoryBackend, Record, StoreBackend, StoreError, StringStore};

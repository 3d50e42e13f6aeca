//! # stringlens query layer (`query`)
//!
//! ## Purpose
//!
//! `query` sits on top of the property extractor (`properties`), the filter
//! crate (`filter`) and the record store (`store`). It owns the creation
//! workflow (reject blank text, analyze, insert-if-absent) and answers two
//! kinds of queries over the stored records:
//!
//! - structured queries, driven by an explicit [`StructuredFilter`];
//! - natural-language queries, translated into a `StructuredFilter` by the
//!   built-in rule chain and then evaluated the same way.
//!
//! Neither query mutates the store. Result order is unspecified.
//!
//! ## Core Types
//!
//! - [`QueryEngine`]: wraps a shared [`store::StringStore`].
//! - [`FilterQueryResult`]: `{data, count, filters_applied}`.
//! - [`NaturalLanguageQueryResult`]: `{data, count, interpreted_query}`.
//! - [`QueryError`]: blank input or a store failure.
//!
//! The free functions [`filter_records`] and [`interpret`] expose the same
//! composition without a store.
//!
//! ## Example Usage
//!
//! ```
//! use query::QueryEngine;
//!
//! let engine = QueryEngine::in_memory();
//! engine.create("racecar").unwrap();
//! engine.create("hello world").unwrap();
//!
//! let result = engine
//!     .query_by_natural_language("single word palindromes")
//!     .unwrap();
//! assert_eq!(result.count, 1);
//! assert_eq!(result.data[0].value, "racecar");
//! ```
//!
//! ## Observability
//!
//! Install a [`QueryMetrics`] implementation via [`set_query_metrics`] to
//! record per-query latency and hit counts. This is typically done once during
//! service startup.
//!
//! [`StructuredFilter`]: filter::StructuredFilter

pub mod engine;
pub mod metrics;
pub mod types;

pub use crate::engine::{filter_records, interpret, QueryEngine};
pub use crate::metrics::{set_query_metrics, QueryMetrics};
pub use crate::types::{
    FilterQueryResult, InterpretedQuery, NaturalLanguageQueryResult, QueryError, QueryKind,
};

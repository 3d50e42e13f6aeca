use filter::StructuredFilter;
use serde::{Deserialize, Serialize};
use store::{Record, StoreError};
use thiserror::Error;

/// Which entry point served a query. Used for observability only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    /// Explicit [`StructuredFilter`] supplied by the caller.
    Filter,
    /// Free text translated into a filter first.
    NaturalLanguage,
}

impl QueryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::Filter => "filter",
            QueryKind::NaturalLanguage => "natural_language",
        }
    }
}

/// Result of a structured query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterQueryResult {
    /// Matching records, in unspecified order. Never null on the wire.
    pub data: Vec<Record>,
    pub count: usize,
    /// The filter that was evaluated, after normalization.
    pub filters_applied: StructuredFilter,
}

impl FilterQueryResult {
    pub fn new(data: Vec<Record>, filters_applied: StructuredFilter) -> Self {
        Self {
            count: data.len(),
            data,
            filters_applied,
        }
    }
}

/// Echo of a natural-language query and the filter derived from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: StructuredFilter,
}

/// Result of a natural-language query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NaturalLanguageQueryResult {
    pub data: Vec<Record>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

impl NaturalLanguageQueryResult {
    pub fn new(data: Vec<Record>, interpreted_query: InterpretedQuery) -> Self {
        Self {
            count: data.len(),
            data,
            interpreted_query,
        }
    }
}

/// Errors that can occur in the query layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Text is empty once whitespace is stripped.
    #[error("string value is empty after removing whitespace")]
    EmptyInput,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl QueryError {
    /// True when the error is a missing record.
    pub fn is_not_found(&self) -> bool {
        matches!(self, QueryError::Store(StoreError::NotFound(_)))
    }

    /// True when the error is a duplicate insert.
    pub fn is_conflict(&self) -> bool {
        matches!(self, QueryError::Store(StoreError::Conflict(_)))
    }
}

use std::sync::Arc;
use std::time::Instant;

use filter::{translate, StructuredFilter};
use properties::is_blank;
use store::{BackendConfig, Record, StringStore};

use crate::metrics::metrics_recorder;
use crate::types::{
    FilterQueryResult, InterpretedQuery, NaturalLanguageQueryResult, QueryError, QueryKind,
};


/// Keep the records accepted by `filter`.
///
/// Pure; the input collection is only read.
pub fn filter_records<'a, I>(filter: &StructuredFilter, records: I) -> Vec<Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter(|record| filter.matches(&record.value, &record.properties))
        .cloned()
        .collect()
}

/// Translate free text into the filter the engine will apply.
pub fn interpret(text: &str) -> InterpretedQuery {
    InterpretedQuery {
        original: text.to_string(),
        parsed_filters: translate(text).normalized(),
    }
}

/// Creation, lookup, deletion and querying of analyzed strings.
pub struct QueryEngine {
    store: Arc<StringStore>,
}

impl QueryEngine {
    /// Construct an engine that owns `store`.
    pub fn new(store: StringStore) -> Self {
        Self::with_store_arc(Arc::new(store))
    }

    /// Construct an engine from a shared store handle.
    pub fn with_store_arc(store: Arc<StringStore>) -> Self {
        Self { store }
    }

    /// Convenience helper for tests and ephemeral use.
    pub fn in_memory() -> Self {
        Self::new(StringStore::in_memory())
    }

    /// Open the store described by `cfg` and wrap it.
    pub fn open(cfg: &BackendConfig) -> Result<Self, QueryError> {
        Ok(Self::new(StringStore::new(cfg)?))
    }

    pub fn store(&self) -> &Arc<StringStore> {
        &self.store
    }

    /// Analyze `value` and store it.
    ///
    /// Text that is empty once whitespace is stripped is rejected with
    /// [`QueryError::EmptyInput`]. Re-submitting identical text fails with a
    /// store conflict and leaves the first record in place.
    pub fn create(&self, value: &str) -> Result<Record, QueryError> {
        if is_blank(value) {
            return Err(QueryError::EmptyInput);
        }

        let record = Record::new(value);
        self.store.insert(&record)?;
        tracing::info!(
            id = %record.id,
            length = record.properties.length,
            "string created"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_create();
        }
        Ok(record)
    }

    /// Exact-match lookup by original text.
    pub fn get(&self, value: &str) -> Result<Option<Record>, QueryError> {
        Ok(self.store.get(value)?)
    }

    /// Delete by original text. Missing text is a store `NotFound`.
    pub fn delete(&self, value: &str) -> Result<(), QueryError> {
        self.store.delete(value)?;
        tracing::info!(length = value.chars().count(), "string deleted");
        if let Some(recorder) = metrics_recorder() {
            recorder.record_delete();
        }
        Ok(())
    }

    /// Return every stored record accepted by `filter`.
    pub fn query_by_filter(
        &self,
        filter: &StructuredFilter,
    ) -> Result<FilterQueryResult, QueryError> {
        let started = Instant::now();
        let filter = filter.clone().normalized();
        let data = self.scan_matching(&filter)?;

        let result = FilterQueryResult::new(data, filter);
        tracing::debug!(
            filters = ?result.filters_applied,
            count = result.count,
            "filter query"
        );
        record_query(QueryKind::Filter, started, result.count);
        Ok(result)
    }

    /// Translate `text` and run the resulting filter.
    ///
    /// Text no rule understands yields an empty filter, which matches every
    /// stored record.
    pub fn query_by_natural_language(
        &self,
        text: &str,
    ) -> Result<NaturalLanguageQueryResult, QueryError> {
        let started = Instant::now();
        let interpreted = interpret(text);
        let data = self.scan_matching(&interpreted.parsed_filters)?;

        let result = NaturalLanguageQueryResult::new(data, interpreted);
        tracing::debug!(
            query = %result.interpreted_query.original,
            filters = ?result.interpreted_query.parsed_filters,
            count = result.count,
            "natural-language query"
        );
        record_query(QueryKind::NaturalLanguage, started, result.count);
        Ok(result)
    }

    fn scan_matching(&self, filter: &StructuredFilter) -> Result<Vec<Record>, QueryError> {
        let mut data = Vec::new();
        self.store.scan(&mut |record: &Record| {
            if filter.matches(&record.value, &record.properties) {
                data.push(record.clone());
            }
            Ok(())
        })?;
        Ok(data)
    }
}

fn record_query(kind: QueryKind, started: Instant, hit_count: usize) {
    if let Some(recorder) = metrics_recorder() {
        recorder.record_query(kind, started.elapsed(), hit_count);
    }
}

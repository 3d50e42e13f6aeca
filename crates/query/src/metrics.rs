// Metrics hooks for the `query` crate.
//
// Callers install a global `QueryMetrics` implementation via [`set_query_metrics`],
// then `QueryEngine` reports kind, latency and hit count for every query. No
// particular metrics backend is assumed here.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

use crate::types::QueryKind;

/// Metrics observer for query operations.
pub trait QueryMetrics: Send + Sync {
    /// Record the outcome of a query.
    ///
    /// `latency` covers the scan and predicate evaluation; `hit_count` is the
    /// number of records returned.
    fn record_query(&self, kind: QueryKind, latency: Duration, hit_count: usize);

    /// Record a successful creation. Optional.
    fn record_create(&self) {}

    /// Record a successful deletion. Optional.
    fn record_delete(&self) {}
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn QueryMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn QueryMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn QueryMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global query metrics recorder.
///
/// This is typically called once during service startup so every
/// `QueryEngine` shares the same metrics backend.
pub fn set_query_metrics(recorder: Option<Arc<dyn QueryMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

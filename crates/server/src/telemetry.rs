//! Bridge from the query layer's metrics hooks to the `metrics` facade.

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use query::{QueryKind, QueryMetrics};
use std::time::Duration;

/// [`QueryMetrics`] implementation that records through the global
/// `metrics` recorder.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrometheusQueryMetrics;

impl QueryMetrics for PrometheusQueryMetrics {
    fn record_query(&self, kind: QueryKind, latency: Duration, hit_count: usize) {
        metrics::counter!("stringlens_queries_total", "kind" => kind.as_str()).increment(1);
        metrics::histogram!("stringlens_query_duration_seconds", "kind" => kind.as_str())
            .record(latency.as_secs_f64());
        metrics::histogram!("stringlens_query_hits", "kind" => kind.as_str())
            .record(hit_count as f64);
    }

    fn record_create(&self) {
        metrics::counter!("stringlens_strings_created_total").increment(1);
    }

    fn record_delete(&self) {
        metrics::counter!("stringlens_strings_deleted_total").increment(1);
    }
}

/// Install the process-wide Prometheus recorder.
///
/// Fails if another recorder is already installed.
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

use crate::config::ServerConfig;
use crate::error::ServerResult;
use metrics_exporter_prometheus::PrometheusHandle;
use query::QueryEngine;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Query engine over the string store (shared across requests)
    pub engine: Arc<QueryEngine>,

    /// Prometheus renderer, present once a recorder is installed
    pub metrics_handle: Option<PrometheusHandle>,
}

impl ServerState {
    /// Create new server state, opening the store named by the config.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let engine = QueryEngine::open(&config.backend_config())?;
        Ok(Self::with_engine(config, engine))
    }

    /// Create state around an existing engine.
    pub fn with_engine(config: ServerConfig, engine: QueryEngine) -> Self {
        Self {
            config: Arc::new(config),
            engine: Arc::new(engine),
            metrics_handle: None,
        }
    }

    pub fn with_metrics_handle(mut self, handle: PrometheusHandle) -> Self {
        self.metrics_handle = Some(handle);
        self
    }
}

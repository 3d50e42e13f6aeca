//! stringlens server - HTTP REST API for string analysis and queries
//!
//! This crate exposes the `query` engine over HTTP:
//!
//! - **Creation**: analyze a string once and store it, keyed by its exact text
//! - **Lookup & deletion**: by exact text
//! - **Queries**: structured filters as query parameters, or a free-text
//!   natural-language query
//! - **Health & Metrics**: liveness/readiness probes and Prometheus metrics
//!
//! # Features
//!
//! - **Middleware**: Compression, CORS, request ID tracking, structured logging
//! - **Configuration**: Environment variable and file-based configuration
//! - **Error Handling**: JSON error envelopes with stable error codes
//! - **Graceful Shutdown**: Proper signal handling for production deployments
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Prometheus metrics
//! - `POST /strings` - Analyze and store `{"value": "..."}` (201)
//! - `GET /strings` - Structured query via `is_palindrome`, `min_length`,
//!   `max_length`, `word_count`, `contains_character`
//! - `GET /strings/filter-by-natural-language?query=...` - Natural-language query
//! - `GET /strings/{string_value}` - Exact lookup
//! - `DELETE /strings/{string_value}` - Delete (204)

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;

//! Codex Synapse visualization server
//!
//! HTTP surface over the [`synapse`] pipeline: reads chunk embeddings from the
//! document store, lays them out in 3D, clusters and labels them, and returns
//! the scene as JSON for the viewer.
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
//! - `POST /api/visualize` - 3D layout of the embeddings matching the filters
//! - `GET /` - API information
//! - `GET /health` - Liveness probe, reports manifold availability
//! - `GET /ready` - Readiness probe, pings the embedding store
//! - `GET /metrics` - Prometheus metrics
//!
//! Failures use `{"error", "type", "traceback"}` bodies: 400 for malformed
//! requests, 500 when the store or a numeric stage fails.
//!
//! # Configuration
//!
//! `SYNAPSE__*` environment variables (nested keys separated by `__`, e.g.
//! `SYNAPSE__DATABASE__HOST`) override an optional `synapse.{toml,yaml,json}`
//! file. The legacy `POSTGRES_HOST`, `POSTGRES_PORT`, `POSTGRES_DB`,
//! `POSTGRES_USER` and `POSTGRES_PASSWORD` variables seed the database section.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ErrorResponse, ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;

use crate::config::ServerConfig;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::{Arc, OnceLock};
use store::{EmbeddingSource, PostgresStore};
use synapse::VisualizationPipeline;

/// Process-wide Prometheus recorder; `None` when another recorder won the race.
static PROMETHEUS: OnceLock<Option<PrometheusHandle>> = OnceLock::new();

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Read-only pipeline shared by every request
    pub pipeline: Arc<VisualizationPipeline>,

    /// Where embeddings are read from
    pub source: Arc<dyn EmbeddingSource>,

    /// Renders `/metrics`; absent when metrics are disabled
    pub metrics: Option<PrometheusHandle>,
}

impl ServerState {
    /// State backed by the PostgreSQL store described in `config.database`.
    pub fn new(config: ServerConfig) -> Self {
        let source = Arc::new(PostgresStore::new(config.database.clone()));
        Self::with_source(config, source)
    }

    /// State backed by any embedding source.
    pub fn with_source(config: ServerConfig, source: Arc<dyn EmbeddingSource>) -> Self {
        let pipeline = Arc::new(VisualizationPipeline::new(config.pipeline.clone()));
        let metrics = if config.metrics_enabled {
            prometheus_handle()
        } else {
            None
        };

        Self {
            config: Arc::new(config),
            pipeline,
            source,
            metrics,
        }
    }
}

fn prometheus_handle() -> Option<PrometheusHandle> {
    PROMETHEUS
        .get_or_init(|| match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => Some(handle),
            Err(err) => {
                tracing::warn!(error = %err, "metrics recorder unavailable");
                None
            }
        })
        .clone()
}

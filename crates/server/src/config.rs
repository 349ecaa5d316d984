use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;
use store::DatabaseConfig;
use synapse::PipelineConfig;

/// Legacy connection variables, mapped onto `database.*` keys.
const LEGACY_DATABASE_VARS: [(&str, &str); 5] = [
    ("POSTGRES_HOST", "database.host"),
    ("POSTGRES_PORT", "database.port"),
    ("POSTGRES_DB", "database.dbname"),
    ("POSTGRES_USER", "database.user"),
    ("POSTGRES_PASSWORD", "database.password"),
];

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds. Large batches take a while to lay out.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum request body size in MB
    #[serde(default = "default_max_body_size_mb")]
    pub max_body_size_mb: usize,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Metrics endpoint enabled
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,

    /// Connection settings for the embedding store
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Pipeline defaults; replaced wholesale by `pipeline_file` when set
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Optional YAML file holding the pipeline section
    #[serde(default)]
    pub pipeline_file: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            max_body_size_mb: default_max_body_size_mb(),
            enable_cors: default_true(),
            log_level: default_log_level(),
            metrics_enabled: default_true(),
            database: DatabaseConfig::default(),
            pipeline: PipelineConfig::default(),
            pipeline_file: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from `.env`, an optional `synapse` config file and
    /// `SYNAPSE__*` environment variables, in increasing precedence.
    pub fn load() -> anyhow::Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }

        let mut builder = config::Config::builder();
        for (key, value) in legacy_database_defaults(|name| std::env::var(name).ok()) {
            builder = builder.set_default(key, value)?;
        }
        let builder = builder
            // Load from file if exists
            .add_source(config::File::with_name("synapse").required(false))
            // Override with environment variables
            .add_source(config::Environment::with_prefix("SYNAPSE").separator("__"));

        let mut config: ServerConfig = builder.build()?.try_deserialize()?;

        if let Some(path) = &config.pipeline_file {
            config.pipeline = PipelineConfig::from_file(path)?;
        } else {
            config.pipeline.validate()?;
        }

        Ok(config)
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get max body size in bytes
    pub fn max_body_size(&self) -> usize {
        self.max_body_size_mb * 1024 * 1024
    }
}

/// `(config key, value)` for every legacy `POSTGRES_*` variable that is set.
fn legacy_database_defaults(lookup: impl Fn(&str) -> Option<String>) -> Vec<(&'static str, String)> {
    LEGACY_DATABASE_VARS
        .iter()
        .filter_map(|&(var, key)| lookup(var).map(|value| (key, value)))
        .collect()
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8091
}

fn default_timeout_secs() -> u64 {
    300
}

fn default_max_body_size_mb() -> usize {
    1
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

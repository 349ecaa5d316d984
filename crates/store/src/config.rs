use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Safety ceiling on rows returned by a single fetch.
pub const DEFAULT_ROW_LIMIT: usize = 5000;

/// Number of characters of chunk text kept as a preview.
pub const DEFAULT_PREVIEW_CHARS: usize = 200;

/// Connection and fetch settings for the PostgreSQL store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub user: String,
    pub password: String,
    /// Seconds to wait for the TCP connection before giving up.
    pub connect_timeout_secs: u64,
    /// Maximum rows returned per fetch. Not a pagination contract.
    pub row_limit: usize,
    /// Characters of `chunk_text` kept on each record.
    pub preview_chars: usize,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "postgres".into(),
            port: 5432,
            dbname: "dilus_ai".into(),
            user: "postgres".into(),
            password: "postgres".into(),
            connect_timeout_secs: 10,
            row_limit: DEFAULT_ROW_LIMIT,
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

impl DatabaseConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Driver-level config. The password is set but never logged.
    pub(crate) fn to_pg_config(&self) -> postgres::Config {
        let mut cfg = postgres::Config::new();
        cfg.host(&self.host)
            .port(self.port)
            .dbname(&self.dbname)
            .user(&self.user)
            .password(&self.password)
            .connect_timeout(self.connect_timeout())
            .application_name("codex-synapse");
        cfg
    }
}

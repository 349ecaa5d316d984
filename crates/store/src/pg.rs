use crate::config::DatabaseConfig;
use crate::error::StoreError;
use crate::query::EmbeddingQuery;
use crate::record::{preview, EmbeddingRecord, StoreFilters};
use crate::source::EmbeddingSource;
use crate::vector::parse_vector;
use postgres::types::ToSql;
use postgres::{Client, NoTls, Row};

/// Reads embeddings from PostgreSQL, one short-lived connection per call.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    config: DatabaseConfig,
}

impl PostgresStore {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    fn connect(&self) -> Result<Client, StoreError> {
        tracing::debug!(
            host = %self.config.host,
            port = self.config.port,
            dbname = %self.config.dbname,
            "opening store connection"
        );
        self.config
            .to_pg_config()
            .connect(NoTls)
            .map_err(StoreError::connection)
    }
}

impl EmbeddingSource for PostgresStore {
    fn fetch(&self, filters: &StoreFilters) -> Result<Vec<EmbeddingRecord>, StoreError> {
        let query = EmbeddingQuery::build(filters, self.config.row_limit);
        let params: Vec<&(dyn ToSql + Sync)> = query
            .params
            .iter()
            .map(|p| p as &(dyn ToSql + Sync))
            .collect();

        let mut client = self.connect()?;
        let rows = client
            .query(query.sql.as_str(), &params)
            .map_err(StoreError::query)?;
        // Released before any decoding or numeric work happens upstream.
        client.close().map_err(StoreError::connection)?;

        tracing::info!(rows = rows.len(), ?filters, "fetched embeddings");

        rows.iter()
            .map(|row| decode_row(row, self.config.preview_chars))
            .collect()
    }

    fn ping(&self) -> Result<(), StoreError> {
        let mut client = self.connect()?;
        client.simple_query("SELECT 1").map_err(StoreError::query)?;
        client.close().map_err(StoreError::connection)
    }
}

fn decode_row(row: &Row, preview_chars: usize) -> Result<EmbeddingRecord, StoreError> {
    let id: i64 = row.try_get(0).map_err(StoreError::query)?;
    let raw_vector: String = row.try_get(4).map_err(StoreError::query)?;
    let vector = parse_vector(&raw_vector).map_err(|reason| StoreError::Decode { id, reason })?;

    let chunk_text: Option<String> = row.try_get(2).map_err(StoreError::query)?;
    let chunk_index: Option<i32> = row.try_get(3).map_err(StoreError::query)?;
    let metadata: Option<serde_json::Value> = row.try_get(5).map_err(StoreError::query)?;
    let document_name: Option<String> = row.try_get(6).map_err(StoreError::query)?;
    let is_vault_document: Option<bool> = row.try_get(8).map_err(StoreError::query)?;

    Ok(EmbeddingRecord {
        id,
        document_id: row.try_get(1).map_err(StoreError::query)?,
        chunk_text: preview(chunk_text.as_deref().unwrap_or_default(), preview_chars),
        chunk_index: chunk_index.unwrap_or_default(),
        vector,
        metadata: metadata.unwrap_or_else(|| serde_json::Value::Object(Default::default())),
        document_name: document_name.unwrap_or_default(),
        project_id: row.try_get(7).map_err(StoreError::query)?,
        is_vault_document: is_vault_document.unwrap_or(false),
    })
}

use crate::record::StoreFilters;

const BASE_SELECT: &str = "SELECT e.id::bigint, e.document_id::bigint, e.chunk_text, \
e.chunk_index::integer, e.embedding::text, e.metadata::jsonb, d.filename, \
d.project_id::bigint, d.is_vault_document \
FROM embeddings e JOIN documents d ON e.document_id = d.id \
WHERE e.embedding IS NOT NULL";

/// SQL text plus positional parameters for one filtered fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddingQuery {
    pub sql: String,
    pub params: Vec<i64>,
}

impl EmbeddingQuery {
    /// Build the fetch for `filters`, capped at `row_limit` rows.
    pub fn build(filters: &StoreFilters, row_limit: usize) -> Self {
        let mut sql = String::from(BASE_SELECT);
        let mut params = Vec::new();

        if let Some(document_id) = filters.document_id {
            params.push(document_id);
            sql.push_str(&format!(" AND e.document_id = ${}::bigint", params.len()));
        }
        if let Some(project_id) = filters.project_id {
            params.push(project_id);
            sql.push_str(&format!(" AND d.project_id = ${}::bigint", params.len()));
        }
        if filters.is_vault_only {
            sql.push_str(" AND d.is_vault_document = TRUE");
        }

        sql.push_str(&format!(" ORDER BY e.id LIMIT {row_limit}"));
        Self { sql, params }
    }
}

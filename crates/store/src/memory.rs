use crate::config::DEFAULT_ROW_LIMIT;
use crate::error::StoreError;
use crate::record::{EmbeddingRecord, StoreFilters};
use crate::source::EmbeddingSource;

/// An in-memory source with the same filter, order and cap semantics as the
/// PostgreSQL reader. Useful for tests and offline runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: Vec<EmbeddingRecord>,
    row_limit: Option<usize>,
}

impl InMemoryStore {
    pub fn new(records: Vec<EmbeddingRecord>) -> Self {
        Self {
            records,
            row_limit: None,
        }
    }

    pub fn with_row_limit(mut self, row_limit: usize) -> Self {
        self.row_limit = Some(row_limit);
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl EmbeddingSource for InMemoryStore {
    fn fetch(&self, filters: &StoreFilters) -> Result<Vec<EmbeddingRecord>, StoreError> {
        let mut rows: Vec<EmbeddingRecord> = self
            .records
            .iter()
            .filter(|record| !record.vector.is_empty() && filters.matches(record))
            .cloned()
            .collect();
        rows.sort_by_key(|record| record.id);
        rows.truncate(self.row_limit.unwrap_or(DEFAULT_ROW_LIMIT));
        Ok(rows)
    }
}

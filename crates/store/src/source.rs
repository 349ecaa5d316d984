use crate::error::StoreError;
use crate::record::{EmbeddingRecord, StoreFilters};

/// Anything that can hand the pipeline a batch of embeddings.
///
/// Implementations are synchronous; async callers should run them on a
/// blocking worker.
pub trait EmbeddingSource: Send + Sync {
    /// Fetch every record matching `filters`, ordered by id and capped at the
    /// source's row limit. No match is `Ok(vec![])`.
    fn fetch(&self, filters: &StoreFilters) -> Result<Vec<EmbeddingRecord>, StoreError>;

    /// Cheap liveness probe for readiness checks.
    fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

use thiserror::Error;

/// Underlying driver failure, kept so callers can walk the `source()` chain.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced while reading embeddings from the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Could not open a connection to the database.
    #[error("store connection failed: {0}")]
    Connection(#[source] BoxError),
    /// The query was rejected or a column could not be read.
    #[error("store query failed: {0}")]
    Query(#[source] BoxError),
    /// A stored vector could not be parsed as a list of finite numbers.
    #[error("embedding {id} has an undecodable vector: {reason}")]
    Decode { id: i64, reason: String },
}

impl StoreError {
    /// Short, stable name for the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::Connection(_) => "ConnectionError",
            StoreError::Query(_) => "QueryError",
            StoreError::Decode { .. } => "DecodeError",
        }
    }

    pub(crate) fn connection(err: postgres::Error) -> Self {
        StoreError::Connection(Box::new(err))
    }

    pub(crate) fn query(err: postgres::Error) -> Self {
        StoreError::Query(Box::new(err))
    }
}

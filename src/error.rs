use projection::ProjectionError;
use store::StoreError;
use thiserror::Error;

/// Errors that can occur while building a visualization.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Reading the batch from the embedding source failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A numeric stage rejected the batch.
    #[error(transparent)]
    Projection(#[from] ProjectionError),

    /// The request itself is malformed (unknown method, bad cluster count).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl PipelineError {
    /// Short, stable name reported as the error `type`.
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::Store(err) => err.kind(),
            PipelineError::Projection(err) => err.kind(),
            PipelineError::InvalidRequest(_) => "InvalidRequest",
        }
    }

    /// Whether the caller, not a dependency, is at fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, PipelineError::InvalidRequest(_))
    }
}

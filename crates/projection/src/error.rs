use thiserror::Error;

/// Errors raised by the numeric stages.
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// Nothing to project.
    #[error("empty batch: at least one vector is required")]
    EmptyBatch,
    /// Rows of the batch disagree on dimensionality.
    #[error("vector {index} has {got} components, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        got: usize,
    },
    /// The requested cluster count cannot be satisfied by this batch.
    #[error("cannot form {requested} clusters from {samples} samples")]
    InvalidClusterCount { requested: usize, samples: usize },
    /// linfa could not decompose the batch.
    #[error("principal component analysis failed: {0}")]
    Pca(#[source] linfa_reduction::ReductionError),
    /// linfa rejected the k-means parameters or failed to fit.
    #[error("k-means clustering failed: {0}")]
    Clustering(#[source] linfa_clustering::KMeansError),
    /// The neighbor-graph layout could not be computed.
    #[cfg(feature = "manifold")]
    #[error("manifold layout failed: {0}")]
    Manifold(#[source] linfa_tsne::TSneError),
}

impl ProjectionError {
    /// Short, stable name for the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ProjectionError::EmptyBatch => "EmptyBatch",
            ProjectionError::DimensionMismatch { .. } => "DimensionMismatch",
            ProjectionError::InvalidClusterCount { .. } => "InvalidClusterCount",
            ProjectionError::Pca(_) => "PcaError",
            ProjectionError::Clustering(_) => "ClusteringError",
            #[cfg(feature = "manifold")]
            ProjectionError::Manifold(_) => "ManifoldError",
        }
    }
}

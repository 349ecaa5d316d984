//! Numeric stages of the Codex Synapse visualization pipeline.
//!
//! Embeddings come in as an `N x D` matrix and leave as `N x 3` coordinates
//! plus a cluster label per row.
//!
//! ## Stages
//!
//! - [`standardize`]: zero mean / unit variance per dimension
//! - [`Projector::reduce`]: neighbor-graph layout (`linfa-tsne`) or PCA
//!   (`linfa-reduction`) down to 3 axes, followed by per-axis rescaling to
//!   `[-1, 1]`
//! - [`kmeans`]: `linfa-clustering` k-means with k-means++ restarts
//!
//! ## Determinism
//!
//! Every randomized linfa routine gets a `Xoshiro256Plus` seeded from config,
//! so the same matrix and config always produce the same coordinates and
//! labels.

mod config;
mod error;
mod interop;
mod kmeans;
#[cfg(feature = "manifold")]
mod manifold;
mod pca;
mod reduce;
mod rescale;
mod scale;

pub use crate::config::{KMeansConfig, ProjectionConfig};
pub use crate::error::ProjectionError;
pub use crate::kmeans::{kmeans, KMeansResult};
pub use crate::pca::{pca, PcaProjection};
pub use crate::reduce::{Projector, Reduction, ReductionMethod, OUTPUT_DIMS};
pub use crate::rescale::rescale_axes;
pub use crate::scale::{standardize, to_matrix};

/// Whether the manifold layout was compiled in.
pub const fn manifold_compiled() -> bool {
    cfg!(feature = "manifold")
}

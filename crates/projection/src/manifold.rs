//! Neighbor-graph layout through `linfa-tsne` (Barnes-Hut t-SNE).
//!
//! Like the fuzzy-graph methods it stands in for, it keeps each point's
//! nearest neighbors close and lets distant groups drift apart. The configured
//! neighbor count becomes the perplexity, capped at `(N - 2) / 3` because the
//! fit needs `3 * perplexity` neighbors per point.

use linfa::traits::Transformer;
use linfa::ParamGuard;
use linfa_tsne::TSneParams;
use ndarray::Array2;
use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

use crate::error::ProjectionError;
use crate::interop::{from_linfa, to_linfa};
use crate::reduce::OUTPUT_DIMS;
use crate::scale::has_spread;

/// Barnes-Hut accuracy/speed trade-off; `0.0` would be exact and quadratic.
const BARNES_HUT_THETA: f64 = 0.5;

#[derive(Debug, Clone, Copy)]
pub(crate) struct ManifoldParams {
    pub n_neighbors: usize,
    pub n_iter: usize,
    pub seed: u64,
}

/// Perplexity used for a batch of `n_samples` rows.
pub(crate) fn perplexity(n_neighbors: usize, n_samples: usize) -> f64 {
    let cap = (n_samples as f64 - 2.0) / 3.0;
    (n_neighbors as f64).min(cap).max(1.0)
}

/// Lay out `data` (`N x D`) in 3 dimensions.
pub(crate) fn embed(data: &Array2<f64>, params: ManifoldParams) -> Result<Array2<f64>, ProjectionError> {
    let n = data.nrows();
    if !has_spread(data) {
        return Ok(Array2::zeros((n, OUTPUT_DIMS)));
    }

    // Zero columns leave every pairwise distance unchanged.
    let records = to_linfa(data, OUTPUT_DIMS);
    let layout = TSneParams::embedding_size_with_rng(OUTPUT_DIMS, Xoshiro256Plus::seed_from_u64(params.seed))
        .perplexity(perplexity(params.n_neighbors, n))
        .approx_threshold(BARNES_HUT_THETA)
        .max_iter(params.n_iter)
        .check()
        .and_then(|valid| valid.transform(records))
        .map_err(ProjectionError::Manifold)?;

    Ok(from_linfa(&layout, OUTPUT_DIMS))
}

//! Principal component analysis through `linfa-reduction`.
//!
//! A centered batch of `N` rows spans at most `N - 1` directions, so the fit
//! asks linfa for `min(n_components, N - 1, D)` components and pads the
//! remaining score columns with zeros.

use linfa::traits::{Fit, Predict};
use linfa::DatasetBase;
use linfa_reduction::{Pca, ReductionError};
use ndarray::Array2;

use crate::error::ProjectionError;
use crate::interop::{from_linfa, to_linfa, LinfaMatrix};
use crate::scale::has_spread;

/// Scores and captured variance of a PCA fit.
#[derive(Debug, Clone)]
pub struct PcaProjection {
    /// `N x n_components` projection of the centered data. Components the
    /// batch cannot support are zero columns.
    pub scores: Array2<f64>,
    /// Fraction of total variance captured by each fitted component, descending.
    pub explained_variance_ratio: Vec<f64>,
}

impl PcaProjection {
    /// Total fraction of variance captured by all components.
    pub fn variance_explained(&self) -> f64 {
        self.explained_variance_ratio.iter().sum()
    }

    fn origin(n_samples: usize, n_components: usize) -> Self {
        Self {
            scores: Array2::zeros((n_samples, n_components)),
            explained_variance_ratio: Vec::new(),
        }
    }
}

/// Project `data` onto its top `n_components` principal axes.
///
/// A batch whose rows are all the same point has no axes to find and comes
/// back at the origin. Rank-deficient batches retry with fewer components.
pub fn pca(data: &Array2<f64>, n_components: usize) -> Result<PcaProjection, ProjectionError> {
    let (n, d) = data.dim();
    let usable = n_components.min(n.saturating_sub(1)).min(d);
    if usable == 0 || !has_spread(data) {
        return Ok(PcaProjection::origin(n, n_components));
    }

    let records = to_linfa(data, 0);
    let mut last_err = None;
    for components in (1..=usable).rev() {
        match fit(&records, components) {
            Ok((scores, ratios)) => {
                return Ok(PcaProjection {
                    scores: from_linfa(&scores, n_components),
                    explained_variance_ratio: ratios,
                });
            }
            Err(err) => {
                tracing::debug!(components, error = %err, "pca fit failed, retrying with fewer components");
                last_err = Some(err);
            }
        }
    }
    match last_err {
        Some(err) => Err(ProjectionError::Pca(err)),
        None => Ok(PcaProjection::origin(n, n_components)),
    }
}

fn fit(records: &LinfaMatrix, components: usize) -> Result<(LinfaMatrix, Vec<f64>), ReductionError> {
    let dataset = DatasetBase::from(records.clone());
    let model = Pca::params(components).fit(&dataset)?;
    let scores: LinfaMatrix = model.predict(records);
    Ok((scores, model.explained_variance_ratio().to_vec()))
}

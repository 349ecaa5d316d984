use crate::config::ProjectionConfig;
use crate::error::ProjectionError;
use crate::pca::pca;
use crate::rescale::rescale_axes;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dimensionality of every reduced point.
pub const OUTPUT_DIMS: usize = 3;

/// Reduction technique, requested or actually used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReductionMethod {
    /// Non-linear manifold layout.
    #[default]
    Umap,
    /// Linear principal components.
    Pca,
}

impl ReductionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReductionMethod::Umap => "umap",
            ReductionMethod::Pca => "pca",
        }
    }
}

impl fmt::Display for ReductionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `N x 3` coordinates in `[-1, 1]` and how they were produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    pub coords: Array2<f64>,
    pub method: ReductionMethod,
    /// Captured variance; only the linear method reports it.
    pub variance_explained: Option<f64>,
}

/// Chooses and runs the reduction for a standardized batch.
#[derive(Debug, Clone)]
pub struct Projector {
    config: ProjectionConfig,
}

impl Projector {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Manifold layout is compiled in and enabled by config.
    pub fn manifold_available(&self) -> bool {
        crate::manifold_compiled() && self.config.manifold_enabled
    }

    /// The method that `reduce` will use for `n_samples` rows.
    pub fn resolve(&self, requested: ReductionMethod, n_samples: usize) -> ReductionMethod {
        match requested {
            ReductionMethod::Umap
                if self.manifold_available() && n_samples >= self.config.min_manifold_samples =>
            {
                ReductionMethod::Umap
            }
            _ => ReductionMethod::Pca,
        }
    }

    /// Reduce `standardized` (`N x D`) to 3 rescaled axes.
    pub fn reduce(&self, standardized: &Array2<f64>, requested: ReductionMethod) -> Result<Reduction, ProjectionError> {
        let n = standardized.nrows();
        let method = self.resolve(requested, n);

        let (mut coords, variance_explained) = match method {
            #[cfg(feature = "manifold")]
            ReductionMethod::Umap => {
                let params = crate::manifold::ManifoldParams {
                    n_neighbors: self.config.n_neighbors,
                    n_iter: self.config.n_iter,
                    seed: self.config.seed,
                };
                (crate::manifold::embed(standardized, params)?, None)
            }
            _ => {
                let linear = pca(standardized, OUTPUT_DIMS)?;
                let captured = linear.variance_explained();
                (linear.scores, Some(captured))
            }
        };

        rescale_axes(&mut coords);
        tracing::debug!(n_samples = n, %method, ?variance_explained, "reduced to 3d");
        Ok(Reduction {
            coords,
            method,
            variance_explained,
        })
    }
}

use serde::{Deserialize, Serialize};

/// Reduction settings. The manifold flag is injected here rather than probed
/// globally so callers decide availability once, at construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Allow the manifold layout when it is compiled in.
    pub manifold_enabled: bool,
    /// Smallest batch the manifold layout will accept; smaller batches use PCA.
    pub min_manifold_samples: usize,
    /// Neighborhood size of the manifold layout, capped per batch by its size.
    pub n_neighbors: usize,
    /// Layout optimization iterations.
    pub n_iter: usize,
    /// Seed shared by every randomized stage.
    pub seed: u64,
    pub kmeans: KMeansConfig,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            manifold_enabled: true,
            min_manifold_samples: 10,
            n_neighbors: 15,
            n_iter: 1000,
            seed: 42,
            kmeans: KMeansConfig::default(),
        }
    }
}

/// k-means settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KMeansConfig {
    /// Independent k-means++ restarts; the lowest inertia wins.
    pub n_init: usize,
    pub max_iter: usize,
    /// Convergence threshold on centroid movement.
    pub tol: f64,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            n_init: 10,
            max_iter: 300,
            tol: 1e-4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = ProjectionConfig::default();
        assert!(cfg.manifold_enabled);
        assert_eq!(cfg.min_manifold_samples, 10);
        assert_eq!(cfg.n_neighbors, 15);
        assert_eq!(cfg.n_iter, 1000);
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.kmeans.n_init, 10);
        assert_eq!(cfg.kmeans.max_iter, 300);
    }

    #[test]
    fn partial_override() {
        let cfg: ProjectionConfig =
            serde_json::from_str(r#"{"manifold_enabled": false, "kmeans": {"n_init": 3}}"#).unwrap();
        assert!(!cfg.manifold_enabled);
        assert_eq!(cfg.kmeans.n_init, 3);
        assert_eq!(cfg.kmeans.max_iter, 300);
        assert_eq!(cfg.seed, 42);
    }
}

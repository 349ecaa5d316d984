use std::collections::HashMap;

use linfa::traits::{Fit, Predict};
use linfa::DatasetBase;
use linfa_clustering::KMeans;
use ndarray::{Array2, Axis};
use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

use crate::config::KMeansConfig;
use crate::error::ProjectionError;
use crate::interop::{from_linfa, to_linfa};

/// Partition found for a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansResult {
    /// Cluster id in `0..k` for every row.
    pub labels: Vec<usize>,
    /// Cluster centers in the input space, one row per id.
    pub centroids: Array2<f64>,
}

/// Partition the rows of `data` into `k` clusters with linfa's k-means.
///
/// k-means++ seeding is drawn from `seed`, with `cfg.n_init` restarts, so the
/// same batch and config always give the same labels.
///
/// A single cluster, or a batch with no more distinct rows than `k`, has an
/// exact solution and is answered without fitting: one group, or one group per
/// distinct row.
pub fn kmeans(data: &Array2<f64>, k: usize, cfg: &KMeansConfig, seed: u64) -> Result<KMeansResult, ProjectionError> {
    let n = data.nrows();
    if n == 0 {
        return Err(ProjectionError::EmptyBatch);
    }
    if k == 0 || k > n {
        return Err(ProjectionError::InvalidClusterCount {
            requested: k,
            samples: n,
        });
    }

    if k == 1 {
        let centroid = data.mean_axis(Axis(0)).ok_or(ProjectionError::EmptyBatch)?;
        return Ok(KMeansResult {
            labels: vec![0; n],
            centroids: centroid.insert_axis(Axis(0)),
        });
    }

    let (distinct, first_seen) = distinct_rows(data);
    if first_seen.len() <= k {
        tracing::debug!(distinct = first_seen.len(), k, "no more distinct rows than clusters");
        let centroids = data.select(Axis(0), &first_seen);
        return Ok(KMeansResult {
            labels: distinct,
            centroids,
        });
    }

    let records = to_linfa(data, 0);
    let dataset = DatasetBase::from(records.clone());
    let model = KMeans::params_with_rng(k, Xoshiro256Plus::seed_from_u64(seed))
        .n_runs(cfg.n_init.max(1))
        .max_n_iterations(cfg.max_iter.max(1) as u64)
        .tolerance(cfg.tol)
        .fit(&dataset)
        .map_err(ProjectionError::Clustering)?;

    let labels: linfa_ndarray::Array1<usize> = model.predict(&records);
    let centroids = from_linfa(model.centroids(), data.ncols());
    tracing::trace!(k, n_samples = n, "kmeans fitted");
    Ok(KMeansResult {
        labels: labels.to_vec(),
        centroids,
    })
}

/// Label every row by the order its exact value first appears, and return the
/// index of each first appearance.
fn distinct_rows(data: &Array2<f64>) -> (Vec<usize>, Vec<usize>) {
    let mut ids: HashMap<Vec<u64>, usize> = HashMap::new();
    let mut first_seen = Vec::new();
    let labels = data
        .rows()
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let key: Vec<u64> = row.iter().map(|x| x.to_bits()).collect();
            let next = ids.len();
            *ids.entry(key).or_insert_with(|| {
                first_seen.push(i);
                next
            })
        })
        .collect();
    (labels, first_seen)
}

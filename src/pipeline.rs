use std::time::Instant;

use ndarray::{Array2, Axis};
use projection::{Projector, ReductionMethod, kmeans, standardize, to_matrix};
use store::{EmbeddingRecord, EmbeddingSource, StoreFilters};
use themes::{ThemeSource, label_groups};

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::palette::color_for;
use crate::response::{ChunkPoint, ClusterSummary, Coordinates, Visualization, VisualizationMetadata};

/// Per-request knobs, already validated against the pipeline config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualizeOptions {
    pub method: ReductionMethod,
    pub n_clusters: usize,
}

/// Fetch → standardize → reduce → cluster → label → assemble.
///
/// Holds only read-only configuration, so one instance can serve every
/// request concurrently.
#[derive(Debug, Clone)]
pub struct VisualizationPipeline {
    config: PipelineConfig,
    projector: Projector,
}

impl VisualizationPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        let projector = Projector::new(config.projection.clone());
        Self { config, projector }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Whether the manifold method can be used at all.
    pub fn has_umap(&self) -> bool {
        self.projector.manifold_available()
    }

    /// Fill in defaults and reject a zero cluster count.
    ///
    /// There is no upper bound: a count above the batch size yields the
    /// single-group layout.
    pub fn options(
        &self,
        method: Option<ReductionMethod>,
        n_clusters: Option<usize>,
    ) -> Result<VisualizeOptions, PipelineError> {
        let n_clusters = n_clusters.unwrap_or(self.config.default_clusters);
        if n_clusters == 0 {
            return Err(PipelineError::InvalidRequest(
                "n_clusters must be >= 1, got 0".to_string(),
            ));
        }
        Ok(VisualizeOptions {
            method: method.unwrap_or(self.config.default_method),
            n_clusters,
        })
    }

    /// Read the matching batch from `source` and lay it out.
    pub fn run(
        &self,
        source: &dyn EmbeddingSource,
        filters: &StoreFilters,
        options: &VisualizeOptions,
    ) -> Result<Visualization, PipelineError> {
        let records = source.fetch(filters)?;
        tracing::debug!(rows = records.len(), ?filters, "fetched embeddings");
        self.visualize(&records, options)
    }

    /// Lay out an already-fetched batch.
    pub fn visualize(
        &self,
        records: &[EmbeddingRecord],
        options: &VisualizeOptions,
    ) -> Result<Visualization, PipelineError> {
        if records.is_empty() {
            let method = self.projector.resolve(options.method, 0);
            return Ok(Visualization::empty(method, self.has_umap()));
        }

        let started = Instant::now();
        let n_samples = records.len();
        let vectors: Vec<&[f32]> = records.iter().map(|r| r.vector.as_slice()).collect();
        let standardized = standardize(&to_matrix(&vectors)?)?;

        let reduction = self.projector.reduce(&standardized, options.method)?;
        let coords = reduction.coords;

        // Clustering runs on the standardized vectors, not the 3D layout.
        let k = options.n_clusters;
        let labels = if n_samples >= k {
            let projection = &self.config.projection;
            kmeans(&standardized, k, &projection.kmeans, projection.seed)?.labels
        } else {
            vec![0; n_samples]
        };

        let clusters = if n_samples >= k {
            self.summarize_groups(records, &labels, &coords, k)
        } else {
            Vec::new()
        };

        let chunks = records
            .iter()
            .zip(&labels)
            .enumerate()
            .map(|(i, (record, &cluster))| ChunkPoint {
                id: record.id,
                document_id: record.document_id,
                document_name: record.document_name.clone(),
                chunk_text: record.chunk_text.clone(),
                chunk_index: record.chunk_index,
                project_id: record.project_id,
                is_vault_document: record.is_vault_document,
                coordinates: Coordinates {
                    x: coords[[i, 0]],
                    y: coords[[i, 1]],
                    z: coords[[i, 2]],
                },
                cluster,
                color: color_for(cluster).to_string(),
            })
            .collect();

        tracing::info!(
            n_samples,
            method = %reduction.method,
            n_clusters = clusters.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "visualization built"
        );

        Ok(Visualization {
            metadata: VisualizationMetadata {
                method: reduction.method,
                n_samples,
                n_clusters: clusters.len(),
                variance_explained: reduction.variance_explained,
                has_umap: self.has_umap(),
                error: None,
            },
            chunks,
            clusters,
        })
    }

    /// Centroid, size, color and theme of every non-empty group, by id.
    fn summarize_groups(
        &self,
        records: &[EmbeddingRecord],
        labels: &[usize],
        coords: &Array2<f64>,
        k: usize,
    ) -> Vec<ClusterSummary> {
        let sources: Vec<ThemeSource<'_>> = records
            .iter()
            .map(|r| ThemeSource::new(&r.chunk_text, &r.document_name))
            .collect();
        let themes = label_groups(&sources, labels, &self.config.themes);

        (0..k)
            .filter_map(|group| {
                let members: Vec<usize> = labels
                    .iter()
                    .enumerate()
                    .filter(|&(_, &l)| l == group)
                    .map(|(i, _)| i)
                    .collect();
                let centroid = coords.select(Axis(0), &members).mean_axis(Axis(0))?;
                let theme = themes
                    .get(&group)
                    .cloned()
                    .unwrap_or_else(|| format!("{} {group}", self.config.themes.generic_prefix));
                Some(ClusterSummary {
                    id: group,
                    x: centroid[0],
                    y: centroid[1],
                    z: centroid[2],
                    size: members.len(),
                    color: color_for(group).to_string(),
                    theme,
                })
            })
            .collect()
    }
}

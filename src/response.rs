//! Wire shape of a visualization, as consumed by the 3D viewer.

use projection::ReductionMethod;
use serde::{Deserialize, Serialize};

/// Metadata message for a filter that matched nothing.
pub const NO_EMBEDDINGS_MESSAGE: &str = "No embeddings found with the specified filters";

/// One batch laid out in 3D.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Visualization {
    pub chunks: Vec<ChunkPoint>,
    pub clusters: Vec<ClusterSummary>,
    pub metadata: VisualizationMetadata,
}

impl Visualization {
    /// Result for a filter with no matching rows.
    pub fn empty(method: ReductionMethod, has_umap: bool) -> Self {
        Self {
            chunks: Vec::new(),
            clusters: Vec::new(),
            metadata: VisualizationMetadata {
                method,
                n_samples: 0,
                n_clusters: 0,
                variance_explained: None,
                has_umap,
                error: Some(NO_EMBEDDINGS_MESSAGE.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A chunk placed in the scene, with its source fields passed through.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChunkPoint {
    pub id: i64,
    pub document_id: i64,
    pub document_name: String,
    pub chunk_text: String,
    pub chunk_index: i32,
    pub project_id: Option<i64>,
    pub is_vault_document: bool,
    pub coordinates: Coordinates,
    pub cluster: usize,
    pub color: String,
}

/// A non-empty group: centroid of its members' 3D coordinates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClusterSummary {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub size: usize,
    pub color: String,
    pub theme: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisualizationMetadata {
    /// Method actually used, which may differ from the one requested.
    pub method: ReductionMethod,
    pub n_samples: usize,
    /// Number of emitted clusters.
    pub n_clusters: usize,
    pub variance_explained: Option<f64>,
    pub has_umap: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

//! Workspace umbrella crate for Codex Synapse.
//!
//! Turns the chunk embeddings of a document collection into a 3D scene: every
//! chunk becomes a point with a cluster and a color, and every cluster gets a
//! centroid and a theme named after its most frequent terms.
//!
//! The stages live in their own crates and are stitched together by
//! [`VisualizationPipeline`]:
//!
//! - `store`: filtered reads of `embeddings JOIN documents`
//! - `projection`: standardization, 3D reduction, k-means
//! - `themes`: term-frequency labels per cluster
//!
//! ```
//! use synapse::{PipelineConfig, ReductionMethod, VisualizationPipeline};
//! use synapse::store::{EmbeddingRecord, InMemoryStore, StoreFilters};
//!
//! let records: Vec<EmbeddingRecord> = (0..4)
//!     .map(|i| EmbeddingRecord {
//!         id: i,
//!         document_id: 1,
//!         chunk_text: format!("contrato cláusula {i}"),
//!         chunk_index: i as i32,
//!         vector: vec![i as f32, 1.0, -(i as f32)],
//!         metadata: serde_json::Value::Null,
//!         document_name: "contrato.pdf".into(),
//!         project_id: None,
//!         is_vault_document: false,
//!     })
//!     .collect();
//!
//! let pipeline = VisualizationPipeline::new(PipelineConfig::default());
//! let options = pipeline.options(Some(ReductionMethod::Pca), Some(2)).unwrap();
//! let scene = pipeline
//!     .run(&InMemoryStore::new(records), &StoreFilters::default(), &options)
//!     .unwrap();
//!
//! assert_eq!(scene.metadata.n_samples, 4);
//! assert!(scene.metadata.variance_explained.is_some());
//! ```

mod config;
mod error;
mod palette;
mod pipeline;
mod response;

pub use crate::config::{ConfigLoadError, PipelineConfig};
pub use crate::error::PipelineError;
pub use crate::palette::{PALETTE, color_for};
pub use crate::pipeline::{VisualizationPipeline, VisualizeOptions};
pub use crate::response::{
    ChunkPoint, ClusterSummary, Coordinates, NO_EMBEDDINGS_MESSAGE, Visualization,
    VisualizationMetadata,
};

pub use projection::{self, ProjectionConfig, ReductionMethod};
pub use store::{self, DatabaseConfig, EmbeddingRecord, EmbeddingSource, StoreError, StoreFilters};
pub use themes::{self, ThemeConfig};

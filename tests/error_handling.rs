use synapse::store::InMemoryStore;
use synapse::{
    EmbeddingRecord, EmbeddingSource, NO_EMBEDDINGS_MESSAGE, PipelineConfig, PipelineError,
    ReductionMethod, StoreError, StoreFilters, VisualizationPipeline,
};
use synapse::projection::ProjectionError;

fn record(id: i64, vector: Vec<f32>) -> EmbeddingRecord {
    EmbeddingRecord {
        id,
        document_id: 1,
        chunk_text: "texto".into(),
        chunk_index: 0,
        vector,
        metadata: serde_json::Value::Null,
        document_name: "doc.pdf".into(),
        project_id: None,
        is_vault_document: false,
    }
}

struct BrokenStore(fn() -> StoreError);

impl EmbeddingSource for BrokenStore {
    fn fetch(&self, _filters: &StoreFilters) -> Result<Vec<EmbeddingRecord>, StoreError> {
        Err((self.0)())
    }
}

#[test]
fn empty_filter_result_is_not_an_error() {
    let pipeline = VisualizationPipeline::new(PipelineConfig::default());
    let options = pipeline.options(None, None).unwrap();
    let filters = StoreFilters {
        project_id: Some(404),
        ..Default::default()
    };
    let scene = pipeline
        .run(&InMemoryStore::new(vec![record(1, vec![1.0, 2.0])]), &filters, &options)
        .unwrap();
    assert!(scene.chunks.is_empty());
    assert!(scene.clusters.is_empty());
    assert_eq!(scene.metadata.error.as_deref(), Some(NO_EMBEDDINGS_MESSAGE));
}

#[test]
fn store_errors_propagate_with_their_kind() {
    let pipeline = VisualizationPipeline::new(PipelineConfig::default());
    let options = pipeline.options(None, None).unwrap();

    let cases: [(fn() -> StoreError, &str); 3] = [
        (|| StoreError::Connection("timeout".into()), "ConnectionError"),
        (|| StoreError::Query("relation \"embeddings\" does not exist".into()), "QueryError"),
        (
            || StoreError::Decode {
                id: 17,
                reason: "not a list".into(),
            },
            "DecodeError",
        ),
    ];
    for (make, kind) in cases {
        let err = pipeline
            .run(&BrokenStore(make), &StoreFilters::default(), &options)
            .unwrap_err();
        assert!(matches!(err, PipelineError::Store(_)));
        assert_eq!(err.kind(), kind);
        assert!(!err.is_client_error());
    }
}

#[test]
fn dimension_mismatch_names_the_row() {
    let pipeline = VisualizationPipeline::new(PipelineConfig::default());
    let options = pipeline.options(Some(ReductionMethod::Pca), Some(1)).unwrap();
    let batch = vec![record(1, vec![1.0, 2.0, 3.0]), record(2, vec![1.0, 2.0, 3.0]), record(3, vec![1.0])];
    let err = pipeline.visualize(&batch, &options).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Projection(ProjectionError::DimensionMismatch {
            index: 2,
            expected: 3,
            got: 1
        })
    ));
}

#[test]
fn only_a_zero_cluster_count_is_rejected() {
    let pipeline = VisualizationPipeline::new(PipelineConfig::default());
    let err = pipeline.options(None, Some(0)).unwrap_err();
    assert!(err.is_client_error());
    assert!(err.to_string().contains("n_clusters"));

    let options = pipeline.options(Some(ReductionMethod::Pca), Some(100)).unwrap();
    let batch: Vec<_> = (0..50).map(|i| record(i, vec![i as f32, (i % 3) as f32, 1.0])).collect();
    let scene = pipeline.visualize(&batch, &options).unwrap();
    assert_eq!(scene.chunks.len(), 50);
    assert!(scene.clusters.is_empty());
    assert!(scene.chunks.iter().all(|c| c.cluster == 0));
}

#[test]
fn constant_batch_is_handled_by_policy() {
    let pipeline = VisualizationPipeline::new(PipelineConfig::default());
    let options = pipeline.options(Some(ReductionMethod::Umap), Some(2)).unwrap();
    let batch: Vec<_> = (0..12).map(|i| record(i, vec![0.5, 0.5, 0.5])).collect();
    let scene = pipeline.visualize(&batch, &options).unwrap();
    assert_eq!(scene.chunks.len(), 12);
    for chunk in &scene.chunks {
        let c = chunk.coordinates;
        assert!(c.x.is_finite() && c.y.is_finite() && c.z.is_finite());
        assert!((-1.0..=1.0).contains(&c.x));
    }
}

use synapse::{
    EmbeddingRecord, PipelineConfig, ProjectionConfig, ReductionMethod, Visualization,
    VisualizationPipeline, color_for,
};

/// Deterministic pseudo-random vectors around `groups` well separated centers.
fn blob_records(n: usize, dims: usize, groups: usize) -> Vec<EmbeddingRecord> {
    (0..n)
        .map(|i| {
            let group = i % groups;
            let vector = (0..dims)
                .map(|d| {
                    let center = if d % groups == group { 4.0 } else { 0.0 };
                    let noise = ((i * 31 + d * 17) as f32).sin() * 0.2;
                    center + noise
                })
                .collect();
            EmbeddingRecord {
                id: i as i64 + 1,
                document_id: group as i64 + 10,
                chunk_text: format!("sección {group} del contrato de servicios"),
                chunk_index: i as i32,
                vector,
                metadata: serde_json::json!({"page": i}),
                document_name: format!("expediente_{group}.pdf"),
                project_id: Some(1),
                is_vault_document: false,
            }
        })
        .collect()
}

fn pipeline() -> VisualizationPipeline {
    VisualizationPipeline::new(PipelineConfig::default())
}

fn run(records: &[EmbeddingRecord], method: ReductionMethod, k: usize) -> Visualization {
    let p = pipeline();
    let options = p.options(Some(method), Some(k)).unwrap();
    p.visualize(records, &options).unwrap()
}

fn axis_values(scene: &Visualization, axis: usize) -> Vec<f64> {
    scene
        .chunks
        .iter()
        .map(|c| match axis {
            0 => c.coordinates.x,
            1 => c.coordinates.y,
            _ => c.coordinates.z,
        })
        .collect()
}

#[test]
fn manifold_is_used_from_ten_samples_when_available() {
    let scene = run(&blob_records(12, 16, 3), ReductionMethod::Umap, 3);
    if cfg!(feature = "manifold") {
        assert_eq!(scene.metadata.method, ReductionMethod::Umap);
        assert!(scene.metadata.variance_explained.is_none());
        assert!(scene.metadata.has_umap);
    } else {
        assert_eq!(scene.metadata.method, ReductionMethod::Pca);
        assert!(scene.metadata.variance_explained.is_some());
    }
}

#[test]
fn small_batches_fall_back_to_pca() {
    let scene = run(&blob_records(9, 16, 3), ReductionMethod::Umap, 3);
    assert_eq!(scene.metadata.method, ReductionMethod::Pca);
    let captured = scene.metadata.variance_explained.unwrap();
    assert!(captured > 0.0 && captured <= 1.0 + 1e-9);
}

#[test]
fn disabled_manifold_reports_no_umap() {
    let config = PipelineConfig {
        projection: ProjectionConfig {
            manifold_enabled: false,
            ..ProjectionConfig::default()
        },
        ..PipelineConfig::default()
    };
    let p = VisualizationPipeline::new(config);
    assert!(!p.has_umap());
    let options = p.options(Some(ReductionMethod::Umap), Some(3)).unwrap();
    let scene = p.visualize(&blob_records(30, 8, 3), &options).unwrap();
    assert_eq!(scene.metadata.method, ReductionMethod::Pca);
    assert!(!scene.metadata.has_umap);
    assert!(scene.metadata.variance_explained.is_some());
}

#[test]
fn non_degenerate_axes_span_minus_one_to_one() {
    for method in [ReductionMethod::Umap, ReductionMethod::Pca] {
        let scene = run(&blob_records(20, 12, 4), method, 4);
        for axis in 0..3 {
            let values = axis_values(&scene, axis);
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            assert!(min >= -1.0 && max <= 1.0, "{method} axis {axis}");
            if max > min {
                assert!((min + 1.0).abs() < 1e-12, "{method} axis {axis} min {min}");
                assert!((max - 1.0).abs() < 1e-12, "{method} axis {axis} max {max}");
            }
        }
    }
}

#[test]
fn fewer_samples_than_clusters_emit_no_groups() {
    let scene = run(&blob_records(5, 8, 2), ReductionMethod::Umap, 8);
    assert_eq!(scene.metadata.n_samples, 5);
    assert_eq!(scene.metadata.n_clusters, 0);
    assert!(scene.clusters.is_empty());
    assert!(scene.chunks.iter().all(|c| c.cluster == 0 && c.color == "#3B82F6"));
}

#[test]
fn every_point_maps_to_one_emitted_group() {
    let k = 4;
    let scene = run(&blob_records(24, 12, 4), ReductionMethod::Pca, k);
    assert!(scene.clusters.len() <= k);
    assert_eq!(scene.metadata.n_clusters, scene.clusters.len());

    let total: usize = scene.clusters.iter().map(|c| c.size).sum();
    assert_eq!(total, scene.chunks.len());

    for chunk in &scene.chunks {
        let owners = scene.clusters.iter().filter(|c| c.id == chunk.cluster).count();
        assert_eq!(owners, 1, "chunk {} in cluster {}", chunk.id, chunk.cluster);
    }
}

#[test]
fn centroids_are_means_of_member_coordinates() {
    let scene = run(&blob_records(18, 10, 3), ReductionMethod::Pca, 3);
    for cluster in &scene.clusters {
        let members: Vec<_> = scene.chunks.iter().filter(|c| c.cluster == cluster.id).collect();
        assert_eq!(members.len(), cluster.size);
        let n = members.len() as f64;
        let mean_x = members.iter().map(|c| c.coordinates.x).sum::<f64>() / n;
        let mean_y = members.iter().map(|c| c.coordinates.y).sum::<f64>() / n;
        let mean_z = members.iter().map(|c| c.coordinates.z).sum::<f64>() / n;
        assert!((cluster.x - mean_x).abs() < 1e-9);
        assert!((cluster.y - mean_y).abs() < 1e-9);
        assert!((cluster.z - mean_z).abs() < 1e-9);
    }
}

#[test]
fn colors_depend_only_on_group_id() {
    let scene = run(&blob_records(40, 12, 4), ReductionMethod::Pca, 12);
    for chunk in &scene.chunks {
        assert_eq!(chunk.color, color_for(chunk.cluster));
    }
    for cluster in &scene.clusters {
        assert_eq!(cluster.color, color_for(cluster.id));
    }
    if let Some(c) = scene.clusters.iter().find(|c| c.id >= 10) {
        assert_eq!(c.color, color_for(c.id - 10));
    }
}

#[test]
fn clear_blobs_are_recovered() {
    let scene = run(&blob_records(15, 9, 3), ReductionMethod::Pca, 3);
    assert_eq!(scene.clusters.len(), 3);
    for cluster in &scene.clusters {
        let docs: std::collections::BTreeSet<_> = scene
            .chunks
            .iter()
            .filter(|c| c.cluster == cluster.id)
            .map(|c| c.document_id)
            .collect();
        assert_eq!(docs.len(), 1, "cluster {} mixes documents", cluster.id);
        assert_eq!(cluster.size, 5);
        assert_eq!(cluster.theme, "Sección / Contrato / Servicios");
    }
}

#[test]
fn stopword_only_previews_fall_back_to_names() {
    let mut records = blob_records(12, 8, 3);
    for record in &mut records {
        record.chunk_text = "el de la que para con una los the and was".to_string();
        record.document_name = format!("Reporte anual {}.final.pdf", record.document_id);
    }
    let scene = run(&records, ReductionMethod::Umap, 3);
    assert!(!scene.clusters.is_empty());

    for cluster in &scene.clusters {
        let names: std::collections::BTreeSet<_> = scene
            .chunks
            .iter()
            .filter(|c| c.cluster == cluster.id)
            .map(|c| c.document_name.as_str())
            .collect();
        let expected = if names.len() == 1 {
            let name = names.iter().next().unwrap();
            name.split('.').next().unwrap().chars().take(30).collect::<String>()
        } else {
            format!("Theme {}", cluster.id)
        };
        assert_eq!(cluster.theme, expected);
    }
}

#[test]
fn two_samples_leave_the_third_axis_at_zero() {
    let scene = run(&blob_records(2, 6, 2), ReductionMethod::Pca, 1);
    assert_eq!(scene.metadata.method, ReductionMethod::Pca);
    assert!(axis_values(&scene, 2).iter().all(|&z| z == 0.0));
    let xs = axis_values(&scene, 0);
    assert_eq!(xs.iter().copied().fold(f64::INFINITY, f64::min), -1.0);
    assert_eq!(xs.iter().copied().fold(f64::NEG_INFINITY, f64::max), 1.0);
}

#[test]
fn source_fields_pass_through() {
    let records = blob_records(6, 4, 2);
    let scene = run(&records, ReductionMethod::Pca, 2);
    for (record, chunk) in records.iter().zip(&scene.chunks) {
        assert_eq!(chunk.id, record.id);
        assert_eq!(chunk.document_id, record.document_id);
        assert_eq!(chunk.document_name, record.document_name);
        assert_eq!(chunk.chunk_text, record.chunk_text);
        assert_eq!(chunk.chunk_index, record.chunk_index);
        assert_eq!(chunk.project_id, record.project_id);
        assert_eq!(chunk.is_vault_document, record.is_vault_document);
    }
}

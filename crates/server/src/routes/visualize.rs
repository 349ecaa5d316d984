use crate::error::ServerResult;
use crate::state::ServerState;
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;
use store::StoreFilters;
use synapse::{ReductionMethod, Visualization};

/// Body of `POST /api/visualize`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VisualizeRequest {
    pub method: Option<ReductionMethod>,
    pub n_clusters: Option<usize>,
    pub filters: StoreFilters,
}

impl VisualizeRequest {
    /// An empty body, or a literal `null`, means all defaults.
    pub fn from_body(body: &[u8]) -> ServerResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let parsed: Option<Self> = serde_json::from_slice(body)?;
        Ok(parsed.unwrap_or_default())
    }
}

/// Lay out the embeddings matching `filters` in 3D.
///
/// The store read and all number crunching run on a blocking worker.
///
/// # Example
/// ```json
/// // Request
/// { "method": "umap", "n_clusters": 8, "filters": { "project_id": 456 } }
///
/// // Response
/// {
///   "chunks": [{ "id": 1, "coordinates": { "x": -0.4, "y": 1.0, "z": 0.2 },
///                "cluster": 3, "color": "#EF4444", ... }],
///   "clusters": [{ "id": 3, "x": -0.3, "y": 0.8, "z": 0.1, "size": 12,
///                  "color": "#EF4444", "theme": "Contrato / Arrendamiento / Local" }],
///   "metadata": { "method": "umap", "n_samples": 240, "n_clusters": 8,
///                 "variance_explained": null, "has_umap": true }
/// }
/// ```
pub async fn visualize(
    State(state): State<Arc<ServerState>>,
    body: Bytes,
) -> ServerResult<Json<Visualization>> {
    let started = Instant::now();
    let request = VisualizeRequest::from_body(&body)?;
    let options = state.pipeline.options(request.method, request.n_clusters)?;

    let pipeline = state.pipeline.clone();
    let source = state.source.clone();
    let filters = request.filters;
    let result =
        tokio::task::spawn_blocking(move || pipeline.run(source.as_ref(), &filters, &options))
            .await?;

    metrics::histogram!("synapse_visualize_duration_seconds")
        .record(started.elapsed().as_secs_f64());

    match result {
        Ok(scene) => {
            metrics::counter!(
                "synapse_visualize_requests_total",
                "method" => scene.metadata.method.as_str()
            )
            .increment(1);
            metrics::histogram!("synapse_visualize_samples").record(scene.metadata.n_samples as f64);
            Ok(Json(scene))
        }
        Err(err) => {
            metrics::counter!("synapse_visualize_failures_total", "type" => err.kind()).increment(1);
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_null_bodies_use_defaults() {
        for body in [&b""[..], b"  \n", b"null", b"{}"] {
            let req = VisualizeRequest::from_body(body).unwrap();
            assert!(req.method.is_none());
            assert!(req.n_clusters.is_none());
            assert!(req.filters.is_empty());
        }
    }

    #[test]
    fn full_body_parses() {
        let req = VisualizeRequest::from_body(
            br#"{"method": "pca", "n_clusters": 3, "filters": {"document_id": 9, "is_vault_only": true}}"#,
        )
        .unwrap();
        assert_eq!(req.method, Some(ReductionMethod::Pca));
        assert_eq!(req.n_clusters, Some(3));
        assert_eq!(req.filters.document_id, Some(9));
        assert!(req.filters.is_vault_only);
    }

    #[test]
    fn malformed_bodies_are_rejected() {
        assert!(VisualizeRequest::from_body(b"{").is_err());
        assert!(VisualizeRequest::from_body(br#"{"method": "tsne"}"#).is_err());
        assert!(VisualizeRequest::from_body(br#"{"n_clusters": -1}"#).is_err());
    }
}

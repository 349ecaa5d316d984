//! Offline reducer: reads a batch of raw embeddings as JSON on stdin and
//! writes the 3D visualization to stdout.
//!
//! ```text
//! {"embeddings": [[0.1, ...], ...], "method": "umap", "n_clusters": 8,
//!  "texts": ["..."], "document_names": ["..."]}
//! ```
//!
//! Only `embeddings` is required. On failure `{"error", "type"}` goes to
//! stderr and the process exits with status 1. Set `SYNAPSE_CONFIG` to a YAML
//! file to override pipeline defaults.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::json;
use synapse::{
    EmbeddingRecord, PipelineConfig, PipelineError, ReductionMethod, VisualizationPipeline,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize)]
struct ReduceInput {
    embeddings: Vec<Vec<f32>>,
    #[serde(default)]
    method: Option<ReductionMethod>,
    #[serde(default)]
    n_clusters: Option<usize>,
    #[serde(default)]
    texts: Vec<String>,
    #[serde(default)]
    document_names: Vec<String>,
}

impl ReduceInput {
    /// Wrap raw vectors as records; missing texts and names become empty.
    fn into_records(self) -> Vec<EmbeddingRecord> {
        let mut texts = self.texts.into_iter();
        let mut names = self.document_names.into_iter();
        self.embeddings
            .into_iter()
            .enumerate()
            .map(|(i, vector)| EmbeddingRecord {
                id: i as i64,
                document_id: 0,
                chunk_text: texts.next().unwrap_or_default(),
                chunk_index: i as i32,
                vector,
                metadata: serde_json::Value::Null,
                document_name: names.next().unwrap_or_default(),
                project_id: None,
                is_vault_document: false,
            })
            .collect()
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .compact()
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let kind = err
                .downcast_ref::<PipelineError>()
                .map(PipelineError::kind)
                .unwrap_or("InvalidInput");
            let body = json!({ "error": format!("{err:#}"), "type": kind });
            eprintln!("{body}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = match std::env::var_os("SYNAPSE_CONFIG") {
        Some(path) => PipelineConfig::from_file(&path)
            .with_context(|| format!("loading {}", path.to_string_lossy()))?,
        None => PipelineConfig::default(),
    };

    let mut raw = String::new();
    io::stdin().read_to_string(&mut raw).context("reading stdin")?;
    let input: ReduceInput = serde_json::from_str(&raw).context("parsing input JSON")?;
    if input.embeddings.is_empty() {
        bail!("No embeddings provided");
    }

    let pipeline = VisualizationPipeline::new(config);
    let options = pipeline.options(input.method, input.n_clusters)?;
    let records = input.into_records();
    let scene = pipeline.visualize(&records, &options)?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, &scene)?;
    writeln!(stdout)?;
    Ok(())
}

//! YAML configuration for the visualization pipeline.
//!
//! Every field has a default, so an empty document is a valid config. Only the
//! knobs that differ from the defaults need to be written down.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! default_method: "umap"
//! default_clusters: 8
//!
//! projection:
//!   manifold_enabled: true
//!   min_manifold_samples: 10
//!   n_neighbors: 15
//!   n_iter: 1000
//!   seed: 42
//!   kmeans:
//!     n_init: 10
//!     max_iter: 300
//!
//! themes:
//!   top_terms: 3
//!   separator: " / "
//!   name_chars: 30
//!   generic_prefix: "Theme"
//! ```

use std::fs;
use std::path::Path;

use projection::{ProjectionConfig, ReductionMethod};
use serde::{Deserialize, Serialize};
use themes::ThemeConfig;
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Settings shared by every visualization request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PipelineConfig {
    /// Configuration format version
    pub version: String,

    /// Method used when a request does not name one.
    pub default_method: ReductionMethod,

    /// Cluster count used when a request does not name one.
    pub default_clusters: usize,

    pub projection: ProjectionConfig,

    pub themes: ThemeConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            default_method: ReductionMethod::Umap,
            default_clusters: 8,
            projection: ProjectionConfig::default(),
            themes: ThemeConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: PipelineConfig = if yaml.trim().is_empty() {
            PipelineConfig::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        if self.default_clusters == 0 {
            return Err(ConfigLoadError::Validation(
                "default_clusters must be >= 1".to_string(),
            ));
        }
        if self.projection.n_neighbors < 2 {
            return Err(ConfigLoadError::Validation(
                "projection.n_neighbors must be >= 2".to_string(),
            ));
        }
        if self.projection.min_manifold_samples < 5 {
            return Err(ConfigLoadError::Validation(
                "projection.min_manifold_samples must be >= 5".to_string(),
            ));
        }
        if self.projection.n_iter == 0 {
            return Err(ConfigLoadError::Validation(
                "projection.n_iter must be >= 1".to_string(),
            ));
        }
        let kmeans = &self.projection.kmeans;
        if kmeans.n_init == 0 || kmeans.max_iter == 0 {
            return Err(ConfigLoadError::Validation(
                "projection.kmeans.n_init and max_iter must be >= 1".to_string(),
            ));
        }
        if kmeans.tol.is_nan() || kmeans.tol <= 0.0 {
            return Err(ConfigLoadError::Validation(
                "projection.kmeans.tol must be > 0".to_string(),
            ));
        }
        if self.themes.top_terms == 0 {
            return Err(ConfigLoadError::Validation(
                "themes.top_terms must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

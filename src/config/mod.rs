//! Loader Configuration
//!
//! The flat configuration the upstream job framework propagates to every
//! writer: output directory, permission token list, collections, quality,
//! content type, batch size, and the fast-load flag.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::ContentType;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("Failed to parse config file {path}: {reason}")]
    Parse { path: String, reason: String },
}

/// Loader configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Directory prefix applied to document URIs in fast-load mode
    #[serde(default)]
    pub output_dir: Option<String>,

    /// Alternating role/capability tokens (e.g. ["reader", "read"])
    #[serde(default)]
    pub output_permissions: Vec<String>,

    /// Collections every inserted document is added to
    #[serde(default)]
    pub output_collections: Vec<String>,

    /// Document quality (default: 0)
    #[serde(default)]
    pub output_quality: i32,

    /// Content type of the output documents (default: XML)
    #[serde(default = "default_content_type")]
    pub content_type: ContentType,

    /// Documents accumulated per forest before a bulk insert.
    /// Values ≤ 1 disable batching (default: 1)
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Whether the writer itself picks the target forest per document
    #[serde(default)]
    pub fast_load: bool,
}

fn default_content_type() -> ContentType {
    ContentType::Xml
}

fn default_batch_size() -> usize {
    1
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            output_permissions: Vec::new(),
            output_collections: Vec::new(),
            output_quality: 0,
            content_type: default_content_type(),
            batch_size: default_batch_size(),
            fast_load: false,
        }
    }
}

impl LoaderConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Whether per-forest batch buffers are in play
    pub fn batching_enabled(&self) -> bool {
        self.batch_size > 1
    }
}

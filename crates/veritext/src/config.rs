//! Configuration loading and management.
//!
//! [`DetectionConfig`] carries every tunable of the pipeline: classifier
//! endpoint and credentials, extraction limits, and batch concurrency. It can
//! be loaded from TOML or JSON files, discovered in the directory hierarchy,
//! or created programmatically. The classifier endpoint and API key are
//! explicit configuration injected at construction; there is no process-wide
//! singleton.

use crate::{Result, VeritextError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file name searched for by [`DetectionConfig::discover`].
const CONFIG_FILE_NAME: &str = "veritext.toml";

/// Main detection configuration.
///
/// # Example
///
/// ```rust
/// use veritext::DetectionConfig;
///
/// // Defaults: no classifier configured, heuristic-only operation
/// let config = DetectionConfig::default();
/// assert!(config.classifier.is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// External classifier endpoint (None = heuristic-only).
    #[serde(default)]
    pub classifier: Option<ClassifierConfig>,

    /// Extraction limits and external-tool switches.
    #[serde(default)]
    pub extraction: ExtractionOptions,

    /// Maximum concurrent documents in batch operations (None = num_cpus * 2).
    #[serde(default)]
    pub max_concurrent: Option<usize>,
}

/// External classifier endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Endpoint URL consuming `{"text": ...}` and returning a probability.
    pub endpoint: String,

    /// Bearer token sent with each request (None = unauthenticated).
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_classifier_timeout")]
    pub timeout_secs: u64,
}

/// Extraction pipeline options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionOptions {
    /// Invoke the external `pdftotext` binary as the first strategy. Absence
    /// of the binary degrades gracefully to the in-process strategies either
    /// way; disabling skips the probe entirely.
    #[serde(default = "default_true")]
    pub use_external_tool: bool,

    /// Per-document budget for the external tool invocation, in seconds.
    #[serde(default = "default_tool_timeout")]
    pub tool_timeout_secs: u64,

    /// Maximum input file size in bytes. Larger files fail fast.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            use_external_tool: true,
            tool_timeout_secs: default_tool_timeout(),
            max_file_size: default_max_file_size(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_classifier_timeout() -> u64 {
    30
}

fn default_tool_timeout() -> u64 {
    60
}

fn default_max_file_size() -> u64 {
    50 * 1024 * 1024
}

impl DetectionConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content)
            .map_err(|e| VeritextError::Validation(format!("invalid TOML config: {e}")))
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        serde_json::from_str(&content)
            .map_err(|e| VeritextError::Validation(format!("invalid JSON config: {e}")))
    }

    /// Walk from `start_dir` upward looking for a `veritext.toml`.
    ///
    /// Returns `Ok(None)` when no config file exists anywhere up the tree.
    pub fn discover<P: AsRef<Path>>(start_dir: P) -> Result<Option<Self>> {
        if let Some(path) = find_config_file(start_dir.as_ref()) {
            return Self::from_toml_file(path).map(Some);
        }
        Ok(None)
    }
}

fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = Some(start_dir);
    while let Some(dir) = current {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        current = dir.parent();
    }
    None
}

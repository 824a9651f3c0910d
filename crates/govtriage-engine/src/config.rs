//! Engine configuration

use govtriage_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default manual-review confidence threshold
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.55;

/// Runtime configuration for the decision engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Tickets below this min-confidence go to manual review
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f32,

    /// Audit log path; `None` disables the audit sink
    #[serde(default)]
    pub audit_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            audit_path: None,
        }
    }
}

impl EngineConfig {
    /// Parse a config from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| Error::config(format!("invalid engine config: {e}")))
    }

    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

fn default_confidence_threshold() -> f32 {
    DEFAULT_CONFIDENCE_THRESHOLD
}

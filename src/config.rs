//! Inference configuration
//!
//! Settings for [`SchemaInferrer`](crate::schema::SchemaInferrer), loadable
//! from YAML:
//!
//! ```yaml
//! max_depth: 64
//! absent_reference: label
//! ```

use crate::error::{Error, Result};
use crate::schema::DEFAULT_MAX_DEPTH;
use crate::types::AbsentReferencePolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Inference settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferConfig {
    /// Maximum nesting depth before inference fails
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// How absent references to non-temporal types are described
    #[serde(default)]
    pub absent_reference: AbsentReferencePolicy,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for InferConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            absent_reference: AbsentReferencePolicy::default(),
        }
    }
}

/// Load configuration from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<InferConfig> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    load_config_from_str(&content)
}

/// Load configuration from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<InferConfig> {
    // An empty document means "all defaults"
    if yaml.trim().is_empty() {
        return Ok(InferConfig::default());
    }

    let config: InferConfig = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse config YAML: {e}")))?;

    validate_config(&config)?;
    Ok(config)
}

/// Validate configuration values
fn validate_config(config: &InferConfig) -> Result<()> {
    if config.max_depth == 0 {
        return Err(Error::config("max_depth must be greater than zero"));
    }

    Ok(())
}

//! Store configuration
//!
//! All fields have defaults, so an empty document is a valid configuration:
//!
//! ```yaml
//! max_nesting_depth: 32
//! term_capacity: 0
//! graph_capacity: 0
//! ```

use crate::rdf::DEFAULT_MAX_NESTING_DEPTH;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// YAML could not be parsed into a configuration
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Parsed, but a value is out of range
    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Tuning knobs for a [`QuadStore`](crate::QuadStore)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Deepest quoted-quad nesting accepted in any term
    pub max_nesting_depth: usize,
    /// Number of canonical identifiers to pre-allocate in the interner
    pub term_capacity: usize,
    /// Number of graph entries to pre-allocate
    pub graph_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            term_capacity: 0,
            graph_capacity: 0,
        }
    }
}

impl StoreConfig {
    /// Parse and validate a YAML configuration document
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: StoreConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_nesting_depth == 0 {
            return Err(ConfigError::Invalid(
                "max_nesting_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

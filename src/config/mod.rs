//! Run configuration
//!
//! Values resolve in order: built-in defaults, the TOML file, environment
//! variables, then command-line flags.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub mod loader;

pub use loader::{load_config, load_config_in, DEFAULT_CONFIG_FILE};

pub const ENV_MAX_PARALLEL: &str = "LETTERMATRIX_MAX_PARALLEL";
pub const ENV_CHUNK_SIZE: &str = "LETTERMATRIX_CHUNK_SIZE";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    pub execution: ExecutionConfig,
    pub input: InputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExecutionConfig {
    /// Concurrent map and reduce tasks
    pub max_parallel: usize,
    /// Lines handed to one map task
    pub chunk_size: usize,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            max_parallel: default_max_parallel(),
            chunk_size: 1024,
        }
    }
}

fn default_max_parallel() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct InputConfig {
    /// Read `.`- and `_`-prefixed files when the input is a directory
    pub include_hidden: bool,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge_env_vars(&mut self) {
        self.merge_env_with(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn merge_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_MAX_PARALLEL) {
            match raw.trim().parse::<usize>() {
                Ok(value) => self.execution.max_parallel = value,
                Err(e) => warn!("Ignoring {}={:?}: {}", ENV_MAX_PARALLEL, raw, e),
            }
        }

        if let Some(raw) = lookup(ENV_CHUNK_SIZE) {
            match raw.trim().parse::<usize>() {
                Ok(value) => self.execution.chunk_size = value,
                Err(e) => warn!("Ignoring {}={:?}: {}", ENV_CHUNK_SIZE, raw, e),
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.execution.max_parallel == 0 {
            return Err(Error::Config(
                "execution.max_parallel must be at least 1".to_string(),
            ));
        }
        if self.execution.chunk_size == 0 {
            return Err(Error::Config(
                "execution.chunk_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::new();
        assert!(config.execution.max_parallel >= 1);
        assert_eq!(config.execution.chunk_size, 1024);
        assert!(!config.input.include_hidden);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_merge_env_overrides() {
        let vars: HashMap<&str, &str> =
            HashMap::from([(ENV_MAX_PARALLEL, "3"), (ENV_CHUNK_SIZE, " 64 ")]);
        let mut config = Config::new();
        config.merge_env_with(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.execution.max_parallel, 3);
        assert_eq!(config.execution.chunk_size, 64);
    }

    #[test]
    fn test_merge_env_ignores_unparseable_values() {
        let mut config = Config::new();
        let before = config.clone();
        config.merge_env_with(|_| Some("lots".to_string()));
        assert_eq!(config, before);
    }

    #[test]
    fn test_validate_rejects_zero() {
        let mut config = Config::new();
        config.execution.max_parallel = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let mut config = Config::new();
        config.execution.chunk_size = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}

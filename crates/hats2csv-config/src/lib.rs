// hats2csv-config - Configuration for catalog conversion jobs
//
// Supports configuration from multiple sources:
// 1. Environment variables (HATS2CSV_* prefix, highest priority)
// 2. Config file path from HATS2CSV_CONFIG env var
// 3. Default config file location (./hats2csv.toml)
// 4. Built-in defaults (lowest priority)
//
// Loading does not validate: the CLI applies its flag overrides on top of
// the loaded config and calls validate() once the final values are known.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod sources;
mod validation;

pub use sources::ENV_PREFIX;

/// Main job configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Catalog to read: a directory holding one Parquet file per partition.
    #[serde(default)]
    pub source: PathBuf,

    /// Output root; summaries land under `<target>/objects/`.
    #[serde(default)]
    pub target: PathBuf,

    /// Global class label, required when the catalog has no `Class` column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default)]
    pub executor: ExecutorConfig,
}

/// Worker pool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutorConfig {
    /// Partition workers running in parallel, one thread each.
    pub workers: usize,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self { workers: 6 }
    }
}

impl RuntimeConfig {
    /// Load configuration from all sources with priority.
    pub fn load() -> Result<Self> {
        sources::load_config()
    }

    /// Load configuration from a specific file path (for CLI --config),
    /// then apply environment overrides on top.
    pub fn load_from_file_path(path: impl AsRef<Path>) -> Result<Self> {
        sources::load_from_file_path(path.as_ref())
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = RuntimeConfig::default();
        assert_eq!(config.executor.workers, 6);
        assert!(config.label.is_none());
        assert!(config.source.as_os_str().is_empty());
    }

    #[test]
    fn parse_full_toml() {
        let config: RuntimeConfig = toml::from_str(
            r#"
            source = "/data/hats/zubercal"
            target = "/data/summaries"
            label = "rrlyr"

            [executor]
            workers = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.source, PathBuf::from("/data/hats/zubercal"));
        assert_eq!(config.target, PathBuf::from("/data/summaries"));
        assert_eq!(config.label.as_deref(), Some("rrlyr"));
        assert_eq!(config.executor.workers, 2);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: RuntimeConfig = toml::from_str(r#"source = "/data/catalog""#).unwrap();
        assert_eq!(config.executor.workers, 6);
        assert!(config.label.is_none());
        assert!(config.target.as_os_str().is_empty());
    }
}

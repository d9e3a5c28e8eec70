// Configuration validation, run after CLI overrides are applied.

use crate::RuntimeConfig;
use anyhow::{bail, Result};

pub(crate) fn validate_config(config: &RuntimeConfig) -> Result<()> {
    if config.source.as_os_str().is_empty() {
        bail!("source catalog path is required (set 'source' in the config file, HATS2CSV_SOURCE, or --source)");
    }
    if config.target.as_os_str().is_empty() {
        bail!("target output path is required (set 'target' in the config file, HATS2CSV_TARGET, or --target)");
    }
    if config.executor.workers == 0 {
        bail!("executor.workers must be at least 1");
    }
    if let Some(label) = &config.label {
        if label.is_empty() {
            bail!("label must not be empty when provided");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn valid_config() -> RuntimeConfig {
        RuntimeConfig {
            source: PathBuf::from("/catalog"),
            target: PathBuf::from("/out"),
            label: None,
            executor: Default::default(),
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn missing_source_is_rejected() {
        let mut config = valid_config();
        config.source = PathBuf::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn missing_target_is_rejected() {
        let mut config = valid_config();
        config.target = PathBuf::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn zero_workers_is_rejected() {
        let mut config = valid_config();
        config.executor.workers = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn empty_label_is_rejected() {
        let mut config = valid_config();
        config.label = Some(String::new());
        assert!(validate_config(&config).is_err());
    }
}

// Configuration source loading.
//
// Priority order:
// 1. HATS2CSV_* environment variables
// 2. Config file path from HATS2CSV_CONFIG
// 3. Default config file (./hats2csv.toml)
// 4. Built-in defaults

use crate::RuntimeConfig;
use anyhow::{Context, Result};
use std::env;
use std::path::Path;

/// Prefix for all environment overrides.
pub const ENV_PREFIX: &str = "HATS2CSV_";

pub(crate) fn load_config() -> Result<RuntimeConfig> {
    let mut config = match find_config_file()? {
        Some(file_config) => file_config,
        None => RuntimeConfig::default(),
    };
    apply_env_overrides(&mut config)?;
    Ok(config)
}

pub(crate) fn load_from_file_path(path: &Path) -> Result<RuntimeConfig> {
    let mut config = read_file(path)?;
    apply_env_overrides(&mut config)?;
    Ok(config)
}

fn find_config_file() -> Result<Option<RuntimeConfig>> {
    if let Ok(path) = env::var("HATS2CSV_CONFIG") {
        return read_file(Path::new(&path)).map(Some);
    }

    let default = Path::new("./hats2csv.toml");
    if default.exists() {
        return read_file(default).map(Some);
    }

    Ok(None)
}

fn read_file(path: &Path) -> Result<RuntimeConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

fn apply_env_overrides(config: &mut RuntimeConfig) -> Result<()> {
    if let Some(source) = env_var("SOURCE") {
        config.source = source.into();
    }
    if let Some(target) = env_var("TARGET") {
        config.target = target.into();
    }
    if let Some(label) = env_var("LABEL") {
        config.label = Some(label);
    }
    if let Some(workers) = env_var("WORKERS") {
        config.executor.workers = workers
            .parse()
            .with_context(|| format!("Invalid {}WORKERS value: {}", ENV_PREFIX, workers))?;
    }
    Ok(())
}

fn env_var(key: &str) -> Option<String> {
    env::var(format!("{}{}", ENV_PREFIX, key))
        .ok()
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_from_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "source = \"/catalog\"\ntarget = \"/out\"\n\n[executor]\nworkers = 3\n"
        )
        .unwrap();

        let config = load_from_file_path(file.path()).unwrap();
        assert_eq!(config.source, Path::new("/catalog"));
        assert_eq!(config.executor.workers, 3);
    }

    #[test]
    fn unreadable_path_is_an_error() {
        let err = load_from_file_path(Path::new("/nonexistent/hats2csv.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}

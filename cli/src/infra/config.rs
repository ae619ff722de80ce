//! Infrastructure implementation of the `ConfigStore` port.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::application::ports::ConfigStore;
use crate::domain::config::{DriverConfig, validate_config};

/// Default configuration file, relative to the current directory.
pub const DEFAULT_CONFIG_FILE: &str = ".tfkit.yml";

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "TFKIT_CONFIG";

/// Production implementation of `ConfigStore` that reads a YAML file on disk.
///
/// The file is taken from the explicit path, then `TFKIT_CONFIG`, then
/// `./.tfkit.yml`. Only a missing `./.tfkit.yml` yields the defaults; a named
/// file must exist.
#[derive(Debug, Default)]
pub struct YamlConfigStore {
    explicit: Option<PathBuf>,
}

impl YamlConfigStore {
    #[must_use]
    pub fn new(explicit: Option<PathBuf>) -> Self {
        Self { explicit }
    }

    /// The configured path, and whether the caller named it.
    fn resolve(&self) -> (PathBuf, bool) {
        if let Some(path) = &self.explicit {
            return (path.clone(), true);
        }
        if let Ok(val) = std::env::var(CONFIG_ENV) {
            return (PathBuf::from(val), true);
        }
        (PathBuf::from(DEFAULT_CONFIG_FILE), false)
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<DriverConfig> {
        let (path, named) = self.resolve();
        if !path.exists() {
            if named {
                anyhow::bail!("config file {} does not exist", path.display());
            }
            return Ok(DriverConfig::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let config: DriverConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("cannot parse {}", path.display()))?;
        validate_config(&config).with_context(|| format!("invalid {}", path.display()))?;
        Ok(config)
    }

    fn path(&self) -> PathBuf {
        self.resolve().0
    }
}

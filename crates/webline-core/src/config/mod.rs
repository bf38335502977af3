//! Configuration, loaded from `webline.toml`.

pub mod catalog_config;
pub mod policy_config;
pub mod scan_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use catalog_config::CatalogConfig;
pub use policy_config::PolicyConfig;
pub use scan_config::{ScanConfig, StyleErrorPolicy};

use crate::constants::CONFIG_FILE_NAME;
use crate::errors::config_error::{ConfigError, ConfigResult};

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WeblineConfig {
    pub catalog: CatalogConfig,
    pub scan: ScanConfig,
    pub policy: PolicyConfig,
}

impl WeblineConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a file. A missing or unreadable file is an error.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load config from a file, using defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            ::tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Load `webline.toml` from `dir`, using defaults when it does not exist.
    pub fn load_from_dir(dir: &Path) -> ConfigResult<Self> {
        Self::load_or_default(&dir.join(CONFIG_FILE_NAME))
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.scan.max_file_size == Some(0) {
            return Err(ConfigError::Invalid {
                field: "scan.max_file_size".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self
            .policy
            .critical_features
            .iter()
            .any(|id| id.trim().is_empty())
        {
            return Err(ConfigError::Invalid {
                field: "policy.critical_features".to_string(),
                message: "feature ids must not be blank".to_string(),
            });
        }
        Ok(())
    }
}

//! Layered configuration: compiled defaults, overridden by a TOML file.

pub mod defaults;
pub mod observability_config;
pub mod selection_config;
pub mod storage_config;
pub mod wildcard_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use observability_config::ObservabilityConfig;
pub use selection_config::SelectionConfig;
pub use storage_config::StorageConfig;
pub use wildcard_config::{PatternMode, WildcardConfig};

/// Top-level configuration aggregating all sub-configs.
/// Unknown keys are ignored; missing keys fall back to [`defaults`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScribeConfig {
    pub wildcard: WildcardConfig,
    pub selection: SelectionConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl ScribeConfig {
    /// Load configuration from a TOML string and validate it.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file and validate it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.selection.max_keywords_bytes == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "selection.max_keywords_bytes".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        let level = self.observability.log_level.to_ascii_lowercase();
        if !defaults::VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!(
                    "must be one of {}",
                    defaults::VALID_LOG_LEVELS.join(", ")
                ),
            });
        }
        Ok(())
    }
}

//! Dispatch configuration.
//!
//! Every field has a default, so an empty TOML document yields the fixed
//! behaviour: default value `0`, labels `"int: "` and `"string: "`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::optional::DEFAULT_VALUE;

/// Label prefixes used when describing a type-erased value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub int: String,
    pub text: String,
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            int: "int: ".to_string(),
            text: "string: ".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Value used when a nullable integer is empty
    pub default_value: i32,
    pub labels: Labels,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        DispatchConfig {
            default_value: DEFAULT_VALUE,
            labels: Labels::default(),
        }
    }
}

impl DispatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DispatchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.labels.int.is_empty() {
            return Err(ConfigError::invalid_value("labels.int", "must not be empty"));
        }
        if self.labels.text.is_empty() {
            return Err(ConfigError::invalid_value("labels.text", "must not be empty"));
        }
        Ok(())
    }
}

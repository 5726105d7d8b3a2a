use bevy::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::parameters::ParameterTable;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid parameter configuration: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            Some("json") => Ok(ConfigFormat::Json),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl ParameterTable {
    /// Parses a YAML table. Rows the document leaves out keep their built-in values.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let overrides: ParameterTable = serde_yaml::from_str(source)?;
        Self::finish(overrides)
    }

    /// Parses a JSON table. Rows the document leaves out keep their built-in values.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let overrides: ParameterTable = serde_json::from_str(source)?;
        Self::finish(overrides)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let source = std::fs::read_to_string(path)?;
        info!("Loading parameter table from {}", path.display());

        match format {
            ConfigFormat::Yaml => Self::from_yaml_str(&source),
            ConfigFormat::Json => Self::from_json_str(&source),
        }
    }

    /// `<config dir>/zeppelin/parameters.yaml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("zeppelin").join("parameters.yaml"))
    }

    /// Loads the user table from [`ParameterTable::default_path`] when it exists,
    /// otherwise returns the built-in table.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(path),
            _ => {
                info!("No parameter file found, using built-in table");
                Ok(Self::default())
            }
        }
    }

    fn finish(overrides: ParameterTable) -> Result<Self, ConfigError> {
        let table = Self::default().merged(overrides);
        table.validate()?;
        Ok(table)
    }
}

//! TOML configuration for the query console.
//!
//! Settings live in a single `config.toml` under the app directory. A missing
//! file yields defaults; unknown keys are tolerated so old configs keep
//! loading as the schema evolves.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default query endpoint address.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/query";

/// Application settings persisted to the TOML config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address of the query/verification service.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub feature_flags: FeatureFlags,
}

/// Toggleable features that can be persisted and evolve without breaking old configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureFlags {
    /// Render the result rows a second time inside the verification panel.
    #[serde(default)]
    pub verification_table_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            feature_flags: FeatureFlags::default(),
        }
    }
}

impl AppConfig {
    /// Replace values that would misbehave at runtime with safe defaults.
    ///
    /// An endpoint that does not parse as a URL reverts to [`DEFAULT_ENDPOINT`].
    pub fn normalized(mut self) -> Self {
        if url::Url::parse(&self.endpoint).is_err() {
            tracing::warn!(
                "Configured endpoint {:?} is not a valid URL; using {DEFAULT_ENDPOINT}",
                self.endpoint
            );
            self.endpoint = default_endpoint();
        }
        self
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No application directory was available.
    #[error("No application directory available: {0}")]
    AppDir(#[from] app_dirs::AppDirError),
    /// Failed to read the config file.
    #[error("Failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write the config file.
    #[error("Failed to write config at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The config file exists but is not valid TOML for the expected schema.
    #[error("Failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Settings could not be serialized to TOML.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Resolve the configuration file path, ensuring the app directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir()?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from disk, returning normalized defaults if missing.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let path = config_path()?;
    load_from_path(&path)
}

/// Load configuration from a specific path; a missing file yields defaults.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AppConfig = toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(config.normalized())
}

/// Persist configuration to disk, overwriting any previous contents.
pub fn save(config: &AppConfig) -> Result<(), ConfigError> {
    let path = config_path()?;
    save_to_path(config, &path)
}

/// Save configuration to a specific path.
pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    let text = toml::to_string_pretty(config)?;
    std::fs::write(path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

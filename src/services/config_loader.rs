// ChromeLike Config Loader
// Reads the optional `config.json` that sets window geometry and the tab id policy.
// The file is only ever read; shell state is never written back.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::platform;
use crate::types::config::ShellConfig;
use crate::types::errors::ConfigError;

/// Environment variable that points at an explicit config file.
pub const CONFIG_ENV_VAR: &str = "CHROMELIKE_CONFIG";

pub struct ConfigLoader {
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Creates a loader for `path_override`, or for `config.json` in the
    /// platform config directory when no override is given.
    pub fn new(path_override: Option<PathBuf>) -> Self {
        let config_path =
            path_override.unwrap_or_else(|| platform::get_config_dir().join("config.json"));
        Self { config_path }
    }

    /// Creates a loader honouring `CHROMELIKE_CONFIG` when it is set.
    pub fn from_env() -> Self {
        let path_override = std::env::var_os(CONFIG_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self::new(path_override)
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the config file.
    ///
    /// A missing file yields the defaults. A file that exists but cannot be
    /// read or parsed is an error.
    pub fn load(&self) -> Result<ShellConfig, ConfigError> {
        if !self.config_path.exists() {
            debug!(path = %self.config_path.display(), "no config file, using defaults");
            return Ok(ShellConfig::default());
        }

        let content = fs::read_to_string(&self.config_path)
            .map_err(|e| ConfigError::Io(format!("Failed to read config file: {}", e)))?;

        let config: ShellConfig = serde_json::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config file: {}", e)))?;

        info!(path = %self.config_path.display(), "config loaded");
        Ok(config)
    }
}

//! Persisted CLI settings

use crate::config::ConfigPaths;
use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};

/// Default API endpoint for the hosted directory console
pub const DEFAULT_API_URL: &str = "https://console.dircli.io";

/// CLI settings loaded from config.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the directory API
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load settings from config.json, falling back to defaults when the
    /// file does not exist.
    pub fn load(paths: &ConfigPaths) -> CliResult<Self> {
        if !paths.config_file.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&paths.config_file).map_err(|e| {
            CliError::Config(format!(
                "Failed to read {}: {}",
                paths.config_file.display(),
                e
            ))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            CliError::Config(format!(
                "Invalid config file {}: {}",
                paths.config_file.display(),
                e
            ))
        })
    }

    /// Write settings to config.json
    pub fn save(&self, paths: &ConfigPaths) -> CliResult<()> {
        paths.ensure_dir_exists()?;
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&paths.config_file, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_paths(dir: &tempfile::TempDir) -> ConfigPaths {
        ConfigPaths {
            config_dir: dir.path().to_path_buf(),
            config_file: dir.path().join("config.json"),
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let paths = ConfigPaths {
            config_dir: PathBuf::from("/nonexistent"),
            config_file: PathBuf::from("/nonexistent/config.json"),
        };
        let config = Config::load(&paths).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let paths = temp_paths(&dir);

        let config = Config {
            api_url: "https://directory.internal.example.com".to_string(),
            timeout_secs: 10,
        };
        config.save(&paths).unwrap();

        let loaded = Config::load(&paths).unwrap();
        assert_eq!(loaded.api_url, "https://directory.internal.example.com");
        assert_eq!(loaded.timeout_secs, 10);
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let paths = temp_paths(&dir);
        std::fs::write(&paths.config_file, "{not json").unwrap();

        let result = Config::load(&paths);
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}

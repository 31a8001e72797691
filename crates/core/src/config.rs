//! Shell settings
//!
//! Optional settings live in TOML at ~/.config/s5/config.toml. A missing file
//! yields the defaults, so a fresh install only needs a credentials file.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Current configuration schema version
pub const SCHEMA_VERSION: u32 = 1;

/// Region used for the client and as the bucket creation constraint
pub const DEFAULT_REGION: &str = "ca-central-1";

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Region for requests and new buckets
    #[serde(default = "default_region")]
    pub region: String,

    /// Custom endpoint for S3-compatible servers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Default settings
    #[serde(default)]
    pub defaults: Defaults,
}

/// Default settings for shell output
#[derive(Debug, Clone, Deserialize)]
pub struct Defaults {
    /// Colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Show progress bars for directory uploads
    #[serde(default = "default_true")]
    pub progress: bool,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            color: true,
            progress: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            region: default_region(),
            endpoint: None,
            defaults: Defaults::default(),
        }
    }
}

/// Configuration manager handles locating and loading the settings file
#[derive(Debug)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager with the default config path
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".into()))?;
        let config_path = config_dir.join("s5").join("config.toml");
        Ok(Self { config_path })
    }

    /// Create a ConfigManager with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the configuration file path
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Load configuration from disk
    ///
    /// If the configuration file doesn't exist, returns a default configuration.
    pub fn load(&self) -> Result<Config> {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "No settings file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&self.config_path)?;
        let config: Config = toml::from_str(&content)?;

        if config.schema_version > SCHEMA_VERSION {
            return Err(Error::Config(format!(
                "Configuration file version {} is newer than supported version {}. Please upgrade s5.",
                config.schema_version, SCHEMA_VERSION
            )));
        }

        if let Some(endpoint) = &config.endpoint {
            url::Url::parse(endpoint)?;
        }

        if config.region.trim().is_empty() {
            return Err(Error::Config("region cannot be empty".into()));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_config_manager() -> (ConfigManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let manager = ConfigManager::with_path(config_path);
        (manager, temp_dir)
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.schema_version, SCHEMA_VERSION);
        assert_eq!(config.region, "ca-central-1");
        assert!(config.endpoint.is_none());
        assert!(config.defaults.color);
        assert!(config.defaults.progress);
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        let (manager, _temp_dir) = temp_config_manager();
        let config = manager.load().unwrap();
        assert_eq!(config.region, DEFAULT_REGION);
    }

    #[test]
    fn test_load_partial_file() {
        let (manager, _temp_dir) = temp_config_manager();
        std::fs::write(
            manager.config_path(),
            r#"
            region = "us-west-2"
            endpoint = "http://localhost:9000"

            [defaults]
            color = false
            "#,
        )
        .unwrap();

        let config = manager.load().unwrap();
        assert_eq!(config.region, "us-west-2");
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:9000"));
        assert!(!config.defaults.color);
        assert!(config.defaults.progress);
    }

    #[test]
    fn test_invalid_endpoint() {
        let (manager, _temp_dir) = temp_config_manager();
        std::fs::write(manager.config_path(), "endpoint = \"not a url\"\n").unwrap();

        let result = manager.load();
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_schema_version_too_new() {
        let (manager, _temp_dir) = temp_config_manager();

        let content = format!("schema_version = {}\n", SCHEMA_VERSION + 1);
        std::fs::write(manager.config_path(), content).unwrap();

        let result = manager.load();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("newer than supported"));
    }
}

//! Configuration schema (lavina.toml)

use serde::{Deserialize, Serialize};

/// Default bulletin server. One document per (date, region) pair.
pub const DEFAULT_BASE_URL: &str = "https://static.avalanche.report/eaws_bulletins";

/// The EAWS regions fetched when no explicit list is configured.
const DEFAULT_REGIONS: &[&str] = &[
    "AD", "AT-02", "AT-03", "AT-04", "AT-05", "AT-06", "AT-07", "AT-08", "CH", "CZ", "DE-BY",
    "ES-CT-L", "ES-CT", "ES", "FI", "FR", "GB", "IS", "IT-21", "IT-23", "IT-25", "IT-32-BZ",
    "IT-32-TN", "IT-34", "IT-36", "IT-57", "NO", "PL", "PL-12", "SE", "SI", "SK", "UA",
];

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Regions whose bulletins are fetched.
    #[serde(default = "default_regions")]
    pub regions: Vec<String>,

    /// Base URL of the bulletin server.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_regions() -> Vec<String> {
    DEFAULT_REGIONS.iter().map(|r| r.to_string()).collect()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            regions: default_regions(),
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Load config from a TOML file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        Self::from_toml(&contents)
    }

    /// Load config from a TOML string.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save config to a TOML file.
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        let toml = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path, toml).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }
}

/// Config error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.regions.iter().any(|r| r == "IT-32-BZ"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn config_toml_roundtrip() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config = Config::from_toml("regions = [\"CH\"]").unwrap();
        assert_eq!(config.regions, vec!["CH".to_string()]);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}

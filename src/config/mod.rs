use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

fn default_endpoint() -> String {
    "https://www.tikwm.com/api/".to_string()
}

fn default_hd() -> bool {
    true
}

fn default_log_format() -> String {
    "plain".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the upstream resolution endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request the highest-quality variant available.
    #[serde(default = "default_hd")]
    pub hd: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            hd: default_hd(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    /// "json" or "plain"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: default_log_format(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse config file {}", path))
    }

    pub fn get_logging_format(&self) -> &str {
        &self.logging.format
    }
}

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_QUOTE_URL: &str = "https://api.quotable.io/random";
const DEFAULT_QUOTE_TIMEOUT_SECS: u64 = 4;

/// Quote API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteConfig {
    /// Endpoint returning a random quote as JSON
    #[serde(default = "default_quote_url")]
    pub url: String,
    /// Request timeout in seconds
    #[serde(default = "default_quote_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_quote_url() -> String {
    DEFAULT_QUOTE_URL.to_string()
}

fn default_quote_timeout_secs() -> u64 {
    DEFAULT_QUOTE_TIMEOUT_SECS
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            url: default_quote_url(),
            timeout_secs: default_quote_timeout_secs(),
        }
    }
}

/// Main configuration for folio
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub quote: QuoteConfig,
}

impl Config {
    /// Load config from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // Return default config if file doesn't exist
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

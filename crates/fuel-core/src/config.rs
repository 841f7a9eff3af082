use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CLOUD_BASE_URL: &str = "https://carbs-api.onrender.com";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read configuration: {source}")]
    Read {
        #[from]
        source: std::io::Error,
    },

    #[error("could not parse configuration TOML: {source}")]
    Parse {
        #[from]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub fetch: FetchConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub fallback_url: String,
    pub heal_local_on_start: bool,
    pub oauth_client: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub workout_limit: u32,
    pub analytics_days: u32,
    pub sync_limit: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            fallback_url: CLOUD_BASE_URL.to_string(),
            heal_local_on_start: false,
            oauth_client: "web".to_string(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            workout_limit: 120,
            analytics_days: 30,
            sync_limit: 80,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fuel")
            .join("config.toml")
    }

    /// Base URL used when nothing has been persisted yet.
    pub fn default_base_url(&self) -> String {
        match self.api.base_url.as_deref().map(str::trim) {
            Some(configured) if !configured.is_empty() => configured.to_string(),
            _ => compiled_default_base_url(),
        }
    }
}

/// `FUEL_API_BASE_URL` baked in at build time, or the cloud backend when it is
/// unset or blank.
pub fn compiled_default_base_url() -> String {
    resolve_default_base_url(option_env!("FUEL_API_BASE_URL"))
}

fn resolve_default_base_url(configured: Option<&str>) -> String {
    match configured.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => CLOUD_BASE_URL.to_string(),
    }
}

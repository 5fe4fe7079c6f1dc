use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const API_URL_ENV: &str = "SHARKDEAL_API_URL";

/// Persistent configuration saved to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// CheapShark API root (can also be set via SHARKDEAL_API_URL env var)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Maximum sale price sent to the deals endpoint
    #[serde(default = "default_upper_price")]
    pub upper_price: f64,
    /// Timeout (ms) for each thumbnail reachability probe
    #[serde(default = "default_thumbnail_timeout")]
    pub thumbnail_timeout_ms: u64,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Debounce delay (ms) between the last keystroke and re-filtering
    #[serde(default = "default_filter_debounce")]
    pub filter_debounce_ms: u64,
}

fn default_api_base_url() -> String {
    sharkdeal_api::client::API_BASE_URL.to_string()
}

fn default_upper_price() -> f64 {
    15.0
}

fn default_thumbnail_timeout() -> u64 {
    5000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_filter_debounce() -> u64 {
    150
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            upper_price: default_upper_price(),
            thumbnail_timeout_ms: default_thumbnail_timeout(),
            request_timeout_secs: default_request_timeout(),
            filter_debounce_ms: default_filter_debounce(),
        }
    }
}

impl Config {
    /// Get the config file path (~/.config/sharkdeal/config.json)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sharkdeal").join("config.json"))
    }

    /// Load config from disk, or return default if not found
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save config to disk
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// API root, preferring the SHARKDEAL_API_URL env var over the config file
    pub fn api_base_url(&self) -> String {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => self.api_base_url.clone(),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn thumbnail_timeout(&self) -> Duration {
        Duration::from_millis(self.thumbnail_timeout_ms)
    }

    pub fn filter_debounce(&self) -> Duration {
        Duration::from_millis(self.filter_debounce_ms)
    }
}

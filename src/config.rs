use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::DebouncePolicy;
use crate::error::{FinderError, FinderResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dataset: DatasetConfig,
    pub search: SearchConfig,
    pub notifications: NotificationsConfig,
    pub appearance: AppearanceConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// File path, http(s) URL or "bundled". Unset means auto-detect.
    pub source: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub debounce_ms: u64,
    pub max_wait_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    pub copied_duration_ms: u64,
    /// Also raise a desktop notification from the CLI
    pub desktop: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    pub theme: String,
    pub columns: u32,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            max_wait_ms: 1200,
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            copied_duration_ms: 2000,
            desktop: false,
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: "slate".to_string(),
            columns: 6,
            window_width: 960,
            window_height: 720,
        }
    }
}

impl SearchConfig {
    pub fn debounce_policy(&self) -> DebouncePolicy {
        DebouncePolicy::new(
            Duration::from_millis(self.debounce_ms),
            Duration::from_millis(self.max_wait_ms),
        )
    }
}

impl NotificationsConfig {
    pub fn copied_duration(&self) -> Duration {
        Duration::from_millis(self.copied_duration_ms)
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config"))
                    .unwrap_or_else(|| PathBuf::from("/tmp"))
            })
            .join("unicode-finder")
            .join("config.toml")
    }

    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`; unreadable or invalid files fall back to defaults
    pub fn load_from(path: &Path) -> Self {
        let mut config = if path.exists() {
            match Self::read(path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to load config {}: {}", path.display(), e);
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        config.validate();
        config
    }

    fn read(path: &Path) -> FinderResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Validate and clamp config values to acceptable ranges
    fn validate(&mut self) {
        // Debounce between 50ms and 5s
        self.search.debounce_ms = self.search.debounce_ms.clamp(50, 5000);

        // Max-wait never below the debounce delay
        self.search.max_wait_ms = self
            .search
            .max_wait_ms
            .clamp(self.search.debounce_ms, 30_000);

        self.notifications.copied_duration_ms =
            self.notifications.copied_duration_ms.clamp(250, 10_000);

        self.appearance.columns = self.appearance.columns.clamp(1, 12);
        self.appearance.window_width = self.appearance.window_width.clamp(320, 3840);
        self.appearance.window_height = self.appearance.window_height.clamp(240, 2160);
    }

    /// Save config to the default location
    pub fn save(&self) -> FinderResult<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> FinderResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| FinderError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)?;
        Ok(())
    }
}

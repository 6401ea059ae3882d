use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::api::DEFAULT_API_URL;

/// Environment variable that overrides `api_url` from the config file
pub const API_URL_ENV: &str = "SOLEX_API_URL";

/// How much of the transaction list the Transactions tab shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// First 10 signatures only
    #[default]
    Compact,
    /// Every signature the backend returned
    Full,
}

impl ViewMode {
    pub const COMPACT_LIMIT: usize = 10;

    pub fn limit(self) -> Option<usize> {
        match self {
            Self::Compact => Some(Self::COMPACT_LIMIT),
            Self::Full => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub cluster: String,
    pub view: ViewMode,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            cluster: "devnet".to_string(),
            view: ViewMode::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Returns the config directory path (~/.config/solex on Linux)
    fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join("solex"))
            .context("Could not determine config directory")
    }

    /// Returns the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Log file location, under the platform data directory
    pub fn log_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .map(|p| p.join("solex").join("solex.log"))
            .context("Could not determine data directory")
    }

    /// Load config from disk, then apply the environment. A missing file
    /// means defaults.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config from {path:?}"))?;
            Self::parse(&contents)?
        } else {
            Self::default()
        };

        config.apply_env_override(std::env::var(API_URL_ENV).ok());
        Ok(config)
    }

    /// Write the default config to `path` unless a file is already there.
    ///
    /// Returns whether a file was written.
    pub fn write_default_if_missing(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse config file")
    }

    /// A non-blank override wins over whatever the file said
    pub fn apply_env_override(&mut self, api_url: Option<String>) {
        if let Some(url) = api_url {
            let url = url.trim();
            if !url.is_empty() {
                self.api_url = url.to_string();
            }
        }
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {dir:?}"))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {path:?}"))?;

        Ok(())
    }
}

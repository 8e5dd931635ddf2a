//! Config - Application Configuration

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{error, info};

use crate::constants::CONFIG_FILE;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;

/// Optional settings read from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Preference file location; defaults to the platform data directory
    pub store_path: Option<PathBuf>,
    /// Locale tag used instead of the system locale (e.g. "en-GB")
    pub locale_override: Option<String>,
    /// Log level directive (e.g. "debug")
    pub log_level: Option<String>,
}

impl AppConfig {
    /// Load from the platform config directory, falling back to defaults when absent
    pub fn try_load() -> Result<Self> {
        let path = get_or_create_config_dir()?.join(CONFIG_FILE);
        Self::load_from(&path)
    }

    /// Load from an explicit path. Missing or blank files yield defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(path)?;
        Self::parse(&value).inspect_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
        })
    }

    /// Parse TOML text
    pub fn parse(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(value)?)
    }
}

//! Application settings loaded from `config.toml` and the environment.
//!
//! The file is optional. Any key it omits falls back to a default, and the
//! `DATABASE_URL` and `BIND_ADDRESS` environment variables win over both.

use crate::config::database::DEFAULT_DATABASE_URL;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Default listen address for the HTTP server
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";

/// Environment variable naming an alternate settings file
pub const CONFIG_PATH_VAR: &str = "PRODUCT_CONFIG";

/// Runtime settings for the server and seed binaries
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `SeaORM` connection URL
    pub database_url: String,
    /// Socket address the HTTP server binds to
    pub bind_address: String,
    /// Whether create accepts a product that duplicates an existing name and inventory level
    pub allow_duplicate_snapshots: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            allow_duplicate_snapshots: true,
        }
    }
}

impl Settings {
    /// Parses settings from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::Config {
            message: format!("Failed to parse settings: {e}"),
        })
    }

    /// Reads settings from `path`, using defaults when the file does not exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No settings file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
            message: format!("Failed to read settings file {}: {e}", path.display()),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Replaces file values with `DATABASE_URL` and `BIND_ADDRESS` when set.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            self.database_url = url;
        }
        if let Ok(addr) = std::env::var("BIND_ADDRESS") {
            self.bind_address = addr;
        }
        self
    }
}

/// Loads settings from `$PRODUCT_CONFIG` (or `./config.toml`) plus environment overrides.
pub fn load_settings() -> Result<Settings> {
    let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| "config.toml".to_string());
    let settings = Settings::load_from(&path)?.with_env_overrides();
    info!(
        "Settings loaded: bind_address={}, allow_duplicate_snapshots={}",
        settings.bind_address, settings.allow_duplicate_snapshots
    );
    Ok(settings)
}

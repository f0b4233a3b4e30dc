// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{Result, SeoError};
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest)
    /// 2. Config file
    /// 3. Defaults (lowest)
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Same as [`AppConfig::load`], reading the file at `path` instead of
    /// `~/.aiseo/config.toml`. An explicit path must exist.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) => File::from(p).required(true),
            None => File::with_name(&Self::default_config_path()).required(false),
        };

        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            .add_source(file)
            // Override with environment variables (e.g. AISEO__AI__OPENAI_API_KEY)
            .add_source(
                Environment::with_prefix("AISEO")
                    .separator("__")
            )
            .build()
            .map_err(|e| SeoError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| SeoError::Config(e.to_string()))
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".aiseo")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}

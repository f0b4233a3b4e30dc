//! Configuration data structures for the aiseo service.
//!
//! This module defines the schema for the application settings: HTTP server
//! parameters, site-wide SEO defaults, AI provider credentials, analysis
//! caching and logging.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::cache::CacheConfig;
use serde::{Deserialize, Serialize};

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings (host, port).
    #[serde(default)]
    pub server: ServerConfig,

    /// Site-wide defaults used by the markup generators.
    #[serde(default)]
    pub seo: SeoConfig,

    /// External AI provider settings.
    #[serde(default)]
    pub ai: AiConfig,

    /// Analysis result caching.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Copy with API keys masked, for display
    pub fn redacted(&self) -> Self {
        let mask = |k: &Option<String>| k.as_ref().map(|_| "[REDACTED]".to_string());
        let mut shown = self.clone();
        shown.ai.openai_api_key = mask(&self.ai.openai_api_key);
        shown.ai.deepseek_api_key = mask(&self.ai.deepseek_api_key);
        shown
    }
}

/// Settings for the built-in HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The IP address or hostname the server should bind to.
    /// Default: `127.0.0.1`
    #[serde(default = "default_host")]
    pub host: String,

    /// The port number the server should listen on.
    /// Default: `8080`
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Publisher defaults merged into generated schema and meta markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoConfig {
    /// Author name used when a record does not carry one.
    /// Default: `AI Content Team`
    #[serde(default = "default_author")]
    pub default_author: String,

    /// Organization that publishes the content.
    /// Default: `laravelgpt`
    #[serde(default = "default_publisher_name")]
    pub publisher_name: String,

    /// Publisher logo for the `Organization` schema node.
    /// Default: `https://example.com/logo.png`
    #[serde(default = "default_logo_url")]
    pub logo_url: String,
}

/// Settings for outbound AI provider calls.
#[derive(Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// API key for the `openai` provider.
    #[serde(default)]
    pub openai_api_key: Option<String>,

    /// API key for the `deepseek` provider.
    #[serde(default)]
    pub deepseek_api_key: Option<String>,

    /// Model requested when the caller does not name one.
    /// Default: `gpt-3.5-turbo`
    #[serde(default = "default_model")]
    pub default_model: String,

    /// System prompt sent ahead of the content.
    /// Default: `Analyze this content for SEO:`
    #[serde(default = "default_prompt")]
    pub default_prompt: String,

    /// Whole-request timeout for provider calls, in seconds.
    /// Default: `5`
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl AiConfig {
    /// Configured key for a provider, ignoring empty values.
    pub fn api_key_for(&self, provider: &str) -> Option<&str> {
        let key = match provider {
            "openai" => self.openai_api_key.as_deref(),
            "deepseek" => self.deepseek_api_key.as_deref(),
            _ => None,
        };
        key.filter(|k| !k.is_empty())
    }
}

// Keys never reach Debug output
impl std::fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mask = |k: &Option<String>| k.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("AiConfig")
            .field("openai_api_key", &mask(&self.openai_api_key))
            .field("deepseek_api_key", &mask(&self.deepseek_api_key))
            .field("default_model", &self.default_model)
            .field("default_prompt", &self.default_prompt)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default trait implementations linking to custom logic

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            default_author: default_author(),
            publisher_name: default_publisher_name(),
            logo_url: default_logo_url(),
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            deepseek_api_key: None,
            default_model: default_model(),
            default_prompt: default_prompt(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Helper functions for serde defaults
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_author() -> String {
    "AI Content Team".to_string()
}

fn default_publisher_name() -> String {
    "laravelgpt".to_string()
}

fn default_logo_url() -> String {
    "https://example.com/logo.png".to_string()
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_prompt() -> String {
    "Analyze this content for SEO:".to_string()
}

fn default_timeout() -> u64 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

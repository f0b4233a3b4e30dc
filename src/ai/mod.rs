//! Optional AI-assisted analysis.
//!
//! The analyzer hands content to an [`AiDelegate`]; whatever happens on the
//! way to the provider comes back as an [`AiOutcome`] value. Failures are
//! data here, never errors raised to the caller.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod client;
pub mod models;
pub mod providers;

pub use client::HttpAiDelegate;
pub use providers::KnownProvider;

use async_trait::async_trait;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

/// Per-call overrides for a provider request.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderOptions {
    /// System prompt sent ahead of the content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// API key used instead of the configured one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Model identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Endpoint used instead of the provider's well-known one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl std::fmt::Debug for ProviderOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderOptions")
            .field("prompt", &self.prompt)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Why a provider call produced no usable response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DelegateError {
    #[error("No API endpoint or key configured for provider: {provider}")]
    ConfigurationMissing { provider: String },

    #[error("{0}")]
    TransportFailure(String),

    #[error("Invalid response body: {0}")]
    ParseFailure(String),
}

impl DelegateError {
    /// Stable identifier used in error descriptors and metric labels
    pub fn kind(&self) -> &'static str {
        match self {
            DelegateError::ConfigurationMissing { .. } => "configuration_missing",
            DelegateError::TransportFailure(_) => "transport_failure",
            DelegateError::ParseFailure(_) => "parse_failure",
        }
    }
}

/// What the provider returned, or a descriptor of why it did not.
///
/// Serializes a response verbatim and an error as
/// `{"error": "<message>", "kind": "<kind>"}`.
#[derive(Debug, Clone, PartialEq)]
pub enum AiOutcome {
    Response(Value),
    Error(DelegateError),
}

impl AiOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, AiOutcome::Error(_))
    }

    pub fn error(&self) -> Option<&DelegateError> {
        match self {
            AiOutcome::Error(e) => Some(e),
            AiOutcome::Response(_) => None,
        }
    }

    pub fn response(&self) -> Option<&Value> {
        match self {
            AiOutcome::Response(v) => Some(v),
            AiOutcome::Error(_) => None,
        }
    }

    /// Label for metrics: `success` or the error kind
    pub fn label(&self) -> &'static str {
        match self {
            AiOutcome::Response(_) => "success",
            AiOutcome::Error(e) => e.kind(),
        }
    }
}

impl Serialize for AiOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AiOutcome::Response(value) => value.serialize(serializer),
            AiOutcome::Error(error) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("error", &error.to_string())?;
                map.serialize_entry("kind", error.kind())?;
                map.end()
            }
        }
    }
}

/// Hands content to an external AI provider.
///
/// Implementations must not fail: every problem is reported through
/// [`AiOutcome::Error`].
#[async_trait]
pub trait AiDelegate: Send + Sync {
    async fn delegate(&self, content: &str, provider: &str, options: &ProviderOptions) -> AiOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_descriptor_shape() {
        let outcome = AiOutcome::Error(DelegateError::ConfigurationMissing {
            provider: "mystery".to_string(),
        });
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            value,
            json!({
                "error": "No API endpoint or key configured for provider: mystery",
                "kind": "configuration_missing",
            })
        );
    }

    #[test]
    fn test_response_is_verbatim() {
        let body = json!({"choices": [{"message": {"content": "Looks good"}}]});
        let outcome = AiOutcome::Response(body.clone());
        assert_eq!(serde_json::to_value(&outcome).unwrap(), body);
        assert_eq!(outcome.label(), "success");
        assert!(!outcome.is_error());
    }

    #[test]
    fn test_options_debug_hides_key() {
        let options = ProviderOptions {
            api_key: Some("sk-very-secret".to_string()),
            ..Default::default()
        };
        assert!(!format!("{:?}", options).contains("sk-very-secret"));
    }
}

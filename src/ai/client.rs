// HTTP delegate for chat-completion style AI providers
// Author: kelexine (https://github.com/kelexine)

use super::models::ChatRequest;
use super::providers::KnownProvider;
use super::{AiDelegate, AiOutcome, DelegateError, ProviderOptions};
use crate::config::AiConfig;
use crate::error::Result;
use crate::metrics;
use crate::utils::logging::sanitize;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Where and how to reach a provider for one call.
#[derive(Debug, PartialEq, Eq)]
struct Target<'a> {
    endpoint: &'a str,
    api_key: &'a str,
    model: &'a str,
    prompt: &'a str,
}

/// Delegate that POSTs a chat-completion request to the provider.
///
/// One attempt per call, bounded by `ai.timeout_seconds`. The response body
/// is handed back untouched.
pub struct HttpAiDelegate {
    http_client: Client,
    config: AiConfig,
}

impl HttpAiDelegate {
    pub fn new(config: &AiConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds);
        let http_client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .use_rustls_tls()
            .build()?;

        debug!("Created AI HTTP client with {}s timeout", config.timeout_seconds);

        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }

    /// Resolve endpoint, key, model and prompt. `None` when the endpoint or
    /// key cannot be determined; empty strings count as missing.
    fn resolve<'a>(&'a self, provider: &str, options: &'a ProviderOptions) -> Option<Target<'a>> {
        let endpoint = options
            .endpoint
            .as_deref()
            .filter(|e| !e.is_empty())
            .or_else(|| KnownProvider::from_id(provider).map(|p| p.endpoint()))?;

        let api_key = options
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .or_else(|| self.config.api_key_for(provider))?;

        Some(Target {
            endpoint,
            api_key,
            model: options.model.as_deref().unwrap_or(&self.config.default_model),
            prompt: options.prompt.as_deref().unwrap_or(&self.config.default_prompt),
        })
    }

    async fn call(
        &self,
        content: &str,
        provider: &str,
        options: &ProviderOptions,
    ) -> std::result::Result<Value, DelegateError> {
        let target = self
            .resolve(provider, options)
            .ok_or_else(|| DelegateError::ConfigurationMissing {
                provider: provider.to_string(),
            })?;

        debug!("Calling {} at {} with model {}", provider, target.endpoint, target.model);

        let request = ChatRequest::new(target.model, target.prompt, content);

        let response = self
            .http_client
            .post(target.endpoint)
            .header("Authorization", format!("Bearer {}", target.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| DelegateError::TransportFailure(format!("HTTP error: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DelegateError::TransportFailure(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            return Err(DelegateError::TransportFailure(format!(
                "HTTP {}: {}",
                status.as_u16(),
                sanitize(&body)
            )));
        }

        serde_json::from_str(&body).map_err(|e| DelegateError::ParseFailure(e.to_string()))
    }
}

#[async_trait]
impl AiDelegate for HttpAiDelegate {
    async fn delegate(&self, content: &str, provider: &str, options: &ProviderOptions) -> AiOutcome {
        let start = Instant::now();

        let outcome = match self.call(content, provider, options).await {
            Ok(value) => {
                debug!("{} responded in {:?}", provider, start.elapsed());
                AiOutcome::Response(value)
            }
            Err(e) => {
                warn!("AI provider {} failed: {}", provider, sanitize(&e.to_string()));
                AiOutcome::Error(e)
            }
        };

        metrics::record_ai_call(provider, outcome.label(), start.elapsed().as_secs_f64());
        outcome
    }
}

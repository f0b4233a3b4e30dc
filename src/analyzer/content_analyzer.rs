// Cached content analysis with optional AI delegation
// Author: kelexine (https://github.com/kelexine)

use super::models::{AnalysisRequest, AnalysisResult};
use super::analyze_heuristics;
use crate::ai::{AiDelegate, HttpAiDelegate, ProviderOptions};
use crate::cache::{AnalysisCache, CacheStats, KeyHasher, Sha256KeyHasher};
use crate::config::AppConfig;
use crate::error::Result;
use crate::metrics;
use std::sync::Arc;
use tracing::{debug, info};

/// Analyzes content and remembers the result per (content, provider).
///
/// The cache key ignores [`ProviderOptions`]: a second call with the same
/// content and provider returns the first result even if the options differ.
pub struct ContentAnalyzer {
    cache: AnalysisCache,
    hasher: Arc<dyn KeyHasher>,
    delegate: Arc<dyn AiDelegate>,
}

impl ContentAnalyzer {
    pub fn new(cache: AnalysisCache, delegate: Arc<dyn AiDelegate>) -> Self {
        Self {
            cache,
            hasher: Arc::new(Sha256KeyHasher),
            delegate,
        }
    }

    /// Build an analyzer with the HTTP delegate and cache settings from `config`
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let delegate = HttpAiDelegate::new(&config.ai)?;
        info!(
            "Analysis cache: enabled={}, ttl={}s",
            config.cache.enabled, config.cache.ttl_seconds
        );
        Ok(Self::new(
            AnalysisCache::new(config.cache.clone()),
            Arc::new(delegate),
        ))
    }

    /// Replace the cache key derivation
    pub fn with_hasher(mut self, hasher: Arc<dyn KeyHasher>) -> Self {
        self.hasher = hasher;
        self
    }

    /// Analyze `content`, consulting `provider` when one is given.
    ///
    /// Repeated calls with the same content and provider are answered from the
    /// cache without contacting the provider again. Provider failures end up
    /// in [`AnalysisResult::ai`]; this never fails.
    pub async fn analyze(
        &self,
        content: &str,
        provider: Option<&str>,
        options: &ProviderOptions,
    ) -> AnalysisResult {
        // An empty provider name means no provider
        let provider = provider.filter(|p| !p.is_empty());
        let key = self.hasher.cache_key(content, provider);

        self.cache
            .get_or_compute(&key, || async {
                debug!(
                    "Analyzing {} bytes of content (provider: {})",
                    content.len(),
                    provider.unwrap_or("none")
                );

                let mut result = analyze_heuristics(content);
                if let Some(provider) = provider {
                    result.ai = Some(self.delegate.delegate(content, provider, options).await);
                }

                metrics::record_analysis(provider);
                result
            })
            .await
    }

    pub async fn analyze_request(&self, request: &AnalysisRequest) -> AnalysisResult {
        self.analyze(&request.content, request.provider.as_deref(), &request.options)
            .await
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

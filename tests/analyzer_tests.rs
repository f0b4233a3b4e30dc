// Content analyzer behaviour tests
// Author: kelexine (https://github.com/kelexine)

use aiseo::ai::{AiDelegate, AiOutcome, DelegateError, HttpAiDelegate, ProviderOptions};
use aiseo::analyzer::{AnalysisResult, ContentAnalyzer};
use aiseo::cache::{AnalysisCache, CacheConfig};
use aiseo::config::AiConfig;
use async_trait::async_trait;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Delegate that counts calls and echoes the provider back
#[derive(Default)]
struct CountingDelegate {
    calls: AtomicUsize,
    delay: Option<Duration>,
}

impl CountingDelegate {
    fn slow(delay: Duration) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            delay: Some(delay),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AiDelegate for CountingDelegate {
    async fn delegate(&self, _content: &str, provider: &str, _options: &ProviderOptions) -> AiOutcome {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        AiOutcome::Response(json!({ "provider": provider, "call": n }))
    }
}

fn analyzer_with(delegate: Arc<CountingDelegate>) -> ContentAnalyzer {
    ContentAnalyzer::new(AnalysisCache::new(CacheConfig::default()), delegate)
}

#[tokio::test]
async fn test_heuristics_without_provider() {
    let delegate = Arc::new(CountingDelegate::default());
    let analyzer = analyzer_with(delegate.clone());

    let result = analyzer
        .analyze("<h1>Title</h1><p>word word word word</p>", None, &ProviderOptions::default())
        .await;

    assert_eq!(result.word_count, 5);
    assert_eq!(result.reading_time, 1);
    assert_eq!(result.seo_score, 10);
    assert_eq!(result.keyword_density.keys().collect::<Vec<_>>(), vec!["word", "title"]);
    assert_eq!(result.keyword_density.get("word"), Some(80.0));
    assert_eq!(result.keyword_density.get("title"), Some(20.0));
    assert!(result.ai.is_none());
    assert_eq!(delegate.calls(), 0);
}

#[tokio::test]
async fn test_repeat_analysis_is_served_from_cache() {
    let delegate = Arc::new(CountingDelegate::default());
    let analyzer = analyzer_with(delegate.clone());
    let options = ProviderOptions::default();

    let first = analyzer.analyze("<p>Cache me please</p>", Some("openai"), &options).await;
    let second = analyzer.analyze("<p>Cache me please</p>", Some("openai"), &options).await;

    assert_eq!(first, second);
    assert_eq!(delegate.calls(), 1);
    assert_eq!(analyzer.cache_stats().hits, 1);
}

#[tokio::test]
async fn test_options_do_not_affect_cache_key() {
    let delegate = Arc::new(CountingDelegate::default());
    let analyzer = analyzer_with(delegate.clone());

    let first = analyzer
        .analyze("same content", Some("openai"), &ProviderOptions::default())
        .await;
    let second = analyzer
        .analyze(
            "same content",
            Some("openai"),
            &ProviderOptions {
                model: Some("gpt-4".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert_eq!(first, second);
    assert_eq!(delegate.calls(), 1);
}

#[tokio::test]
async fn test_providers_are_cached_separately() {
    let delegate = Arc::new(CountingDelegate::default());
    let analyzer = analyzer_with(delegate.clone());
    let options = ProviderOptions::default();
    let content = "<h2>Shared</h2> content body";

    let plain = analyzer.analyze(content, None, &options).await;
    let openai = analyzer.analyze(content, Some("openai"), &options).await;
    let deepseek = analyzer.analyze(content, Some("deepseek"), &options).await;

    assert!(plain.ai.is_none());
    assert_eq!(
        openai.ai.as_ref().and_then(|a| a.response()).map(|v| v["provider"].clone()),
        Some(json!("openai"))
    );
    assert_eq!(
        deepseek.ai.as_ref().and_then(|a| a.response()).map(|v| v["provider"].clone()),
        Some(json!("deepseek"))
    );
    assert_eq!(delegate.calls(), 2);
    assert_eq!(analyzer.cache_stats().entries, 3);

    // Heuristic part is identical across providers
    assert_eq!(plain.word_count, openai.word_count);
    assert_eq!(plain.keyword_density, deepseek.keyword_density);
}

#[tokio::test]
async fn test_provider_name_cannot_alias_content() {
    let delegate = Arc::new(CountingDelegate::default());
    let analyzer = analyzer_with(delegate.clone());
    let options = ProviderOptions::default();

    let plain = analyzer.analyze("hello worldopenai", None, &options).await;
    let with_provider = analyzer.analyze("hello world", Some("openai"), &options).await;

    assert!(plain.ai.is_none());
    assert_eq!(with_provider.word_count, 2);
    assert!(with_provider.ai.is_some());
    assert_eq!(delegate.calls(), 1);
    assert_eq!(analyzer.cache_stats().entries, 2);
}

#[tokio::test]
async fn test_empty_provider_means_none() {
    let delegate = Arc::new(CountingDelegate::default());
    let analyzer = analyzer_with(delegate.clone());
    let options = ProviderOptions::default();

    let none = analyzer.analyze("some words here", None, &options).await;
    let empty = analyzer.analyze("some words here", Some(""), &options).await;

    assert_eq!(none, empty);
    assert!(empty.ai.is_none());
    assert_eq!(delegate.calls(), 0);
    assert_eq!(analyzer.cache_stats().hits, 1);
}

#[tokio::test]
async fn test_empty_content() {
    let delegate = Arc::new(CountingDelegate::default());
    let analyzer = analyzer_with(delegate);

    let result = analyzer.analyze("", None, &ProviderOptions::default()).await;

    assert_eq!(result, AnalysisResult::empty());
    assert_eq!(result.word_count, 0);
    assert_eq!(result.reading_time, 0);
    assert!(result.keyword_density.is_empty());
    assert_eq!(result.seo_score, 0);
}

#[tokio::test]
async fn test_unknown_provider_reports_configuration_error() {
    let delegate = HttpAiDelegate::new(&AiConfig::default()).unwrap();
    let analyzer = ContentAnalyzer::new(AnalysisCache::new(CacheConfig::default()), Arc::new(delegate));

    let result = analyzer
        .analyze("Some content", Some("unknown_provider"), &ProviderOptions::default())
        .await;

    assert_eq!(result.word_count, 2);
    let ai = result.ai.expect("ai outcome present");
    match ai.error() {
        Some(DelegateError::ConfigurationMissing { provider }) => {
            assert_eq!(provider, "unknown_provider")
        }
        other => panic!("expected configuration error, got {:?}", other),
    }

    let value = serde_json::to_value(&ai).unwrap();
    assert!(value["error"].as_str().unwrap().contains("unknown_provider"));
    assert_eq!(value["kind"], "configuration_missing");
}

#[tokio::test]
async fn test_known_provider_without_key_reports_configuration_error() {
    let delegate = HttpAiDelegate::new(&AiConfig::default()).unwrap();
    let analyzer = ContentAnalyzer::new(AnalysisCache::new(CacheConfig::default()), Arc::new(delegate));

    let result = analyzer
        .analyze("Some content", Some("deepseek"), &ProviderOptions::default())
        .await;

    let ai = result.ai.expect("ai outcome present");
    assert_eq!(ai.label(), "configuration_missing");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_compute_once() {
    let delegate = Arc::new(CountingDelegate::slow(Duration::from_millis(50)));
    let analyzer = Arc::new(analyzer_with(delegate.clone()));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let analyzer = analyzer.clone();
        handles.push(tokio::spawn(async move {
            analyzer
                .analyze("<p>popular article</p>", Some("openai"), &ProviderOptions::default())
                .await
        }));
    }

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap());
    }

    assert_eq!(delegate.calls(), 1);
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}

#[tokio::test]
async fn test_disabled_cache_recomputes() {
    let delegate = Arc::new(CountingDelegate::default());
    let analyzer = ContentAnalyzer::new(
        AnalysisCache::new(CacheConfig {
            enabled: false,
            ttl_seconds: 3600,
        }),
        delegate.clone(),
    );
    let options = ProviderOptions::default();

    analyzer.analyze("text", Some("openai"), &options).await;
    analyzer.analyze("text", Some("openai"), &options).await;

    assert_eq!(delegate.calls(), 2);
    assert_eq!(analyzer.cache_stats().entries, 0);
}

#[tokio::test]
async fn test_clear_cache_forces_new_delegate_call() {
    let delegate = Arc::new(CountingDelegate::default());
    let analyzer = analyzer_with(delegate.clone());
    let options = ProviderOptions::default();

    analyzer.analyze("text", Some("openai"), &options).await;
    analyzer.clear_cache();
    analyzer.analyze("text", Some("openai"), &options).await;

    assert_eq!(delegate.calls(), 2);
}

// Metrics module for Prometheus observability
// Author: kelexine (https://github.com/kelexine)

mod registry;

pub use registry::{
    gather_metrics,
    REQUESTS_TOTAL,
    REQUEST_DURATION,
    ANALYSES_TOTAL,
    CACHE_OPERATIONS,
    CACHE_ENTRIES,
    AI_CALLS,
    AI_CALL_DURATION,
};

use crate::ai::KnownProvider;

/// Provider label with bounded cardinality: unknown names collapse to `other`
fn provider_label(provider: Option<&str>) -> &'static str {
    match provider {
        None => "none",
        Some(id) => KnownProvider::from_id(id).map(|p| p.id()).unwrap_or("other"),
    }
}

/// Helper to record request metrics
pub fn record_request(method: &str, endpoint: &str, status_code: u16, duration_secs: f64) {
    REQUESTS_TOTAL
        .with_label_values(&[method, endpoint, &status_code.to_string()])
        .inc();

    REQUEST_DURATION
        .with_label_values(&[method, endpoint])
        .observe(duration_secs);
}

/// Helper to record a computed (not cached) analysis
pub fn record_analysis(provider: Option<&str>) {
    ANALYSES_TOTAL.with_label_values(&[provider_label(provider)]).inc();
}

/// Helper to record cache operations
pub fn record_cache_hit() {
    CACHE_OPERATIONS.with_label_values(&["hit"]).inc();
}

pub fn record_cache_miss() {
    CACHE_OPERATIONS.with_label_values(&["miss"]).inc();
}

pub fn record_cache_expired() {
    CACHE_OPERATIONS.with_label_values(&["expired"]).inc();
}

pub fn update_cache_entries(count: usize) {
    CACHE_ENTRIES.with_label_values(&["active"]).set(count as f64);
}

/// Helper to record AI provider calls
pub fn record_ai_call(provider: &str, outcome: &str, duration_secs: f64) {
    let provider = provider_label(Some(provider));
    AI_CALLS.with_label_values(&[provider, outcome]).inc();
    AI_CALL_DURATION
        .with_label_values(&[provider])
        .observe(duration_secs);
}

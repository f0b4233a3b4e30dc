// Cache manager - handles cache key generation, lookup and expiry
// Author: kelexine (https://github.com/kelexine)

use crate::analyzer::AnalysisResult;
use crate::cache::clock::{Clock, SystemClock};
use crate::cache::models::{CacheConfig, CacheStats};
use crate::metrics;
use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::debug;

/// Derives the cache key for a piece of content and an optional provider.
pub trait KeyHasher: Send + Sync {
    fn cache_key(&self, content: &str, provider: Option<&str>) -> String;
}

/// SHA-256 over the length-prefixed `content` followed by the provider name
/// (or nothing). The prefix keeps `("ab", "c")` and `("abc", "")` apart.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256KeyHasher;

impl KeyHasher for Sha256KeyHasher {
    fn cache_key(&self, content: &str, provider: Option<&str>) -> String {
        let mut hasher = Sha256::new();
        hasher.update((content.len() as u64).to_le_bytes());
        hasher.update(content.as_bytes());
        hasher.update(provider.unwrap_or_default().as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

fn short(key: &str) -> &str {
    key.get(..16).unwrap_or(key)
}

struct CachedAnalysis {
    result: AnalysisResult,
    stored_at: DateTime<Utc>,
}

/// A key's slot. Empty while the first caller is still computing; later
/// callers for the same key wait on it instead of computing again.
#[derive(Default)]
struct Slot {
    cell: OnceCell<CachedAnalysis>,
}

enum Lookup {
    Hit,
    Miss,
    Expired,
}

/// Process-lifetime store of analysis results.
pub struct AnalysisCache {
    config: CacheConfig,
    clock: Arc<dyn Clock>,
    /// Cache key → result slot
    entries: Mutex<HashMap<String, Arc<Slot>>>,
    stats: Mutex<CacheStats>,
}

impl AnalysisCache {
    /// Create a cache driven by the system clock
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: CacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            clock,
            entries: Mutex::new(HashMap::new()),
            stats: Mutex::new(CacheStats::default()),
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Entry lifetime. `None` when entries never expire: `ttl_seconds` is 0
    /// or too large for a [`Duration`].
    fn ttl(&self) -> Option<Duration> {
        match self.config.ttl_seconds {
            0 => None,
            secs => i64::try_from(secs).ok().and_then(Duration::try_seconds),
        }
    }

    fn is_expired(&self, slot: &Slot) -> bool {
        let Some(ttl) = self.ttl() else {
            return false;
        };
        match slot.cell.get() {
            Some(cached) => self.clock.now().signed_duration_since(cached.stored_at) >= ttl,
            // Still being computed
            None => false,
        }
    }

    /// Return the cached result for `key`, or run `compute` and store what it
    /// produces.
    ///
    /// Lookup and slot creation happen under one lock, so concurrent callers
    /// with the same key run `compute` once between them.
    pub async fn get_or_compute<F, Fut>(&self, key: &str, compute: F) -> AnalysisResult
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = AnalysisResult>,
    {
        if !self.config.enabled {
            debug!("Caching disabled");
            return compute().await;
        }

        let (slot, lookup) = {
            let mut entries = self.entries.lock();
            let current = entries.get(key).cloned();
            match current {
                Some(slot) if !self.is_expired(&slot) => (slot, Lookup::Hit),
                previous => {
                    let slot = Arc::new(Slot::default());
                    entries.insert(key.to_string(), Arc::clone(&slot));
                    let lookup = if previous.is_some() {
                        Lookup::Expired
                    } else {
                        Lookup::Miss
                    };
                    (slot, lookup)
                }
            }
        };

        self.record(&lookup, key);

        let cached = slot
            .cell
            .get_or_init(move || async move {
                let result = compute().await;
                CachedAnalysis {
                    result,
                    stored_at: self.clock.now(),
                }
            })
            .await;

        cached.result.clone()
    }

    fn record(&self, lookup: &Lookup, key: &str) {
        let entries = self.entries.lock().len();
        let mut stats = self.stats.lock();
        stats.entries = entries;
        match lookup {
            Lookup::Hit => {
                debug!("Cache hit: {}", short(key));
                stats.hits += 1;
                metrics::record_cache_hit();
            }
            Lookup::Miss => {
                debug!("Cache miss: {}", short(key));
                stats.misses += 1;
                metrics::record_cache_miss();
            }
            Lookup::Expired => {
                debug!("Cache entry expired: {}", short(key));
                stats.misses += 1;
                stats.expired += 1;
                metrics::record_cache_expired();
            }
        }
        metrics::update_cache_entries(entries);
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.lock().clone();
        stats.entries = self.entries.lock().len();
        stats
    }

    /// Number of keys currently held
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all cached entries
    pub fn clear(&self) {
        self.entries.lock().clear();
        metrics::update_cache_entries(0);
        debug!("Cache cleared");
    }
}

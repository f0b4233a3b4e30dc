//! Cache configuration and statistics models.

// Author: kelexine (https://github.com/kelexine)

use serde::{Deserialize, Serialize};

/// Configuration for the analysis result cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Whether results are cached at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Lifetime of a cached result in seconds. `0` keeps entries for the
    /// lifetime of the process.
    #[serde(default = "default_ttl")]
    pub ttl_seconds: u64,
}

impl Default for CacheConfig {
    /// Provides default values for cache configuration.
    ///
    /// - `enabled`: true
    /// - `ttl_seconds`: 3600
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            ttl_seconds: default_ttl(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_ttl() -> u64 {
    3600 // 1 hour
}

/// Statistics for cache operations.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct CacheStats {
    /// Lookups answered from the cache, including callers that joined an
    /// in-flight computation.
    pub hits: u64,
    /// Lookups that had to compute a fresh result.
    pub misses: u64,
    /// Entries found past their TTL and recomputed.
    pub expired: u64,
    /// Keys currently held.
    pub entries: usize,
}

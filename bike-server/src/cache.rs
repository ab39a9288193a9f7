//! Short-lived caching of provider responses.
//!
//! Station availability changes by the minute, so entries only live for a
//! few seconds. That is enough to absorb bursts of identical requests
//! without serving noticeably stale counts.

use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::provider::{StationError, StationSource, Stations};

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries. Zero disables caching.
    pub ttl: Duration,

    /// Maximum number of cached contracts.
    pub max_capacity: u64,
}

impl CacheConfig {
    /// Cache entries for `ttl`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            ..Self::default()
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(30),
            max_capacity: 16,
        }
    }
}

/// Station source with caching.
///
/// Wraps any [`StationSource`] and caches successful responses per
/// contract. Concurrent misses for the same contract share one upstream
/// fetch. Failures are passed through and never cached.
pub struct CachedStationSource<S> {
    inner: S,
    cache: Option<MokaCache<String, Stations>>,
}

impl<S: StationSource> CachedStationSource<S> {
    /// Create a new cached source.
    pub fn new(inner: S, config: &CacheConfig) -> Self {
        let cache = (!config.ttl.is_zero()).then(|| {
            MokaCache::builder()
                .time_to_live(config.ttl)
                .max_capacity(config.max_capacity)
                .build()
        });

        Self { inner, cache }
    }

    /// Number of cached contracts (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.cache.as_ref().map_or(0, |c| c.entry_count())
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        if let Some(cache) = &self.cache {
            cache.invalidate_all();
        }
    }
}

impl<S: StationSource> StationSource for CachedStationSource<S> {
    async fn fetch_stations(&self, contract: &str) -> Result<Stations, StationError> {
        let Some(cache) = &self.cache else {
            return self.inner.fetch_stations(contract).await;
        };

        let load = async {
            debug!(contract, "station cache miss");
            self.inner.fetch_stations(contract).await
        };

        cache
            .try_get_with(contract.to_string(), load)
            .await
            .map_err(StationError::from)
    }
}

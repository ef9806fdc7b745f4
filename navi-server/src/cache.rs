//! Caching layer for built networks.
//!
//! Building a network means fetching its lines and constructing both
//! graphs, the line-level one quadratic in line length. Worlds change
//! rarely, so the built `Network` is kept per world for a short TTL and
//! shared between requests behind an `Arc`.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::graph::Network;
use crate::network::{NetworkError, NetworkSource};

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached worlds.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 64,
        }
    }
}

/// Cache of built networks keyed by world.
pub struct NetworkCache {
    worlds: MokaCache<String, Arc<Network>>,
}

impl NetworkCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let worlds = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { worlds }
    }

    /// Get a cached network.
    pub async fn get(&self, world: &str) -> Option<Arc<Network>> {
        self.worlds.get(world).await
    }

    /// Insert a network into the cache.
    pub async fn insert(&self, network: Arc<Network>) {
        self.worlds
            .insert(network.world().to_string(), network)
            .await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.worlds.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.worlds.invalidate_all();
    }
}

/// Network source with caching.
///
/// Wraps a `NetworkSource` and caches the networks built from it.
pub struct CachedNetworkSource {
    source: NetworkSource,
    cache: NetworkCache,
}

impl CachedNetworkSource {
    /// Create a new cached source.
    pub fn new(source: NetworkSource, cache_config: &CacheConfig) -> Self {
        Self {
            source,
            cache: NetworkCache::new(cache_config),
        }
    }

    /// Get the network for `world`, using the cache if available.
    ///
    /// Failed loads are not cached.
    pub async fn load(&self, world: &str) -> Result<Arc<Network>, NetworkError> {
        if let Some(cached) = self.cache.get(world).await {
            return Ok(cached);
        }

        let lines = self.source.fetch(world).await?;
        let network = Arc::new(Network::build(world, lines));
        self.cache.insert(network.clone()).await;
        debug!(world, "cached network");

        Ok(network)
    }

    /// Access the underlying source for operations that bypass cache.
    pub fn source(&self) -> &NetworkSource {
        &self.source
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}

//! In-memory cache implementation using moka
//!
//! Provides a fast, thread-safe in-memory cache with TTL support.
//!
//! # Features
//! - TTL-based expiration for each cache entry
//! - Capacity bound on the number of entries
//! - Coalescing of concurrent loads for the same key
//! - Failed loads are never stored

use moka::future::Cache;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Default maximum cache capacity (number of entries)
const DEFAULT_MAX_CAPACITY: u64 = 1_000;

/// Default TTL for cache entries (5 minutes)
const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// In-memory cache of decoded JSON documents keyed by query
///
/// Values are shared behind an `Arc` so a hit never clones the document.
#[derive(Clone)]
pub struct MemoryCache {
    /// The underlying moka cache instance
    cache: Cache<String, Arc<Value>>,
    /// TTL applied to every entry
    ttl: Duration,
}

impl std::fmt::Debug for MemoryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCache")
            .field("entry_count", &self.cache.entry_count())
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl MemoryCache {
    /// Create a new memory cache with default settings
    ///
    /// Default configuration:
    /// - Max capacity: 1,000 entries
    /// - TTL: 5 minutes
    pub fn new() -> Self {
        Self::with_capacity_and_ttl(DEFAULT_MAX_CAPACITY, DEFAULT_TTL)
    }

    /// Create a new memory cache with custom capacity and TTL
    ///
    /// # Arguments
    /// * `max_capacity` - Maximum number of entries the cache can hold
    /// * `ttl` - Time-to-live for cache entries
    pub fn with_capacity_and_ttl(max_capacity: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .build();

        Self { cache, ttl }
    }

    /// Return the cached value for `key`, or run `load` to produce it
    ///
    /// Concurrent callers asking for the same missing key wait on a single
    /// `load`. An error is handed to every waiter and nothing is stored.
    pub async fn get_or_try_insert_with<F, E>(&self, key: String, load: F) -> Result<Arc<Value>, Arc<E>>
    where
        F: Future<Output = Result<Value, E>>,
        E: Send + Sync + 'static,
    {
        self.cache
            .try_get_with(key, async move { load.await.map(Arc::new) })
            .await
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_load_then_hit() {
        let cache = MemoryCache::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let value = cache
                .get_or_try_insert_with("pastores".to_string(), async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, String>(json!([{"nome": "A"}]))
                })
                .await
                .unwrap();
            assert_eq!(*value, json!([{"nome": "A"}]));
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let cache = MemoryCache::new();

        let first = cache
            .get_or_try_insert_with("k".to_string(), async { Err::<Value, _>("offline".to_string()) })
            .await;
        assert_eq!(first.unwrap_err().as_str(), "offline");

        let second = cache
            .get_or_try_insert_with("k".to_string(), async { Ok::<_, String>(json!(1)) })
            .await
            .unwrap();
        assert_eq!(*second, json!(1));
    }

    #[tokio::test]
    async fn test_concurrent_loads_are_coalesced() {
        let cache = MemoryCache::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let loads = (0..8).map(|_| {
            let cache = cache.clone();
            let calls = calls.clone();
            async move {
                cache
                    .get_or_try_insert_with("configuracoes".to_string(), async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        tokio::time::sleep(Duration::from_millis(20)).await;
                        Ok::<_, String>(json!({"cep": "08490-000"}))
                    })
                    .await
            }
        });

        let results = futures::future::join_all(loads).await;

        assert!(results.iter().all(|r| r.is_ok()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_entries_expire_after_ttl() {
        let cache = MemoryCache::with_capacity_and_ttl(10, Duration::from_millis(10));
        cache
            .get_or_try_insert_with("k".to_string(), async { Ok::<_, String>(json!(true)) })
            .await
            .unwrap();
        assert!(cache.cache.get("k").await.is_some());

        tokio::time::sleep(Duration::from_millis(50)).await;
        cache.cache.run_pending_tasks().await;

        assert!(cache.cache.get("k").await.is_none());
    }
}

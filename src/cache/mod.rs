//! Cache layer
//!
//! A fetch-once layer in front of the content gateway. Identical queries
//! issued while one is in flight share its answer, and successful answers
//! are reused until their TTL runs out. The footer and the contact page both
//! asking for the site configuration therefore cost one upstream request.
//!
//! # Usage
//!
//! ```rust,ignore
//! use igreja_unida::cache::{MemoizedSource, MemoryCache};
//!
//! let upstream = Arc::new(SanityClient::new(&config.content)?);
//! let source = MemoizedSource::new(upstream, MemoryCache::new());
//! let pastors = source.fetch(&queries::pastors()).await?;
//! ```

pub mod memory;

pub use memory::MemoryCache;

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::config::CacheConfig;
use crate::content::{ContentSource, GatewayError, Query};

/// Create the memory cache described by the configuration
pub fn create_cache(config: &CacheConfig) -> MemoryCache {
    tracing::info!(
        ttl_seconds = config.ttl_seconds,
        max_capacity = config.max_capacity,
        "Using in-memory content cache"
    );
    MemoryCache::with_capacity_and_ttl(
        config.max_capacity,
        std::time::Duration::from_secs(config.ttl_seconds),
    )
}

/// A [`ContentSource`] that memoizes another one per query
pub struct MemoizedSource {
    upstream: Arc<dyn ContentSource>,
    cache: MemoryCache,
}

impl std::fmt::Debug for MemoizedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoizedSource")
            .field("cache", &self.cache)
            .finish()
    }
}

impl MemoizedSource {
    pub fn new(upstream: Arc<dyn ContentSource>, cache: MemoryCache) -> Self {
        Self { upstream, cache }
    }
}

#[async_trait]
impl ContentSource for MemoizedSource {
    async fn fetch(&self, query: &Query) -> Result<Value, GatewayError> {
        let upstream = self.upstream.clone();
        let owned = query.clone();

        let value = self
            .cache
            .get_or_try_insert_with(query.cache_key(), async move {
                let result = upstream.fetch(&owned).await;
                if let Err(ref e) = result {
                    tracing::warn!(query = owned.label, error = %e, "content query failed");
                }
                result
            })
            .await?;

        Ok(Value::clone(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::queries;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Upstream that counts calls and fails while `failing` is set
    struct CountingSource {
        calls: AtomicUsize,
        failing: std::sync::atomic::AtomicBool,
    }

    impl CountingSource {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                failing: std::sync::atomic::AtomicBool::new(false),
            }
        }
    }

    #[async_trait]
    impl ContentSource for CountingSource {
        async fn fetch(&self, query: &Query) -> Result<Value, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(10)).await;
            if self.failing.load(Ordering::SeqCst) {
                return Err(GatewayError::Query("offline".to_string()));
            }
            Ok(json!({ "label": query.label }))
        }
    }

    fn memoized(upstream: Arc<CountingSource>) -> MemoizedSource {
        MemoizedSource::new(upstream, MemoryCache::new())
    }

    #[tokio::test]
    async fn test_concurrent_identical_queries_hit_upstream_once() {
        let upstream = Arc::new(CountingSource::new());
        let source = memoized(upstream.clone());
        let query = queries::settings();

        let (footer, contact) = tokio::join!(source.fetch(&query), source.fetch(&query));

        assert_eq!(footer.unwrap(), json!({"label": "configuracoes gerais"}));
        assert!(contact.is_ok());
        assert_eq!(upstream.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_different_params_are_separate_entries() {
        let upstream = Arc::new(CountingSource::new());
        let source = memoized(upstream.clone());

        source.fetch(&queries::article_by_slug("a")).await.unwrap();
        source.fetch(&queries::article_by_slug("b")).await.unwrap();
        source.fetch(&queries::article_by_slug("a")).await.unwrap();

        assert_eq!(upstream.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failures_are_retried_on_next_request() {
        let upstream = Arc::new(CountingSource::new());
        upstream.failing.store(true, Ordering::SeqCst);
        let source = memoized(upstream.clone());
        let query = queries::pastors();

        let err = source.fetch(&query).await.unwrap_err();
        assert!(matches!(err, GatewayError::Shared(_)));

        upstream.failing.store(false, Ordering::SeqCst);
        assert!(source.fetch(&query).await.is_ok());
        assert_eq!(upstream.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_create_cache_uses_config_ttl() {
        let config = CacheConfig {
            ttl_seconds: 42,
            max_capacity: 5,
        };
        let cache = format!("{:?}", create_cache(&config));
        assert!(cache.contains("ttl: 42s"), "{cache}");
    }
}

//! Optional read-through cache for hot content queries / 内容查询缓存
//!
//! Entries are keyed by cache name plus the call arguments and never expire.
//! The content is imported out-of-band, so a cached page may be stale until
//! the process restarts.

use parking_lot::RwLock;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;

use crate::error::Result;

pub trait ContentCache: Send + Sync {
    fn get(&self, cache: &str, key: &str) -> Option<Value>;
    fn put(&self, cache: &str, key: &str, value: Value);
}

/// Never stores anything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCache;

impl ContentCache for NoopCache {
    fn get(&self, _cache: &str, _key: &str) -> Option<Value> {
        None
    }

    fn put(&self, _cache: &str, _key: &str, _value: Value) {}
}

/// Unbounded in-process cache
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<(String, String), Value>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl ContentCache for MemoryCache {
    fn get(&self, cache: &str, key: &str) -> Option<Value> {
        self.entries
            .read()
            .get(&(cache.to_string(), key.to_string()))
            .cloned()
    }

    fn put(&self, cache: &str, key: &str, value: Value) {
        self.entries
            .write()
            .insert((cache.to_string(), key.to_string()), value);
    }
}

/// Return the cached value for `(cache, key)` or run `fetch` and remember its result.
/// Errors are never cached.
pub async fn cached<T, F>(store: &dyn ContentCache, cache: &str, key: &str, fetch: F) -> Result<T>
where
    T: Serialize + DeserializeOwned,
    F: Future<Output = Result<T>>,
{
    if let Some(value) = store.get(cache, key) {
        tracing::debug!("Cache hit: {} [{}]", cache, key);
        return Ok(serde_json::from_value(value)?);
    }

    let fresh = fetch.await?;
    store.put(cache, key, serde_json::to_value(&fresh)?);
    Ok(fresh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContentError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_memory_cache_reuses_result() {
        let cache = MemoryCache::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let value: Vec<String> = cached(&cache, "random-words", "10", async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(vec!["aman".to_string()])
            })
            .await
            .unwrap();
            assert_eq!(value, vec!["aman".to_string()]);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_keys_are_scoped_by_cache_name() {
        let cache = MemoryCache::new();
        cache.put("a", "k", serde_json::json!(1));
        cache.put("b", "k", serde_json::json!(2));
        assert_eq!(cache.get("a", "k"), Some(serde_json::json!(1)));
        assert_eq!(cache.get("b", "k"), Some(serde_json::json!(2)));
        assert_eq!(cache.get("c", "k"), None);
    }

    #[tokio::test]
    async fn test_noop_cache_always_fetches() {
        let calls = AtomicUsize::new(0);
        for _ in 0..2 {
            let _: i64 = cached(&NoopCache, "count", "", async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(7)
            })
            .await
            .unwrap();
        }
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let cache = MemoryCache::new();
        let result: Result<i64> = cached(&cache, "count", "", async {
            Err(ContentError::Database(sqlx::Error::PoolTimedOut))
        })
        .await;
        assert!(result.is_err());
        assert!(cache.is_empty());
    }
}

use std::num::NonZeroUsize;

use dashmap::DashMap;
use lru::LruCache;
use serde_json::Value;

/// Lookaside cache for serialized responses, partitioned by namespace.
///
/// Entries have no TTL. Writers invalidate a whole namespace with
/// [`ResponseCache::evict_all`] after every successful mutation.
pub trait ResponseCache: Send + Sync {
    fn get(&self, namespace: &str, key: &str) -> Option<Value>;

    fn put(&self, namespace: &str, key: String, value: Value);

    fn evict_all(&self, namespace: &str);
}

/// In-process [`ResponseCache`] keeping one bounded LRU per namespace.
pub struct LruResponseCache {
    capacity: NonZeroUsize,
    namespaces: DashMap<String, LruCache<String, Value>>,
}

impl LruResponseCache {
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN),
            namespaces: DashMap::new(),
        }
    }

    /// Number of entries currently cached under `namespace`.
    pub fn len(&self, namespace: &str) -> usize {
        self.namespaces
            .get(namespace)
            .map(|entries| entries.len())
            .unwrap_or(0)
    }
}

impl ResponseCache for LruResponseCache {
    fn get(&self, namespace: &str, key: &str) -> Option<Value> {
        self.namespaces
            .get_mut(namespace)
            .and_then(|mut entries| entries.get(key).cloned())
    }

    fn put(&self, namespace: &str, key: String, value: Value) {
        self.namespaces
            .entry(namespace.to_string())
            .or_insert_with(|| LruCache::new(self.capacity))
            .put(key, value);
    }

    fn evict_all(&self, namespace: &str) {
        if let Some(mut entries) = self.namespaces.get_mut(namespace) {
            entries.clear();
        }
    }
}

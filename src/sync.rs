//! Thread-safety retrofit for the single-threaded engines.
//!
//! The ARC and LRU engines make no concurrency guarantees of their own:
//! `replace` and the ghost-hit cases in `ArcCache::set` touch multiple
//! lists as one logical step, so fine-grained per-list locking would be
//! unsound. `SharedCache` wraps a whole engine behind a single
//! `parking_lot::Mutex`, the same style a `RwLock`-guarded L1 cache
//! layer uses for its own state.

use crate::Cache;
use parking_lot::Mutex;
use std::sync::Arc;

/// A `Cache` shared across threads behind one coarse lock.
#[derive(Clone)]
pub struct SharedCache<C> {
    inner: Arc<Mutex<C>>,
}

impl<C> SharedCache<C> {
    pub fn new(cache: C) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }
}

impl<K, V, C: Cache<K, V>> SharedCache<C> {
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.lock().get(key)
    }

    pub fn set(&self, key: K, value: V) -> bool {
        self.inner.lock().set(key, value)
    }

    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.lock().remove(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn stats(&self) -> crate::CacheStats {
        self.inner.lock().stats()
    }
}

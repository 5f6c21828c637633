//! LRU Cache — the single-list baseline the test harness compares ARC
//! against. A thin wrapper around one `OrderedRecencyList`.

use crate::error::{CacheError, Result};
use crate::orl::OrderedRecencyList;
use crate::stats::CacheStats;
use crate::Cache;
use std::hash::Hash;
use tracing::debug;

/// Fixed-capacity LRU cache built on a single ordered-recency list.
pub struct LruCache<K, V> {
    list: OrderedRecencyList<K, V>,
    capacity: usize,
    stats: CacheStats,
}

impl<K: Eq + Hash + Clone, V: Clone> LruCache<K, V> {
    /// Construct a new LRU cache. `capacity` must be at least 1.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity {
                requested: capacity,
            });
        }
        Ok(Self {
            list: OrderedRecencyList::new(),
            capacity,
            stats: CacheStats::new(),
        })
    }
}

impl<K: Eq + Hash + Clone, V: Clone> Cache<K, V> for LruCache<K, V> {
    fn get(&mut self, key: &K) -> Option<V> {
        match self.list.lookup(key).cloned() {
            Some(value) => {
                self.list.touch(key);
                self.stats.record_hit();
                debug!("LRU cache HIT");
                Some(value)
            }
            None => {
                self.stats.record_miss();
                debug!("LRU cache MISS");
                None
            }
        }
    }

    fn set(&mut self, key: K, value: V) -> bool {
        if self.list.contains(&key) {
            if let Some(slot) = self.list.lookup_mut(&key) {
                *slot = value;
            }
            self.list.touch(&key);
            return true;
        }

        if self.list.len() >= self.capacity {
            let (evicted, _) = self.list.evict_oldest();
            debug!("LRU cache EVICT (capacity reached)");
            let _ = evicted;
        }

        self.list.insert(key, value);
        true
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.list.remove(key)
    }

    fn len(&self) -> usize {
        self.list.len()
    }

    fn max_storage(&self) -> usize {
        self.capacity
    }

    fn remaining_storage(&self) -> usize {
        self.capacity - self.list.len()
    }

    fn stats(&self) -> CacheStats {
        self.stats
    }
}

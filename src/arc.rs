//! ARC (Adaptive Replacement Cache) engine.
//!
//! Four ordered-recency lists coupled together:
//! - T1, T2: resident lists (recency, frequency).
//! - B1, B2: ghost lists shadowing evictions from T1/T2 (keys only, in
//!   spirit — this implementation keeps the payload attached, see
//!   `Record` identity note).
//!
//! `p` is the adaptation target for `|T1|`; it moves on every ghost hit
//! and governs which resident list `replace` donates a victim from.

use crate::error::{CacheError, Result};
use crate::orl::OrderedRecencyList;
use crate::record::{Record, Tag};
use crate::stats::CacheStats;
use crate::Cache;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::debug;

/// Adaptive Replacement Cache: self-tunes between recency and frequency
/// eviction without any externally tunable parameters.
pub struct ArcCache<K, V> {
    capacity: usize,
    p: usize,
    t1: OrderedRecencyList<K, Record<V>>,
    t2: OrderedRecencyList<K, Record<V>>,
    b1: OrderedRecencyList<K, Record<V>>,
    b2: OrderedRecencyList<K, Record<V>>,
    /// key -> which of the four lists currently owns it; present iff the
    /// key is in T1 ∪ T2 ∪ B1 ∪ B2.
    directory: HashMap<K, Tag>,
    stats: CacheStats,
}

impl<K: Eq + Hash + Clone, V: Clone> ArcCache<K, V> {
    /// Construct a new ARC cache. `capacity` must be at least 1.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity {
                requested: capacity,
            });
        }
        Ok(Self {
            capacity,
            p: 0,
            t1: OrderedRecencyList::new(),
            t2: OrderedRecencyList::new(),
            b1: OrderedRecencyList::new(),
            b2: OrderedRecencyList::new(),
            directory: HashMap::new(),
            stats: CacheStats::new(),
        })
    }

    /// Current adaptation target for `|T1|`, in `[0, capacity]`.
    pub fn p(&self) -> usize {
        self.p
    }

    /// The tag currently recorded for `key`, if it is anywhere in the
    /// cache (resident or ghost).
    pub fn tag_of(&self, key: &K) -> Option<Tag> {
        self.directory.get(key).copied()
    }

    pub fn ghost_len(&self) -> usize {
        self.b1.len() + self.b2.len()
    }

    fn is_resident_full(&self) -> bool {
        self.t1.len() + self.t2.len() == self.capacity
    }

    /// Case IV of `Set`: resize the total footprint to make room for a
    /// brand-new key before inserting it into T1.
    fn make_room_for_miss(&mut self) {
        if self.t1.len() + self.b1.len() == self.capacity {
            if self.t1.len() < self.capacity {
                let (evicted, _) = self.b1.evict_oldest();
                self.directory.remove(&evicted);
                self.replace(Tag::None);
            } else {
                // T1 = c, so B1 is empty: a plain T1 eviction with no
                // ghost demotion, matching the original's full-recency
                // corner.
                let (evicted, _) = self.t1.evict_oldest();
                self.directory.remove(&evicted);
                debug!("ARC: full-recency eviction, no ghost demotion");
            }
        } else if self.t1.len() + self.t2.len() + self.b1.len() + self.b2.len() >= self.capacity {
            if self.t1.len() + self.t2.len() + self.b1.len() + self.b2.len() == 2 * self.capacity {
                let (evicted, _) = self.b2.evict_oldest();
                self.directory.remove(&evicted);
            }
            self.replace(Tag::None);
        }
    }

    /// Choose a donor resident list and demote its oldest entry to the
    /// matching ghost list.
    fn replace(&mut self, origin: Tag) {
        let donate_from_t1 = self.t1.len() > 0
            && (self.t1.len() > self.p || (self.t1.len() == self.p && origin == Tag::B2));

        if donate_from_t1 {
            let (key, mut record) = self.t1.evict_oldest();
            record.tag = Tag::B1;
            self.directory.insert(key.clone(), Tag::B1);
            debug!("ARC: replace donor T1");
            self.b1.insert(key, record);
        } else {
            let (key, mut record) = self.t2.evict_oldest();
            record.tag = Tag::B2;
            self.directory.insert(key.clone(), Tag::B2);
            debug!("ARC: replace donor T2");
            self.b2.insert(key, record);
        }
    }
}

impl<K: Eq + Hash + Clone, V: Clone> Cache<K, V> for ArcCache<K, V> {
    fn get(&mut self, key: &K) -> Option<V> {
        match self.directory.get(key).copied() {
            Some(Tag::T1) => {
                let mut record = self
                    .t1
                    .remove(key)
                    .expect("directory says T1 but key missing from T1");
                record.tag = Tag::T2;
                let payload = record.payload.clone();
                self.t2.insert(key.clone(), record);
                self.directory.insert(key.clone(), Tag::T2);
                self.stats.record_hit();
                debug!("ARC HIT (T1 -> T2 promotion)");
                Some(payload)
            }
            Some(Tag::T2) => {
                self.t2.touch(key);
                let payload = self
                    .t2
                    .lookup(key)
                    .expect("directory says T2 but key missing from T2")
                    .payload
                    .clone();
                self.stats.record_hit();
                debug!("ARC HIT (T2)");
                Some(payload)
            }
            // Ghost hits are not fetches; they are only observed on Set.
            Some(Tag::B1) | Some(Tag::B2) | Some(Tag::None) | None => {
                self.stats.record_miss();
                debug!("ARC MISS");
                None
            }
        }
    }

    fn set(&mut self, key: K, value: V) -> bool {
        match self.directory.get(&key).copied() {
            Some(Tag::T1) => {
                // Case I: resident recency hit, promote to frequent.
                self.t1.remove(&key);
                self.t2.insert(key.clone(), Record::new(value, Tag::T2));
                self.directory.insert(key, Tag::T2);
            }
            Some(Tag::T2) => {
                // Case I: already frequent, overwrite in place.
                if let Some(slot) = self.t2.lookup_mut(&key) {
                    slot.payload = value;
                }
                self.t2.touch(&key);
            }
            Some(Tag::B1) => {
                // Case II: ghost-recency hit, adapt toward recency.
                let delta = (self.b2.len() / self.b1.len()).max(1);
                self.p = (self.p + delta).min(self.capacity);
                debug!(p = self.p, "ARC: B1 ghost hit, adapted p upward");
                if self.is_resident_full() {
                    self.replace(Tag::B1);
                }
                self.b1.remove(&key);
                self.directory.remove(&key);
                self.t2.insert(key.clone(), Record::new(value, Tag::T2));
                self.directory.insert(key, Tag::T2);
            }
            Some(Tag::B2) => {
                // Case III: ghost-frequency hit, adapt toward frequency.
                let delta = (self.b1.len() / self.b2.len()).max(1);
                self.p = self.p.saturating_sub(delta);
                debug!(p = self.p, "ARC: B2 ghost hit, adapted p downward");
                if self.is_resident_full() {
                    self.replace(Tag::B2);
                }
                self.b2.remove(&key);
                self.directory.remove(&key);
                self.t2.insert(key.clone(), Record::new(value, Tag::T2));
                self.directory.insert(key, Tag::T2);
            }
            Some(Tag::None) | None => {
                // Case IV: true miss, make room then insert into T1.
                self.make_room_for_miss();
                self.t1.insert(key.clone(), Record::new(value, Tag::T1));
                self.directory.insert(key, Tag::T1);
            }
        }
        true
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        match self.directory.get(key).copied() {
            Some(Tag::T1) => {
                let mut record = self
                    .t1
                    .remove(key)
                    .expect("directory says T1 but key missing from T1");
                let payload = record.payload.clone();
                record.tag = Tag::B1;
                self.directory.insert(key.clone(), Tag::B1);
                self.b1.insert(key.clone(), record);
                Some(payload)
            }
            Some(Tag::T2) => {
                let mut record = self
                    .t2
                    .remove(key)
                    .expect("directory says T2 but key missing from T2");
                let payload = record.payload.clone();
                record.tag = Tag::B2;
                self.directory.insert(key.clone(), Tag::B2);
                self.b2.insert(key.clone(), record);
                Some(payload)
            }
            // Already a ghost or absent: no payload to hand back.
            Some(Tag::B1) | Some(Tag::B2) | Some(Tag::None) | None => None,
        }
    }

    fn len(&self) -> usize {
        self.t1.len() + self.t2.len()
    }

    fn max_storage(&self) -> usize {
        self.capacity
    }

    fn remaining_storage(&self) -> usize {
        self.capacity - self.len()
    }

    fn stats(&self) -> CacheStats {
        self.stats
    }
}

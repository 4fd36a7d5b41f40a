//! Cache Store Module
//!
//! Main cache engine combining a hash index with the recency list: O(1)
//! get/put/remove, tail eviction at capacity, and the expiration sweep.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{CacheStats, Entry, RecencyList};
use crate::clock::{Clock, SystemClock};
use crate::error::{ConfigError, Result};

// == Cache Store ==
/// Single-threaded cache engine.
///
/// The store owns every entry outright; callers pass keys in and get cloned
/// values back. For shared access across threads wrap it in
/// [`Cache`](crate::Cache), which serializes all operations through one
/// lock.
///
/// Expiry is lazy: [`get`](CacheStore::get) never consults the clock for
/// removal, it returns whatever the index holds and re-arms it. Expired
/// entries leave the cache only through [`purge`](CacheStore::purge),
/// eviction, or an explicit remove.
pub struct CacheStore<K, V> {
    /// Key to arena-slot lookup
    index: HashMap<K, usize>,
    /// Entries ordered from most- to least-recently touched
    list: RecencyList<K, V>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
    /// TTL for entries inserted without one of their own
    default_ttl: Duration,
    /// Injected time source
    clock: Arc<dyn Clock>,
}

impl<K, V> fmt::Debug for CacheStore<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheStore")
            .field("capacity", &self.capacity)
            .field("len", &self.index.len())
            .field("default_ttl", &self.default_ttl)
            .finish()
    }
}

impl<K, V> CacheStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Constructors ==
    /// Creates a new CacheStore on the system clock.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries the cache can hold
    /// * `default_ttl` - TTL for entries inserted without one of their own
    pub fn new(capacity: usize, default_ttl: Duration) -> Result<Self> {
        Self::with_clock(capacity, default_ttl, Arc::new(SystemClock))
    }

    /// Creates a new CacheStore reading time from `clock`.
    pub fn with_clock(
        capacity: usize,
        default_ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if default_ttl.is_zero() {
            return Err(ConfigError::ZeroDefaultTtl);
        }

        Ok(Self {
            index: HashMap::with_capacity(capacity),
            list: RecencyList::with_capacity(capacity),
            stats: CacheStats::new(),
            capacity,
            default_ttl,
            clock,
        })
    }

    // == Put ==
    /// Stores a key-value pair with an optional per-entry TTL.
    ///
    /// An existing key keeps its slot: the value is replaced, the TTL
    /// override is replaced by `ttl` (so `None` clears a previous override
    /// back to the default), the expiry is re-armed from now, and the entry
    /// becomes the most recently touched. A new key at capacity first
    /// displaces the least recently touched entry. Never fails.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - Per-entry TTL, or `None` to expire on the cache default
    pub fn put(&mut self, key: K, value: V, ttl: Option<Duration>) {
        let now = self.clock.now();

        // Overwrite case: refresh in place and promote
        if let Some(&slot) = self.index.get(&key) {
            let entry = self.list.entry_mut(slot);
            entry.value = value;
            entry.ttl_override = ttl;
            entry.touch(now, self.default_ttl);
            self.list.move_to_head(slot);
            return;
        }

        // New key at capacity: make room from the tail first
        if self.index.len() >= self.capacity {
            if let Some(tail) = self.list.tail() {
                let evicted = self.list.remove(tail);
                self.index.remove(&evicted.key);
                self.stats.record_eviction();
            }
        }

        let entry = Entry::new(key.clone(), value, ttl, now, self.default_ttl);
        let slot = self.list.push_head(entry);
        self.index.insert(key, slot);
        self.stats.set_entries(self.index.len());
    }

    // == Get ==
    /// Retrieves a clone of the value for `key`, touching the entry.
    ///
    /// A hit re-arms the entry's expiry for one full TTL and makes it the
    /// most recently touched. Expiry is deliberately not checked here: an
    /// entry past its TTL that no sweep has reclaimed yet is still returned
    /// as a hit.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve
    pub fn get(&mut self, key: &K) -> Option<V> {
        match self.index.get(key) {
            Some(&slot) => {
                let now = self.clock.now();
                let entry = self.list.entry_mut(slot);
                entry.touch(now, self.default_ttl);
                let value = entry.value.clone();
                self.list.move_to_head(slot);
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Remove ==
    /// Deletes `key` if present.
    ///
    /// Returns whether an entry was actually removed; removing an absent
    /// key is a no-op.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.index.remove(key) {
            Some(slot) => {
                self.list.remove(slot);
                self.stats.set_entries(self.index.len());
                true
            }
            None => false,
        }
    }

    // == Purge ==
    /// Removes expired entries from the tail of the recency order inward,
    /// stopping at the first live entry.
    ///
    /// A touch re-arms the expiry while promoting the entry, so recency
    /// order matches expiry order as long as every entry runs on the
    /// default TTL. An entry with a shorter TTL override can expire while
    /// buried behind live entries; the sweep will not reach it until the
    /// entries behind it are gone. See the crate docs.
    ///
    /// Returns the number of entries removed.
    pub fn purge(&mut self) -> usize {
        let now = self.clock.now();
        let mut removed = 0;

        while let Some(tail) = self.list.tail() {
            if !self.list.entry(tail).is_expired_at(now) {
                break;
            }
            let entry = self.list.remove(tail);
            self.index.remove(&entry.key);
            removed += 1;
        }

        if removed > 0 {
            self.stats.record_expirations(removed);
            self.stats.set_entries(self.index.len());
        }
        removed
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    // == Capacity ==
    /// Returns the fixed capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_entries(self.index.len());
        stats
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    const TTL: Duration = Duration::from_secs(30);

    fn manual_store(
        capacity: usize,
    ) -> (Arc<ManualClock>, CacheStore<&'static str, &'static str>) {
        let clock = Arc::new(ManualClock::new());
        let store = CacheStore::with_clock(capacity, TTL, clock.clone()).unwrap();
        (clock, store)
    }

    #[test]
    fn test_store_new() {
        let store: CacheStore<String, String> = CacheStore::new(100, TTL).unwrap();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.capacity(), 100);
    }

    #[test]
    fn test_store_rejects_zero_capacity() {
        let result: Result<CacheStore<String, String>> = CacheStore::new(0, TTL);
        assert!(matches!(result, Err(ConfigError::ZeroCapacity)));
    }

    #[test]
    fn test_store_rejects_zero_default_ttl() {
        let result: Result<CacheStore<String, String>> = CacheStore::new(10, Duration::ZERO);
        assert!(matches!(result, Err(ConfigError::ZeroDefaultTtl)));
    }

    #[test]
    fn test_store_put_and_get() {
        let (_clock, mut store) = manual_store(100);

        store.put("key1", "value1", None);

        assert_eq!(store.get(&"key1"), Some("value1"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_missing_key() {
        let (_clock, mut store) = manual_store(100);

        assert_eq!(store.get(&"nope"), None);
        assert_eq!(store.stats().misses, 1);
    }

    #[test]
    fn test_store_overwrite() {
        let (_clock, mut store) = manual_store(100);

        store.put("key1", "value1", None);
        store.put("key1", "value2", None);

        assert_eq!(store.get(&"key1"), Some("value2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_overwrite_at_capacity_does_not_evict() {
        let (_clock, mut store) = manual_store(2);

        store.put("a", "1", None);
        store.put("b", "2", None);
        store.put("a", "1-again", None);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&"b"), Some("2"));
        assert_eq!(store.stats().evictions, 0);
    }

    #[test]
    fn test_store_remove() {
        let (_clock, mut store) = manual_store(100);

        store.put("key1", "value1", None);

        assert!(store.remove(&"key1"));
        assert!(store.is_empty());
        assert_eq!(store.get(&"key1"), None);
    }

    #[test]
    fn test_store_remove_missing_is_noop() {
        let (_clock, mut store) = manual_store(100);

        store.put("key1", "value1", None);

        assert!(!store.remove(&"other"));
        assert!(store.remove(&"key1"));
        assert!(!store.remove(&"key1"));
    }

    #[test]
    fn test_store_capacity_one_displaces_the_only_entry() {
        let (_clock, mut store) = manual_store(1);

        store.put("a", "1", None);
        store.put("b", "2", None);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&"a"), None);
        assert_eq!(store.get(&"b"), Some("2"));
        assert_eq!(store.stats().evictions, 1);
    }

    #[test]
    fn test_store_evicts_least_recent_at_capacity() {
        let (_clock, mut store) = manual_store(2);

        store.put("a", "1", None);
        store.put("b", "2", None);
        store.put("c", "3", None);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&"a"), None);
        assert_eq!(store.get(&"b"), Some("2"));
        assert_eq!(store.get(&"c"), Some("3"));
        assert_eq!(store.stats().evictions, 1);
    }

    #[test]
    fn test_store_get_refreshes_recency() {
        let (_clock, mut store) = manual_store(2);

        store.put("a", "1", None);
        store.put("b", "2", None);

        // Reading "a" makes "b" the eviction candidate
        assert_eq!(store.get(&"a"), Some("1"));
        store.put("c", "3", None);

        assert_eq!(store.get(&"b"), None);
        assert_eq!(store.get(&"a"), Some("1"));
        assert_eq!(store.get(&"c"), Some("3"));
    }

    #[test]
    fn test_store_put_refreshes_recency() {
        let (_clock, mut store) = manual_store(2);

        store.put("a", "1", None);
        store.put("b", "2", None);
        store.put("a", "1b", None);
        store.put("c", "3", None);

        assert_eq!(store.get(&"b"), None);
        assert_eq!(store.get(&"a"), Some("1b"));
    }

    #[test]
    fn test_store_purge_default_ttl_timeline() {
        let (clock, mut store) = manual_store(100);

        store.put("a", "1", None);

        assert_eq!(store.purge(), 0);
        assert_eq!(store.len(), 1);

        clock.advance(TTL);

        assert_eq!(store.purge(), 1);
        assert!(store.is_empty());

        // Purging an already empty store is a no-op.
        assert_eq!(store.purge(), 0);
    }

    #[test]
    fn test_store_purge_respects_longer_override() {
        let (clock, mut store) = manual_store(100);

        store.put("a", "1", None);
        store.put("b", "2", Some(Duration::from_secs(60)));

        clock.advance(TTL);
        assert_eq!(store.purge(), 1);
        assert_eq!(store.len(), 1);

        clock.advance(TTL);
        assert_eq!(store.purge(), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_short_override_expires_at_its_own_deadline() {
        let (clock, mut store) = manual_store(100);

        store.put("a", "1", Some(Duration::from_secs(10)));

        clock.advance(Duration::from_secs(9));
        assert_eq!(store.purge(), 0);

        // Boundary: expired exactly when the TTL has elapsed
        clock.advance(Duration::from_secs(1));
        assert_eq!(store.purge(), 1);
    }

    #[test]
    fn test_store_purge_stops_at_first_live_tail_entry() {
        let (clock, mut store) = manual_store(100);

        // "a" (default TTL) sits at the tail behind "b" (1s override)
        store.put("a", "1", None);
        store.put("b", "2", Some(Duration::from_secs(1)));

        clock.advance(Duration::from_secs(2));

        // "b" is expired but buried behind the live tail entry
        assert_eq!(store.purge(), 0);
        assert_eq!(store.len(), 2);

        // Once "a" expires too, the sweep reaches both
        clock.advance(Duration::from_secs(28));
        assert_eq!(store.purge(), 2);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_get_returns_expired_entry_before_purge() {
        let (clock, mut store) = manual_store(100);

        store.put("a", "1", None);
        clock.advance(TTL + Duration::from_secs(10));

        // Lazy expiry: still a hit, and the touch re-arms the full TTL
        assert_eq!(store.get(&"a"), Some("1"));
        assert_eq!(store.stats().hits, 1);

        clock.advance(TTL - Duration::from_secs(1));
        assert_eq!(store.purge(), 0);

        clock.advance(Duration::from_secs(1));
        assert_eq!(store.purge(), 1);
    }

    #[test]
    fn test_store_get_within_ttl_postpones_expiry() {
        let (clock, mut store) = manual_store(100);

        store.put("a", "1", None);

        clock.advance(Duration::from_secs(20));
        assert_eq!(store.get(&"a"), Some("1"));

        // 40s after insert but only 20s after the touch
        clock.advance(Duration::from_secs(20));
        assert_eq!(store.purge(), 0);

        clock.advance(Duration::from_secs(10));
        assert_eq!(store.purge(), 1);
    }

    #[test]
    fn test_store_put_none_clears_ttl_override() {
        let (clock, mut store) = manual_store(100);

        store.put("a", "1", Some(Duration::from_secs(5)));
        store.put("a", "2", None);

        // Back on the default TTL: survives past the old override
        clock.advance(Duration::from_secs(10));
        assert_eq!(store.purge(), 0);
        assert_eq!(store.len(), 1);

        clock.advance(Duration::from_secs(20));
        assert_eq!(store.purge(), 1);
    }

    #[test]
    fn test_store_stats_tracking() {
        let (clock, mut store) = manual_store(2);

        store.put("a", "1", None);
        store.put("b", "2", None);
        store.put("c", "3", None); // evicts "a"

        assert_eq!(store.get(&"b"), Some("2")); // hit
        assert_eq!(store.get(&"a"), None); // miss

        clock.advance(TTL);
        let purged = store.purge();
        assert_eq!(purged, 2);

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.expirations, 2);
        assert_eq!(stats.entries, 0);
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[test]
    fn test_store_len_bounded_under_churn() {
        let (_clock, mut store) = manual_store(2);

        for (i, key) in ["a", "b", "c", "d", "e", "f"].into_iter().enumerate() {
            store.put(key, "v", None);
            assert!(store.len() <= 2, "len exceeded capacity after put {}", i);
        }

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&"f"), Some("v"));
        assert_eq!(store.get(&"e"), Some("v"));
        assert_eq!(store.stats().evictions, 4);
    }
}

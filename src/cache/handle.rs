//! Cache Handle Module
//!
//! Thread-safe, clonable wrapper around the store. The hash index and the
//! recency list form one composite structure, so every operation takes a
//! single cache-wide lock that covers both.

use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::cache::{CacheStats, CacheStore};
use crate::clock::Clock;
use crate::config::CacheConfig;
use crate::error::Result;

// == Cache ==
/// Shared handle to a cache.
///
/// Cloning is cheap and every clone addresses the same store, so a handle
/// can be passed to worker threads and to the background
/// [`Sweeper`](crate::Sweeper). All operations serialize through one mutex;
/// that includes `get`, whose recency touch is a write.
///
/// Expiry is lazy, see [`Cache::get`].
///
/// # Example
/// ```
/// use mini_cache::{Cache, CacheConfig};
///
/// let cache: Cache<String, String> = Cache::new(CacheConfig::new(128)).unwrap();
/// cache.put("a".into(), "1".into(), None);
/// assert_eq!(cache.get(&"a".into()), Some("1".into()));
/// ```
pub struct Cache<K, V> {
    inner: Arc<Mutex<CacheStore<K, V>>>,
}

impl<K, V> Clone for Cache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Constructors ==
    /// Creates a cache on the system clock.
    ///
    /// Fails if the config names a zero capacity, TTL, or purge interval.
    pub fn new(config: CacheConfig) -> Result<Self> {
        config.validate()?;
        let store = CacheStore::new(config.capacity, config.default_ttl)?;
        Ok(Self {
            inner: Arc::new(Mutex::new(store)),
        })
    }

    /// Creates a cache reading time from `clock`. Lets tests drive expiry
    /// through a [`ManualClock`](crate::ManualClock).
    pub fn with_clock(config: CacheConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        config.validate()?;
        let store = CacheStore::with_clock(config.capacity, config.default_ttl, clock)?;
        Ok(Self {
            inner: Arc::new(Mutex::new(store)),
        })
    }

    /// Locks the store. Poison is absorbed: the store never unwinds while
    /// mutating, so a poisoned lock still guards a consistent structure.
    fn lock(&self) -> MutexGuard<'_, CacheStore<K, V>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // == Put ==
    /// Stores a key-value pair with an optional per-entry TTL.
    ///
    /// See [`CacheStore::put`] for overwrite and eviction semantics.
    pub fn put(&self, key: K, value: V, ttl: Option<Duration>) {
        self.lock().put(key, value, ttl);
    }

    // == Get ==
    /// Retrieves a clone of the value for `key`, touching the entry.
    ///
    /// Lazy expiry: an entry past its TTL that no sweep has reclaimed yet
    /// is still returned, and the touch re-arms it for one full TTL.
    /// Callers that cannot tolerate stale reads should purge aggressively,
    /// either directly or through a short [`Sweeper`](crate::Sweeper)
    /// interval.
    pub fn get(&self, key: &K) -> Option<V> {
        self.lock().get(key)
    }

    // == Remove ==
    /// Deletes `key`, reporting whether an entry was actually removed.
    pub fn remove(&self, key: &K) -> bool {
        self.lock().remove(key)
    }

    // == Purge ==
    /// Sweeps expired entries from the least-recently-touched end.
    ///
    /// Returns the number of entries removed.
    pub fn purge(&self) -> usize {
        self.lock().purge()
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // == Capacity ==
    /// Returns the fixed capacity.
    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.lock().stats()
    }
}

//! Cache Entry Module
//!
//! Defines the record stored per key, including its links in the recency
//! list. Entries never leave the cache; callers only see cloned values.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached record.
///
/// `prev`/`next` are slot indices into the recency arena and belong to
/// [`RecencyList`](crate::cache::RecencyList); everything else belongs to
/// the store. Time is always passed in, never read from a global clock.
#[derive(Debug)]
pub(crate) struct Entry<K, V> {
    /// The key, kept here so tail eviction can clean up the index
    pub(crate) key: K,
    /// The stored value
    pub(crate) value: V,
    /// Per-entry TTL; `None` falls back to the cache default
    pub(crate) ttl_override: Option<Duration>,
    /// Absolute expiry instant, re-armed on every touch
    pub(crate) expires_at: Instant,
    /// Neighbor towards the head (more recently touched)
    pub(crate) prev: Option<usize>,
    /// Neighbor towards the tail (less recently touched)
    pub(crate) next: Option<usize>,
}

impl<K, V> Entry<K, V> {
    // == Constructor ==
    /// Creates an unlinked entry with its expiry armed from `now`.
    ///
    /// # Arguments
    /// * `ttl_override` - Per-entry TTL, or `None` to use `default_ttl`
    /// * `now` - The instant the insertion happens
    /// * `default_ttl` - The cache-wide TTL fallback
    pub(crate) fn new(
        key: K,
        value: V,
        ttl_override: Option<Duration>,
        now: Instant,
        default_ttl: Duration,
    ) -> Self {
        Self {
            key,
            value,
            ttl_override,
            expires_at: now + ttl_override.unwrap_or(default_ttl),
            prev: None,
            next: None,
        }
    }

    // == Touch ==
    /// Re-arms the expiry from `now` for one full TTL.
    ///
    /// The entry's own TTL wins when it has one; otherwise the cache
    /// default applies.
    pub(crate) fn touch(&mut self, now: Instant, default_ttl: Duration) {
        self.expires_at = now + self.ttl_override.unwrap_or(default_ttl);
    }

    // == Is Expired At ==
    /// Boundary condition: an entry is expired once `now` has reached its
    /// expiry instant, so a TTL that has fully elapsed counts as expired.
    pub(crate) fn is_expired_at(&self, now: Instant) -> bool {
        self.expires_at <= now
    }
}

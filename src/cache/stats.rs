//! Cache Statistics Module
//!
//! Tracks cache effectiveness: hits, misses, capacity evictions, and
//! entries reclaimed by expiration sweeps.

use serde::Serialize;

// == Cache Stats ==
/// Counters describing cache behavior.
///
/// A hit is any lookup that returned a value, including one whose TTL has
/// elapsed but that no sweep has reclaimed yet. Evictions and expirations
/// are counted separately: the former make room at capacity, the latter
/// come out of purge cycles.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of lookups that returned a value
    pub hits: u64,
    /// Number of lookups that found nothing
    pub misses: u64,
    /// Number of entries displaced from the tail to make room
    pub evictions: u64,
    /// Number of entries reclaimed by expiration sweeps
    pub expirations: u64,
    /// Current number of entries in the cache
    pub entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Record Expirations ==
    /// Adds one purge cycle's removals to the expiration counter.
    pub(crate) fn record_expirations(&mut self, count: usize) {
        self.expirations += count as u64;
    }

    // == Update Entry Count ==
    /// Updates the current entry count.
    pub(crate) fn set_entries(&mut self, count: usize) {
        self.entries = count;
    }
}

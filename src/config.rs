//! Configuration Module
//!
//! Construction parameters for the cache and the background sweeper.

use std::time::Duration;

use crate::error::{ConfigError, Result};

// == Cache Config ==
/// Cache construction parameters.
///
/// Capacity is always explicit. The TTL and purge interval start from the
/// crate defaults (30 seconds and 5 seconds) and can be overridden with the
/// builder-style setters.
///
/// # Example
/// ```
/// use mini_cache::CacheConfig;
/// use std::time::Duration;
///
/// let config = CacheConfig::new(1024)
///     .with_default_ttl(Duration::from_secs(60))
///     .with_purge_interval(Duration::from_secs(1));
/// ```
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// TTL applied to entries inserted without an explicit TTL
    pub default_ttl: Duration,
    /// Interval between background purge cycles
    pub purge_interval: Duration,
}

impl CacheConfig {
    /// TTL used when none is configured (30 seconds).
    pub const DEFAULT_TTL: Duration = Duration::from_secs(30);

    /// Purge interval used when none is configured (5 seconds).
    pub const DEFAULT_PURGE_INTERVAL: Duration = Duration::from_secs(5);

    /// Creates a config with the given capacity and the default timings.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            default_ttl: Self::DEFAULT_TTL,
            purge_interval: Self::DEFAULT_PURGE_INTERVAL,
        }
    }

    /// Sets the TTL applied to entries inserted without one of their own.
    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }

    /// Sets the interval between background purge cycles.
    pub fn with_purge_interval(mut self, interval: Duration) -> Self {
        self.purge_interval = interval;
        self
    }

    /// Rejects parameter combinations the cache cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.default_ttl.is_zero() {
            return Err(ConfigError::ZeroDefaultTtl);
        }
        if self.purge_interval.is_zero() {
            return Err(ConfigError::ZeroPurgeInterval);
        }
        Ok(())
    }
}

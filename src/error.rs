//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Config Error Enum ==
/// Errors raised when building a cache or a sweeper.
///
/// Steady-state operations never fail: `put` always succeeds by evicting,
/// `get`/`remove` report absence through their return values. The only
/// failures in this crate are invalid parameters, rejected synchronously
/// at construction.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Capacity must admit at least one entry
    #[error("capacity must be at least 1")]
    ZeroCapacity,

    /// Entries would be born expired
    #[error("default TTL must be non-zero")]
    ZeroDefaultTtl,

    /// The sweeper would spin without ever sleeping
    #[error("purge interval must be non-zero")]
    ZeroPurgeInterval,

    /// The sweeper task needs a Tokio runtime to run on
    #[error("no tokio runtime available to spawn the sweeper task")]
    MissingRuntime,
}

// == Result Type Alias ==
/// Convenience Result type for cache construction.
pub type Result<T> = std::result::Result<T, ConfigError>;

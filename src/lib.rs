//! Mini Cache - a lightweight in-process cache
//!
//! Fixed-capacity key-value cache that expires entries by TTL and evicts by
//! least-recent-use, with an optional background sweeper. No network, no
//! persistence: a bounded, self-cleaning layer in front of slow lookups.
//!
//! # Quick start
//! ```
//! use mini_cache::{Cache, CacheConfig};
//! use std::time::Duration;
//!
//! let config = CacheConfig::new(1024)
//!     .with_default_ttl(Duration::from_secs(60));
//! let cache: Cache<String, u32> = Cache::new(config).unwrap();
//!
//! cache.put("answer".to_string(), 42, None);
//! assert_eq!(cache.get(&"answer".to_string()), Some(42));
//! ```
//!
//! To reclaim expired entries without caller activity, hand a clone of the
//! handle to a [`Sweeper`]:
//! ```no_run
//! use mini_cache::{Cache, CacheConfig, Sweeper};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = CacheConfig::new(1024);
//!     let cache: Cache<String, String> = Cache::new(config.clone()).unwrap();
//!     let mut sweeper = Sweeper::spawn(cache.clone(), config.purge_interval).unwrap();
//!
//!     // ... use the cache from any thread ...
//!
//!     sweeper.stop().await;
//! }
//! ```
//!
//! # Expiry is lazy
//! `get` never checks the clock. An entry past its TTL is still returned as
//! a hit until a purge reclaims it, and every hit re-arms the entry for one
//! full TTL. Callers that cannot tolerate stale reads should run the
//! sweeper on a short interval or call [`Cache::purge`] themselves.
//!
//! # Mixed TTLs and the sweep
//! The sweep walks from the least-recently-touched end and stops at the
//! first live entry. With a uniform TTL that is exact: recency order and
//! expiry order coincide. An entry given a shorter TTL override can expire
//! while buried behind live entries and will stay resident until the sweep
//! reaches it. It still counts toward capacity in the meantime.

pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{Cache, CacheStats, CacheStore};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::CacheConfig;
pub use error::{ConfigError, Result};
pub use tasks::Sweeper;

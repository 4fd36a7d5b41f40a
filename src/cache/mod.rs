//! Cache Module
//!
//! The cache engine: per-key entries, the recency-ordered arena, the
//! single-threaded store, and the thread-safe handle around it.

mod entry;
mod handle;
mod list;
mod stats;
mod store;


pub(crate) use entry::Entry;
pub(crate) use list::RecencyList;

// Re-export public types
pub use handle::Cache;
pub use stats::CacheStats;
pub use store::CacheStore;

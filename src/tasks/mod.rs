//! Background Tasks Module
//!
//! Recurring work that runs alongside the cache.
//!
//! # Tasks
//! - Sweeper: drives the expiration sweep at a configured interval

mod sweeper;

pub use sweeper::Sweeper;

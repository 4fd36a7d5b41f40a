//! Background Sweeper Task
//!
//! Recurring task that drives the cache's expiration sweep so expired
//! entries get reclaimed even when no caller touches the cache.

use std::hash::Hash;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::Cache;
use crate::error::{ConfigError, Result};

// == Sweeper ==
/// Owns the recurring purge task for one cache.
///
/// Each cycle sleeps for the full interval, runs one purge to completion,
/// then sleeps again; cycles never overlap. The task holds its own clone of
/// the cache handle and takes the cache lock only for the duration of the
/// purge itself.
///
/// Shutdown is deterministic: [`stop`](Sweeper::stop) signals the task and
/// waits for it to finish, so no purge cycle starts after `stop` returns
/// and an in-flight cycle completes before it does. Dropping an un-stopped
/// `Sweeper` aborts the task instead, so the recurring work never outlives
/// its owner.
pub struct Sweeper {
    shutdown_tx: watch::Sender<bool>,
    handle: Option<JoinHandle<()>>,
}

impl Sweeper {
    // == Spawn ==
    /// Starts sweeping `cache` every `interval`.
    ///
    /// # Arguments
    /// * `cache` - Handle clone the task will purge through
    /// * `interval` - Time between the end of one purge and the next
    ///
    /// # Returns
    /// The sweeper, or an error when `interval` is zero or no Tokio runtime
    /// is available to host the task.
    ///
    /// # Example
    /// ```ignore
    /// let cache: Cache<String, String> = Cache::new(config.clone())?;
    /// let mut sweeper = Sweeper::spawn(cache.clone(), config.purge_interval)?;
    /// // Later, during shutdown:
    /// sweeper.stop().await;
    /// ```
    pub fn spawn<K, V>(cache: Cache<K, V>, interval: Duration) -> Result<Self>
    where
        K: Eq + Hash + Clone + Send + 'static,
        V: Clone + Send + 'static,
    {
        if interval.is_zero() {
            return Err(ConfigError::ZeroPurgeInterval);
        }
        if tokio::runtime::Handle::try_current().is_err() {
            return Err(ConfigError::MissingRuntime);
        }

        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            info!(interval_ms = interval.as_millis() as u64, "sweeper started");

            loop {
                tokio::select! {
                    _ = tokio::time::sleep(interval) => {
                        // A tick that loses the race with stop() must not sweep
                        if *shutdown_rx.borrow() {
                            break;
                        }

                        let removed = cache.purge();
                        if removed > 0 {
                            info!(removed, "sweep removed expired entries");
                        } else {
                            debug!("sweep found no expired entries");
                        }
                    }
                    _ = shutdown_rx.changed() => {
                        if *shutdown_rx.borrow() {
                            break;
                        }
                    }
                }
            }

            info!("sweeper stopped");
        });

        Ok(Self {
            shutdown_tx,
            handle: Some(handle),
        })
    }

    // == Stop ==
    /// Stops the recurring sweep and waits for the task to finish.
    ///
    /// Idempotent: calling it on an already stopped sweeper is a no-op.
    /// Once it returns, no further purge cycle will run.
    pub async fn stop(&mut self) {
        let _ = self.shutdown_tx.send(true);
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }

    // == Is Stopped ==
    /// Returns true once the background task has finished.
    pub fn is_stopped(&self) -> bool {
        match &self.handle {
            Some(handle) => handle.is_finished(),
            None => true,
        }
    }
}

impl Drop for Sweeper {
    fn drop(&mut self) {
        // Cancellation lands at an await point, never inside a purge, so
        // the cache lock is not held when the task dies.
        if let Some(handle) = self.handle.take() {
            let _ = self.shutdown_tx.send(true);
            handle.abort();
        }
    }
}

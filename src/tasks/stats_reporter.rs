//! Cache Stats Reporter
//!
//! Background task that periodically logs response cache statistics.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::client::DogApiClient;

/// Spawns a background task that reports cache statistics on an interval.
///
/// Reports at `info` when the entry count changed since the previous tick
/// and at `debug` otherwise.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let client = Arc::new(DogApiClient::new(&config)?);
/// let reporter = spawn_stats_reporter(client.clone(), 5);
/// // Later, during shutdown:
/// reporter.abort();
/// ```
pub fn spawn_stats_reporter(client: Arc<DogApiClient>, interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting cache stats reporter with interval of {} seconds",
            interval.as_secs()
        );

        let mut last_size = None;

        loop {
            tokio::time::sleep(interval).await;

            let stats = client.cache_stats().await;

            if last_size != Some(stats.size) {
                info!(
                    size = stats.size,
                    hits = stats.hits,
                    misses = stats.misses,
                    hit_rate = stats.hit_rate(),
                    keys = ?stats.keys,
                    "Cache stats"
                );
            } else {
                debug!(size = stats.size, hits = stats.hits, misses = stats.misses, "Cache stats unchanged");
            }

            last_size = Some(stats.size);
        }
    })
}

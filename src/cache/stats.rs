//! Cache Statistics Module
//!
//! Snapshot of cache contents plus lifetime hit/miss counters.

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time view of the cache for operational visibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Number of stored entries, valid or stale
    pub size: usize,
    /// Stored keys in first-insertion order
    pub keys: Vec<String>,
    /// Reads that returned a valid entry
    pub hits: u64,
    /// Reads that found nothing or a stale entry
    pub misses: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates an empty snapshot with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no reads have been made.
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
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }
}

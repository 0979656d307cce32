//! Cache Store Module
//!
//! In-memory response cache keyed by request URL, with per-category max age.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::entry::current_timestamp_ms;
use super::key_order::KeyOrder;
use crate::cache::{CacheCategory, CacheEntry, CacheStats, KEY_PREFIX};

// == Compute Key ==
/// Derives the cache key for a request URL.
pub fn compute_key(request_url: &str) -> String {
    format!("{}{}", KEY_PREFIX, request_url)
}

// == Cache Store ==
/// Response cache. Validity is decided at read time; nothing is evicted.
#[derive(Debug)]
pub struct CacheStore<T> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<T>>,
    /// First-insertion order of keys
    order: KeyOrder,
    /// Hit/miss counters
    stats: CacheStats,
}

impl<T: Clone> Default for CacheStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> CacheStore<T> {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: KeyOrder::new(),
            stats: CacheStats::new(),
        }
    }

    // == Is Valid ==
    /// Returns true if `key` has an entry younger than `category`'s max age.
    pub fn is_valid(&self, key: &str, category: CacheCategory) -> bool {
        self.is_valid_at(key, category, current_timestamp_ms())
    }

    /// Same as [`is_valid`](Self::is_valid) with an explicit clock.
    pub fn is_valid_at(&self, key: &str, category: CacheCategory, now: u64) -> bool {
        self.entries
            .get(key)
            .map(|entry| entry.is_fresh_at(category, now))
            .unwrap_or(false)
    }

    // == Get ==
    /// Returns a copy of the cached data if it is still valid.
    ///
    /// Stale entries read as absent but stay in storage.
    pub fn get(&mut self, key: &str, category: CacheCategory) -> Option<T> {
        self.get_at(key, category, current_timestamp_ms())
    }

    /// Same as [`get`](Self::get) with an explicit clock.
    pub fn get_at(&mut self, key: &str, category: CacheCategory, now: u64) -> Option<T> {
        match self.entries.get(key) {
            Some(entry) if entry.is_fresh_at(category, now) => {
                self.stats.record_hit();
                debug!(key, category = category.as_str(), "Cache hit");
                Some(entry.data.clone())
            }
            Some(entry) => {
                self.stats.record_miss();
                debug!(
                    key,
                    category = category.as_str(),
                    age_ms = entry.age_ms_at(now),
                    "Cache entry stale"
                );
                None
            }
            None => {
                self.stats.record_miss();
                debug!(key, category = category.as_str(), "Cache miss");
                None
            }
        }
    }

    // == Set ==
    /// Inserts or replaces the entry for `key`, stamped with the current time.
    pub fn set(&mut self, key: &str, data: T, category: CacheCategory) {
        self.set_at(key, data, category, current_timestamp_ms());
    }

    /// Inserts or replaces the entry for `key` with an explicit timestamp.
    pub fn set_at(&mut self, key: &str, data: T, category: CacheCategory, timestamp: u64) {
        self.entries.insert(
            key.to_string(),
            CacheEntry::with_timestamp(data, category, timestamp),
        );
        self.order.record(key);
    }

    // == Clear ==
    /// Removes every entry. Hit/miss counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    // == Stats ==
    /// Returns entry count, keys and counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.entries.len(),
            keys: self.order.keys(),
            ..self.stats.clone()
        }
    }

    // == Length ==
    /// Returns the current number of entries, valid or stale.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

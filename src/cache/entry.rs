//! Cache Entry Module
//!
//! Defines cache categories and the structure of individual cache entries.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

/// Max age for the breed list (5 minutes)
pub const BREEDS_MAX_AGE_MS: u64 = 5 * 60 * 1000;

/// Max age for image lists (10 minutes)
pub const IMAGES_MAX_AGE_MS: u64 = 10 * 60 * 1000;

// == Cache Category ==
/// Cache partition that decides how long an entry stays valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheCategory {
    Breeds,
    Images,
}

impl CacheCategory {
    /// Maximum age in milliseconds before an entry of this category is stale.
    pub fn max_age_ms(self) -> u64 {
        match self {
            CacheCategory::Breeds => BREEDS_MAX_AGE_MS,
            CacheCategory::Images => IMAGES_MAX_AGE_MS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CacheCategory::Breeds => "breeds",
            CacheCategory::Images => "images",
        }
    }
}

// == Cache Entry ==
/// A cached payload with the time it was fetched.
///
/// Entries are replaced whole on re-fetch and never modified in place.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The cached payload
    pub data: T,
    /// Write timestamp (Unix milliseconds)
    pub timestamp: u64,
    /// Category the entry was written under
    pub category: CacheCategory,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(data: T, category: CacheCategory) -> Self {
        Self::with_timestamp(data, category, current_timestamp_ms())
    }

    /// Creates a new entry with an explicit timestamp.
    pub fn with_timestamp(data: T, category: CacheCategory, timestamp: u64) -> Self {
        Self {
            data,
            timestamp,
            category,
        }
    }

    // == Is Fresh ==
    /// Checks the entry's age at `now` against `category`'s max age.
    ///
    /// Boundary condition: an entry whose age equals the max age is stale.
    /// A timestamp in the future counts as age zero.
    pub fn is_fresh_at(&self, category: CacheCategory, now: u64) -> bool {
        now.saturating_sub(self.timestamp) < category.max_age_ms()
    }

    /// Age of the entry in milliseconds at `now`.
    pub fn age_ms_at(&self, now: u64) -> u64 {
        now.saturating_sub(self.timestamp)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

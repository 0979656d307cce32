//! Cache Module
//!
//! Provides the in-memory response cache with per-category max age.

mod entry;
mod key_order;
mod stats;
mod store;


// Re-export public types
pub use entry::{
    current_timestamp_ms, CacheCategory, CacheEntry, BREEDS_MAX_AGE_MS, IMAGES_MAX_AGE_MS,
};
pub use stats::CacheStats;
pub use store::{compute_key, CacheStore};

// == Public Constants ==
/// Prefix prepended to request URLs to form cache keys
pub const KEY_PREFIX: &str = "api_";

//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::retry::{DEFAULT_BASE_DELAY_MS, DEFAULT_MAX_ATTEMPTS, DEFAULT_RATE_LIMIT_DELAY_MS};

/// Public Dog CEO API root
pub const DEFAULT_BASE_URL: &str = "https://dog.ceo/api";

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root URL of the upstream Dog API
    pub api_base_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// Interval in seconds between cache stats reports
    pub stats_interval: u64,
    /// Total attempts per upstream request
    pub retry_attempts: u32,
    /// Exponential backoff base in milliseconds
    pub retry_base_delay_ms: u64,
    /// Wait after a rate-limited response in milliseconds
    pub rate_limit_delay_ms: u64,
    /// Per-request HTTP timeout in seconds
    pub http_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DOG_API_BASE_URL` - Upstream API root (default: https://dog.ceo/api)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `STATS_INTERVAL` - Stats report frequency in seconds (default: 5)
    /// - `RETRY_ATTEMPTS` - Attempts per request (default: 3)
    /// - `RETRY_BASE_DELAY_MS` - Backoff base (default: 1000)
    /// - `RATE_LIMIT_DELAY_MS` - Rate-limit wait (default: 5000)
    /// - `HTTP_TIMEOUT` - Request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: env::var("DOG_API_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            stats_interval: env_or("STATS_INTERVAL", defaults.stats_interval),
            retry_attempts: env_or("RETRY_ATTEMPTS", defaults.retry_attempts),
            retry_base_delay_ms: env_or("RETRY_BASE_DELAY_MS", defaults.retry_base_delay_ms),
            rate_limit_delay_ms: env_or("RATE_LIMIT_DELAY_MS", defaults.rate_limit_delay_ms),
            http_timeout: env_or("HTTP_TIMEOUT", defaults.http_timeout),
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            server_port: 3000,
            stats_interval: 5,
            retry_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_base_delay_ms: DEFAULT_BASE_DELAY_MS,
            rate_limit_delay_ms: DEFAULT_RATE_LIMIT_DELAY_MS,
            http_timeout: 30,
        }
    }
}

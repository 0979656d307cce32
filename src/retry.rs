//! Retrying Fetcher
//!
//! Wraps a single fallible async operation with bounded exponential backoff
//! and a fixed, longer delay for rate-limit responses.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tracing::{error, warn};

use crate::config::Config;

// == Defaults ==
/// Total number of attempts, including the first one
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Base delay for exponential backoff in milliseconds
pub const DEFAULT_BASE_DELAY_MS: u64 = 1000;

/// Delay before retrying a rate-limited request in milliseconds
pub const DEFAULT_RATE_LIMIT_DELAY_MS: u64 = 5000;

/// HTTP status that marks a rate-limited response
const TOO_MANY_REQUESTS: u16 = 429;

// == Retryable Error ==
/// Failure that the retry loop knows how to classify.
pub trait RetryableError: Display {
    /// HTTP status carried by the failure, if any.
    fn status_code(&self) -> Option<u16>;

    /// Whether the failure should be treated as a rate-limit condition.
    fn is_rate_limited(&self) -> bool {
        self.status_code() == Some(TOO_MANY_REQUESTS) || self.to_string().contains("rate limit")
    }
}

// == Retry Policy ==
/// Bounded retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum attempts in total
    pub max_attempts: u32,
    /// Backoff base; attempt `n` waits `base_delay * 2^(n-1)`
    pub base_delay: Duration,
    /// Fixed wait after a rate-limited attempt
    pub rate_limit_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: Duration::from_millis(DEFAULT_BASE_DELAY_MS),
            rate_limit_delay: Duration::from_millis(DEFAULT_RATE_LIMIT_DELAY_MS),
        }
    }
}

impl RetryPolicy {
    /// Creates a policy with explicit limits.
    pub fn new(max_attempts: u32, base_delay: Duration, rate_limit_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
            rate_limit_delay,
        }
    }

    /// Builds the policy from service configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.retry_attempts,
            Duration::from_millis(config.retry_base_delay_ms),
            Duration::from_millis(config.rate_limit_delay_ms),
        )
    }

    // == Delay For ==
    /// Returns how long to wait after `attempt` (1-based) failed with `err`.
    pub fn delay_for<E: RetryableError>(&self, attempt: u32, err: &E) -> Duration {
        if err.is_rate_limited() {
            self.rate_limit_delay
        } else {
            2u32.checked_pow(attempt.saturating_sub(1))
                .and_then(|factor| self.base_delay.checked_mul(factor))
                .unwrap_or(Duration::MAX)
        }
    }

    // == Execute ==
    /// Runs `operation` until it succeeds or the attempt budget is spent.
    ///
    /// The last error is returned unchanged once all attempts have failed.
    pub async fn execute<T, E, F, Fut>(&self, mut operation: F) -> Result<T, E>
    where
        E: RetryableError,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut attempt = 1;

        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(err) if attempt >= self.max_attempts => {
                    error!(attempt, error = %err, "Giving up after final attempt");
                    return Err(err);
                }
                Err(err) => {
                    let delay = self.delay_for(attempt, &err);
                    if err.is_rate_limited() {
                        warn!(
                            attempt,
                            delay_ms = delay.as_millis() as u64,
                            "Rate limited, waiting before retry"
                        );
                    } else {
                        warn!(
                            attempt,
                            delay_ms = delay.as_millis() as u64,
                            error = %err,
                            "Request failed, retrying after backoff"
                        );
                    }
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

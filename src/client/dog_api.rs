//! Dog API client
//!
//! Facade over the two Dog API endpoints. Consults the response cache first
//! and falls back to a retrying fetch on a miss.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use super::breeds::{flatten_breeds, wire_path};
use super::types::{ApiResponse, BreedMap, EndpointResult};
use crate::cache::{compute_key, CacheCategory, CacheStats, CacheStore};
use crate::config::{Config, DEFAULT_BASE_URL};
use crate::error::{ApiError, Result};
use crate::retry::RetryPolicy;

/// Number of images requested per breed
pub const IMAGES_PER_REQUEST: u32 = 3;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Caching, retrying client for the Dog API.
///
/// Construct one per application and share it behind an `Arc`.
#[derive(Debug)]
pub struct DogApiClient {
    http: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
    cache: RwLock<CacheStore<Vec<String>>>,
}

impl DogApiClient {
    /// Create a client from service configuration
    pub fn new(config: &Config) -> Result<Self> {
        let http = build_http(Duration::from_secs(config.http_timeout))?;
        Ok(Self::with_client(
            http,
            config.api_base_url.clone(),
            RetryPolicy::from_config(config),
        ))
    }

    /// Create a client for a custom API root
    pub fn with_base_url(base_url: impl Into<String>, retry: RetryPolicy) -> Result<Self> {
        let http = build_http(Duration::from_secs(DEFAULT_TIMEOUT_SECS))?;
        Ok(Self::with_client(http, base_url, retry))
    }

    /// Create a client around an existing HTTP client
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>, retry: RetryPolicy) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            retry,
            cache: RwLock::new(CacheStore::new()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// URL of the list-all-breeds endpoint
    pub fn breeds_url(&self) -> String {
        format!("{}/breeds/list/all", self.base_url)
    }

    /// URL of the random-images endpoint for a flattened breed name
    pub fn images_url(&self, breed: &str) -> String {
        format!(
            "{}/breed/{}/images/random/{}",
            self.base_url,
            wire_path(breed),
            IMAGES_PER_REQUEST
        )
    }

    // == Get Breeds ==
    /// Returns every breed, each followed by its sub-breeds in flattened form.
    pub async fn get_breeds(&self) -> Result<Vec<String>> {
        let url = self.breeds_url();
        let key = compute_key(&url);

        if let Some(cached) = self.cache.write().await.get(&key, CacheCategory::Breeds) {
            return Ok(cached);
        }

        info!("Fetching breeds from API");
        let response: ApiResponse<BreedMap> = self.fetch_json(&url).await.map_err(|err| {
            error!(error = %err, "Error fetching breeds");
            err
        })?;

        let breeds = match response.into_result() {
            EndpointResult::Success(Some(map)) => flatten_breeds(&map)?,
            EndpointResult::Success(None) => {
                return Err(ApiError::Malformed("breed list is not a map".to_string()))
            }
            EndpointResult::Failure(message) => {
                return Err(ApiError::Upstream(
                    message.unwrap_or_else(|| "Failed to fetch breeds".to_string()),
                ))
            }
        };

        self.cache
            .write()
            .await
            .set(&key, breeds.clone(), CacheCategory::Breeds);
        info!(count = breeds.len(), "Loaded breeds");

        Ok(breeds)
    }

    // == Get Images ==
    /// Returns random image URLs for a breed in flattened form.
    ///
    /// Failures name the breed alongside the underlying cause.
    pub async fn get_images(&self, breed: &str) -> Result<Vec<String>> {
        self.fetch_images(breed).await.map_err(|source| {
            error!(breed, error = %source, "Error fetching images");
            ApiError::BreedImages {
                breed: breed.to_string(),
                source: Box::new(source),
            }
        })
    }

    async fn fetch_images(&self, breed: &str) -> Result<Vec<String>> {
        let url = self.images_url(breed);
        let key = compute_key(&url);

        if let Some(cached) = self.cache.write().await.get(&key, CacheCategory::Images) {
            return Ok(cached);
        }

        info!(breed, "Fetching images from API");
        let response: ApiResponse<Vec<String>> = self.fetch_json(&url).await?;

        let images = match response.into_result() {
            EndpointResult::Success(Some(images)) => images,
            EndpointResult::Success(None) => {
                return Err(ApiError::Malformed("image list is not a list".to_string()))
            }
            EndpointResult::Failure(message) => {
                return Err(ApiError::Upstream(
                    message.unwrap_or_else(|| "Failed to fetch images".to_string()),
                ))
            }
        };

        self.cache
            .write()
            .await
            .set(&key, images.clone(), CacheCategory::Images);
        info!(breed, count = images.len(), "Loaded images");

        Ok(images)
    }

    // == Cache Introspection ==
    /// Entry count, keys and hit/miss counters of the response cache.
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    /// Drops every cached response.
    pub async fn clear_cache(&self) {
        self.cache.write().await.clear();
        info!("Cache cleared");
    }

    /// GETs `url` through the retry policy and parses the body as JSON.
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<ApiResponse<T>> {
        let client = self;
        let body = self.retry.execute(move || client.get_text(url)).await?;

        serde_json::from_str(&body).map_err(|e| ApiError::Malformed(e.to_string()))
    }

    /// One network attempt: send, check status, read the body.
    async fn get_text(&self, url: &str) -> Result<String> {
        debug!(url, "Fetching");
        let response = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        debug!(url, status = status.as_u16(), "Response received");

        if !status.is_success() {
            return Err(ApiError::http_status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

fn build_http(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ApiError::Config(format!("failed to create HTTP client: {}", e)))
}

impl Default for DogApiClient {
    fn default() -> Self {
        Self::with_client(reqwest::Client::new(), DEFAULT_BASE_URL, RetryPolicy::default())
    }
}

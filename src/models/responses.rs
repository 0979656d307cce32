//! Response DTOs for the breed viewer API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for the breed list (GET /breeds)
#[derive(Debug, Clone, Serialize)]
pub struct BreedsResponse {
    /// Breeds in upstream order, sub-breeds in flattened form
    pub breeds: Vec<String>,
    /// Number of breeds returned
    pub count: usize,
}

impl BreedsResponse {
    /// Creates a new BreedsResponse
    pub fn new(breeds: Vec<String>) -> Self {
        Self {
            count: breeds.len(),
            breeds,
        }
    }
}

/// Response body for breed images (GET /breeds/:breed/images)
#[derive(Debug, Clone, Serialize)]
pub struct ImagesResponse {
    /// The requested breed
    pub breed: String,
    /// Image URLs as returned upstream
    pub images: Vec<String>,
}

impl ImagesResponse {
    /// Creates a new ImagesResponse
    pub fn new(breed: impl Into<String>, images: Vec<String>) -> Self {
        Self {
            breed: breed.into(),
            images,
        }
    }
}

/// Response body for the stats endpoint (GET /cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of stored entries, valid or stale
    pub size: usize,
    /// Stored cache keys
    pub keys: Vec<String>,
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            size: stats.size,
            keys: stats.keys,
            hits: stats.hits,
            misses: stats.misses,
        }
    }
}

/// Response body for clearing the cache (DELETE /cache)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
}

impl ClearResponse {
    /// Creates a new ClearResponse
    pub fn cleared() -> Self {
        Self {
            message: "Cache cleared".to_string(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breeds_response_count() {
        let resp = BreedsResponse::new(vec!["hound".to_string(), "afghan hound".to_string()]);
        assert_eq!(resp.count, 2);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("afghan hound"));
    }

    #[test]
    fn test_images_response_serialize() {
        let resp = ImagesResponse::new("pug", vec!["https://images.dog.ceo/breeds/pug/1.jpg".to_string()]);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["breed"], "pug");
        assert_eq!(json["images"][0], "https://images.dog.ceo/breeds/pug/1.jpg");
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let stats = CacheStats {
            size: 2,
            keys: vec!["a".to_string(), "b".to_string()],
            hits: 8,
            misses: 2,
        };
        let resp = StatsResponse::from(stats);
        assert_eq!(resp.size, 2);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}

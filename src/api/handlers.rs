//! API Handlers
//!
//! HTTP request handlers for each breed viewer endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::client::{filter_breeds, validate_breed, DogApiClient};
use crate::error::Result;
use crate::models::{
    BreedQuery, BreedsResponse, ClearResponse, HealthResponse, ImagesResponse, StatsResponse,
};

/// Application state shared across all handlers.
///
/// Holds the one Dog API client the service was started with.
#[derive(Clone)]
pub struct AppState {
    /// Shared API client, owning the response cache
    pub client: Arc<DogApiClient>,
}

impl AppState {
    /// Creates a new AppState around the given client.
    pub fn new(client: DogApiClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Result<Self> {
        Ok(Self::new(DogApiClient::new(config)?))
    }
}

/// Handler for GET /breeds
///
/// Returns all breeds, optionally filtered by `?search=`.
pub async fn breeds_handler(
    State(state): State<AppState>,
    Query(query): Query<BreedQuery>,
) -> Result<Json<BreedsResponse>> {
    let breeds = state.client.get_breeds().await?;
    let breeds = filter_breeds(&breeds, query.term());

    Ok(Json(BreedsResponse::new(breeds)))
}

/// Handler for GET /breeds/:breed/images
///
/// Returns random images for one breed in flattened form.
pub async fn images_handler(
    State(state): State<AppState>,
    Path(breed): Path<String>,
) -> Result<Json<ImagesResponse>> {
    validate_breed(&breed)?;
    let images = state.client.get_images(&breed).await?;

    Ok(Json(ImagesResponse::new(breed, images)))
}

/// Handler for GET /cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.client.cache_stats().await))
}

/// Handler for DELETE /cache
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    state.client.clear_cache().await;
    Json(ClearResponse::cleared())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

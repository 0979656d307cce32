//! Error types for the breed viewer
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::retry::RetryableError;

// == Api Error Enum ==
/// Unified error type for the Dog API client and the service around it.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network failure or non-2xx HTTP status
    #[error("{message}")]
    Transport {
        /// HTTP status code, when the server answered at all
        status: Option<u16>,
        message: String,
    },

    /// Response parsed but its status field signals failure
    #[error("{0}")]
    Upstream(String),

    /// Response body was not the expected JSON shape
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// Image lookup failed for a specific breed
    #[error("Failed to load images for {breed}: {source}")]
    BreedImages {
        breed: String,
        #[source]
        source: Box<ApiError>,
    },

    /// Breed name cannot be placed in an upstream URL
    #[error("Invalid breed name: {0:?}")]
    InvalidBreed(String),

    /// Client could not be built from the given configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Builds the transport error for a non-2xx response.
    pub fn http_status(status: u16) -> Self {
        ApiError::Transport {
            status: Some(status),
            message: format!("HTTP error! status: {}", status),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

// == Retry Classification ==
impl RetryableError for ApiError {
    fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Transport { status, .. } => *status,
            ApiError::BreedImages { source, .. } => source.status_code(),
            _ => None,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidBreed(_) => StatusCode::BAD_REQUEST,
            err if err.is_rate_limited() => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::BAD_GATEWAY,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the breed viewer.
pub type Result<T> = std::result::Result<T, ApiError>;

//! Request and Response models for the breed viewer API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::BreedQuery;
pub use responses::{
    BreedsResponse, ClearResponse, ErrorResponse, HealthResponse, ImagesResponse, StatsResponse,
};

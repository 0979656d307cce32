//! Dog API Client Module
//!
//! Breed and image lookups against the Dog CEO API with response caching
//! and retry.

mod breeds;
mod dog_api;
mod types;

pub use breeds::{filter_breeds, flatten_breeds, validate_breed, wire_path};
pub use dog_api::{DogApiClient, IMAGES_PER_REQUEST};
pub use types::{ApiResponse, BreedMap, EndpointResult};

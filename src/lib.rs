//! Breed Viewer - Dog breed browsing service
//!
//! Wraps the Dog CEO API with a response cache and retry with backoff, and
//! serves breeds, images and cache statistics over HTTP.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod retry;
pub mod tasks;

pub use api::AppState;
pub use client::DogApiClient;
pub use config::Config;
pub use error::{ApiError, Result};
pub use retry::RetryPolicy;
pub use tasks::spawn_stats_reporter;

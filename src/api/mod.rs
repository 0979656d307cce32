//! API Module
//!
//! HTTP handlers and routing for the breed viewer REST API.
//!
//! # Endpoints
//! - `GET /breeds` - List breeds, optionally filtered by `?search=`
//! - `GET /breeds/:breed/images` - Random images for a breed
//! - `GET /cache/stats` - Response cache statistics
//! - `DELETE /cache` - Clear the response cache
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

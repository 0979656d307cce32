//! Request DTOs for the breed viewer API
//!
//! Defines the structure of incoming query parameters.

use serde::Deserialize;

/// Query parameters for the breed list (GET /breeds)
///
/// # Fields
/// - `search`: Optional case-insensitive substring filter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BreedQuery {
    /// Search term, blank means no filter
    #[serde(default)]
    pub search: Option<String>,
}

impl BreedQuery {
    /// Returns the search term, or an empty string when none was given.
    pub fn term(&self) -> &str {
        self.search.as_deref().unwrap_or("")
    }
}

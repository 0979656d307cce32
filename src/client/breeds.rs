//! Breed name handling
//!
//! Breeds live in memory in the flattened form `"<subbreed> <breed>"` and go
//! on the wire as `"<breed>/<subbreed>"`.

use serde_json::Value;

use super::types::BreedMap;
use crate::error::{ApiError, Result};

// == Flatten Breeds ==
/// Flattens the upstream breed map into a single ordered list.
///
/// Each breed is followed by its sub-breeds in flattened form, keeping the
/// upstream order of both.
pub fn flatten_breeds(map: &BreedMap) -> Result<Vec<String>> {
    let mut breeds = Vec::with_capacity(map.len());

    for (breed, sub_breeds) in map {
        breeds.push(breed.clone());

        let sub_breeds = sub_breeds.as_array().ok_or_else(|| {
            ApiError::Malformed(format!("sub-breeds of '{}' are not a list", breed))
        })?;

        for sub_breed in sub_breeds {
            match sub_breed {
                Value::String(sub_breed) => breeds.push(format!("{} {}", sub_breed, breed)),
                other => {
                    return Err(ApiError::Malformed(format!(
                        "unexpected sub-breed of '{}': {}",
                        breed, other
                    )))
                }
            }
        }
    }

    Ok(breeds)
}

// == Wire Path ==
/// Converts a flattened breed name into its URL path segment.
///
/// Splits on the first space only: `"afghan hound"` becomes `"hound/afghan"`.
pub fn wire_path(breed: &str) -> String {
    match breed.split_once(' ') {
        Some((sub_breed, breed)) => format!("{}/{}", breed, sub_breed),
        None => breed.to_string(),
    }
}

// == Validate Breed ==
/// Rejects names that would escape the `/breed/...` path of the upstream URL.
pub fn validate_breed(breed: &str) -> Result<()> {
    if breed.trim().is_empty()
        || breed.contains(['/', '?', '#', '%', '\\'])
        || breed.contains("..")
    {
        return Err(ApiError::InvalidBreed(breed.to_string()));
    }
    Ok(())
}

// == Filter Breeds ==
/// Case-insensitive substring search over breed names.
///
/// A blank term returns every breed.
pub fn filter_breeds(breeds: &[String], term: &str) -> Vec<String> {
    let term = term.trim();
    if term.is_empty() {
        return breeds.to_vec();
    }

    let needle = term.to_lowercase();
    breeds
        .iter()
        .filter(|breed| breed.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

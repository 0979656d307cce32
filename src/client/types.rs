//! Upstream response shapes for the Dog API.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Status value the Dog API uses for successful responses
pub const SUCCESS_STATUS: &str = "success";

/// Breed name to sub-breed list, in upstream order.
pub type BreedMap = Map<String, Value>;

/// Envelope shared by every Dog API endpoint.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: Option<Message<T>>,
}

/// The `message` field: the payload on success, usually text on failure.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Message<T> {
    Payload(T),
    Text(String),
    Other(Value),
}

/// Outcome of interpreting an envelope.
#[derive(Debug, PartialEq)]
pub enum EndpointResult<T> {
    Success(T),
    Failure(Option<String>),
}

impl<T> ApiResponse<T> {
    /// Splits the envelope into payload or upstream failure message.
    pub fn into_result(self) -> EndpointResult<Option<T>> {
        if self.status == SUCCESS_STATUS {
            match self.message {
                Some(Message::Payload(payload)) => EndpointResult::Success(Some(payload)),
                _ => EndpointResult::Success(None),
            }
        } else {
            match self.message {
                Some(Message::Text(text)) if !text.is_empty() => {
                    EndpointResult::Failure(Some(text))
                }
                _ => EndpointResult::Failure(None),
            }
        }
    }
}

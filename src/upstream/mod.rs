//! Upstream Module
//!
//! The breed/image provider the service aggregates over, and its Dog CEO client.

mod client;

use std::collections::BTreeMap;

use async_trait::async_trait;
use thiserror::Error;

pub use client::DogApiClient;

/// Breed name mapped to its sub-breed names.
pub type BreedListing = BTreeMap<String, Vec<String>>;

/// Errors that can occur when talking to the breed provider
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Transport failure, timeout or undecodable body
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Provider answered with a non-"success" status
    #[error("Upstream returned status '{status}': {message}")]
    Status { status: String, message: String },

    /// Provider answered "success" with a payload of the wrong shape
    #[error("Unexpected response payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl UpstreamError {
    /// One-line description safe to hand back to API callers.
    pub fn short_message(&self) -> String {
        match self {
            UpstreamError::Request(err) if err.is_timeout() => {
                "Upstream request timed out".to_string()
            }
            UpstreamError::Request(_) => "Upstream request failed".to_string(),
            UpstreamError::Status { message, .. } => message.clone(),
            UpstreamError::Payload(_) => "Unexpected upstream response".to_string(),
        }
    }
}

/// Source of breed listings and random breed images.
///
/// Every call is a single attempt; implementations apply their own timeout.
#[async_trait]
pub trait BreedProvider: Send + Sync {
    /// Fetches every breed with its sub-breeds.
    async fn list_all_breeds(&self) -> Result<BreedListing, UpstreamError>;

    /// Fetches up to `count` random image URLs for `breed_path`
    /// (`"hound"` or `"hound/afghan"`).
    async fn random_images(
        &self,
        breed_path: &str,
        count: usize,
    ) -> Result<Vec<String>, UpstreamError>;
}

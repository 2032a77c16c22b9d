//! Dog CEO API client
//!
//! Fetches breed listings and random images over HTTP and unwraps the
//! `{ status, message }` envelope every Dog CEO endpoint returns.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::{BreedListing, BreedProvider, UpstreamError};

/// User-Agent sent with every upstream request
const USER_AGENT: &str = "Dog-Breeds-Explorer/1.0";

/// Response envelope shared by all Dog CEO endpoints
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    status: String,
    message: Value,
}

/// Image endpoints answer with one URL or a list depending on the count
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ImageMessage {
    One(String),
    Many(Vec<String>),
}

impl From<ImageMessage> for Vec<String> {
    fn from(message: ImageMessage) -> Self {
        match message {
            ImageMessage::One(url) => vec![url],
            ImageMessage::Many(urls) => urls,
        }
    }
}

/// Client for the Dog CEO breed API
#[derive(Debug, Clone)]
pub struct DogApiClient {
    client: Client,
    base_url: String,
}

impl DogApiClient {
    /// Create a client for `base_url` whose requests give up after `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client around an already configured HTTP client
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Base URL requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and return the envelope's message once status is "success".
    async fn fetch_message(&self, path: &str) -> Result<Value, UpstreamError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let envelope: ApiEnvelope = self.client.get(&url).send().await?.json().await?;
        if envelope.status != "success" {
            let message = match envelope.message {
                Value::String(text) => text,
                other => other.to_string(),
            };
            return Err(UpstreamError::Status {
                status: envelope.status,
                message,
            });
        }
        Ok(envelope.message)
    }
}

#[async_trait]
impl BreedProvider for DogApiClient {
    async fn list_all_breeds(&self) -> Result<BreedListing, UpstreamError> {
        let message = self.fetch_message("/breeds/list/all").await?;
        Ok(serde_json::from_value(message)?)
    }

    async fn random_images(
        &self,
        breed_path: &str,
        count: usize,
    ) -> Result<Vec<String>, UpstreamError> {
        let path = format!("/breed/{}/images/random/{}", breed_path, count);
        let message = self.fetch_message(&path).await?;
        let images: ImageMessage = serde_json::from_value(message)?;
        Ok(images.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = DogApiClient::new("https://dog.ceo/api/", Duration::from_secs(10)).unwrap();
        assert_eq!(client.base_url(), "https://dog.ceo/api");
    }

    #[test]
    fn test_image_message_single_and_many() {
        let one: ImageMessage = serde_json::from_str(r#""https://x/1.jpg""#).unwrap();
        assert_eq!(Vec::from(one), vec!["https://x/1.jpg".to_string()]);

        let many: ImageMessage = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(Vec::from(many).len(), 2);
    }

    #[test]
    fn test_listing_payload_shape() {
        let message = serde_json::json!({ "hound": ["afghan", "basset"], "pug": [] });
        let listing: BreedListing = serde_json::from_value(message).unwrap();
        assert_eq!(listing["hound"], vec!["afghan", "basset"]);
        assert!(listing["pug"].is_empty());
    }
}

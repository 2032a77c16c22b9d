//! Favorite breeds as persisted and as returned to clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A favorite as stored in the favorites file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRecord {
    /// Lowercase breed name, the record's identity
    pub breed: String,
    /// When the breed was added
    pub added_at: DateTime<Utc>,
}

impl FavoriteRecord {
    /// Creates a record for `breed`, folding it to lowercase.
    pub fn new(breed: &str) -> Self {
        Self {
            breed: normalize_breed(breed),
            added_at: Utc::now(),
        }
    }

    /// Case-insensitive identity check.
    pub fn matches(&self, breed: &str) -> bool {
        self.breed.to_lowercase() == normalize_breed(breed)
    }

    /// Attaches a freshly resolved image for a response.
    pub fn with_image(self, image: Option<String>) -> FavoriteEntry {
        FavoriteEntry {
            record: self,
            image,
        }
    }
}

/// A favorite decorated with an image resolved at read time. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    #[serde(flatten)]
    pub record: FavoriteRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl FavoriteEntry {
    pub fn breed(&self) -> &str {
        &self.record.breed
    }
}

/// Identity key for a breed name.
pub fn normalize_breed(breed: &str) -> String {
    breed.to_lowercase()
}

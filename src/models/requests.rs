//! Request DTOs for the breed explorer API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

use crate::error::AppError;

/// Images returned when `count` is not given
pub const DEFAULT_IMAGE_COUNT: usize = 3;
/// Smallest accepted `count`
pub const MIN_IMAGE_COUNT: usize = 1;
/// Largest accepted `count`
pub const MAX_IMAGE_COUNT: usize = 10;

/// Query string for GET /breeds/:breed/images
///
/// `count` is kept as raw text so a non-numeric value is reported with the
/// same message as an out-of-range one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImagesQuery {
    #[serde(default)]
    pub count: Option<String>,
}

impl ImagesQuery {
    /// Returns the requested image count, defaulting to 3.
    pub fn count(&self) -> Result<usize, AppError> {
        let Some(raw) = self.count.as_deref() else {
            return Ok(DEFAULT_IMAGE_COUNT);
        };
        raw.trim()
            .parse::<usize>()
            .ok()
            .filter(|count| (MIN_IMAGE_COUNT..=MAX_IMAGE_COUNT).contains(count))
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "Invalid count parameter. Must be a number between {} and {}.",
                    MIN_IMAGE_COUNT, MAX_IMAGE_COUNT
                ))
            })
    }
}

/// Request body for POST /favorites
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddFavoriteRequest {
    /// Breed to add
    #[serde(default)]
    pub breed: Option<String>,
}

impl AddFavoriteRequest {
    /// Returns the trimmed breed, rejecting a missing or blank one.
    pub fn breed(&self) -> Result<&str, AppError> {
        self.breed
            .as_deref()
            .map(str::trim)
            .filter(|breed| !breed.is_empty())
            .ok_or_else(|| {
                AppError::Validation("Breed is required and must be a non-empty string".to_string())
            })
    }
}

/// Request body for POST /cache/clear
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClearCacheRequest {
    /// Breed whose entries to clear; everything is cleared when absent
    #[serde(default)]
    pub breed: Option<String>,
}

impl ClearCacheRequest {
    /// Returns the trimmed breed, treating blank as absent.
    pub fn breed(&self) -> Option<&str> {
        self.breed
            .as_deref()
            .map(str::trim)
            .filter(|breed| !breed.is_empty())
    }
}

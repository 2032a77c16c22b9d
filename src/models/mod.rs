//! Domain types and request/response models for the breed explorer API
//!
//! This module defines the breed and favorite types shared by the services,
//! plus the DTOs used to serialize/deserialize HTTP bodies.

pub mod breed;
pub mod favorite;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use breed::Breed;
pub use favorite::{FavoriteEntry, FavoriteRecord};
pub use requests::{AddFavoriteRequest, ClearCacheRequest, ImagesQuery};
pub use responses::{
    BreedsErrorResponse, BreedsResponse, CacheActionResponse, CacheCleanupResponse,
    CacheStatsResponse, HealthResponse, RouteNotFoundResponse,
};

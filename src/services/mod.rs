//! Services Module
//!
//! Breed aggregation over the upstream provider and the favorites store.

pub mod breeds;
pub mod favorites;

pub use breeds::{BreedCache, BreedService, CachedPayload};
pub use favorites::FavoritesService;
